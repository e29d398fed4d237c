use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};

pub type ReminderId = i64;

/// Local date and time a reminder is due at. Kept at minute precision,
/// which is all the date/time pickers can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ScheduledAt(NaiveDateTime);

impl ScheduledAt {
    pub fn new(inner: NaiveDateTime) -> Self {
        let time = inner.time();
        let normalized_time = NaiveTime::from_hms_opt(time.hour(), time.minute(), 0)
            .unwrap_or(time);
        Self(inner.date().and_time(normalized_time))
    }

    pub fn from_parts(date: NaiveDate, time: NaiveTime) -> Self {
        Self::new(date.and_time(time))
    }

    pub fn date(&self) -> NaiveDate {
        self.0.date()
    }

    pub fn time(&self) -> NaiveTime {
        self.0.time()
    }

    /// Replaces the calendar date, keeping the time of day.
    pub fn with_date(self, date: NaiveDate) -> Self {
        Self(date.and_time(self.0.time()))
    }

    /// Replaces hour and minute, keeping the calendar date.
    pub fn with_time(self, time: NaiveTime) -> Self {
        Self::from_parts(self.0.date(), time)
    }
}

impl From<NaiveDateTime> for ScheduledAt {
    fn from(value: NaiveDateTime) -> Self {
        Self::new(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reminder {
    pub id: ReminderId,
    pub text: String,
    pub completed: bool,
    pub scheduled_at: ScheduledAt,
    /// Display tag only, there is no recurrence engine behind it.
    pub recurring: bool,
}
