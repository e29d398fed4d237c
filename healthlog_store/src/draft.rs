use healthlog_models::{
    chrono::{NaiveDate, NaiveTime},
    reminder::ScheduledAt,
    severity::Severity,
};

/// Pending input of the "new reminder" form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderDraft {
    pub text: String,
    pub scheduled_at: ScheduledAt,
    pub recurring: bool,
}

impl ReminderDraft {
    pub fn fresh(now: ScheduledAt) -> Self {
        Self {
            text: String::new(),
            scheduled_at: now,
            recurring: false,
        }
    }

    pub fn set_date(&mut self, date: NaiveDate) {
        self.scheduled_at = self.scheduled_at.with_date(date);
        log::debug!("Reminder draft date set to {date}");
    }

    pub fn set_time(&mut self, time: NaiveTime) {
        self.scheduled_at = self.scheduled_at.with_time(time);
        log::debug!("Reminder draft time set to {}", self.scheduled_at.time());
    }
}

/// Pending input of the "add symptom" form. `open` tracks whether the form
/// is currently shown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymptomDraft {
    pub name: String,
    pub severity: Severity,
    pub open: bool,
}

impl SymptomDraft {
    pub fn open(&mut self) {
        self.open = true;
        log::debug!("Symptom form opened");
    }

    /// Hides the form without discarding what was typed.
    pub fn close(&mut self) {
        self.open = false;
        log::debug!("Symptom form closed");
    }
}
