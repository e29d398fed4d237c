use healthlog_models::{
    chrono::{DateTime, NaiveDateTime, Utc},
    chrono_tz::Tz,
    reminder::{Reminder, ReminderId, ScheduledAt},
    severity::Severity,
    symptom::{SymptomEntry, SymptomId},
};

use crate::{
    Clock, HealthLogError, Result, SystemClock,
    draft::{ReminderDraft, SymptomDraft},
};

/// In-memory reminders and symptom entries of one dashboard session.
///
/// Reminders keep insertion order, symptoms are kept most recent first.
/// Index based operations address positions in [`HealthLog::reminders`],
/// so an index must be recomputed after any removal.
pub struct HealthLog<C = SystemClock> {
    clock: C,
    timezone: Tz,
    reminders: Vec<Reminder>,
    symptoms: Vec<SymptomEntry>,
    next_reminder_id: ReminderId,
    last_symptom_id: Option<SymptomId>,
    reminder_draft: ReminderDraft,
    symptom_draft: SymptomDraft,
}

impl HealthLog<SystemClock> {
    pub fn new(timezone: Tz) -> Self {
        Self::with_clock(SystemClock, timezone)
    }
}

impl<C: Clock> HealthLog<C> {
    pub fn with_clock(clock: C, timezone: Tz) -> Self {
        let now = local_now(&clock, timezone);

        Self {
            clock,
            timezone,
            reminders: Vec::new(),
            symptoms: Vec::new(),
            next_reminder_id: 0,
            last_symptom_id: None,
            reminder_draft: ReminderDraft::fresh(ScheduledAt::new(now)),
            symptom_draft: SymptomDraft::default(),
        }
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    pub fn reminders(&self) -> &[Reminder] {
        &self.reminders
    }

    pub fn symptoms(&self) -> &[SymptomEntry] {
        &self.symptoms
    }

    pub fn reminder_draft(&self) -> &ReminderDraft {
        &self.reminder_draft
    }

    pub fn reminder_draft_mut(&mut self) -> &mut ReminderDraft {
        &mut self.reminder_draft
    }

    pub fn symptom_draft(&self) -> &SymptomDraft {
        &self.symptom_draft
    }

    pub fn symptom_draft_mut(&mut self) -> &mut SymptomDraft {
        &mut self.symptom_draft
    }

    /// Appends a new, not completed reminder and resets the reminder draft.
    pub fn add_reminder(
        &mut self,
        text: &str,
        scheduled_at: impl Into<ScheduledAt>,
        recurring: bool,
    ) -> Result<Reminder> {
        let text = text.trim();
        if text.is_empty() {
            log::warn!("Ignoring reminder with empty text");
            return Err(HealthLogError::ValidationSkipped);
        }

        let reminder = Reminder {
            id: self.next_reminder_id,
            text: text.to_string(),
            completed: false,
            scheduled_at: scheduled_at.into(),
            recurring,
        };
        self.next_reminder_id += 1;
        self.reminders.push(reminder.clone());

        let now = local_now(&self.clock, self.timezone);
        self.reminder_draft = ReminderDraft::fresh(ScheduledAt::new(now));

        log::info!("Added reminder {}", reminder.id);
        Ok(reminder)
    }

    pub fn submit_reminder_draft(&mut self) -> Result<Reminder> {
        let ReminderDraft {
            text,
            scheduled_at,
            recurring,
        } = self.reminder_draft.clone();

        self.add_reminder(&text, scheduled_at, recurring)
    }

    pub fn toggle_reminder(&mut self, index: usize) -> Result<&Reminder> {
        let len = self.reminders.len();
        let Some(reminder) = self.reminders.get_mut(index) else {
            log::warn!("Toggle at index {index} is out of range ({len} reminders)");
            return Err(HealthLogError::OutOfRange { index, len });
        };

        reminder.completed = !reminder.completed;
        log::debug!("Reminder {} completed = {}", reminder.id, reminder.completed);
        Ok(reminder)
    }

    pub fn remove_reminder(&mut self, index: usize) -> Result<Reminder> {
        let len = self.reminders.len();
        if index >= len {
            log::warn!("Remove at index {index} is out of range ({len} reminders)");
            return Err(HealthLogError::OutOfRange { index, len });
        }

        let removed = self.reminders.remove(index);
        log::info!("Removed reminder {}", removed.id);
        Ok(removed)
    }

    pub fn toggle_reminder_by_id(&mut self, id: ReminderId) -> Result<&Reminder> {
        let index = self.reminder_position(id)?;
        self.toggle_reminder(index)
    }

    pub fn remove_reminder_by_id(&mut self, id: ReminderId) -> Result<Reminder> {
        let index = self.reminder_position(id)?;
        self.remove_reminder(index)
    }

    /// Prepends a new symptom entry, then clears the symptom draft and
    /// closes its form.
    pub fn add_symptom(&mut self, name: &str, severity: Severity) -> Result<SymptomEntry> {
        let name = name.trim();
        if name.is_empty() {
            log::warn!("Ignoring symptom with empty name");
            return Err(HealthLogError::ValidationSkipped);
        }

        let logged_at = self.clock.now();
        let entry = SymptomEntry {
            id: self.next_symptom_id(logged_at),
            name: name.to_string(),
            severity,
            logged_at,
        };
        self.symptoms.insert(0, entry.clone());
        self.symptom_draft = SymptomDraft::default();

        log::info!("Logged {} symptom {}", entry.severity, entry.id);
        Ok(entry)
    }

    pub fn submit_symptom_draft(&mut self) -> Result<SymptomEntry> {
        let SymptomDraft { name, severity, .. } = self.symptom_draft.clone();

        self.add_symptom(&name, severity)
    }

    pub fn remove_symptom(&mut self, id: SymptomId) -> Result<SymptomEntry> {
        let Some(index) = self.symptoms.iter().position(|s| s.id == id) else {
            log::warn!("Symptom {id} does not exist");
            return Err(HealthLogError::SymptomNotFound(id));
        };

        let removed = self.symptoms.remove(index);
        log::info!("Removed symptom {}", removed.id);
        Ok(removed)
    }

    fn reminder_position(&self, id: ReminderId) -> Result<usize> {
        self.reminders
            .iter()
            .position(|r| r.id == id)
            .ok_or(HealthLogError::ReminderNotFound(id))
    }

    fn next_symptom_id(&mut self, logged_at: DateTime<Utc>) -> SymptomId {
        let candidate = logged_at.timestamp_millis();
        let id = match self.last_symptom_id {
            Some(last) if candidate <= last => last + 1,
            _ => candidate,
        };

        self.last_symptom_id = Some(id);
        id
    }
}

fn local_now<C: Clock>(clock: &C, timezone: Tz) -> NaiveDateTime {
    clock.now().with_timezone(&timezone).naive_local()
}
