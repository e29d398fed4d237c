use healthlog_models::{
    chrono_tz::Tz,
    reminder::{Reminder, ScheduledAt},
    symptom::SymptomEntry,
};
use healthlog_store::{Clock, HealthLog, ReminderDraft, SymptomDraft};

pub fn render_dashboard<C: Clock>(log: &HealthLog<C>) -> String {
    let mut lines = vec!["Todo reminders".to_string()];
    if log.reminders().is_empty() {
        lines.push("  No reminders yet.".to_string());
    } else {
        lines.extend(
            log.reminders()
                .iter()
                .enumerate()
                .map(|(i, reminder)| format!("  {}", render_reminder(i + 1, reminder))),
        );
    }

    lines.push("Symptoms".to_string());
    if log.symptoms().is_empty() {
        lines.push("  No symptoms logged.".to_string());
    } else {
        lines.extend(
            log.symptoms()
                .iter()
                .map(|entry| format!("  {}", render_symptom(entry, log.timezone()))),
        );
    }

    lines.push(render_reminder_draft(log.reminder_draft()));
    lines.push(render_symptom_draft(log.symptom_draft()));
    lines.join("\n")
}

pub fn render_reminder(order: usize, reminder: &Reminder) -> String {
    let mark = if reminder.completed { 'x' } else { ' ' };
    let daily = if reminder.recurring { " [daily]" } else { "" };

    format!(
        "{order}. [{mark}] {0} ({1}){daily}",
        reminder.text,
        format_scheduled_at(&reminder.scheduled_at),
    )
}

pub fn render_symptom(entry: &SymptomEntry, timezone: Tz) -> String {
    format!(
        "{0} [{1} {2}] at {3}",
        entry.name,
        entry.severity.label(),
        entry.severity.color(),
        entry.logged_at.with_timezone(&timezone).format("%H:%M"),
    )
}

pub fn render_reminder_draft(draft: &ReminderDraft) -> String {
    format!(
        "Next reminder: {0}, daily: {1}",
        format_scheduled_at(&draft.scheduled_at),
        if draft.recurring { "on" } else { "off" },
    )
}

pub fn render_symptom_draft(draft: &SymptomDraft) -> String {
    let state = if draft.open { "open" } else { "closed" };

    format!(
        "Symptom form ({state}): severity {0} {1}",
        draft.severity.label(),
        draft.severity.color(),
    )
}

fn format_scheduled_at(scheduled_at: &ScheduledAt) -> String {
    format!(
        "{0} at {1}",
        scheduled_at.date().format("%b %-d, %Y"),
        scheduled_at.time().format("%H:%M"),
    )
}
