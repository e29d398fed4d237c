mod command;
mod render;

use std::{future::Future, io, thread, time::Duration};

use command::{DashboardCommand, USAGE};
use healthlog_store::{Clock, HealthLog, HealthLogError, SystemClock};
use tokio::{
    sync::mpsc,
    time::{Instant, Interval, interval_at},
};

use crate::tips::TipRotation;

#[derive(Debug, PartialEq, Eq)]
enum Outcome {
    Print(String),
    Quit,
}

/// Line based front end over a [`HealthLog`]. The log lives as long as the
/// dashboard and is never written anywhere.
pub struct TerminalDashboard<C = SystemClock> {
    log: HealthLog<C>,
    tips: TipRotation,
    tips_interval: Option<Duration>,
}

impl<C: Clock> TerminalDashboard<C> {
    pub fn new(log: HealthLog<C>, tips_interval_secs: u64) -> Self {
        let tips_interval =
            (tips_interval_secs > 0).then(|| Duration::from_secs(tips_interval_secs));

        Self {
            log,
            tips: TipRotation::new(),
            tips_interval,
        }
    }

    pub async fn run(self) -> anyhow::Result<()> {
        log::info!("Starting terminal dashboard");
        println!("{USAGE}\n");
        println!("{}", render::render_dashboard(&self.log));

        self.run_until(spawn_stdin_reader(), tokio::signal::ctrl_c())
            .await
    }

    /// Runs until `quit`, end of input or `shutdown` resolves. A read that is
    /// still blocked on the input thread does not hold the loop open.
    async fn run_until<F>(
        mut self,
        mut lines: mpsc::Receiver<io::Result<String>>,
        shutdown: F,
    ) -> anyhow::Result<()>
    where
        F: Future<Output = io::Result<()>>,
    {
        let mut tips = self
            .tips_interval
            .map(|period| interval_at(Instant::now() + period, period));
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                line = lines.recv() => {
                    let Some(line) = line.transpose()? else {
                        log::info!("Input closed");
                        break;
                    };
                    match self.handle_line(&line) {
                        Some(Outcome::Print(text)) => println!("{text}"),
                        Some(Outcome::Quit) => break,
                        None => {}
                    }
                }
                _ = next_tick(&mut tips) => {
                    println!("Tip: {}", self.tips.next_tip());
                }
                signal = &mut shutdown => {
                    signal?;
                    log::info!("Shutdown requested");
                    break;
                }
            }
        }

        log::info!("Dashboard closed, discarding session state");
        Ok(())
    }

    fn handle_line(&mut self, line: &str) -> Option<Outcome> {
        if line.trim().is_empty() {
            return None;
        }

        let outcome = match line.parse::<DashboardCommand>() {
            Ok(command) => self.handle_command(command),
            Err(err) => Outcome::Print(err.to_string()),
        };

        Some(outcome)
    }

    fn handle_command(&mut self, command: DashboardCommand) -> Outcome {
        log::debug!("Handling {command:?}");

        match command {
            DashboardCommand::Remind(text) => {
                self.log.reminder_draft_mut().text = text;
                match self.log.submit_reminder_draft() {
                    Err(HealthLogError::ValidationSkipped) => Outcome::Print(
                        "Reminder text is empty, nothing was added.".to_string(),
                    ),
                    result => self.after_mutation(result.map(|_| ())),
                }
            }
            DashboardCommand::Date(date) => {
                self.log.reminder_draft_mut().set_date(date);
                Outcome::Print(render::render_reminder_draft(self.log.reminder_draft()))
            }
            DashboardCommand::Time(time) => {
                self.log.reminder_draft_mut().set_time(time);
                Outcome::Print(render::render_reminder_draft(self.log.reminder_draft()))
            }
            DashboardCommand::Daily(recurring) => {
                self.log.reminder_draft_mut().recurring = recurring;
                Outcome::Print(render::render_reminder_draft(self.log.reminder_draft()))
            }
            DashboardCommand::Toggle(index) => {
                let result = self.log.toggle_reminder(index).map(|_| ());
                self.after_mutation(result)
            }
            DashboardCommand::Remove(index) => {
                let result = self.log.remove_reminder(index).map(|_| ());
                self.after_mutation(result)
            }
            DashboardCommand::Severity(severity) => {
                let draft = self.log.symptom_draft_mut();
                draft.open();
                draft.severity = severity;
                Outcome::Print(render::render_symptom_draft(self.log.symptom_draft()))
            }
            DashboardCommand::Cancel => {
                self.log.symptom_draft_mut().close();
                Outcome::Print(render::render_symptom_draft(self.log.symptom_draft()))
            }
            DashboardCommand::Symptom(name) => {
                let draft = self.log.symptom_draft_mut();
                draft.open();
                draft.name = name;
                match self.log.submit_symptom_draft() {
                    Err(HealthLogError::ValidationSkipped) => Outcome::Print(
                        "Symptom name is empty, nothing was logged.".to_string(),
                    ),
                    result => self.after_mutation(result.map(|_| ())),
                }
            }
            DashboardCommand::List => Outcome::Print(render::render_dashboard(&self.log)),
            DashboardCommand::Help => Outcome::Print(USAGE.to_string()),
            DashboardCommand::Quit => Outcome::Quit,
        }
    }

    fn after_mutation(&self, result: healthlog_store::Result<()>) -> Outcome {
        match result {
            Ok(()) => Outcome::Print(render::render_dashboard(&self.log)),
            Err(HealthLogError::OutOfRange { index, len }) => Outcome::Print(format!(
                "There is no reminder number {}, the list has {len}.",
                index + 1
            )),
            Err(err) => Outcome::Print(err.to_string()),
        }
    }
}

/// Reads stdin on a plain thread that is never joined; it ends with the
/// process.
fn spawn_stdin_reader() -> mpsc::Receiver<io::Result<String>> {
    let (tx, rx) = mpsc::channel(16);
    thread::spawn(move || {
        for line in io::stdin().lines() {
            if tx.blocking_send(line).is_err() {
                break;
            }
        }
    });

    rx
}

async fn next_tick(interval: &mut Option<Interval>) {
    match interval {
        Some(interval) => {
            interval.tick().await;
        }
        None => std::future::pending().await,
    }
}

#[cfg(test)]
mod tests {
    use healthlog_models::{chrono_tz::Tz, severity::Severity};

    use super::*;

    fn dashboard() -> TerminalDashboard {
        TerminalDashboard::new(HealthLog::new(Tz::UTC), 0)
    }

    async fn send(tx: &mpsc::Sender<io::Result<String>>, line: &str) {
        tx.send(Ok(line.to_string())).await.unwrap();
    }

    fn printed(outcome: Option<Outcome>) -> String {
        match outcome {
            Some(Outcome::Print(text)) => text,
            other => panic!("expected printed output, got {other:?}"),
        }
    }

    #[test]
    fn reminder_flow_through_commands() {
        let mut dashboard = dashboard();

        dashboard.handle_line("date 2024-01-01");
        dashboard.handle_line("time 20:00");
        dashboard.handle_line("daily on");
        let output = printed(dashboard.handle_line("remind Take pills"));
        assert!(output.contains("1. [ ] Take pills (Jan 1, 2024 at 20:00) [daily]"));

        let output = printed(dashboard.handle_line("toggle 1"));
        assert!(output.contains("1. [x] Take pills"));

        dashboard.handle_line("remove 1");
        assert!(dashboard.log.reminders().is_empty());
        assert!(!dashboard.log.reminder_draft().recurring);
    }

    #[test]
    fn empty_reminder_prints_hint() {
        let mut dashboard = dashboard();

        let output = printed(dashboard.handle_line("remind   "));

        assert_eq!(output, "Reminder text is empty, nothing was added.");
        assert!(dashboard.log.reminders().is_empty());
    }

    #[test]
    fn stale_position_is_reported() {
        let mut dashboard = dashboard();
        dashboard.handle_line("remind Drink water");

        let output = printed(dashboard.handle_line("toggle 3"));

        assert_eq!(output, "There is no reminder number 3, the list has 1.");
    }

    #[test]
    fn symptom_uses_picked_severity_then_resets() {
        let mut dashboard = dashboard();

        dashboard.handle_line("severity severe");
        let output = printed(dashboard.handle_line("symptom Headache"));

        assert!(output.contains("Headache [Severe #F56565]"));
        assert_eq!(dashboard.log.symptoms()[0].severity, Severity::Severe);
        assert_eq!(dashboard.log.symptom_draft().severity, Severity::Mild);
        assert!(!dashboard.log.symptom_draft().open);
    }

    #[test]
    fn blank_lines_and_quit() {
        let mut dashboard = dashboard();

        assert_eq!(dashboard.handle_line("   "), None);
        assert_eq!(dashboard.handle_line("quit"), Some(Outcome::Quit));
    }

    #[test]
    fn parse_errors_are_printed() {
        let mut dashboard = dashboard();

        let output = printed(dashboard.handle_line("toggle zero"));

        assert!(output.contains("`toggle` expects"));
    }

    #[test]
    fn cancel_closes_symptom_form_and_keeps_input() {
        let mut dashboard = dashboard();
        dashboard.handle_line("severity moderate");
        assert!(dashboard.log.symptom_draft().open);

        let output = printed(dashboard.handle_line("cancel"));

        assert_eq!(output, "Symptom form (closed): severity Moderate #ECC94B");
        assert!(!dashboard.log.symptom_draft().open);
        assert_eq!(dashboard.log.symptom_draft().severity, Severity::Moderate);
        assert!(dashboard.log.symptoms().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn shutdown_signal_ends_loop_while_input_is_open() {
        let (tx, rx) = mpsc::channel(4);
        send(&tx, "remind Drink water").await;

        let result = tokio::time::timeout(
            Duration::from_secs(5),
            TerminalDashboard::new(HealthLog::new(Tz::UTC), 1)
                .run_until(rx, async { Ok(()) }),
        )
        .await;

        assert!(matches!(result, Ok(Ok(()))));
        drop(tx);
    }

    #[tokio::test(start_paused = true)]
    async fn closed_input_and_quit_end_loop() {
        let (tx, rx) = mpsc::channel(4);
        drop(tx);
        let closed = tokio::time::timeout(
            Duration::from_secs(5),
            dashboard().run_until(rx, std::future::pending()),
        )
        .await;
        assert!(matches!(closed, Ok(Ok(()))));

        let (tx, rx) = mpsc::channel(4);
        send(&tx, "quit").await;
        let quit = tokio::time::timeout(
            Duration::from_secs(5),
            dashboard().run_until(rx, std::future::pending()),
        )
        .await;
        assert!(matches!(quit, Ok(Ok(()))));
    }

    #[tokio::test(start_paused = true)]
    async fn input_errors_are_propagated() {
        let (tx, rx) = mpsc::channel(4);
        tx.send(Err(io::Error::other("broken pipe"))).await.unwrap();

        let result = dashboard().run_until(rx, std::future::pending()).await;

        assert!(result.is_err());
    }
}
