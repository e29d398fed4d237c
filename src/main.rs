mod appsettings;
mod dashboard;
mod tips;

use dashboard::TerminalDashboard;
use healthlog_store::HealthLog;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    pretty_env_logger::init();

    let settings = appsettings::load()?;
    log::info!(
        "Loaded settings: timezone {}, tips every {}s",
        settings.display.timezone,
        settings.tips.interval_secs
    );

    let health_log = HealthLog::new(settings.display.timezone);
    TerminalDashboard::new(health_log, settings.tips.interval_secs)
        .run()
        .await
}
