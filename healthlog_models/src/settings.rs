use serde::Deserialize;

fn default_timezone() -> chrono_tz::Tz {
    chrono_tz::Tz::UTC
}

fn default_tips_interval() -> u64 {
    10
}

#[derive(Deserialize, Debug)]
pub struct DisplaySettings {
    #[serde(default = "default_timezone")]
    pub timezone: chrono_tz::Tz,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
        }
    }
}

#[derive(Deserialize, Debug)]
pub struct TipsSettings {
    /// Seconds between health tips; `0` turns them off.
    #[serde(default = "default_tips_interval")]
    pub interval_secs: u64,
}

impl Default for TipsSettings {
    fn default() -> Self {
        Self {
            interval_secs: default_tips_interval(),
        }
    }
}

#[derive(Deserialize, Debug, Default)]
pub struct Settings {
    #[serde(default)]
    pub display: DisplaySettings,
    #[serde(default)]
    pub tips: TipsSettings,
}
