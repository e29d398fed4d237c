use std::{fmt, str::FromStr};

use thiserror::Error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Severity {
    #[default]
    Mild,
    Moderate,
    Severe,
}

/// Badge color as a `#RRGGBB` hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SeverityColor(&'static str);

impl SeverityColor {
    pub const GREEN: SeverityColor = SeverityColor("#48BB78");
    pub const YELLOW: SeverityColor = SeverityColor("#ECC94B");
    pub const RED: SeverityColor = SeverityColor("#F56565");

    pub fn hex(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for SeverityColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown severity `{0}`, expected one of: mild, moderate, severe")]
pub struct ParseSeverityError(pub String);

impl Severity {
    pub const ALL: [Severity; 3] = [Severity::Mild, Severity::Moderate, Severity::Severe];

    pub fn color(&self) -> SeverityColor {
        match self {
            Severity::Mild => SeverityColor::GREEN,
            Severity::Moderate => SeverityColor::YELLOW,
            Severity::Severe => SeverityColor::RED,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Severity::Mild => "mild",
            Severity::Moderate => "moderate",
            Severity::Severe => "severe",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Severity::Mild => "Mild",
            Severity::Moderate => "Moderate",
            Severity::Severe => "Severe",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mild" => Ok(Severity::Mild),
            "moderate" => Ok(Severity::Moderate),
            "severe" => Ok(Severity::Severe),
            other => Err(ParseSeverityError(other.to_string())),
        }
    }
}

/// Badge color for a severity name. Anything unrecognized falls back to the
/// color of [`Severity::Mild`].
pub fn severity_color(severity: &str) -> SeverityColor {
    severity.parse::<Severity>().unwrap_or_default().color()
}
