use chrono::{DateTime, Utc};

use crate::severity::Severity;

/// Milliseconds since the Unix epoch at creation, bumped when two entries
/// are logged within the same millisecond.
pub type SymptomId = i64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymptomEntry {
    pub id: SymptomId,
    pub name: String,
    pub severity: Severity,
    pub logged_at: DateTime<Utc>,
}
