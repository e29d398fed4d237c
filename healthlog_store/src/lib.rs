mod clock;
mod draft;
mod error;
mod health_log;


pub use clock::{Clock, SystemClock};
pub use draft::{ReminderDraft, SymptomDraft};
pub use error::{HealthLogError, Result};
pub use health_log::HealthLog;
