pub mod reminder;
pub mod settings;
pub mod severity;
pub mod symptom;

pub use chrono;
pub use chrono_tz;
