pub mod error;
pub mod usage;

pub use error::{TranslateError, TranslateResult};
pub use usage::{UsageSnapshot, UsageTracker};

pub mod logging;
pub use logging::{ComponentLogger, LogContext};
