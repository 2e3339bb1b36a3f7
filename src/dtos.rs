use chrono::Local;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The greeting returned to callers, bundling a message with the date and
/// time at which the value was built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Message {
    pub message: String,
    pub date: String,
    pub time: String,
}

impl Message {
    /// Builds a message stamped with the local date and time of the call.
    pub fn new(message: impl Into<String>) -> Self {
        let now = Local::now();
        Self {
            message: message.into(),
            date: now.format("%Y-%m-%d").to_string(),
            time: now.format("%H:%M:%S").to_string(),
        }
    }

    /// Builds a message from explicit date and time values. No clock read.
    pub fn with_timestamp(
        message: impl Into<String>,
        date: impl Into<String>,
        time: impl Into<String>,
    ) -> Self {
        Self {
            message: message.into(),
            date: date.into(),
            time: time.into(),
        }
    }
}
