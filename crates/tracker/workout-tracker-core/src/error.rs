//! Error types for the widget core.
//!
//! Update, command application and rendering are total over valid state;
//! configuration is the only fallible surface.

use serde::{Deserialize, Serialize};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum WidgetError {
    /// Configuration value out of range
    #[error("Invalid config: {reason}")]
    InvalidConfig { reason: String },
}

impl WidgetError {
    pub(crate) fn invalid_config(reason: impl Into<String>) -> Self {
        WidgetError::InvalidConfig {
            reason: reason.into(),
        }
    }
}
