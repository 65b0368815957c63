//! Structured-output request and completion types.

use serde::{Deserialize, Serialize};
use strum::Display;

/// JSON schema the model reply must conform to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResponseSchema {
    pub schema: serde_json::Value,
    pub name: String,
}

/// Why generation finished.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum FinishReason {
    Stop,
    /// Output token limit reached; the reply is cut off.
    Length,
    ContentFilter,
    Other,
}

impl FinishReason {
    /// Whether a reply ending this way can still hold a complete document.
    pub fn is_complete(self) -> bool {
        matches!(self, Self::Stop | Self::Other)
    }
}
