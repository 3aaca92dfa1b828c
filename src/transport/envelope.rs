// ABOUTME: Goploy response envelope decoding.
// ABOUTME: Every response is wrapped as {code, message, data}.

use serde::Deserialize;
use serde_json::Value;

/// Envelope code the server uses for a successful call.
pub const PASS_CODE: i64 = 0;

#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T = Value> {
    pub code: i64,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    pub fn is_pass(&self) -> bool {
        self.code == PASS_CODE
    }
}
