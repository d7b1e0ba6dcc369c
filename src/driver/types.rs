//! Types for the WebDriver JSON wire protocol.
//!
//! Only the small slice of the protocol the harness needs: session
//! creation, navigation, and the (chromedriver-specific) log endpoint.

use serde::Deserialize;

/// W3C WebDriver responses wrap their payload in a `value` field
#[derive(Debug, Deserialize)]
pub struct WdResponse<T> {
    pub value: T,
}

/// Payload of a successful `POST /session`
#[derive(Debug, Deserialize)]
pub struct NewSessionValue {
    #[serde(rename = "sessionId")]
    pub session_id: Option<String>,

    #[serde(default)]
    pub capabilities: Option<serde_json::Value>,
}

/// WebDriver error payload (returned under `value` on failures)
#[derive(Debug, Deserialize)]
pub struct WdErrorValue {
    pub error: String,
    pub message: String,
}
