//! HTTP client for the chromedriver WebDriver endpoint.
//!
//! Sessions are created with the performance log enabled and the rendering
//! trace categories turned on, so every navigation yields the devtools
//! timeline events the aggregator consumes.

use super::types::{NewSessionValue, WdErrorValue, WdResponse};
use crate::parser::schema::PerfLogEntry;
use crate::utils::config::{
    CHROME_ARGS, DEFAULT_DRIVER_TIMEOUT, PERFORMANCE_LOG_TYPE, TRACE_CATEGORIES,
};
use crate::utils::error::DriverError;
use log::{debug, info};
use reqwest::blocking::{Client, Response};

/// Client for a running chromedriver instance
pub struct DriverClient {
    client: Client,
    base_url: String,
}

impl DriverClient {
    /// Create a new client for the given endpoint (e.g. `http://localhost:9515`)
    pub fn new(base_url: impl Into<String>) -> Result<Self, DriverError> {
        let client = Client::builder()
            .timeout(DEFAULT_DRIVER_TIMEOUT)
            .build()
            .map_err(DriverError::RequestFailed)?;

        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Ok(Self { client, base_url })
    }

    /// Query `GET /status`; used by the preflight checklist
    pub fn status(&self) -> Result<serde_json::Value, DriverError> {
        let response = self
            .client
            .get(format!("{}/status", self.base_url))
            .send()
            .map_err(DriverError::RequestFailed)?;

        let body: WdResponse<serde_json::Value> = check_response(response)?;
        Ok(body.value)
    }

    /// Start a browser session configured for performance tracing
    pub fn new_session(&self) -> Result<DriverSession<'_>, DriverError> {
        info!("Creating WebDriver session");

        let request = serde_json::json!({
            "capabilities": {
                "alwaysMatch": {
                    "browserName": "chrome",
                    "goog:loggingPrefs": {
                        "performance": "ALL",
                        "browser": "ALL"
                    },
                    "goog:chromeOptions": {
                        "args": CHROME_ARGS,
                        "perfLoggingPrefs": {
                            "traceCategories": TRACE_CATEGORIES
                        }
                    }
                }
            }
        });

        debug!("Session request: {:?}", request);

        let response = self
            .client
            .post(format!("{}/session", self.base_url))
            .json(&request)
            .send()
            .map_err(DriverError::RequestFailed)?;

        let body: WdResponse<NewSessionValue> = check_response(response)?;
        let session_id = body.value.session_id.ok_or(DriverError::MissingSessionId)?;

        info!("Session created: {}", session_id);

        Ok(DriverSession {
            client: self,
            id: session_id,
        })
    }
}

/// A live browser session. Call [`DriverSession::quit`] when done; the
/// session is not closed on drop so a failed run leaves the browser
/// available for inspection.
pub struct DriverSession<'a> {
    client: &'a DriverClient,
    id: String,
}

impl DriverSession<'_> {
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Navigate the session to a URL
    pub fn navigate(&self, url: &str) -> Result<(), DriverError> {
        debug!("Navigating session {} to {}", self.id, url);

        let response = self
            .client
            .client
            .post(format!("{}/session/{}/url", self.client.base_url, self.id))
            .json(&serde_json::json!({ "url": url }))
            .send()
            .map_err(DriverError::RequestFailed)?;

        let _: WdResponse<serde_json::Value> = check_response(response)?;
        Ok(())
    }

    /// Drain the performance log collected since the last call.
    ///
    /// chromedriver exposes this through the legacy log endpoint; each
    /// returned entry wraps a devtools message as a JSON string.
    pub fn performance_log(&self) -> Result<Vec<PerfLogEntry>, DriverError> {
        debug!("Fetching performance log for session {}", self.id);

        let response = self
            .client
            .client
            .post(format!("{}/session/{}/log", self.client.base_url, self.id))
            .json(&serde_json::json!({ "type": PERFORMANCE_LOG_TYPE }))
            .send()
            .map_err(DriverError::RequestFailed)?;

        let body: WdResponse<Vec<PerfLogEntry>> = check_response(response)?;

        debug!("Collected {} log entries", body.value.len());
        Ok(body.value)
    }

    /// End the session and close the browser
    pub fn quit(self) -> Result<(), DriverError> {
        info!("Closing session {}", self.id);

        let response = self
            .client
            .client
            .delete(format!("{}/session/{}", self.client.base_url, self.id))
            .send()
            .map_err(DriverError::RequestFailed)?;

        let _: WdResponse<serde_json::Value> = check_response(response)?;
        Ok(())
    }
}

/// Check HTTP status and deserialize, mapping WebDriver error payloads
fn check_response<T: serde::de::DeserializeOwned>(
    response: Response,
) -> Result<WdResponse<T>, DriverError> {
    let status = response.status();

    if !status.is_success() {
        let body = response.text().unwrap_or_default();

        // WebDriver failures carry a structured error under `value`
        if let Ok(wrapped) = serde_json::from_str::<WdResponse<WdErrorValue>>(&body) {
            return Err(DriverError::Protocol(format!(
                "{}: {}",
                wrapped.value.error, wrapped.value.message
            )));
        }

        return Err(DriverError::InvalidResponse(format!(
            "HTTP {}: {}",
            status, body
        )));
    }

    response
        .json::<WdResponse<T>>()
        .map_err(DriverError::RequestFailed)
}
