//! Transformation screen state machine.
//!
//! DESIGN
//! ======
//! One mutable record per screen instance, driven through explicit
//! transition methods: idle → sample-loaded (transient) → loading →
//! success | error. Pages own the async plumbing (HTTP call, timers) and
//! call into this model from event handlers, so every lifecycle rule lives
//! here where it can be tested without a browser.
//!
//! ERROR HANDLING
//! ==============
//! Failures are data, not panics: a failed call records the status code,
//! the raw response body, and — when the payload follows the expected
//! issue-reporting shape — a decoded human-readable message. A malformed
//! diagnostic payload degrades to a blank message rather than a secondary
//! fault.

#[cfg(test)]
#[path = "transform_test.rs"]
mod transform_test;

use serde_json::Value;

/// Fixed message shown for HTTP 429, regardless of payload content.
pub const THROTTLED_MESSAGE: &str =
    "You have exceeded the allowed request rate. Please try again in a few moments.";

/// Serialization format of the output pane.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Json,
    Xml,
}

impl OutputFormat {
    /// File extension used for output downloads.
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Xml => "xml",
        }
    }
}

/// Mutable state of one transformation screen instance.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TransformScreen {
    pub input: String,
    pub output: String,
    pub error_message: Option<String>,
    pub is_error: bool,
    pub is_loading: bool,
    pub alert_open: bool,
    pub output_format: OutputFormat,
    pub status_code: Option<u16>,
}

impl TransformScreen {
    /// Populate the input from a handed-off sample and open the transient
    /// "Sample Loaded" alert. The page auto-dismisses the alert after a
    /// fixed delay.
    pub fn load_sample(&mut self, data: &str) {
        self.input = data.to_owned();
        self.alert_open = true;
    }

    pub fn dismiss_alert(&mut self) {
        self.alert_open = false;
    }

    pub fn dismiss_error(&mut self) {
        self.is_error = false;
    }

    pub fn set_input(&mut self, value: String) {
        self.input = value;
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
    }

    pub fn clear_output(&mut self) {
        self.output.clear();
    }

    /// Enter the loading state: clear the output pane and any prior error.
    ///
    /// Returns `false` (and changes nothing) when a request is already in
    /// flight; at most one outbound call runs per screen instance.
    pub fn begin_request(&mut self) -> bool {
        if self.is_loading {
            return false;
        }
        self.is_loading = true;
        self.output.clear();
        self.is_error = false;
        self.error_message = None;
        self.status_code = None;
        true
    }

    /// Record a 2xx response carrying a JSON body.
    pub fn complete_success(&mut self, status: u16, body: &Value) {
        self.status_code = Some(status);
        self.output = pretty(body);
        self.is_loading = false;
    }

    /// Record a 2xx response whose body was not JSON; shown verbatim.
    pub fn complete_success_text(&mut self, status: u16, body: &str) {
        self.status_code = Some(status);
        self.output = body.to_owned();
        self.is_loading = false;
    }

    /// Record a non-2xx response. The output pane shows the error body
    /// (pretty-printed when it parsed as JSON, verbatim otherwise) and the
    /// message is decoded from the diagnostic envelope when present.
    pub fn complete_failure(&mut self, status: u16, body: Option<&Value>, raw_body: &str) {
        self.status_code = Some(status);
        self.output = body.map_or_else(|| raw_body.to_owned(), pretty);
        self.error_message = body.and_then(fhirwire::diagnostic_message);
        self.is_error = true;
        self.is_loading = false;
    }

    /// Record a transport failure: no response, no status, no body.
    pub fn complete_transport_failure(&mut self) {
        self.status_code = None;
        self.error_message = None;
        self.is_error = true;
        self.is_loading = false;
    }

    /// Message for the error banner. HTTP 429 always maps to the fixed
    /// throttling text, overriding whatever the payload said.
    #[must_use]
    pub fn display_message(&self) -> Option<String> {
        if self.status_code == Some(429) {
            return Some(THROTTLED_MESSAGE.to_owned());
        }
        self.error_message.clone()
    }
}

/// Stable 2-space-indent pretty printing for the output pane.
fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_default()
}
