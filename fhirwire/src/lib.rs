//! Shared diagnostic wire shape for the transformation BFF and client.
//!
//! This crate owns the FHIR `OperationOutcome` subset the server emits for
//! operational failures (throttling, upstream errors, bad requests) and the
//! defensive decoder the client uses to pull a human-readable message out of
//! an arbitrary error payload. Keeping encode and decode in one place means
//! the nested `details.text` convention — a JSON-encoded `{"message": …}`
//! string inside a JSON document — cannot drift between the two sides.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Severity of a reported issue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    Fatal,
    Error,
    Warning,
    Information,
}

/// Issue type code, per the FHIR issue-type value set (subset in use here).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IssueType {
    Invalid,
    Security,
    Login,
    Processing,
    Transient,
    Exception,
    Timeout,
    Throttled,
}

/// Human-readable detail attached to an issue.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IssueDetails {
    /// Free-text detail. For outcomes built by [`OperationOutcome::error`]
    /// this is a JSON-encoded `{"message": …}` string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// A single issue entry inside an outcome.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OutcomeIssue {
    pub severity: IssueSeverity,
    pub code: IssueType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<IssueDetails>,
}

/// The `OperationOutcome` resource reported on failed operations.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OperationOutcome {
    /// Always `"OperationOutcome"`.
    #[serde(rename = "resourceType")]
    pub resource_type: String,
    pub issue: Vec<OutcomeIssue>,
}

impl OperationOutcome {
    /// Build an error outcome whose `details.text` carries `message` in the
    /// JSON-encoded envelope the client decoder expects.
    #[must_use]
    pub fn error(code: IssueType, message: &str) -> Self {
        let text = serde_json::json!({ "message": message }).to_string();
        Self {
            resource_type: "OperationOutcome".to_owned(),
            issue: vec![OutcomeIssue {
                severity: IssueSeverity::Error,
                code,
                details: Some(IssueDetails { text: Some(text) }),
            }],
        }
    }

    /// Build a throttling outcome for rate-limited requests.
    #[must_use]
    pub fn throttled(message: &str) -> Self {
        Self::error(IssueType::Throttled, message)
    }
}

/// Extract the diagnostic message from an arbitrary error payload.
///
/// Expects `issue[0].details.text` to hold a JSON-encoded object with a
/// string `message` field. Every deviation from that shape — no `issue`
/// array, an empty one, missing `details` or `text`, text that is not JSON,
/// or a non-string `message` — yields `None` rather than an error, so a
/// misbehaving backend can never take the caller down with it.
#[must_use]
pub fn diagnostic_message(payload: &Value) -> Option<String> {
    let text = payload
        .get("issue")?
        .get(0)?
        .get("details")?
        .get("text")?
        .as_str()?;
    let envelope: Value = serde_json::from_str(text).ok()?;
    envelope.get("message")?.as_str().map(str::to_owned)
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
