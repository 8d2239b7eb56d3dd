//! Status conditions shared by every riff resource
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The condition type summarizing whether a resource is usable
pub const READY: &str = "Ready";

/// An observation of one aspect of a resource's state
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    /// Type of condition, e.g. `Ready`
    #[serde(rename = "type")]
    pub type_: String,
    /// One of `True`, `False` or `Unknown`
    pub status: String,
    /// Machine readable reason for the last transition
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Human readable details about the last transition
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// RFC 3339 timestamp of the last transition
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_transition_time: Option<String>,
}

/// Summary of a resource's `Ready` condition
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Readiness {
    /// `Ready` is `True`
    Ready,
    /// `Ready` is `False`, with the reported reason if any
    Failed(Option<String>),
    /// No `Ready` condition, or its status is `Unknown`
    Unknown,
}

impl Readiness {
    /// Find the `Ready` condition in a list of conditions and summarize it
    pub fn from_conditions(conditions: &[Condition]) -> Self {
        match conditions.iter().find(|c| c.type_ == READY) {
            Some(c) if c.status == "True" => Readiness::Ready,
            Some(c) if c.status == "False" => Readiness::Failed(c.reason.clone()),
            _ => Readiness::Unknown,
        }
    }
}

impl std::fmt::Display for Readiness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Readiness::Ready => f.write_str("Ready"),
            Readiness::Failed(Some(reason)) => write!(f, "Failed: {reason}"),
            Readiness::Failed(None) => f.write_str("Failed"),
            Readiness::Unknown => f.write_str("Unknown"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready(status: &str, reason: Option<&str>) -> Condition {
        Condition {
            type_: READY.into(),
            status: status.into(),
            reason: reason.map(Into::into),
            ..Condition::default()
        }
    }

    #[test]
    fn readiness_from_ready_condition() {
        assert_eq!(Readiness::from_conditions(&[]), Readiness::Unknown);
        assert_eq!(Readiness::from_conditions(&[ready("True", None)]), Readiness::Ready);
        assert_eq!(
            Readiness::from_conditions(&[ready("Unknown", Some("Deploying"))]),
            Readiness::Unknown
        );
        let failed = Readiness::from_conditions(&[ready("False", Some("BuildFailed"))]);
        assert_eq!(failed.to_string(), "Failed: BuildFailed");
    }

    #[test]
    fn other_conditions_are_ignored() {
        let conditions = vec![Condition {
            type_: "BuildSucceeded".into(),
            status: "True".into(),
            ..Condition::default()
        }];
        assert_eq!(Readiness::from_conditions(&conditions), Readiness::Unknown);
    }

    #[test]
    fn wire_names() {
        let c: Condition = serde_json::from_value(serde_json::json!({
            "type": "Ready",
            "status": "True",
            "lastTransitionTime": "2019-06-01T10:00:00Z"
        }))
        .unwrap();
        assert_eq!(c.type_, "Ready");
        assert_eq!(c.last_transition_time.as_deref(), Some("2019-06-01T10:00:00Z"));
    }
}
