//! Types in the `streaming.projectriff.io` group
use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::status::Condition;

/// The api group of [`Stream`]
pub const GROUP: &str = "streaming.projectriff.io";

/// Content type assumed by the gateway when a stream does not declare one
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// A named stream of messages hosted by a stream gateway provider
#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[kube(
    group = "streaming.projectriff.io",
    version = "v1alpha1",
    kind = "Stream",
    namespaced,
    status = "StreamStatus",
    derive = "PartialEq",
    derive = "Default",
    printcolumn = r#"{"name":"Content Type", "type":"string", "jsonPath":".spec.contentType"}"#
)]
#[serde(rename_all = "camelCase")]
pub struct StreamSpec {
    /// Name of the provider hosting the stream
    pub provider: String,
    /// Media type of the messages on the stream
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
}

/// Observed state of a stream
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct StreamStatus {
    /// Conditions reported by the streaming controller
    #[serde(default)]
    pub conditions: Vec<Condition>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use kube::{CustomResourceExt, Resource, ResourceExt};

    #[test]
    fn stream_resource() {
        assert_eq!(Stream::plural(&()), "streams");
        assert_eq!(Stream::group(&()), GROUP);
        assert_eq!(Stream::crd().name_any(), "streams.streaming.projectriff.io");
    }

    #[test]
    fn content_type_is_optional() {
        let stream = Stream::new("letters", StreamSpec {
            provider: "franz".into(),
            content_type: None,
        });
        let json = serde_json::to_value(&stream).unwrap();
        assert_eq!(json["spec"], serde_json::json!({ "provider": "franz" }));
    }
}
