//! Types in the `request.projectriff.io` group
use std::borrow::Cow;

use k8s_openapi::{
    api::core::v1::PodSpec, apimachinery::pkg::apis::meta::v1::ObjectMeta, NamespaceResourceScope,
};
use kube::Resource;
use serde::{Deserialize, Serialize};

use crate::status::Condition;

/// The api group of [`RequestProcessor`]
pub const GROUP: &str = "request.projectriff.io";
/// The served version of [`RequestProcessor`]
pub const VERSION: &str = "v1alpha1";
/// The kind of [`RequestProcessor`]
pub const KIND: &str = "RequestProcessor";
/// The plural resource name of [`RequestProcessor`]
pub const PLURAL: &str = "requestprocessors";

/// A processor of http requests, routed to one or more items
///
/// Unlike the other riff types the spec is a json array rather than an object,
/// so this type implements [`Resource`] directly instead of going through `CustomResource`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RequestProcessor {
    /// Always `request.projectriff.io/v1alpha1` for objects built by [`RequestProcessor::new`]
    #[serde(default)]
    pub api_version: String,
    /// Always `RequestProcessor` for objects built by [`RequestProcessor::new`]
    #[serde(default)]
    pub kind: String,
    /// Standard object metadata
    #[serde(default)]
    pub metadata: ObjectMeta,
    /// The items requests are processed by, in order
    #[serde(default)]
    pub spec: RequestProcessorSpec,
    /// Observed state, written by the request controller
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<RequestProcessorStatus>,
}

/// Ordered list of processor items
pub type RequestProcessorSpec = Vec<RequestProcessorSpecItem>;

/// A single named workload of a [`RequestProcessor`]
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RequestProcessorSpecItem {
    /// Name of the item, unique within the processor
    pub name: String,
    /// Build the container image is taken from, instead of a literal image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build: Option<Build>,
    /// Pod template of the workload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<PodSpec>,
}

/// Reference to the build providing an item's image
///
/// The server accepts either ref, both, or neither; `riff` itself only ever sets one.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Build {
    /// Name of an [`Application`](crate::build::Application) in the same namespace
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_ref: Option<String>,
    /// Name of a [`Function`](crate::build::Function) in the same namespace
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function_ref: Option<String>,
}

impl Build {
    /// Take the image from the latest build of an application
    pub fn application(name: &str) -> Self {
        Self {
            application_ref: Some(name.to_string()),
            ..Self::default()
        }
    }

    /// Take the image from the latest build of a function
    pub fn function(name: &str) -> Self {
        Self {
            function_ref: Some(name.to_string()),
            ..Self::default()
        }
    }
}

/// Observed state of a request processor
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RequestProcessorStatus {
    /// Conditions reported by the request controller
    #[serde(default)]
    pub conditions: Vec<Condition>,
}

impl RequestProcessor {
    /// Create a request processor with type information, a name and a spec
    pub fn new(name: &str, spec: RequestProcessorSpec) -> Self {
        Self {
            api_version: <Self as Resource>::api_version(&()).into_owned(),
            kind: KIND.to_string(),
            metadata: ObjectMeta {
                name: Some(name.to_string()),
                ..ObjectMeta::default()
            },
            spec,
            status: None,
        }
    }
}

impl Resource for RequestProcessor {
    type DynamicType = ();
    type Scope = NamespaceResourceScope;

    fn kind(_: &()) -> Cow<'_, str> {
        KIND.into()
    }

    fn group(_: &()) -> Cow<'_, str> {
        GROUP.into()
    }

    fn version(_: &()) -> Cow<'_, str> {
        VERSION.into()
    }

    fn plural(_: &()) -> Cow<'_, str> {
        PLURAL.into()
    }

    fn meta(&self) -> &ObjectMeta {
        &self.metadata
    }

    fn meta_mut(&mut self) -> &mut ObjectMeta {
        &mut self.metadata
    }
}
