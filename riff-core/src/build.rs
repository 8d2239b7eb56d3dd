//! Types in the `build.projectriff.io` group
use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::status::Condition;

/// The api group of [`Application`] and [`Function`]
pub const GROUP: &str = "build.projectriff.io";

/// An application built from source into a container image
#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[kube(
    group = "build.projectriff.io",
    version = "v1alpha1",
    kind = "Application",
    namespaced,
    status = "BuildStatus",
    derive = "PartialEq",
    derive = "Default",
    shortname = "app",
    printcolumn = r#"{"name":"Latest Image", "type":"string", "jsonPath":".status.latestImage"}"#
)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationSpec {
    /// Repository the built image is pushed to
    pub image: String,
    /// Where the application source lives
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<Source>,
}

/// A function built from source into a container image
#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[kube(
    group = "build.projectriff.io",
    version = "v1alpha1",
    kind = "Function",
    namespaced,
    status = "BuildStatus",
    derive = "PartialEq",
    derive = "Default",
    shortname = "fn",
    printcolumn = r#"{"name":"Latest Image", "type":"string", "jsonPath":".status.latestImage"}"#
)]
#[serde(rename_all = "camelCase")]
pub struct FunctionSpec {
    /// Repository the built image is pushed to
    pub image: String,
    /// Path to the function artifact within the source, when it cannot be detected
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artifact: Option<String>,
    /// Name of the method or class to invoke, depending on the language
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handler: Option<String>,
    /// Language runtime used to host the function, when it cannot be detected
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoker: Option<String>,
    /// Where the function source lives
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<Source>,
}

/// Source location of an application or function
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Source {
    /// A git repository to build from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub git: Option<Git>,
    /// Directory within the source to build
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_path: Option<String>,
}

/// A git repository at a given revision
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
pub struct Git {
    /// Clone url of the repository
    pub url: String,
    /// Branch, tag or commit to build
    pub revision: String,
}

/// Observed state of a build
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BuildStatus {
    /// Conditions reported by the build controller
    #[serde(default)]
    pub conditions: Vec<Condition>,
    /// The most recently built image, by digest
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_image: Option<String>,
}
