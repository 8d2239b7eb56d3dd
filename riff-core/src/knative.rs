//! Resources in the `knative.projectriff.io` group
//!
//! Both resources are served by the knative runtime and addressed dynamically
//! through an [`ApiResource`].
use kube::core::{ApiResource, GroupVersionKind};

/// The api group of the knative runtime
pub const GROUP: &str = "knative.projectriff.io";
/// The served version of the knative runtime resources
pub const VERSION: &str = "v1alpha1";

/// An adapter pushing the latest image of a build into an existing knative service or configuration
pub fn adapter() -> ApiResource {
    ApiResource::from_gvk_with_plural(&GroupVersionKind::gvk(GROUP, VERSION, "Adapter"), "adapters")
}

/// A deployer running a build or image as a knative service
pub fn deployer() -> ApiResource {
    ApiResource::from_gvk_with_plural(&GroupVersionKind::gvk(GROUP, VERSION, "Deployer"), "deployers")
}
