//! Resources in the `core.projectriff.io` group
//!
//! The group only serves the core runtime's `Deployer`. Its schema is owned by the
//! runtime installation, so it is addressed dynamically through an [`ApiResource`].
use kube::core::{ApiResource, GroupVersionKind};

/// The api group of the core runtime
pub const GROUP: &str = "core.projectriff.io";
/// The served version of the core runtime resources
pub const VERSION: &str = "v1alpha1";

/// A deployer running a build or image as a plain kubernetes deployment
pub fn deployer() -> ApiResource {
    ApiResource::from_gvk_with_plural(&GroupVersionKind::gvk(GROUP, VERSION, "Deployer"), "deployers")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deployer_resource() {
        let ar = deployer();
        assert_eq!(ar.api_version, "core.projectriff.io/v1alpha1");
        assert_eq!(ar.kind, "Deployer");
        assert_eq!(ar.plural, "deployers");
    }
}
