use kube::{api::DynamicObject, Api, Client};

/// Client for the `core.projectriff.io/v1alpha1` group
///
/// The runtime's types are not modelled here, so its resources come back as [`DynamicObject`]s.
#[derive(Clone)]
pub struct CoreV1alpha1Client {
    client: Client,
}

impl CoreV1alpha1Client {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Deployers in a namespace
    pub fn deployers(&self, namespace: &str) -> Api<DynamicObject> {
        Api::namespaced_with(self.client.clone(), namespace, &riff_core::core::deployer())
    }

    /// Deployers across all namespaces
    pub fn all_deployers(&self) -> Api<DynamicObject> {
        Api::all_with(self.client.clone(), &riff_core::core::deployer())
    }
}
