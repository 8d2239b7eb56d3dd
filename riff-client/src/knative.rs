use kube::{api::DynamicObject, Api, Client};
use riff_core::knative;

/// Client for the `knative.projectriff.io/v1alpha1` group
#[derive(Clone)]
pub struct KnativeV1alpha1Client {
    client: Client,
}

impl KnativeV1alpha1Client {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Adapters in a namespace
    pub fn adapters(&self, namespace: &str) -> Api<DynamicObject> {
        Api::namespaced_with(self.client.clone(), namespace, &knative::adapter())
    }

    /// Adapters across all namespaces
    pub fn all_adapters(&self) -> Api<DynamicObject> {
        Api::all_with(self.client.clone(), &knative::adapter())
    }

    /// Deployers in a namespace
    pub fn deployers(&self, namespace: &str) -> Api<DynamicObject> {
        Api::namespaced_with(self.client.clone(), namespace, &knative::deployer())
    }

    /// Deployers across all namespaces
    pub fn all_deployers(&self) -> Api<DynamicObject> {
        Api::all_with(self.client.clone(), &knative::deployer())
    }
}
