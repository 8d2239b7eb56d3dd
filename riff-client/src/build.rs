use kube::{Api, Client};
use riff_core::build::{Application, Function};

/// Client for the `build.projectriff.io/v1alpha1` group
#[derive(Clone)]
pub struct BuildV1alpha1Client {
    client: Client,
}

impl BuildV1alpha1Client {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Applications in a namespace
    pub fn applications(&self, namespace: &str) -> Api<Application> {
        Api::namespaced(self.client.clone(), namespace)
    }

    /// Applications across all namespaces
    pub fn all_applications(&self) -> Api<Application> {
        Api::all(self.client.clone())
    }

    /// Functions in a namespace
    pub fn functions(&self, namespace: &str) -> Api<Function> {
        Api::namespaced(self.client.clone(), namespace)
    }

    /// Functions across all namespaces
    pub fn all_functions(&self) -> Api<Function> {
        Api::all(self.client.clone())
    }
}
