use kube::{Api, Client};
use riff_core::request::RequestProcessor;

/// Client for the `request.projectriff.io/v1alpha1` group
#[derive(Clone)]
pub struct RequestV1alpha1Client {
    client: Client,
}

impl RequestV1alpha1Client {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Request processors in a namespace
    pub fn request_processors(&self, namespace: &str) -> Api<RequestProcessor> {
        Api::namespaced(self.client.clone(), namespace)
    }

    /// Request processors across all namespaces
    pub fn all_request_processors(&self) -> Api<RequestProcessor> {
        Api::all(self.client.clone())
    }
}
