use kube::{Api, Client};
use riff_core::streaming::Stream;

/// Client for the `streaming.projectriff.io/v1alpha1` group
#[derive(Clone)]
pub struct StreamingV1alpha1Client {
    client: Client,
}

impl StreamingV1alpha1Client {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Streams in a namespace
    pub fn streams(&self, namespace: &str) -> Api<Stream> {
        Api::namespaced(self.client.clone(), namespace)
    }

    /// Streams across all namespaces
    pub fn all_streams(&self) -> Api<Stream> {
        Api::all(self.client.clone())
    }
}
