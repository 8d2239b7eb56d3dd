//! Typed access to the riff custom resource groups
//!
//! A [`Clientset`] wraps a [`kube::Client`] and hands out one client per api group version.
//! Each of those returns [`Api`](kube::Api) handles for the resources of the group,
//! so every call is a plain pass-through to `kube`.
//!
//! ```rust,no_run
//! use kube::api::{ListParams, ResourceExt};
//! use riff_client::Clientset;
//!
//! # async fn wrapper() -> Result<(), Box<dyn std::error::Error>> {
//! let config = kube::Config::infer().await?;
//! let clientset = Clientset::new_for_config(config)?;
//! let functions = clientset.build_v1alpha1().functions("default");
//! for f in functions.list(&ListParams::default()).await? {
//!     println!("found function {}", f.name_any());
//! }
//! # Ok(())
//! # }
//! ```
use kube::{Client, Discovery};

mod build;
pub use build::BuildV1alpha1Client;
mod core;
pub use self::core::CoreV1alpha1Client;
mod knative;
pub use knative::KnativeV1alpha1Client;
mod request;
pub use request::RequestV1alpha1Client;
mod streaming;
pub use streaming::StreamingV1alpha1Client;

#[cfg(any(test, feature = "mock"))] pub mod mock;
#[cfg(test)] mod mock_tests;

/// The clients for each riff api group
///
/// Each group has exactly one version included in a `Clientset`.
/// Cloning is cheap; all clients share the underlying connection pool.
#[derive(Clone)]
pub struct Clientset {
    client: Client,
}

impl Clientset {
    /// Create a clientset on top of an existing client
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Create a clientset for the given cluster configuration
    pub fn new_for_config(config: kube::Config) -> Result<Self, kube::Error> {
        Client::try_from(config).map(Self::new)
    }

    /// Retrieves the client for `build.projectriff.io/v1alpha1`
    pub fn build_v1alpha1(&self) -> BuildV1alpha1Client {
        BuildV1alpha1Client::new(self.client.clone())
    }

    /// Retrieves the client for `core.projectriff.io/v1alpha1`
    pub fn core_v1alpha1(&self) -> CoreV1alpha1Client {
        CoreV1alpha1Client::new(self.client.clone())
    }

    /// Retrieves the client for `knative.projectriff.io/v1alpha1`
    pub fn knative_v1alpha1(&self) -> KnativeV1alpha1Client {
        KnativeV1alpha1Client::new(self.client.clone())
    }

    /// Retrieves the client for `request.projectriff.io/v1alpha1`
    pub fn request_v1alpha1(&self) -> RequestV1alpha1Client {
        RequestV1alpha1Client::new(self.client.clone())
    }

    /// Retrieves the client for `streaming.projectriff.io/v1alpha1`
    pub fn streaming_v1alpha1(&self) -> StreamingV1alpha1Client {
        StreamingV1alpha1Client::new(self.client.clone())
    }

    /// A discovery client restricted to the riff api groups
    ///
    /// Nothing is fetched until [`Discovery::run`] is awaited.
    pub fn discovery(&self) -> Discovery {
        Discovery::new(self.client.clone()).filter(&riff_core::GROUPS)
    }

    /// The namespace used when a command does not name one
    ///
    /// Comes from the current kubeconfig context, or the in-cluster service account.
    pub fn default_namespace(&self) -> &str {
        self.client.default_namespace()
    }

    /// The underlying client
    pub fn client(&self) -> &Client {
        &self.client
    }
}

impl From<Client> for Clientset {
    fn from(client: Client) -> Self {
        Self::new(client)
    }
}
