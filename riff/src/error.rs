//! Error handling in the riff command line
use riff_core::FieldError;
use thiserror::Error;

/// Possible errors when running a riff command
#[derive(Error, Debug)]
pub enum Error {
    /// Flags failed validation; nothing was sent to the cluster
    #[error("{0}")]
    Validation(#[source] FieldError),

    /// The api server rejected a request, or could not be reached
    ///
    /// Surfaced exactly as reported by `kube`.
    #[error(transparent)]
    Api(#[from] kube::Error),

    /// No usable cluster configuration was found in the environment
    #[error("unable to infer cluster configuration: {0}")]
    InferConfig(#[source] kube::config::InferConfigError),

    /// The kubeconfig could not be loaded
    #[error("unable to load kubeconfig: {0}")]
    Kubeconfig(#[source] kube::config::KubeconfigError),

    /// Writing command output failed
    #[error("unable to write output: {0}")]
    Output(#[source] std::io::Error),
}

/// Convenient alias for `Result<T, Error>`
pub type Result<T, E = Error> = std::result::Result<T, E>;
