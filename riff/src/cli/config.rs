use std::path::PathBuf;

use kube::config::{KubeConfigOptions, Kubeconfig};
use riff_client::Clientset;
use tracing::debug;

use crate::error::{Error, Result};

/// Cluster connection settings shared by every command
#[derive(clap::Args, Debug, Default, Clone)]
pub struct Config {
    /// Path to a kubeconfig file; inferred from $KUBECONFIG or ~/.kube/config when unset
    #[arg(long, global = true, value_name = "path")]
    pub kubeconfig: Option<PathBuf>,

    /// Name of the kubeconfig context to use; the current context when unset
    #[arg(long, global = true, value_name = "name")]
    pub context: Option<String>,
}

impl Config {
    /// Load the cluster configuration these settings point at
    ///
    /// Only local files and the environment are read; no request is made to the cluster.
    pub async fn kube_config(&self) -> Result<kube::Config> {
        let options = KubeConfigOptions {
            context: self.context.clone(),
            ..KubeConfigOptions::default()
        };
        match (&self.kubeconfig, &self.context) {
            (Some(path), _) => {
                debug!(path = %path.display(), context = ?self.context, "loading kubeconfig");
                let kubeconfig = Kubeconfig::read_from(path).map_err(Error::Kubeconfig)?;
                kube::Config::from_custom_kubeconfig(kubeconfig, &options)
                    .await
                    .map_err(Error::Kubeconfig)
            }
            (None, Some(context)) => {
                debug!(%context, "loading default kubeconfig");
                kube::Config::from_kubeconfig(&options)
                    .await
                    .map_err(Error::Kubeconfig)
            }
            (None, None) => kube::Config::infer().await.map_err(Error::InferConfig),
        }
    }

    /// Build the clientset used by commands
    pub async fn clientset(&self) -> Result<Clientset> {
        let config = self.kube_config().await?;
        debug!(cluster_url = %config.cluster_url, namespace = %config.default_namespace, "connecting");
        Ok(Clientset::new_for_config(config)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_kubeconfig_is_a_config_error() {
        let config = Config {
            kubeconfig: Some("/nonexistent/riff/kubeconfig".into()),
            context: None,
        };
        let err = config.kube_config().await.unwrap_err();
        assert!(matches!(err, Error::Kubeconfig(_)), "unexpected error {err:?}");
    }
}
