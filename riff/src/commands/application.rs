//! `riff application` commands
use std::io::Write;

use kube::api::PostParams;
use riff_client::Clientset;
use riff_core::{
    build::{Application, ApplicationSpec, Git, Source},
    status::Readiness,
    FieldError,
};
use tracing::info;

use super::Printable;
use crate::{
    cli::{
        flag_value, outln, required, DeleteOptions, ListOptions, ResourceOptions, Validate, GIT_REPO_FLAG,
        GIT_REVISION_FLAG, IMAGE_FLAG,
    },
    error::Result,
};

/// Application subcommands
#[derive(clap::Subcommand, Debug)]
pub enum ApplicationCommand {
    /// Create an application from source
    Create(ApplicationCreateOptions),
    /// Table listing of applications
    List(ListOptions),
    /// Delete applications
    Delete(DeleteOptions),
}

impl Validate for ApplicationCommand {
    fn validate(&self) -> FieldError {
        match self {
            Self::Create(opts) => opts.validate(),
            Self::List(opts) => opts.validate(),
            Self::Delete(opts) => opts.validate(),
        }
    }
}

impl ApplicationCommand {
    pub async fn run(&self, c: &Clientset, out: &mut impl Write) -> Result<()> {
        let client = c.build_v1alpha1();
        match self {
            Self::Create(opts) => opts.run(c, out).await,
            Self::List(opts) => {
                let api = match opts.namespace(c) {
                    Some(ns) => client.applications(ns),
                    None => client.all_applications(),
                };
                super::list(api, opts.all_namespaces, out).await
            }
            Self::Delete(opts) => {
                let ns = opts.namespace(c);
                super::delete(client.applications(ns), opts, ns, out).await
            }
        }
    }
}

/// Source flags shared by applications and functions
#[derive(clap::Args, Debug, Clone)]
pub struct SourceOptions {
    /// Repository the built image is pushed to
    #[arg(long, value_name = "repository")]
    pub image: Option<String>,

    /// Git url of the source to build
    #[arg(long, value_name = "url")]
    pub git_repo: Option<String>,

    /// Git branch, tag or commit to build
    #[arg(long, value_name = "revision", default_value = "master")]
    pub git_revision: String,

    /// Directory within the repository holding the source
    #[arg(long, value_name = "directory")]
    pub sub_path: Option<String>,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            image: None,
            git_repo: None,
            git_revision: "master".into(),
            sub_path: None,
        }
    }
}

impl Validate for SourceOptions {
    fn validate(&self) -> FieldError {
        let errs = required(&self.image, IMAGE_FLAG).also(required(&self.git_repo, GIT_REPO_FLAG));
        if self.git_revision.is_empty() {
            errs.also(FieldError::missing_field(GIT_REVISION_FLAG))
        } else {
            errs
        }
    }
}

impl SourceOptions {
    pub fn image(&self) -> String {
        flag_value(&self.image).unwrap_or_default().to_string()
    }

    pub fn source(&self) -> Option<Source> {
        let url = flag_value(&self.git_repo)?;
        Some(Source {
            git: Some(Git {
                url: url.to_string(),
                revision: self.git_revision.clone(),
            }),
            sub_path: flag_value(&self.sub_path).map(String::from),
        })
    }
}

/// Flags of `riff application create`
#[derive(clap::Args, Debug, Default, Clone)]
pub struct ApplicationCreateOptions {
    #[command(flatten)]
    pub resource: ResourceOptions,

    #[command(flatten)]
    pub source: SourceOptions,
}

impl Validate for ApplicationCreateOptions {
    fn validate(&self) -> FieldError {
        self.resource.validate().also(self.source.validate())
    }
}

impl ApplicationCreateOptions {
    pub fn build(&self, namespace: &str) -> Application {
        let mut app = Application::new(self.resource.name(), ApplicationSpec {
            image: self.source.image(),
            source: self.source.source(),
        });
        app.metadata.namespace = Some(namespace.to_string());
        app
    }

    pub async fn run(&self, c: &Clientset, out: &mut impl Write) -> Result<()> {
        let namespace = self.resource.namespace(c);
        info!(namespace, name = self.resource.name(), "creating application");
        let app = c
            .build_v1alpha1()
            .applications(namespace)
            .create(&PostParams::default(), &self.build(namespace))
            .await?;
        outln!(out, "Created application {:?}", app.metadata.name.unwrap_or_default())
    }
}

impl Printable for Application {
    const COLUMNS: &'static [&'static str] = &["LATEST IMAGE"];
    const NOUN: &'static str = "application";
    const NOUN_PLURAL: &'static str = "applications";

    fn cells(&self) -> Vec<String> {
        let latest = self.status.as_ref().and_then(|s| s.latest_image.clone());
        vec![latest.unwrap_or_else(|| "<empty>".into())]
    }

    fn readiness(&self) -> Readiness {
        let conditions = self.status.as_ref().map(|s| s.conditions.as_slice()).unwrap_or_default();
        Readiness::from_conditions(conditions)
    }
}
