//! `riff function` commands
use std::io::Write;

use kube::api::PostParams;
use riff_client::Clientset;
use riff_core::{
    build::{Function, FunctionSpec},
    status::Readiness,
    FieldError,
};
use tracing::info;

use super::{application::SourceOptions, Printable};
use crate::{
    cli::{flag_value, outln, DeleteOptions, ListOptions, ResourceOptions, Validate},
    error::Result,
};

/// Function subcommands
#[derive(clap::Subcommand, Debug)]
pub enum FunctionCommand {
    /// Create a function from source
    Create(FunctionCreateOptions),
    /// Table listing of functions
    List(ListOptions),
    /// Delete functions
    Delete(DeleteOptions),
}

impl Validate for FunctionCommand {
    fn validate(&self) -> FieldError {
        match self {
            Self::Create(opts) => opts.validate(),
            Self::List(opts) => opts.validate(),
            Self::Delete(opts) => opts.validate(),
        }
    }
}

impl FunctionCommand {
    pub async fn run(&self, c: &Clientset, out: &mut impl Write) -> Result<()> {
        let client = c.build_v1alpha1();
        match self {
            Self::Create(opts) => opts.run(c, out).await,
            Self::List(opts) => {
                let api = match opts.namespace(c) {
                    Some(ns) => client.functions(ns),
                    None => client.all_functions(),
                };
                super::list(api, opts.all_namespaces, out).await
            }
            Self::Delete(opts) => {
                let ns = opts.namespace(c);
                super::delete(client.functions(ns), opts, ns, out).await
            }
        }
    }
}

/// Flags of `riff function create`
#[derive(clap::Args, Debug, Default, Clone)]
pub struct FunctionCreateOptions {
    #[command(flatten)]
    pub resource: ResourceOptions,

    #[command(flatten)]
    pub source: SourceOptions,

    /// Path to the function artifact, when it cannot be detected
    #[arg(long, value_name = "file")]
    pub artifact: Option<String>,

    /// Name of the method or class to invoke, depending on the language
    #[arg(long, value_name = "name")]
    pub handler: Option<String>,

    /// Language runtime, when it cannot be detected
    #[arg(long, value_name = "language")]
    pub invoker: Option<String>,
}

impl Validate for FunctionCreateOptions {
    fn validate(&self) -> FieldError {
        self.resource.validate().also(self.source.validate())
    }
}

impl FunctionCreateOptions {
    pub fn build(&self, namespace: &str) -> Function {
        let mut func = Function::new(self.resource.name(), FunctionSpec {
            image: self.source.image(),
            artifact: flag_value(&self.artifact).map(String::from),
            handler: flag_value(&self.handler).map(String::from),
            invoker: flag_value(&self.invoker).map(String::from),
            source: self.source.source(),
        });
        func.metadata.namespace = Some(namespace.to_string());
        func
    }

    pub async fn run(&self, c: &Clientset, out: &mut impl Write) -> Result<()> {
        let namespace = self.resource.namespace(c);
        info!(namespace, name = self.resource.name(), "creating function");
        let func = c
            .build_v1alpha1()
            .functions(namespace)
            .create(&PostParams::default(), &self.build(namespace))
            .await?;
        outln!(out, "Created function {:?}", func.metadata.name.unwrap_or_default())
    }
}

impl Printable for Function {
    const COLUMNS: &'static [&'static str] = &["LATEST IMAGE", "INVOKER"];
    const NOUN: &'static str = "function";
    const NOUN_PLURAL: &'static str = "functions";

    fn cells(&self) -> Vec<String> {
        let latest = self.status.as_ref().and_then(|s| s.latest_image.clone());
        vec![
            latest.unwrap_or_else(|| "<empty>".into()),
            self.spec.invoker.clone().unwrap_or_else(|| "<detect>".into()),
        ]
    }

    fn readiness(&self) -> Readiness {
        let conditions = self.status.as_ref().map(|s| s.conditions.as_slice()).unwrap_or_default();
        Readiness::from_conditions(conditions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::Method;
    use riff_client::mock::{testcontext, timeout_after_1s, Exchange};
    use serde_json::json;

    fn opts() -> FunctionCreateOptions {
        FunctionCreateOptions {
            resource: ResourceOptions {
                namespace: None,
                name: Some("square".into()),
            },
            source: SourceOptions {
                image: Some("registry.example.com/square".into()),
                git_repo: Some("https://github.com/projectriff-samples/node-square".into()),
                git_revision: "v1".into(),
                sub_path: Some("fn".into()),
            },
            handler: Some("square".into()),
            ..FunctionCreateOptions::default()
        }
    }

    #[test]
    fn empty_revision_is_rejected() {
        let mut o = opts();
        assert!(o.validate().is_empty());
        o.source.git_revision = String::new();
        assert_eq!(o.validate().to_string(), "missing field(s): --git-revision");
    }

    #[test]
    fn optional_flags_are_omitted() {
        let func = opts().build("default");
        assert_eq!(func.spec.handler.as_deref(), Some("square"));
        assert_eq!(func.spec.artifact, None);
        assert_eq!(func.spec.invoker, None);
        let source = func.spec.source.unwrap();
        assert_eq!(source.sub_path.as_deref(), Some("fn"));
        assert_eq!(source.git.unwrap().revision, "v1");
    }

    #[tokio::test]
    async fn delete_all_in_namespace() {
        let (clientset, fakeserver) = testcontext();
        let emptied = json!({
            "kind": "FunctionList",
            "apiVersion": "build.projectriff.io/v1alpha1",
            "metadata": {},
            "items": []
        });
        let mocksrv = fakeserver.run(vec![Exchange::new(
            Method::DELETE,
            "/apis/build.projectriff.io/v1alpha1/namespaces/default/functions",
            emptied,
        )]);

        let cmd = FunctionCommand::Delete(DeleteOptions {
            all: true,
            ..DeleteOptions::default()
        });
        let mut out = vec![];
        cmd.run(&clientset, &mut out).await.unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Deleted functions in namespace \"default\"\n"
        );
        timeout_after_1s(mocksrv).await;
    }

    #[tokio::test]
    async fn create_sends_handler() {
        let (clientset, fakeserver) = testcontext();
        let created = serde_json::to_value(opts().build("default")).unwrap();
        let mocksrv = fakeserver.run(vec![Exchange::new(
            Method::POST,
            "/apis/build.projectriff.io/v1alpha1/namespaces/default/functions",
            created,
        )]);

        let mut out = vec![];
        opts().run(&clientset, &mut out).await.unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Created function \"square\"\n");
        let bodies = timeout_after_1s(mocksrv).await;
        assert_eq!(bodies[0]["spec"]["handler"], "square");
        assert!(bodies[0]["spec"].get("invoker").is_none());
    }
}
