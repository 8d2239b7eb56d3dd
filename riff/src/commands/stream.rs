//! `riff stream` commands
use std::io::Write;

use kube::api::PostParams;
use riff_client::Clientset;
use riff_core::{
    status::Readiness,
    streaming::{Stream, StreamSpec, DEFAULT_CONTENT_TYPE},
    validation, FieldError,
};
use tracing::info;

use super::Printable;
use crate::{
    cli::{
        flag_value, outln, required, DeleteOptions, ListOptions, ResourceOptions, Validate,
        CONTENT_TYPE_FLAG, PROVIDER_FLAG,
    },
    error::Result,
};

/// Stream subcommands
#[derive(clap::Subcommand, Debug)]
pub enum StreamCommand {
    /// Create a stream on a gateway provider
    Create(StreamCreateOptions),
    /// Table listing of streams
    List(ListOptions),
    /// Delete streams
    Delete(DeleteOptions),
}

impl Validate for StreamCommand {
    fn validate(&self) -> FieldError {
        match self {
            Self::Create(opts) => opts.validate(),
            Self::List(opts) => opts.validate(),
            Self::Delete(opts) => opts.validate(),
        }
    }
}

impl StreamCommand {
    pub async fn run(&self, c: &Clientset, out: &mut impl Write) -> Result<()> {
        let client = c.streaming_v1alpha1();
        match self {
            Self::Create(opts) => opts.run(c, out).await,
            Self::List(opts) => {
                let api = match opts.namespace(c) {
                    Some(ns) => client.streams(ns),
                    None => client.all_streams(),
                };
                super::list(api, opts.all_namespaces, out).await
            }
            Self::Delete(opts) => {
                let ns = opts.namespace(c);
                super::delete(client.streams(ns), opts, ns, out).await
            }
        }
    }
}

/// Flags of `riff stream create`
#[derive(clap::Args, Debug, Default, Clone)]
pub struct StreamCreateOptions {
    #[command(flatten)]
    pub resource: ResourceOptions,

    /// Name of the stream gateway provider
    #[arg(long, value_name = "name")]
    pub provider: Option<String>,

    /// Media type of the messages on the stream
    #[arg(long, value_name = "mime-type")]
    pub content_type: Option<String>,
}

impl Validate for StreamCreateOptions {
    fn validate(&self) -> FieldError {
        let errs = self.resource.validate().also(required(&self.provider, PROVIDER_FLAG));
        match flag_value(&self.content_type) {
            Some(ct) => errs.also(validation::mime_type(ct, CONTENT_TYPE_FLAG)),
            None => errs,
        }
    }
}

impl StreamCreateOptions {
    pub fn build(&self, namespace: &str) -> Stream {
        let mut stream = Stream::new(self.resource.name(), StreamSpec {
            provider: flag_value(&self.provider).unwrap_or_default().to_string(),
            content_type: flag_value(&self.content_type).map(String::from),
        });
        stream.metadata.namespace = Some(namespace.to_string());
        stream
    }

    pub async fn run(&self, c: &Clientset, out: &mut impl Write) -> Result<()> {
        let namespace = self.resource.namespace(c);
        info!(namespace, name = self.resource.name(), "creating stream");
        let stream = c
            .streaming_v1alpha1()
            .streams(namespace)
            .create(&PostParams::default(), &self.build(namespace))
            .await?;
        outln!(out, "Created stream {:?}", stream.metadata.name.unwrap_or_default())
    }
}

impl Printable for Stream {
    const COLUMNS: &'static [&'static str] = &["PROVIDER", "CONTENT TYPE"];
    const NOUN: &'static str = "stream";
    const NOUN_PLURAL: &'static str = "streams";

    fn cells(&self) -> Vec<String> {
        let content_type = self.spec.content_type.as_deref().unwrap_or(DEFAULT_CONTENT_TYPE);
        vec![self.spec.provider.clone(), content_type.to_string()]
    }

    fn readiness(&self) -> Readiness {
        let conditions = self.status.as_ref().map(|s| s.conditions.as_slice()).unwrap_or_default();
        Readiness::from_conditions(conditions)
    }
}
