//! `riff request-processor` commands
use std::io::Write;

use k8s_openapi::api::core::v1::{Container, PodSpec};
use kube::api::PostParams;
use riff_client::Clientset;
use riff_core::{
    parsers,
    request::{Build, RequestProcessor, RequestProcessorSpecItem},
    status::Readiness,
    validation, FieldError,
};
use tracing::info;

use super::Printable;
use crate::{
    cli::{
        flag_value, outln, DeleteOptions, ListOptions, ResourceOptions, Validate, APPLICATION_REF_FLAG,
        ENV_FLAG, FUNCTION_REF_FLAG, IMAGE_FLAG, ITEM_FLAG,
    },
    error::Result,
};

/// Request processor subcommands
#[derive(clap::Subcommand, Debug)]
pub enum RequestProcessorCommand {
    /// Create a request processor
    Create(RequestProcessorCreateOptions),
    /// Table listing of request processors
    List(ListOptions),
    /// Delete request processors
    Delete(DeleteOptions),
}

impl Validate for RequestProcessorCommand {
    fn validate(&self) -> FieldError {
        match self {
            Self::Create(opts) => opts.validate(),
            Self::List(opts) => opts.validate(),
            Self::Delete(opts) => opts.validate(),
        }
    }
}

impl RequestProcessorCommand {
    pub async fn run(&self, c: &Clientset, out: &mut impl Write) -> Result<()> {
        let client = c.request_v1alpha1();
        match self {
            Self::Create(opts) => opts.run(c, out).await,
            Self::List(opts) => {
                let api = match opts.namespace(c) {
                    Some(ns) => client.request_processors(ns),
                    None => client.all_request_processors(),
                };
                super::list(api, opts.all_namespaces, out).await
            }
            Self::Delete(opts) => {
                let ns = opts.namespace(c);
                super::delete(client.request_processors(ns), opts, ns, out).await
            }
        }
    }
}

/// Flags of `riff request-processor create`
#[derive(clap::Args, Debug, Default, Clone)]
pub struct RequestProcessorCreateOptions {
    #[command(flatten)]
    pub resource: ResourceOptions,

    /// Name of the processor item to create
    #[arg(long = "item-name", value_name = "name")]
    pub item_name: Option<String>,

    /// Container image to run
    #[arg(long, value_name = "image")]
    pub image: Option<String>,

    /// Name of the application whose latest image is run
    #[arg(long, value_name = "name")]
    pub application_ref: Option<String>,

    /// Name of the function whose latest image is run
    #[arg(long, value_name = "name")]
    pub function_ref: Option<String>,

    /// Environment variable for the container, as KEY=VALUE (may be repeated)
    #[arg(long, value_name = "KEY=VALUE")]
    pub env: Vec<String>,
}

impl Validate for RequestProcessorCreateOptions {
    fn validate(&self) -> FieldError {
        let mut errs = self.resource.validate();

        errs = match flag_value(&self.item_name) {
            None => errs.also(FieldError::missing_field(ITEM_FLAG)),
            Some(item) => errs.also(validation::k8s_name(item, ITEM_FLAG)),
        };

        // application-ref, function-ref and image are mutually exclusive
        let mut used = vec![];
        let mut unused = vec![];
        for (flag, value) in [
            (APPLICATION_REF_FLAG, &self.application_ref),
            (FUNCTION_REF_FLAG, &self.function_ref),
            (IMAGE_FLAG, &self.image),
        ] {
            if flag_value(value).is_some() {
                used.push(flag);
            } else {
                unused.push(flag);
            }
        }
        if used.is_empty() {
            errs = errs.also(FieldError::missing_one_of(&unused));
        } else if used.len() > 1 {
            errs = errs.also(FieldError::multiple_one_of(&used));
        }

        errs.also(validation::env_vars(&self.env, ENV_FLAG))
    }
}

impl RequestProcessorCreateOptions {
    /// Assemble the request processor described by validated options
    pub fn build(&self, namespace: &str) -> RequestProcessor {
        let mut container = Container::default();
        if let Some(image) = flag_value(&self.image) {
            container.image = Some(image.to_string());
        }
        if !self.env.is_empty() {
            container.env = Some(parsers::env_vars(&self.env));
        }

        // validation leaves at most one ref set
        let build = match (flag_value(&self.application_ref), flag_value(&self.function_ref)) {
            (Some(app), _) => Some(Build::application(app)),
            (None, Some(func)) => Some(Build::function(func)),
            (None, None) => None,
        };

        let mut processor = RequestProcessor::new(self.resource.name(), vec![RequestProcessorSpecItem {
            name: flag_value(&self.item_name).unwrap_or_default().to_string(),
            build,
            template: Some(PodSpec {
                containers: vec![container],
                ..PodSpec::default()
            }),
        }]);
        processor.metadata.namespace = Some(namespace.to_string());
        processor
    }

    pub async fn run(&self, c: &Clientset, out: &mut impl Write) -> Result<()> {
        let namespace = self.resource.namespace(c);
        let processor = self.build(namespace);
        info!(namespace, name = self.resource.name(), "creating request processor");
        let processor = c
            .request_v1alpha1()
            .request_processors(namespace)
            .create(&PostParams::default(), &processor)
            .await?;
        outln!(out, "Created request processor {:?}", processor.metadata.name.unwrap_or_default())
    }
}

impl Printable for RequestProcessor {
    const COLUMNS: &'static [&'static str] = &["ITEMS"];
    const NOUN: &'static str = "request processor";
    const NOUN_PLURAL: &'static str = "request processors";

    fn cells(&self) -> Vec<String> {
        let items: Vec<&str> = self.spec.iter().map(|item| item.name.as_str()).collect();
        vec![items.join(",")]
    }

    fn readiness(&self) -> Readiness {
        let conditions = self.status.as_ref().map(|s| s.conditions.as_slice()).unwrap_or_default();
        Readiness::from_conditions(conditions)
    }
}
