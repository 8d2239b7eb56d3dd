//! The riff subcommands
use std::{fmt::Debug, io::Write};

use kube::{
    api::{Api, DeleteParams, ListParams},
    Resource, ResourceExt,
};
use riff_client::Clientset;
use riff_core::{status::Readiness, FieldError};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::{
    cli::{outln, DeleteOptions, Table, Validate},
    error::{Error, Result},
};

pub mod application;
pub mod doctor;
pub mod function;
pub mod request_processor;
pub mod stream;

/// Top level riff commands
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Applications built from source into container images
    #[command(subcommand, visible_alias = "app")]
    Application(application::ApplicationCommand),

    /// Functions built from source into container images
    #[command(subcommand, visible_alias = "fn")]
    Function(function::FunctionCommand),

    /// Processors routing http requests to workloads
    #[command(subcommand, visible_alias = "rp")]
    RequestProcessor(request_processor::RequestProcessorCommand),

    /// Streams of messages hosted by a gateway provider
    #[command(subcommand)]
    Stream(stream::StreamCommand),

    /// Check that the riff api groups are installed in the cluster
    Doctor,
}

impl Validate for Command {
    fn validate(&self) -> FieldError {
        match self {
            Command::Application(cmd) => cmd.validate(),
            Command::Function(cmd) => cmd.validate(),
            Command::RequestProcessor(cmd) => cmd.validate(),
            Command::Stream(cmd) => cmd.validate(),
            Command::Doctor => FieldError::empty(),
        }
    }
}

impl Command {
    /// Run a validated command against the cluster, writing results to `out`
    pub async fn run<W: Write>(&self, c: &Clientset, out: &mut W) -> Result<()> {
        match self {
            Command::Application(cmd) => cmd.run(c, out).await,
            Command::Function(cmd) => cmd.run(c, out).await,
            Command::RequestProcessor(cmd) => cmd.run(c, out).await,
            Command::Stream(cmd) => cmd.run(c, out).await,
            Command::Doctor => doctor::run(c, out).await,
        }
    }
}

/// A riff resource that list and delete commands know how to present
pub trait Printable: Resource<DynamicType = ()> + Clone + DeserializeOwned + Debug {
    /// Human name of one resource, e.g. `request processor`
    const NOUN: &'static str;
    /// Human name of several resources
    const NOUN_PLURAL: &'static str;
    /// Headers of the columns shown between `NAME` and `STATUS`
    const COLUMNS: &'static [&'static str];

    /// Cells for [`Printable::COLUMNS`]
    fn cells(&self) -> Vec<String>;

    /// Summary of the resource's `Ready` condition
    fn readiness(&self) -> Readiness;
}

/// Print a table of every resource `api` can see
pub async fn list<K: Printable>(api: Api<K>, all_namespaces: bool, out: &mut impl Write) -> Result<()> {
    debug!(kind = K::NOUN, all_namespaces, "listing");
    let items = api.list(&ListParams::default()).await?.items;
    if items.is_empty() {
        return outln!(out, "No {} found.", K::NOUN_PLURAL);
    }

    let headers = all_namespaces
        .then_some("NAMESPACE")
        .into_iter()
        .chain(["NAME"])
        .chain(K::COLUMNS.iter().copied())
        .chain(["STATUS"]);
    let mut table = Table::new(headers);
    for item in &items {
        let mut row = vec![];
        if all_namespaces {
            row.push(item.namespace().unwrap_or_default());
        }
        row.push(item.name_any());
        row.extend(item.cells());
        row.push(item.readiness().to_string());
        table.row(row);
    }
    table.write_to(out).map_err(Error::Output)
}

/// Delete the resources named by `opts`, or all of them with `--all`
pub async fn delete<K: Printable>(
    api: Api<K>,
    opts: &DeleteOptions,
    namespace: &str,
    out: &mut impl Write,
) -> Result<()> {
    let dp = DeleteParams::default();
    if opts.all {
        info!(kind = K::NOUN, namespace, "deleting all");
        api.delete_collection(&dp, &ListParams::default()).await?;
        return outln!(out, "Deleted {} in namespace {:?}", K::NOUN_PLURAL, namespace);
    }
    for name in &opts.names {
        info!(kind = K::NOUN, namespace, name, "deleting");
        api.delete(name, &dp).await?;
        outln!(out, "Deleted {} {:?}", K::NOUN, name)?;
    }
    Ok(())
}
