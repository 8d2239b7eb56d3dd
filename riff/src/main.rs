//! `riff`: a command line client for the riff FaaS platform
//!
//! Every command validates its flags before touching the cluster, so a usage
//! mistake is reported without needing a kubeconfig. Only then is the cluster
//! configuration loaded and the command run against the api server.
//!
//! Set `RUST_LOG` (e.g. `RUST_LOG=riff=debug,kube=debug`) to see what is sent.
use std::{
    io::{self, Write},
    process::ExitCode,
};

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod error;

use cli::{validate_options, Config};
use commands::Command;
use error::Result;

#[derive(Parser, Debug)]
#[command(name = "riff", version, about, propagate_version = true)]
struct Riff {
    #[command(flatten)]
    config: Config,

    #[command(subcommand)]
    command: Command,
}

async fn run(riff: &Riff, out: &mut impl Write) -> Result<()> {
    validate_options(&riff.command)?;
    let clientset = riff.config.clientset().await?;
    riff.command.run(&clientset, out).await
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let riff = Riff::parse();
    match run(&riff, &mut io::stdout().lock()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Riff::command().debug_assert();
    }

    #[test]
    fn parses_request_processor_create() {
        let riff = Riff::try_parse_from([
            "riff",
            "request-processor",
            "create",
            "square",
            "--item-name",
            "main",
            "--function-ref",
            "square",
            "--env",
            "MODE=fast",
            "--env",
            "EMPTY=",
            "-n",
            "dev",
        ])
        .unwrap();
        let Command::RequestProcessor(commands::request_processor::RequestProcessorCommand::Create(opts)) =
            &riff.command
        else {
            panic!("unexpected command {:?}", riff.command);
        };
        assert_eq!(opts.resource.name.as_deref(), Some("square"));
        assert_eq!(opts.resource.namespace.as_deref(), Some("dev"));
        assert_eq!(opts.function_ref.as_deref(), Some("square"));
        assert_eq!(opts.env, vec!["MODE=fast", "EMPTY="]);
    }

    #[test]
    fn global_flags_follow_subcommands() {
        let riff = Riff::try_parse_from(["riff", "fn", "list", "--all-namespaces", "--context", "kind-riff"]).unwrap();
        assert_eq!(riff.config.context.as_deref(), Some("kind-riff"));
        assert!(matches!(riff.command, Command::Function(_)));
    }

    #[tokio::test]
    async fn validation_fails_before_config_is_loaded() {
        let riff = Riff::try_parse_from([
            "riff",
            "--kubeconfig",
            "/nonexistent/riff/kubeconfig",
            "rp",
            "create",
            "square",
            "--item-name",
            "main",
        ])
        .unwrap();
        let mut out = vec![];
        let err = run(&riff, &mut out).await.unwrap_err();
        assert!(matches!(err, Error::Validation(_)), "unexpected error {err:?}");
        assert_eq!(
            err.to_string(),
            "expected exactly one, got neither: --application-ref, --function-ref, --image"
        );
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn valid_options_reach_config_loading() {
        let riff = Riff::try_parse_from([
            "riff",
            "--kubeconfig",
            "/nonexistent/riff/kubeconfig",
            "stream",
            "create",
            "letters",
            "--provider",
            "franz",
        ])
        .unwrap();
        let err = run(&riff, &mut vec![]).await.unwrap_err();
        assert!(matches!(err, Error::Kubeconfig(_)), "unexpected error {err:?}");
    }
}
