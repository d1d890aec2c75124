//! Shared plumbing for the `gfb-*` command-line clients: argument parsing,
//! logging setup, the async runtime, exit codes and the two networked runs.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::future::Future;
use std::path::Path;
use std::process::ExitCode;

use clap::{Args, Parser};
use gfb_instances::{builder, HttpRdfService, ServiceConfig, Topology};
use gfb_ontology::serializer::{ntriples, turtle};
use gfb_ontology::Schema;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// Process exit codes.
pub mod exit {
    /// Run completed, or was interrupted with Ctrl-C.
    pub const SUCCESS: u8 = 0;
    /// The async runtime could not be started.
    pub const RUNTIME: u8 = 1;
    /// Bad command line for the networked generators.
    pub const USAGE: u8 = 2;
    /// The namespace table could not be fetched.
    pub const BOOTSTRAP: u8 = 3;
    /// A request failed while populating or storing.
    pub const BUILD: u8 = 4;
    /// Bad command line or write failure for the schema emitter.
    pub const SCHEMA_FAILURE: u8 = 1;
}

/// Positional `NAMESPACE RDF_SERVER_HOST RDF_SERVER_PORT` arguments.
#[derive(Debug, Clone, Args)]
pub struct ServiceArgs {
    /// Instance namespace IRI, e.g. `http://ss.sdu.dk/test/grundstrup-bidi/20200727/#`.
    pub namespace: String,
    /// RDF service host.
    pub host: String,
    /// RDF service port.
    pub port: u16,
}

impl ServiceArgs {
    /// Service endpoint configuration.
    #[must_use]
    pub fn config(&self) -> ServiceConfig {
        ServiceConfig::new(self.host.clone(), self.port)
    }
}

/// Exit code for a failed parse: `SUCCESS` for `--help`/`--version`,
/// `usage` for a bad command line.
#[must_use]
pub fn usage_code(err: &clap::Error, usage: u8) -> u8 {
    if err.use_stderr() {
        usage
    } else {
        exit::SUCCESS
    }
}

/// Parses `P` from the process arguments.
///
/// # Errors
///
/// On a parse failure clap's message is printed and the exit code from
/// [`usage_code`] is returned.
pub fn parse_args<P: Parser>(usage: u8) -> Result<P, ExitCode> {
    P::try_parse().map_err(|err| {
        // Nothing is left to report to if the terminal is gone.
        let _ = err.print();
        ExitCode::from(usage_code(&err, usage))
    })
}

/// Installs the stdout subscriber. `RUST_LOG` overrides the default `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Single-threaded runtime the generators run on.
///
/// # Errors
///
/// Returns the I/O error if the runtime cannot be built.
pub fn runtime() -> std::io::Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
}

/// Runs `run` to completion on a fresh [`runtime`], or until Ctrl-C.
///
/// Returns [`exit::RUNTIME`] if the runtime cannot be started.
pub fn execute<F>(run: F) -> ExitCode
where
    F: Future<Output = u8>,
{
    match runtime() {
        Ok(rt) => ExitCode::from(rt.block_on(until_interrupted(run))),
        Err(err) => {
            error!(error = %err, "Unable to start async runtime");
            ExitCode::from(exit::RUNTIME)
        }
    }
}

/// Races `run` against Ctrl-C. An interrupt logs `Exiting ...` and yields
/// [`exit::SUCCESS`]; if the signal handler cannot be installed `run` keeps
/// going uninterrupted.
pub async fn until_interrupted<F>(run: F) -> u8
where
    F: Future<Output = u8>,
{
    tokio::select! {
        code = run => code,
        () = interrupted() => exit::SUCCESS,
    }
}

async fn interrupted() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Exiting ..."),
        Err(err) => {
            warn!(error = %err, "Unable to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    }
}

/// Populates the service with the bidi topology and stores it.
///
/// Returns [`exit::BOOTSTRAP`] if the namespace table cannot be fetched,
/// [`exit::BUILD`] if a later request fails, [`exit::SUCCESS`] otherwise.
pub async fn bidi(args: &ServiceArgs) -> u8 {
    let service = HttpRdfService::new(args.config());
    let namespaces = match builder::bootstrap(&service).await {
        Ok(table) => table,
        Err(err) => {
            error!(error = %err, "Unable to fetch namespaces");
            return exit::BOOTSTRAP;
        }
    };
    match builder::build(&service, &namespaces, &args.namespace, &Topology::bidi()).await {
        Ok(report) => {
            info!(
                created = report.instances_created,
                found = report.instances_found,
                edges = report.edges_asserted,
                replaced = report.edges_replaced,
                rejected = report.rejected_updates,
                "Model built"
            );
            for iri in &report.unresolved {
                info!(iri = %iri, "instance outside any registered namespace");
            }
            exit::SUCCESS
        }
        Err(err) => {
            error!(error = %err, "Model build failed");
            exit::BUILD
        }
    }
}

/// Fetches and logs the namespace table, then stops.
///
/// Returns [`exit::BOOTSTRAP`] if the table cannot be fetched.
pub async fn unidi(args: &ServiceArgs) -> u8 {
    let service = HttpRdfService::new(args.config());
    match builder::bootstrap(&service).await {
        Ok(namespaces) => {
            if !namespaces.contains(&args.namespace) {
                warn!(namespace = %args.namespace, "instance namespace has no registered alias");
            }
            info!("done");
            exit::SUCCESS
        }
        Err(err) => {
            error!(error = %err, "Unable to fetch namespaces");
            exit::BOOTSTRAP
        }
    }
}

/// Output format of the schema emitter, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaFormat {
    /// Turtle (the default).
    Turtle,
    /// N-Triples, for `*.nt`.
    NTriples,
}

impl SchemaFormat {
    /// `.nt` selects N-Triples; anything else is Turtle.
    #[must_use]
    pub fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("nt") => Self::NTriples,
            _ => Self::Turtle,
        }
    }

    /// Serializes `schema` in this format.
    #[must_use]
    pub fn render(self, schema: &Schema) -> String {
        let graph = schema.to_graph();
        match self {
            Self::Turtle => turtle::to_turtle(&graph),
            Self::NTriples => ntriples::to_ntriples(&graph),
        }
    }
}
