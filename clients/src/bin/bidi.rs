//! `gfb-bidi`: populates an RDF service with the Grundstrup bidirectional
//! district-heating installation.
//!
//! Fetches the service's namespace table, ensures every instance and edge of
//! the bidi topology, then asks the service to store the model. Safe to re-run.
//!
//! **Usage:**
//! ```
//! gfb-bidi <NAMESPACE> <RDF_SERVER_HOST> <RDF_SERVER_PORT>
//! gfb-bidi http://ss.sdu.dk/test/grundstrup-bidi/20200727/# 127.0.0.1 8001
//! ```
//!
//! Exit codes: 0 on success or Ctrl-C, 1 if the runtime cannot start, 2 on a
//! bad command line, 3 if the namespace table cannot be fetched, 4 if a later
//! request fails.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::process::ExitCode;

use clap::Parser;
use gfb_clients::{exit, init_tracing, parse_args, ServiceArgs};

/// Populate an RDF service with the Grundstrup bidi topology.
#[derive(Parser)]
#[command(name = "gfb-bidi", about = "Populate an RDF service with the bidi topology")]
struct Args {
    #[command(flatten)]
    service: ServiceArgs,
}

fn main() -> ExitCode {
    let args: Args = match parse_args(exit::USAGE) {
        Ok(args) => args,
        Err(code) => return code,
    };
    init_tracing();
    gfb_clients::execute(gfb_clients::bidi(&args.service))
}
