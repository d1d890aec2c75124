//! `gfb-unidi`: namespace check for the unidirectional installation.
//!
//! Fetches and logs the RDF service's namespace table; no instances are
//! written.
//!
//! **Usage:**
//! ```
//! gfb-unidi <NAMESPACE> <RDF_SERVER_HOST> <RDF_SERVER_PORT>
//! gfb-unidi http://ss.sdu.dk/test/grundstrup-unidi/20200727/# 127.0.0.1 8001
//! ```

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

/// Fetch and log the RDF service's namespace table.
#[derive(Parser)]
#[command(name = "gfb-unidi", about = "Fetch and log the RDF service's namespaces")]
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
    gfb_clients::execute(gfb_clients::unidi(&args.service))
}
