//! `gfb-schema`: writes the Grundfos heating ontology to a file.
//!
//! Turtle by default; N-Triples when the output path ends in `.nt`.
//!
//! **Usage:**
//! ```
//! gfb-schema <OUTPUT_FILE>
//! gfb-schema grundfos-bidi.ttl
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use gfb_clients::{exit, init_tracing, parse_args, SchemaFormat};
use gfb_ontology::Schema;
use tracing::{error, info};

/// Emit the Grundfos heating ontology.
#[derive(Parser)]
#[command(name = "gfb-schema", about = "Emit the Grundfos heating ontology")]
struct Args {
    /// Output file (`.nt` for N-Triples, Turtle otherwise).
    output: PathBuf,
}

fn write(args: &Args) -> Result<()> {
    let schema = Schema::grundfos();
    info!(
        classes = schema.classes.len(),
        properties = schema.properties.len(),
        "Generating ontology {}",
        schema.namespace.iri
    );
    let format = SchemaFormat::for_path(&args.output);
    let text = format.render(schema);
    fs::write(&args.output, text)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;
    info!(format = ?format, "Written: {}", args.output.display());
    Ok(())
}

fn main() -> ExitCode {
    let args: Args = match parse_args(exit::SCHEMA_FAILURE) {
        Ok(args) => args,
        Err(code) => return code,
    };
    init_tracing();
    match write(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{:#}", err);
            ExitCode::from(exit::SCHEMA_FAILURE)
        }
    }
}
