//! Idempotent population of heating-topology instances in a remote RDF store.
//!
//! The crate turns a declarative [`Topology`] into a sequence of
//! lookup-or-create requests against an [`RdfService`]:
//!
//! 1. [`builder::bootstrap`] fetches the namespace table once.
//! 2. [`Model::ensure_instance`] finds a node by `(rdf:type, rdf:label)` or
//!    inserts it as `{prefix}_{escaped label}`.
//! 3. [`Model::ensure_relationship`] inserts an edge, optionally deleting the
//!    subject's previous objects for that predicate first.
//! 4. The service is asked to store the result.
//!
//! Re-running against a populated store creates no new nodes and, since
//! triples are set-valued, no duplicate edges.
//!
//! # Example
//!
//! ```no_run
//! use gfb_instances::{builder, HttpRdfService, ServiceConfig, Topology};
//!
//! # async fn demo() -> gfb_instances::Result<()> {
//! let service = HttpRdfService::new(ServiceConfig::new("127.0.0.1", 8001));
//! let report = builder::run(
//!     &service,
//!     "http://ss.sdu.dk/test/grundstrup-bidi/20200727/#",
//!     &Topology::bidi(),
//! )
//! .await?;
//! println!("{} created, {} found", report.instances_created, report.instances_found);
//! # Ok(())
//! # }
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod builder;
pub mod config;
pub mod error;
pub mod escape;
pub mod model;
pub mod namespace;
pub mod request;
pub mod service;
pub mod topology;

pub use builder::BuildReport;
pub use config::ServiceConfig;
pub use error::{Error, Result};
pub use escape::{escape, unescape, EscapedLabel};
pub use model::{EnsuredInstance, EnsuredRelationship, Model};
pub use namespace::{NamespaceListing, NamespaceTable};
pub use request::{Pattern, SelectQuery, Term, Update};
pub use service::{HttpRdfService, RdfService, ResultSet};
pub use topology::{EdgeSpec, InstanceSpec, Topology};
