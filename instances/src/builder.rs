//! The instance builder: namespace bootstrap, topology population, store.

use std::collections::HashMap;

use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::escape::EscapedLabel;
use crate::model::Model;
use crate::namespace::NamespaceTable;
use crate::request::Term;
use crate::service::RdfService;
use crate::topology::Topology;

/// What a [`populate`] run did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// Instances inserted by this run.
    pub instances_created: usize,
    /// Instances that already existed.
    pub instances_found: usize,
    /// Existing instances whose namespace had no alias.
    pub unresolved: Vec<String>,
    /// Edges asserted (every edge is asserted on every run).
    pub edges_asserted: usize,
    /// Edges whose previous objects were deleted first.
    pub edges_replaced: usize,
    /// Updates the service answered with `success: false`.
    pub rejected_updates: usize,
}

/// Fetches the namespace table and logs its entries.
///
/// # Errors
///
/// Propagates the request error, or [`Error::NamespacesRejected`] if the
/// service reports the lookup as unsuccessful.
pub async fn bootstrap<S: RdfService + ?Sized>(service: &S) -> Result<NamespaceTable> {
    info!("Loading namespaces");
    let listing = service.namespaces().await?;
    if !listing.success {
        return Err(Error::NamespacesRejected);
    }
    let table = NamespaceTable::from(listing);
    for (iri, alias) in table.iter() {
        info!("- {} : {}", alias, iri);
    }
    Ok(table)
}

/// Ensures every instance of `topology`, then every edge.
///
/// # Errors
///
/// Topology validation errors before any request is made; afterwards the
/// first request error, which stops the run where it is.
pub async fn populate<S: RdfService + ?Sized>(
    model: &Model<'_, S>,
    topology: &Topology,
) -> Result<BuildReport> {
    topology.validate()?;
    let mut report = BuildReport::default();
    let mut ids: HashMap<&str, Term> = HashMap::with_capacity(topology.instances.len());

    for spec in topology.instances {
        let label = EscapedLabel::new(spec.label);
        let ensured = model
            .ensure_instance(topology.prefix, &Term::name(spec.class), &label)
            .await?;
        if ensured.created {
            report.instances_created += 1;
        } else {
            report.instances_found += 1;
        }
        if !ensured.accepted {
            report.rejected_updates += 1;
        }
        if let Term::Iri(iri) = &ensured.id {
            report.unresolved.push(iri.clone());
        }
        ids.insert(spec.label, ensured.id);
    }

    for edge in topology.edges {
        let lookup = |key: &str| {
            ids.get(key).ok_or_else(|| Error::UnknownInstance {
                subject: edge.subject.to_owned(),
                predicate: edge.predicate.to_owned(),
                object: edge.object.to_owned(),
                key: key.to_owned(),
            })
        };
        let subject = lookup(edge.subject)?;
        let object = lookup(edge.object)?;
        let ensured = model
            .ensure_relationship(subject, &Term::name(edge.predicate), object, edge.exclusive)
            .await?;
        report.edges_asserted += 1;
        if ensured.replaced {
            report.edges_replaced += 1;
        }
        if !ensured.accepted {
            report.rejected_updates += 1;
        }
    }

    Ok(report)
}

/// Populates `topology` using an already bootstrapped namespace table, then
/// asks the service to store the result.
///
/// `namespace` is the instance namespace the caller expects; a warning is
/// logged if the table has no alias for it.
///
/// # Errors
///
/// Any error from [`populate`] or the final store.
pub async fn build<S: RdfService + ?Sized>(
    service: &S,
    namespaces: &NamespaceTable,
    namespace: &str,
    topology: &Topology,
) -> Result<BuildReport> {
    if !namespaces.contains(namespace) {
        warn!(namespace = %namespace, "instance namespace has no registered alias");
    }
    let model = Model::new(service, namespaces);
    let report = populate(&model, topology).await?;
    service.store().await?;
    Ok(report)
}

/// [`bootstrap`] followed by [`build`].
///
/// # Errors
///
/// Any error from either step.
pub async fn run<S: RdfService + ?Sized>(
    service: &S,
    namespace: &str,
    topology: &Topology,
) -> Result<BuildReport> {
    let namespaces = bootstrap(service).await?;
    build(service, &namespaces, namespace, topology).await
}
