//! Idempotent upserts of typed instances and relationships.
//!
//! [`Model`] is the explicit context the procedures run in: the service to
//! talk to and the namespace table used to shorten returned node IRIs.
//! Each procedure issues its requests strictly in sequence; there is no
//! atomicity between the lookup and the insert, which is sound only for a
//! single non-concurrent caller.

use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::escape::EscapedLabel;
use crate::namespace::NamespaceTable;
use crate::request::{Pattern, SelectQuery, Term, Update};
use crate::service::RdfService;

/// `rdf:type` as used in requests.
pub const RDF_TYPE: &str = "rdf:type";
/// `rdf:label` as used in requests.
pub const RDF_LABEL: &str = "rdf:label";

/// Outcome of [`Model::ensure_instance`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnsuredInstance {
    /// Identifier to use as subject or object in later calls.
    pub id: Term,
    /// `true` if the node did not exist and an insert was issued.
    pub created: bool,
    /// `false` if the service reported the insert as unsuccessful.
    pub accepted: bool,
}

/// Outcome of [`Model::ensure_relationship`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnsuredRelationship {
    /// `true` if a delete of the previous objects was issued first.
    pub replaced: bool,
    /// `false` if the service reported any of the updates as unsuccessful.
    pub accepted: bool,
}

/// Upsert context over one service and one namespace table.
#[derive(Debug)]
pub struct Model<'a, S: ?Sized> {
    service: &'a S,
    namespaces: &'a NamespaceTable,
}

impl<'a, S: RdfService + ?Sized> Model<'a, S> {
    /// Creates a context.
    pub fn new(service: &'a S, namespaces: &'a NamespaceTable) -> Self {
        Self {
            service,
            namespaces,
        }
    }

    /// The namespace table in use.
    #[must_use]
    pub fn namespaces(&self) -> &NamespaceTable {
        self.namespaces
    }

    /// Returns the node typed `class` and labelled `label`, creating it as
    /// `{prefix}_{label}` if no such node exists.
    ///
    /// An existing node's IRI is shortened through the namespace table; if
    /// its namespace has no alias the long form is returned as a
    /// [`Term::Iri`] (and an error is logged).
    ///
    /// # Errors
    ///
    /// Propagates query/update failures, and [`Error::UnexpectedValue`] if the
    /// service returns a non-string node name.
    pub async fn ensure_instance(
        &self,
        prefix: &str,
        class: &Term,
        label: &EscapedLabel,
    ) -> Result<EnsuredInstance> {
        let query = SelectQuery::select("name")
            .filter(Pattern::new(
                Term::var("name"),
                Term::name(RDF_TYPE),
                class.clone(),
            ))
            .filter(Pattern::new(
                Term::var("name"),
                Term::name(RDF_LABEL),
                Term::literal(label.as_str()),
            ));
        let found = self.service.query(&query).await?;

        if let Some(value) = found.first() {
            let name = value
                .as_str()
                .ok_or_else(|| Error::UnexpectedValue(value.clone()))?;
            let id = self.namespaces.resolve(name);
            debug!(id = %id, label = %label.display(), "instance exists");
            return Ok(EnsuredInstance {
                id,
                created: false,
                accepted: true,
            });
        }

        let id = Term::name(format!("{}_{}", prefix, label));
        let update = Update::new()
            .insert(Pattern::new(id.clone(), Term::name(RDF_TYPE), class.clone()))
            .insert(Pattern::new(
                id.clone(),
                Term::name(RDF_LABEL),
                Term::literal(label.as_str()),
            ));
        let accepted = self.service.update(&update).await?;
        if accepted {
            info!(id = %id, class = %class, "created instance");
        } else {
            warn!(id = %id, class = %class, "service rejected instance insert");
        }
        Ok(EnsuredInstance {
            id,
            created: true,
            accepted,
        })
    }

    /// Asserts `subject predicate object`.
    ///
    /// With `exclusive`, every existing `subject predicate ?obj` triple is
    /// deleted first, so `object` ends up the only value. Otherwise the
    /// triple is only inserted; inserting a triple that already exists leaves
    /// the store unchanged.
    ///
    /// # Errors
    ///
    /// Propagates update failures. A `success: false` answer is not an error;
    /// it is reported through [`EnsuredRelationship::accepted`].
    pub async fn ensure_relationship(
        &self,
        subject: &Term,
        predicate: &Term,
        object: &Term,
        exclusive: bool,
    ) -> Result<EnsuredRelationship> {
        let mut accepted = true;

        if exclusive {
            let existing = Pattern::new(subject.clone(), predicate.clone(), Term::var("obj"));
            let clear = Update::new().delete(existing.clone()).filter(existing);
            accepted &= self.service.update(&clear).await?;
        }

        let assert = Update::new().insert(Pattern::new(
            subject.clone(),
            predicate.clone(),
            object.clone(),
        ));
        accepted &= self.service.update(&assert).await?;

        if !accepted {
            warn!(
                subject = %subject,
                predicate = %predicate,
                object = %object,
                "service rejected relationship update"
            );
        }
        Ok(EnsuredRelationship {
            replaced: exclusive,
            accepted,
        })
    }
}
