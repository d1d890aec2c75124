//! Namespace table: full namespace IRI to short alias.
//!
//! Fetched once at startup and passed by reference to whatever needs to turn
//! long-form node IRIs returned by queries into prefixed names.

use std::collections::BTreeMap;

use serde::Deserialize;
use tracing::error;

use crate::request::Term;

/// Body of a `/namespaces` response.
#[derive(Debug, Clone, Deserialize)]
pub struct NamespaceListing {
    /// Whether the service could produce the listing.
    pub success: bool,
    /// Full namespace IRI to alias.
    #[serde(default)]
    pub namespaces: BTreeMap<String, String>,
}

/// Read-only mapping from full namespace IRI (including the trailing `#`) to
/// its registered alias.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamespaceTable {
    by_iri: BTreeMap<String, String>,
}

impl NamespaceTable {
    /// Builds a table from `(iri, alias)` pairs.
    pub fn new<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            by_iri: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Returns the alias registered for `iri`, if any.
    #[must_use]
    pub fn alias(&self, iri: &str) -> Option<&str> {
        self.by_iri.get(iri).map(String::as_str)
    }

    /// Returns `true` if `iri` has a registered alias.
    #[must_use]
    pub fn contains(&self, iri: &str) -> bool {
        self.by_iri.contains_key(iri)
    }

    /// Iterates `(iri, alias)` pairs in IRI order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.by_iri.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of registered namespaces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_iri.len()
    }

    /// Returns `true` if no namespaces are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_iri.is_empty()
    }

    /// Resolves a node name returned by a query.
    ///
    /// Names without a `#` are already in short form and come back as
    /// [`Term::Name`]. `{namespace}#{local}` becomes `alias:local` when the
    /// namespace has an alias. Otherwise the failure is logged and the name is
    /// returned unresolved as a [`Term::Iri`].
    #[must_use]
    pub fn resolve(&self, name: &str) -> Term {
        let Some((base, local)) = name.split_once('#') else {
            return Term::name(name);
        };
        if local.contains('#') {
            error!(entity = %name, "Unknown format of entity");
            return Term::iri(name);
        }
        let namespace = format!("{}#", base);
        match self.alias(&namespace) {
            Some(alias) => Term::name(format!("{}:{}", alias, local)),
            None => {
                error!(entity = %name, namespace = %namespace, "Namespace not defined for entity");
                Term::iri(name)
            }
        }
    }
}

impl From<NamespaceListing> for NamespaceTable {
    fn from(listing: NamespaceListing) -> Self {
        Self {
            by_iri: listing.namespaces,
        }
    }
}
