//! Error types for RDF service calls and topology interpretation.

use thiserror::Error;

/// Errors from talking to the RDF service or interpreting a topology.
#[derive(Debug, Error)]
pub enum Error {
    /// The request could not be sent or its body could not be read.
    #[error("Transport error on /{endpoint}: {source}")]
    Transport {
        /// Endpoint name, e.g. `query`.
        endpoint: &'static str,
        /// Underlying client error.
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a non-200 status.
    #[error("/{endpoint} failed with status {status}: {body}")]
    Status {
        /// Endpoint name.
        endpoint: &'static str,
        /// HTTP status code.
        status: u16,
        /// Response body text, possibly empty.
        body: String,
    },

    /// The service answered 200 but the body is not the expected JSON shape.
    #[error("Malformed /{endpoint} response ({source}): {body}")]
    Payload {
        /// Endpoint name.
        endpoint: &'static str,
        /// Body text as received.
        body: String,
        /// Underlying decode error.
        #[source]
        source: serde_json::Error,
    },

    /// `/namespaces` answered with `success: false`.
    #[error("Namespace lookup was rejected by the service")]
    NamespacesRejected,

    /// A query result cell that should name a node is not a string.
    #[error("Expected a node name in query result, found {0}")]
    UnexpectedValue(serde_json::Value),

    /// An edge references an instance key the topology does not declare.
    #[error("Edge {subject} {predicate} {object} references undeclared instance '{key}'")]
    UnknownInstance {
        /// Edge subject key.
        subject: String,
        /// Edge predicate.
        predicate: String,
        /// Edge object key.
        object: String,
        /// The key that failed to resolve.
        key: String,
    },

    /// Two instances in one topology share a key.
    #[error("Instance key '{0}' is declared more than once")]
    DuplicateInstance(String),
}

/// Crate-local result alias.
pub type Result<T> = std::result::Result<T, Error>;
