//! RDF service adapter.
//!
//! [`RdfService`] is the seam between the upsert procedures and the remote
//! store; [`HttpRdfService`] implements it over the service's HTTP surface:
//!
//! | Operation | Request | Success body |
//! |-----------|---------|--------------|
//! | namespaces | `POST /namespaces`, body `"dummy"` | `{"success": bool, "namespaces": {iri: alias}}` |
//! | query | `PUT /query`, body = JSON string of the query text | `{"resultset": [[value, ...], ...]}` |
//! | update | `POST /update`, body = JSON string of the update text | `{"success": bool}` |
//! | store | `POST /store`, body `"dummy"` | anything |
//!
//! Every call is a single round trip. Nothing is retried.

use async_trait::async_trait;
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::config::ServiceConfig;
use crate::error::{Error, Result};
use crate::namespace::NamespaceListing;
use crate::request::{SelectQuery, Update};

const DUMMY_BODY: &str = "\"dummy\"";

/// Rows of bound values returned by a query, in service order.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ResultSet {
    #[serde(rename = "resultset")]
    rows: Vec<Vec<Value>>,
}

impl ResultSet {
    /// Wraps already decoded rows.
    #[must_use]
    pub fn new(rows: Vec<Vec<Value>>) -> Self {
        Self { rows }
    }

    /// All rows.
    #[must_use]
    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    /// Returns `true` if nothing matched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The first value of the first row, if any.
    #[must_use]
    pub fn first(&self) -> Option<&Value> {
        self.rows.first().and_then(|row| row.first())
    }
}

#[derive(Debug, Deserialize)]
struct UpdateResponse {
    success: bool,
}

/// The operations the builder needs from an RDF store.
#[async_trait]
pub trait RdfService: Send + Sync {
    /// Fetches the registered namespace listing.
    ///
    /// # Errors
    ///
    /// Transport, non-200 status, or an undecodable body.
    async fn namespaces(&self) -> Result<NamespaceListing>;

    /// Runs a read query.
    ///
    /// # Errors
    ///
    /// Transport, non-200 status, or an undecodable body.
    async fn query(&self, query: &SelectQuery) -> Result<ResultSet>;

    /// Applies an update and returns the success flag the service reported.
    ///
    /// # Errors
    ///
    /// Transport, non-200 status, or a body without a boolean `success`.
    async fn update(&self, update: &Update) -> Result<bool>;

    /// Asks the service to persist its current state.
    ///
    /// # Errors
    ///
    /// Transport or non-200 status.
    async fn store(&self) -> Result<()>;
}

/// [`RdfService`] over HTTP.
#[derive(Debug, Clone)]
pub struct HttpRdfService {
    config: ServiceConfig,
    http: reqwest::Client,
}

impl HttpRdfService {
    /// Creates an adapter with a default client.
    #[must_use]
    pub fn new(config: ServiceConfig) -> Self {
        Self::with_client(config, reqwest::Client::new())
    }

    /// Creates an adapter sharing an existing client.
    #[must_use]
    pub fn with_client(config: ServiceConfig, http: reqwest::Client) -> Self {
        Self { config, http }
    }

    /// The endpoint configuration.
    #[must_use]
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    async fn send(&self, endpoint: &'static str, req: RequestBuilder) -> Result<String> {
        let resp = req
            .send()
            .await
            .map_err(|source| Error::Transport { endpoint, source })?;
        let status = resp.status().as_u16();
        let body = resp
            .text()
            .await
            .map_err(|source| Error::Transport { endpoint, source })?;
        if status != 200 {
            return Err(Error::Status {
                endpoint,
                status,
                body,
            });
        }
        Ok(body)
    }

    fn decode<T: DeserializeOwned>(endpoint: &'static str, body: String) -> Result<T> {
        match serde_json::from_str(&body) {
            Ok(value) => Ok(value),
            Err(source) => Err(Error::Payload {
                endpoint,
                body,
                source,
            }),
        }
    }

    /// The service expects request text wrapped as a JSON string.
    fn encode(text: String) -> String {
        Value::String(text).to_string()
    }
}

#[async_trait]
impl RdfService for HttpRdfService {
    async fn namespaces(&self) -> Result<NamespaceListing> {
        let url = self.config.endpoint("namespaces");
        debug!(url = %url, "fetching namespaces");
        let body = self
            .send("namespaces", self.http.post(&url).body(DUMMY_BODY))
            .await?;
        Self::decode("namespaces", body)
    }

    async fn query(&self, query: &SelectQuery) -> Result<ResultSet> {
        let url = self.config.endpoint("query");
        let text = query.to_string();
        debug!(url = %url, query = %text, "querying model");
        let body = self
            .send("query", self.http.put(&url).body(Self::encode(text)))
            .await?;
        Self::decode("query", body)
    }

    async fn update(&self, update: &Update) -> Result<bool> {
        let url = self.config.endpoint("update");
        let text = update.to_string();
        debug!(url = %url, update = %text, "updating model");
        let body = self
            .send("update", self.http.post(&url).body(Self::encode(text)))
            .await?;
        let response: UpdateResponse = Self::decode("update", body)?;
        info!(success = response.success, "Success of model update");
        Ok(response.success)
    }

    async fn store(&self) -> Result<()> {
        let url = self.config.endpoint("store");
        debug!(url = %url, "storing model");
        self.send("store", self.http.post(&url).body(DUMMY_BODY))
            .await?;
        info!("Successfully stored model");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::request::{Pattern, Term};
    use serde_json::json;
    use wiremock::matchers::{body_json, body_string, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn service(server: &MockServer) -> HttpRdfService {
        let addr = server.address();
        HttpRdfService::new(ServiceConfig::new(addr.ip().to_string(), addr.port()))
    }

    fn valve_query() -> SelectQuery {
        SelectQuery::select("name").filter(Pattern::new(
            Term::var("name"),
            Term::name("rdf:type"),
            Term::name("gfb:Valve"),
        ))
    }

    #[tokio::test]
    async fn namespaces_posts_dummy_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/namespaces"))
            .and(body_string("\"dummy\""))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "namespaces": {"http://example.org/ns#": "ex"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let listing = service(&server).namespaces().await.unwrap();
        assert!(listing.success);
        assert_eq!(listing.namespaces["http://example.org/ns#"], "ex");
    }

    #[tokio::test]
    async fn query_puts_json_encoded_text() {
        let server = MockServer::start().await;
        let query = valve_query();
        Mock::given(method("PUT"))
            .and(path("/query"))
            .and(body_json(json!(query.to_string())))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "resultset": [["http://example.org/ns#valve"]]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let rs = service(&server).query(&query).await.unwrap();
        assert_eq!(rs.first(), Some(&json!("http://example.org/ns#valve")));
    }

    #[tokio::test]
    async fn query_failure_status_is_typed() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/query"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let err = service(&server).query(&valve_query()).await.unwrap_err();
        assert!(matches!(
            err,
            Error::Status { endpoint: "query", status: 500, ref body } if body == "boom"
        ));
    }

    #[tokio::test]
    async fn query_garbage_body_is_payload_error() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/query"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = service(&server).query(&valve_query()).await.unwrap_err();
        assert!(matches!(err, Error::Payload { endpoint: "query", .. }));
    }

    #[tokio::test]
    async fn update_reports_service_flag() {
        let server = MockServer::start().await;
        let update = Update::new().insert(Pattern::new(
            Term::name("n:_a"),
            Term::name("gfb:controls"),
            Term::name("n:_b"),
        ));
        Mock::given(method("POST"))
            .and(path("/update"))
            .and(body_json(json!(update.to_string())))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": false})))
            .expect(1)
            .mount(&server)
            .await;

        assert!(!service(&server).update(&update).await.unwrap());
    }

    #[tokio::test]
    async fn update_without_success_flag_is_payload_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/update"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
            .mount(&server)
            .await;

        let err = service(&server).update(&Update::new()).await.unwrap_err();
        assert!(matches!(err, Error::Payload { endpoint: "update", .. }));
    }

    #[tokio::test]
    async fn store_accepts_any_ok_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/store"))
            .and(body_string("\"dummy\""))
            .respond_with(ResponseTemplate::new(200).set_body_string("whatever"))
            .expect(1)
            .mount(&server)
            .await;

        service(&server).store().await.unwrap();
    }

    #[tokio::test]
    async fn unreachable_service_is_transport_error() {
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let config = ServiceConfig::new("127.0.0.1", port);

        let err = HttpRdfService::new(config).store().await.unwrap_err();
        assert!(matches!(err, Error::Transport { endpoint: "store", .. }));
    }
}
