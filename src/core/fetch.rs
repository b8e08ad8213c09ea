//! HTTP fetch capability for ephe-dl
//!
//! The mirror logic talks to the network through the [`Fetch`] trait so
//! tests can substitute in-memory fakes. [`HttpFetch`] is the production
//! implementation backed by a shared reqwest client.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use once_cell::sync::Lazy;
use reqwest::{Client, ClientBuilder};

use crate::core::error::Result;

/// Global HTTP client with bounded timeouts
static GLOBAL_CLIENT: Lazy<Client> = Lazy::new(|| {
    ClientBuilder::new()
        .tcp_keepalive(Duration::from_secs(60))
        .pool_idle_timeout(Duration::from_secs(90))
        .timeout(Duration::from_secs(30))         // Overall request timeout
        .connect_timeout(Duration::from_secs(10)) // Connection timeout
        .user_agent(format!("ephe-dl/{}", env!("CARGO_PKG_VERSION")))
        .build()
        .expect("Failed to create HTTP client")
});

/// Outcome of a single GET request
#[derive(Debug, Clone, PartialEq)]
pub enum FetchResponse {
    /// Success status: the fully buffered response body
    Body(Bytes),
    /// Non-success status code; no body is retained
    HttpStatus(u16),
}

/// Replaceable GET capability used for both the listing page and the
/// per-file downloads
#[async_trait]
pub trait Fetch: Send + Sync {
    /// Issues a GET for `url`, buffering the whole body on success.
    ///
    /// Non-success HTTP statuses are a normal outcome here
    /// ([`FetchResponse::HttpStatus`]); `Err` is reserved for transport
    /// failures such as connect errors and timeouts.
    async fn get(&self, url: &str) -> Result<FetchResponse>;
}

/// Production [`Fetch`] implementation using the shared reqwest client
#[derive(Debug, Default)]
pub struct HttpFetch;

#[async_trait]
impl Fetch for HttpFetch {
    async fn get(&self, url: &str) -> Result<FetchResponse> {
        let response = GLOBAL_CLIENT.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Ok(FetchResponse::HttpStatus(status.as_u16()));
        }

        let body = response.bytes().await?;
        Ok(FetchResponse::Body(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_http_fetch_returns_body_on_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/sepl_18.se1"))
            .respond_with(
                ResponseTemplate::new(200).set_body_raw(b"binary".to_vec(), "application/octet-stream"),
            )
            .mount(&mock_server)
            .await;

        let base_uri = mock_server.uri();
        let url = format!("{base_uri}/sepl_18.se1");

        let fetched = HttpFetch.get(&url).await.unwrap();
        assert_eq!(fetched, FetchResponse::Body(Bytes::from_static(b"binary")));
    }

    #[tokio::test]
    async fn test_http_fetch_surfaces_status_code() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/missing.se1"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let base_uri = mock_server.uri();
        let url = format!("{base_uri}/missing.se1");

        let fetched = HttpFetch.get(&url).await.unwrap();
        assert_eq!(fetched, FetchResponse::HttpStatus(404));
    }

    #[tokio::test]
    async fn test_http_fetch_transport_failure_is_error() {
        // Unroutable port on localhost: connect should fail, not return a status
        let result = HttpFetch.get("http://127.0.0.1:1/listing/").await;
        assert!(result.is_err());
    }
}
