//! HTTP directory client.
//!
//! Fetches `GET {base}/contractors`, `/drivers` and `/vehicles`, each a JSON
//! array of `{"id": ..., "name": ...}`. Plain HTTP only; the backend sits
//! behind the console's own reverse proxy.

use crate::{Directory, LookupError, NamedRef, RefKind};
use http_body_util::{BodyExt, Empty};
use hyper::body::Bytes;
use hyper::Uri;
use hyper_util::client::legacy::{connect::HttpConnector, Client};
use hyper_util::rt::TokioExecutor;
use std::future::Future;
use std::time::Duration;

#[derive(Clone)]
pub struct HttpDirectory {
    base_url: String,
    timeout: Duration,
    client: Client<HttpConnector, Empty<Bytes>>,
}

impl std::fmt::Debug for HttpDirectory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpDirectory")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl HttpDirectory {
    /// `base_url` such as `http://127.0.0.1:9000/api`. A trailing slash is
    /// ignored.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, LookupError> {
        let base_url = base_url.trim_end_matches('/').to_string();
        base_url
            .parse::<Uri>()
            .map_err(|_| LookupError::InvalidUrl(base_url.clone()))?;

        Ok(Self {
            base_url,
            timeout,
            client: Client::builder(TokioExecutor::new()).build_http(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn fetch(&self, kind: RefKind) -> Result<Vec<NamedRef>, LookupError> {
        let url = format!("{}/{}", self.base_url, kind.path());
        let uri: Uri = url.parse().map_err(|_| LookupError::InvalidUrl(url.clone()))?;

        let response = self.client.get(uri).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status {
                status: status.as_u16(),
                path: kind.path(),
            });
        }

        let body = response.into_body().collect().await?.to_bytes();
        let entries: Vec<NamedRef> = serde_json::from_slice(&body)?;
        tracing::debug!(kind = %kind, count = entries.len(), "fetched directory list");
        Ok(entries)
    }
}

impl Directory for HttpDirectory {
    fn list(&self, kind: RefKind) -> impl Future<Output = Result<Vec<NamedRef>, LookupError>> + Send {
        async move {
            tokio::time::timeout(self.timeout, self.fetch(kind))
                .await
                .map_err(|_| LookupError::Timeout(self.timeout))?
        }
    }
}
