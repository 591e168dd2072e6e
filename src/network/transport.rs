//! Transport seam between the store and the wire

use std::future::Future;

use crate::messages::{ApiRequest, NetworkResponse};
use crate::network::client::{create_client, execute_request};

/// Something that can carry an [`ApiRequest`] to the API and bring back a
/// [`NetworkResponse`]. Failures are values, never panics.
pub trait Transport: Send + Sync {
    fn execute(&self, request: ApiRequest) -> impl Future<Output = NetworkResponse> + Send;
}

/// reqwest-backed transport against a fixed API base URL
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        HttpTransport {
            client: create_client(),
            base_url: base_url.into(),
        }
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        HttpTransport {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Transport for HttpTransport {
    fn execute(&self, request: ApiRequest) -> impl Future<Output = NetworkResponse> + Send {
        execute_request(&self.client, &self.base_url, request)
    }
}
