//! HTTP client wrapper - executes API requests and classifies responses

use std::time::Instant;

use crate::messages::{ApiRequest, NetworkResponse};
use crate::models::HttpMethod;

/// Join the API base and a request path
pub fn endpoint_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Build a request from the given parameters
fn build_request(
    client: &reqwest::Client,
    base_url: &str,
    request: &ApiRequest,
) -> reqwest::RequestBuilder {
    let url = endpoint_url(base_url, &request.path);

    let mut req_builder = match request.method {
        HttpMethod::GET => client.get(&url),
        HttpMethod::POST => client.post(&url),
        HttpMethod::PATCH => client.patch(&url),
        HttpMethod::DELETE => client.delete(&url),
    };

    if !request.query.is_empty() {
        req_builder = req_builder.query(&request.query);
    }

    req_builder = req_builder.header("Accept", "application/json");

    if request.method.has_body() {
        if let Some(body) = &request.body {
            req_builder = req_builder.json(body);
        }
    }

    req_builder
}

/// Execute an API request and return the buffered response
pub async fn execute_request(
    client: &reqwest::Client,
    base_url: &str,
    request: ApiRequest,
) -> NetworkResponse {
    let start = Instant::now();
    let req_builder = build_request(client, base_url, &request);

    tracing::debug!(method = request.method.as_str(), path = %request.path, "Sending request");
    let result = req_builder.send().await;

    let response = match result {
        Ok(resp) => {
            let status = resp.status();
            match resp.text().await {
                Ok(body) if status.is_success() => NetworkResponse::Success {
                    status: status.as_u16(),
                    body,
                    time_ms: start.elapsed().as_millis() as u64,
                },
                Ok(_) => NetworkResponse::Error {
                    status: Some(status.as_u16()),
                    message: status.to_string(),
                    time_ms: start.elapsed().as_millis() as u64,
                },
                Err(e) => NetworkResponse::Error {
                    status: None,
                    message: format!("Error reading body: {}", e),
                    time_ms: start.elapsed().as_millis() as u64,
                },
            }
        }
        Err(e) => {
            let msg = if e.is_timeout() {
                format!("Request timed out: {}", e)
            } else if e.is_connect() {
                format!("Connection failed: {}", e)
            } else {
                format!("Request failed: {}", e)
            };
            NetworkResponse::Error {
                status: None,
                message: msg,
                time_ms: start.elapsed().as_millis() as u64,
            }
        }
    };

    tracing::info!(
        method = request.method.as_str(),
        path = %request.path,
        status = ?response.status(),
        time_ms = response.time_ms(),
        "Request completed"
    );
    response
}

/// Create an HTTP client with default configuration.
/// No request timeout is set here; the transport default applies.
pub fn create_client() -> reqwest::Client {
    reqwest::Client::builder()
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_url_trims_slashes() {
        assert_eq!(
            endpoint_url("http://localhost:3001/api/", "/expenses/3"),
            "http://localhost:3001/api/expenses/3"
        );
        assert_eq!(
            endpoint_url("http://localhost:3001/api", "expenses"),
            "http://localhost:3001/api/expenses"
        );
    }

    #[test]
    fn test_build_request_encodes_query() {
        let client = create_client();
        let request = ApiRequest::get("/expenses/search")
            .with_query(vec![("query".to_string(), "café & té".to_string())]);
        let built = build_request(&client, "http://localhost:3001/api", &request)
            .build()
            .unwrap();
        assert_eq!(built.method().as_str(), "GET");
        assert_eq!(built.url().path(), "/api/expenses/search");
        assert_eq!(built.url().query(), Some("query=caf%C3%A9+%26+t%C3%A9"));
    }

    #[test]
    fn test_build_request_attaches_json_body() {
        let client = create_client();
        let request =
            ApiRequest::patch("/expenses/3", &serde_json::json!({ "amount": 50.0 })).unwrap();
        let built = build_request(&client, "http://localhost:3001/api", &request)
            .build()
            .unwrap();
        assert_eq!(built.method().as_str(), "PATCH");
        let body = built.body().and_then(|b| b.as_bytes()).unwrap();
        assert_eq!(body, br#"{"amount":50.0}"#);
    }
}
