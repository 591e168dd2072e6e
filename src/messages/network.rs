//! Network messages - communication between the store and the network layer

use serde::Serialize;

use crate::models::HttpMethod;

/// A request the store hands to the network layer.
/// `path` is relative to the configured API base.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        ApiRequest {
            method: HttpMethod::GET,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn delete(path: impl Into<String>) -> Self {
        ApiRequest {
            method: HttpMethod::DELETE,
            ..ApiRequest::get(path)
        }
    }

    /// POST with a JSON body
    pub fn post<B: Serialize>(path: impl Into<String>, body: &B) -> serde_json::Result<Self> {
        Ok(ApiRequest {
            method: HttpMethod::POST,
            body: Some(serde_json::to_value(body)?),
            ..ApiRequest::get(path)
        })
    }

    /// PATCH with a JSON body
    pub fn patch<B: Serialize>(path: impl Into<String>, body: &B) -> serde_json::Result<Self> {
        Ok(ApiRequest {
            method: HttpMethod::PATCH,
            body: Some(serde_json::to_value(body)?),
            ..ApiRequest::get(path)
        })
    }

    pub fn with_query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }
}

/// Responses sent from the network layer back to the store
#[derive(Debug, Clone, PartialEq)]
pub enum NetworkResponse {
    /// 2xx response with its raw body
    Success {
        status: u16,
        body: String,
        time_ms: u64,
    },
    /// Non-2xx status (`status` set) or transport failure (`status` empty)
    Error {
        status: Option<u16>,
        message: String,
        time_ms: u64,
    },
}

impl NetworkResponse {
    pub fn status(&self) -> Option<u16> {
        match self {
            NetworkResponse::Success { status, .. } => Some(*status),
            NetworkResponse::Error { status, .. } => *status,
        }
    }

    pub fn time_ms(&self) -> u64 {
        match self {
            NetworkResponse::Success { time_ms, .. } => *time_ms,
            NetworkResponse::Error { time_ms, .. } => *time_ms,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, NetworkResponse::Success { .. })
    }
}
