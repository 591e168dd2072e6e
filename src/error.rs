//! Error types for expense operations

use thiserror::Error;

use crate::constants::{
    MSG_CREATE_FAILED, MSG_DELETE_FAILED, MSG_GET_FAILED, MSG_LIST_FAILED, MSG_SEARCH_FAILED,
    MSG_UPDATE_FAILED,
};

/// What went wrong talking to the API
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Server answered with a non-2xx status
    #[error("[{method}] {path}: {message}")]
    Status {
        method: String,
        path: String,
        status: u16,
        message: String,
    },
    /// Connection, send or body-read failure
    #[error("{0}")]
    Transport(String),
    /// Request body could not be encoded
    #[error("Invalid request body: {0}")]
    Encode(String),
    /// Body was not the JSON shape we expected
    #[error("Invalid response: {0}")]
    Decode(String),
}

/// The six store operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    GetById,
    Create,
    Update,
    Delete,
    Search,
}

impl Operation {
    pub fn as_str(&self) -> &str {
        match self {
            Operation::List => "list",
            Operation::GetById => "get_by_id",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
            Operation::Search => "search",
        }
    }

    /// Message shown when the failure has none of its own
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Operation::List => MSG_LIST_FAILED,
            Operation::GetById => MSG_GET_FAILED,
            Operation::Create => MSG_CREATE_FAILED,
            Operation::Update => MSG_UPDATE_FAILED,
            Operation::Delete => MSG_DELETE_FAILED,
            Operation::Search => MSG_SEARCH_FAILED,
        }
    }
}

/// A failed store operation. All failures share this one kind; `message`
/// is what ends up in the store's `error` field.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ExpenseError {
    pub operation: Operation,
    pub message: String,
    #[source]
    pub source: ApiError,
}

impl ExpenseError {
    pub fn new(operation: Operation, source: ApiError) -> Self {
        let detail = source.to_string();
        let message = if detail.trim().is_empty() {
            operation.fallback_message().to_string()
        } else {
            detail
        };
        ExpenseError {
            operation,
            message,
            source,
        }
    }

    /// HTTP status, when the server answered at all
    pub fn status(&self) -> Option<u16> {
        match &self.source {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
