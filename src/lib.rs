//! # Gastos
//!
//! Client for an expense-tracking REST API with observable state.
//!
//! ## Features
//! - List expenses page by page, with free-text and category filters
//! - Fetch, create, patch and delete single expenses
//! - Free-text search
//! - Shared `loading` / `error` state plus the current page and selection,
//!   readable as snapshots or through a `watch` subscription
//!
//! ## Architecture
//! - Store layer - state and operations
//! - Network layer (Tokio + reqwest) - async HTTP execution

pub mod config;
pub mod constants;
pub mod error;
pub mod messages;
pub mod models;
pub mod network;
pub mod store;

// Re-export commonly used types
pub use config::ClientConfig;
pub use error::{ApiError, ExpenseError, Operation};
pub use messages::{ApiRequest, NetworkResponse};
pub use models::{
    Expense, ExpenseCreate, ExpenseUpdate, HttpMethod, PaginatedResponse, Pagination, QueryParams,
};
pub use network::{HttpTransport, Transport};
pub use store::{ExpenseState, ExpenseStore};
