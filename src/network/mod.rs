//! Network layer - HTTP request execution
//!
//! The store hands [`ApiRequest`](crate::messages::ApiRequest)s to a
//! [`Transport`] and gets [`NetworkResponse`](crate::messages::NetworkResponse)s back.

pub mod client;
pub mod transport;

pub use transport::{HttpTransport, Transport};
