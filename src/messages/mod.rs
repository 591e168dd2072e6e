//! Message types exchanged between the store and the network layer.

pub mod network;

pub use network::{ApiRequest, NetworkResponse};
