//! Store layer - expense state and the operations that update it
//!
//! The store sends requests through a [`Transport`](crate::network::Transport),
//! updates its state from the responses and publishes every change to
//! subscribers.

pub mod state;
pub mod expenses;

pub use state::ExpenseState;
pub use expenses::ExpenseStore;
