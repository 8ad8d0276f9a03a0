//! Ephemeral save store: handle -> compressed payload, expiring after a
//! fixed retention window.

pub mod store;

pub use store::SaveStore;
