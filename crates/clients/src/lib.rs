//! Clients ("clientes") module.
//!
//! Client records are keyed by a validated RUT. Storage is an in-memory
//! registry; there is no persistence behind it.

pub mod client;
pub mod registry;

pub use client::{Client, NewClient};
pub use registry::ClientRegistry;
