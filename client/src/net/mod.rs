//! Networking modules for the explorer proxy API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` defines the client, its error type and endpoint paths; `transport`
//! is the browser `fetch` implementation behind the `Transport` seam.

pub mod api;
#[cfg(test)]
pub(crate) mod testing;
#[cfg(feature = "csr")]
pub mod transport;
