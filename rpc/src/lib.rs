//! HTTP API for the campaign service.
//!
//! Serves the browser frontend:
//! - Catalog browsing
//! - Campaign claims and proof submission
//! - Claims history and wallet totals
//! - Payout settlement
//!
//! Failed proof verification is not an HTTP error: the response is a 200
//! whose body carries the oracle's verdict.

pub mod config;
pub mod error;
pub mod handlers;
pub mod server;

pub use config::{ConfigError, ServiceConfig};
pub use error::RpcError;
pub use server::{router, AppState, RpcServer};
