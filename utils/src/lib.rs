//! Shared utilities for the campaign service.

pub mod logging;

pub use logging::init_tracing;
