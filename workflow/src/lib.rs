//! The submission workflow controller.
//!
//! Ties together the catalog, the campaign book, and a proof verifier into
//! the two-phase claim/verify flow: claim an offer, prove the purchase,
//! prove the review, collect the rebate.

pub mod controller;
pub mod error;

pub use controller::{SubmissionOutcome, SubmissionWorkflow, DEFAULT_MAX_ATTEMPTS};
pub use error::WorkflowError;
