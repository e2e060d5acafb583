//! Scripted test doubles for deterministic workflow testing.
//!
//! The verification oracle is the one external dependency of the submission
//! workflow, so it is abstracted behind the [`ProofVerifier`] trait. This
//! crate provides a programmable implementation that:
//! - Returns a pre-scripted sequence of verdicts
//! - Records every call it receives
//! - Never touches the network
//!
//! Usage: swap the vision gateway for a [`ScriptedVerifier`] in tests.

pub mod verifier;

pub use verifier::{RecordedCall, ScriptedVerifier};
