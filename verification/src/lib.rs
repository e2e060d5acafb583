//! Screenshot verification against a hosted vision model.
//!
//! The gateway sends an uploaded proof image plus a templated instruction to
//! a multimodal inference endpoint and returns a structured [`Verdict`].
//!
//! The design is fail-closed: transport errors, malformed responses, and
//! timeouts all come back as `valid = false` verdicts — callers always
//! receive a verdict value, never an error. Uncertain or unreachable
//! verification must never advance a payout-bearing transition.

pub mod error;
pub mod gateway;
pub mod prompt;
pub mod verdict;
pub mod verifier;

pub use error::GatewayError;
pub use gateway::{VisionGateway, VisionGatewayConfig, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS};
pub use verdict::Verdict;
pub use verifier::{ProofVerifier, StaticVerifier};
