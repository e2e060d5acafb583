//! Fundamental types for the Karo rebate service.
//!
//! This crate defines the core types shared across every other crate in the
//! workspace: identifiers, rebate amounts, timestamps, platforms, and the
//! campaign/payout state enums with their transition rules.

pub mod amount;
pub mod error;
pub mod id;
pub mod platform;
pub mod proof;
pub mod state;
pub mod time;

pub use amount::RebateAmount;
pub use error::TypeError;
pub use id::{CampaignId, ProductId, UserId};
pub use platform::Platform;
pub use proof::{ProofKind, ProofRef};
pub use state::{CampaignStatus, PayoutStatus};
pub use time::Timestamp;
