//! Claims history and wallet arithmetic.
//!
//! A read-model over the campaign book: per-user claim listings joined with
//! their products, plus the pending/paid rebate totals shown in the wallet.

pub mod error;
pub mod ledger;

pub use error::WalletError;
pub use ledger::{Claim, WalletLedger, WalletSummary};
