//! Campaign lifecycle management.
//!
//! The campaign book is the single mutation funnel for campaign records:
//! claiming creates a record, `advance` moves it along the permitted
//! transition table, and payout settlement closes it out. No other code
//! writes campaign state.

pub mod book;
pub mod error;

pub use book::{CampaignBook, CampaignUpdate};
pub use error::CampaignError;
