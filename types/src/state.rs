//! Campaign and payout state enums with their transition rules.

use crate::ProofKind;
use serde::{Deserialize, Serialize};

/// Lifecycle status of a rebate campaign.
///
/// Progression is strictly forward along the permitted-successor table;
/// the only non-forward edge is the explicit `Rejected` branch. The
/// `OrderSubmitted`/`ReviewSubmitted` markers exist for deployments that
/// decouple evidence upload from verification — when verification is
/// synchronous with upload they are skipped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CampaignStatus {
    /// Offer visible but not yet claimed. Never persisted.
    Available,
    /// User claimed the offer; awaiting order proof.
    Claimed,
    /// Order proof uploaded, verification pending.
    OrderSubmitted,
    /// Order proof accepted by the verification oracle.
    OrderVerified,
    /// Review proof uploaded, verification pending.
    ReviewSubmitted,
    /// Both proofs accepted — payout can begin.
    Completed,
    /// Campaign rejected; terminal, retained for audit.
    Rejected,
}

impl CampaignStatus {
    /// Whether `target` is a permitted successor of this status.
    pub fn can_advance_to(&self, target: CampaignStatus) -> bool {
        use CampaignStatus::*;
        matches!(
            (self, target),
            (Available, Claimed)
                | (Claimed, OrderSubmitted)
                | (Claimed, OrderVerified)
                | (Claimed, Rejected)
                | (OrderSubmitted, OrderVerified)
                | (OrderSubmitted, Rejected)
                | (OrderVerified, ReviewSubmitted)
                | (OrderVerified, Completed)
                | (OrderVerified, Rejected)
                | (ReviewSubmitted, Completed)
                | (ReviewSubmitted, Rejected)
        )
    }

    /// Whether no further transitions are permitted.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Rejected)
    }

    /// The proof kind this status is waiting for, if any.
    pub fn expected_proof(&self) -> Option<ProofKind> {
        match self {
            Self::Claimed => Some(ProofKind::Order),
            Self::OrderVerified => Some(ProofKind::Review),
            _ => None,
        }
    }

    /// Position along the claim → payout pipeline, for progress displays.
    pub fn progress_percent(&self) -> u8 {
        match self {
            Self::Available => 0,
            Self::Claimed | Self::OrderSubmitted => 33,
            Self::OrderVerified | Self::ReviewSubmitted => 66,
            Self::Completed => 100,
            Self::Rejected => 100,
        }
    }

    /// Ordinal along the forward pipeline. `Rejected` sits above every
    /// non-terminal state so that all permitted transitions are increasing.
    pub fn ordinal(&self) -> u8 {
        match self {
            Self::Available => 0,
            Self::Claimed => 1,
            Self::OrderSubmitted => 2,
            Self::OrderVerified => 3,
            Self::ReviewSubmitted => 4,
            Self::Completed => 5,
            Self::Rejected => 6,
        }
    }
}

/// Lifecycle of the cashback payout, causally downstream of the campaign
/// status: payout cannot start before the campaign is `Completed`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PayoutStatus {
    /// Owed but not yet initiated.
    Pending,
    /// Transfer initiated, awaiting settlement.
    Processing,
    /// Settled to the user.
    Paid,
    /// Transfer failed; needs operator attention.
    Failed,
}

impl PayoutStatus {
    /// Whether this payout still counts toward the user's pending balance.
    pub fn is_outstanding(&self) -> bool {
        matches!(self, Self::Pending | Self::Processing)
    }
}
