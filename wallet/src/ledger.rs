//! The wallet read-model.

use crate::error::WalletError;
use karo_campaign::CampaignBook;
use karo_catalog::{Catalog, CatalogError};
use karo_store::{CampaignRecord, ProductRecord};
use karo_types::{CampaignId, CampaignStatus, PayoutStatus, RebateAmount, UserId};
use serde::Serialize;

/// One claim in the user's history: the campaign joined with its product.
#[derive(Clone, Debug, Serialize)]
pub struct Claim {
    pub campaign: CampaignRecord,
    pub product: ProductRecord,
    /// Position along the claim → payout pipeline, for the progress bar.
    pub progress_percent: u8,
}

/// Rebate totals shown in the wallet header.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct WalletSummary {
    pub pending_total: RebateAmount,
    pub paid_total: RebateAmount,
}

/// Per-user view over the campaign book.
#[derive(Clone)]
pub struct WalletLedger {
    book: CampaignBook,
    catalog: Catalog,
}

impl WalletLedger {
    pub fn new(book: CampaignBook, catalog: Catalog) -> Self {
        Self { book, catalog }
    }

    /// All of a user's claims, newest activity first. Campaigns whose
    /// product no longer exists in the catalog are dropped from the view.
    pub fn list_claims(&self, user_id: &UserId) -> Result<Vec<Claim>, WalletError> {
        let mut claims = Vec::new();
        for campaign in self.book.user_campaigns(user_id)? {
            match self.catalog.get(&campaign.product_id) {
                Ok(product) => {
                    let progress_percent = campaign.status.progress_percent();
                    claims.push(Claim {
                        campaign,
                        product,
                        progress_percent,
                    });
                }
                Err(CatalogError::NotFound(_)) => continue,
                Err(e) => return Err(e.into()),
            }
        }
        claims.sort_by(|a, b| b.campaign.updated_at.cmp(&a.campaign.updated_at));
        Ok(claims)
    }

    /// Pending and paid rebate totals for a user.
    ///
    /// A rejected campaign forfeits its rebate, so it never counts toward
    /// the pending balance even though its payout status was never settled.
    pub fn summary(&self, user_id: &UserId) -> Result<WalletSummary, WalletError> {
        let mut pending = RebateAmount::new(0);
        let mut paid = RebateAmount::new(0);

        for campaign in self.book.user_campaigns(user_id)? {
            let Some(amount) = campaign.payout_amount else {
                continue;
            };
            if campaign.payout_status.is_outstanding() {
                if campaign.status != CampaignStatus::Rejected {
                    pending = pending.saturating_add(amount);
                }
            } else if campaign.payout_status == PayoutStatus::Paid {
                paid = paid.saturating_add(amount);
            }
        }

        Ok(WalletSummary {
            pending_total: pending,
            paid_total: paid,
        })
    }

    /// Settle a processing payout. Delegates to the campaign book, which
    /// enforces that the campaign is completed and the payout in flight.
    pub fn settle_payout(&self, id: &CampaignId) -> Result<CampaignRecord, WalletError> {
        Ok(self.book.settle_payout(id)?)
    }
}
