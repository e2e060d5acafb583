//! Orchestration of claim and proof-submission flows.

use crate::error::WorkflowError;
use karo_campaign::{CampaignBook, CampaignUpdate};
use karo_catalog::Catalog;
use karo_store::CampaignRecord;
use karo_types::{CampaignId, CampaignStatus, ProductId, ProofKind, ProofRef, UserId};
use karo_verification::{ProofVerifier, Verdict};
use rand::RngCore;
use std::collections::HashMap;
use std::sync::Mutex;

/// Failed attempts allowed per (campaign, proof kind) before the campaign
/// is rejected outright.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;

/// The result of one proof submission: the oracle's verdict plus the
/// campaign record as it stands afterwards. A `valid = false` verdict is a
/// normal outcome, not an error.
#[derive(Clone, Debug)]
pub struct SubmissionOutcome {
    pub verdict: Verdict,
    pub campaign: CampaignRecord,
}

/// Drives campaigns through the claim/verify lifecycle.
///
/// The verifier is a type parameter so the whole controller is statically
/// dispatched; swapping the vision gateway for a scripted double is a
/// construction-time choice.
pub struct SubmissionWorkflow<V: ProofVerifier> {
    catalog: Catalog,
    book: CampaignBook,
    verifier: V,
    max_attempts: u32,
    // Failure counters stay in controller memory on purpose: a failed
    // attempt must leave the stored record untouched.
    attempts: Mutex<HashMap<(CampaignId, ProofKind), u32>>,
}

impl<V: ProofVerifier> SubmissionWorkflow<V> {
    pub fn new(catalog: Catalog, book: CampaignBook, verifier: V) -> Self {
        Self {
            catalog,
            book,
            verifier,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            attempts: Mutex::new(HashMap::new()),
        }
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn book(&self) -> &CampaignBook {
        &self.book
    }

    pub fn verifier(&self) -> &V {
        &self.verifier
    }

    /// Claim an offer: reserve a catalog slot and open a campaign at the
    /// product's current rebate value.
    ///
    /// The slot is released again if the claim is refused (for example a
    /// duplicate), so a failed claim never burns inventory.
    pub fn claim_offer(
        &self,
        product_id: &ProductId,
        user_id: &UserId,
    ) -> Result<CampaignRecord, WorkflowError> {
        let product = self.catalog.reserve_slot(product_id)?;

        match self.book.claim(product_id, user_id, product.rebate) {
            Ok(record) => Ok(record),
            Err(e) => {
                // Surface the claim refusal; a failed release only loses a
                // slot, which is worth a log line but not the error.
                if let Err(release_err) = self.catalog.release_slot(product_id) {
                    tracing::error!(
                        product = %product_id,
                        error = %release_err,
                        "failed to release claim slot"
                    );
                }
                Err(e.into())
            }
        }
    }

    /// Submit a proof image for verification.
    ///
    /// The proof kind must match what the campaign currently expects: an
    /// order proof while `Claimed`, a review proof while `OrderVerified`.
    /// A valid verdict advances the campaign and persists the proof; an
    /// invalid one leaves the stored record untouched and surfaces the
    /// oracle's reason verbatim. Exhausting the attempt budget rejects the
    /// campaign.
    pub async fn submit_proof(
        &self,
        campaign_id: &CampaignId,
        kind: ProofKind,
        image: &[u8],
    ) -> Result<SubmissionOutcome, WorkflowError> {
        let campaign = self.book.get(campaign_id)?;
        if campaign.status.expected_proof() != Some(kind) {
            return Err(WorkflowError::InvalidState {
                status: campaign.status,
                kind,
            });
        }

        let product = self.catalog.get(&campaign.product_id)?;
        let verdict = self
            .verifier
            .verify(image, kind, &product.name, product.platform)
            .await;

        if verdict.valid {
            self.clear_attempts(campaign_id, kind);
            let (target, update) = match kind {
                ProofKind::Order => (
                    CampaignStatus::OrderVerified,
                    CampaignUpdate::order_accepted(new_proof_ref()),
                ),
                ProofKind::Review => (
                    CampaignStatus::Completed,
                    CampaignUpdate::review_accepted(new_proof_ref()),
                ),
            };
            let campaign = self.book.advance(campaign_id, target, update)?;
            return Ok(SubmissionOutcome { verdict, campaign });
        }

        let failures = self.record_failure(campaign_id, kind);
        tracing::info!(
            campaign = %campaign_id,
            %kind,
            failures,
            reason = %verdict.reason,
            "proof rejected"
        );

        if failures >= self.max_attempts {
            self.clear_attempts(campaign_id, kind);
            let campaign =
                self.book
                    .advance(campaign_id, CampaignStatus::Rejected, CampaignUpdate::none())?;
            tracing::warn!(campaign = %campaign_id, %kind, "attempt budget exhausted, campaign rejected");
            return Ok(SubmissionOutcome { verdict, campaign });
        }

        Ok(SubmissionOutcome { verdict, campaign })
    }

    fn record_failure(&self, campaign_id: &CampaignId, kind: ProofKind) -> u32 {
        let mut attempts = self.attempts.lock().unwrap();
        let count = attempts.entry((campaign_id.clone(), kind)).or_insert(0);
        *count += 1;
        *count
    }

    fn clear_attempts(&self, campaign_id: &CampaignId, kind: ProofKind) {
        self.attempts
            .lock()
            .unwrap()
            .remove(&(campaign_id.clone(), kind));
    }
}

/// `proof_` + 16 hex chars, same shape as campaign ids.
fn new_proof_ref() -> ProofRef {
    let mut bytes = [0u8; 8];
    rand::thread_rng().fill_bytes(&mut bytes);
    ProofRef::new(format!("proof_{}", hex::encode(bytes)))
}
