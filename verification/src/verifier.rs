//! The pluggable proof verifier seam.

use crate::verdict::Verdict;
use karo_types::{Platform, ProofKind};
use std::future::Future;

/// A pluggable verification oracle.
///
/// Implementations never fail: uncertainty of any kind is expressed as a
/// `valid = false` verdict. The hosted vision gateway is the production
/// implementation; [`StaticVerifier`] serves dev/offline mode.
pub trait ProofVerifier: Send + Sync {
    fn verify(
        &self,
        image: &[u8],
        kind: ProofKind,
        product_name: &str,
        platform: Platform,
    ) -> impl Future<Output = Verdict> + Send;
}

/// A verifier that always returns the same configured verdict.
///
/// Used when running without an inference endpoint (demo/offline mode) and
/// as a trivial test double.
#[derive(Clone, Debug)]
pub struct StaticVerifier {
    verdict: Verdict,
}

impl StaticVerifier {
    pub fn new(verdict: Verdict) -> Self {
        Self { verdict }
    }

    /// A verifier that approves everything.
    pub fn approving() -> Self {
        Self::new(Verdict::accept("offline mode: verification skipped"))
    }
}

impl ProofVerifier for StaticVerifier {
    fn verify(
        &self,
        _image: &[u8],
        _kind: ProofKind,
        _product_name: &str,
        _platform: Platform,
    ) -> impl Future<Output = Verdict> + Send {
        let verdict = self.verdict.clone();
        async move { verdict }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn static_verifier_returns_configured_verdict() {
        let verifier = StaticVerifier::new(Verdict::reject("no order ID visible"));
        let verdict = verifier
            .verify(b"img", ProofKind::Order, "Mouse", Platform::Amazon)
            .await;
        assert!(!verdict.valid);
        assert_eq!(verdict.reason, "no order ID visible");
    }
}
