//! A programmable [`ProofVerifier`] for workflow tests.

use karo_types::{Platform, ProofKind};
use karo_verification::{ProofVerifier, Verdict};
use std::collections::VecDeque;
use std::future::Future;
use std::sync::Mutex;

/// One observed verification request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordedCall {
    pub kind: ProofKind,
    pub product_name: String,
    pub platform: Platform,
    pub image_len: usize,
}

/// A verifier that replays a scripted queue of verdicts and logs every call.
///
/// When the queue runs dry it keeps returning the last scripted verdict, so
/// a single-entry script behaves like a constant verifier. The call log lets
/// tests assert how many oracle round-trips a flow actually performed.
pub struct ScriptedVerifier {
    script: Mutex<VecDeque<Verdict>>,
    last: Mutex<Verdict>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedVerifier {
    pub fn new(verdicts: impl IntoIterator<Item = Verdict>) -> Self {
        let mut script: VecDeque<Verdict> = verdicts.into_iter().collect();
        let last = script
            .pop_front()
            .map(|first| {
                script.push_front(first.clone());
                first
            })
            .unwrap_or_else(Verdict::unavailable);
        Self {
            script: Mutex::new(script),
            last: Mutex::new(last),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// A verifier that accepts every proof.
    pub fn always_valid() -> Self {
        Self::new([Verdict::accept("looks good")])
    }

    /// A verifier that rejects every proof with the given reason.
    pub fn always_invalid(reason: impl Into<String>) -> Self {
        Self::new([Verdict::reject(reason)])
    }

    /// Number of verification calls received so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Snapshot of every call received so far, in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    fn next_verdict(&self) -> Verdict {
        let mut script = self.script.lock().unwrap();
        match script.pop_front() {
            Some(verdict) => {
                *self.last.lock().unwrap() = verdict.clone();
                verdict
            }
            None => self.last.lock().unwrap().clone(),
        }
    }
}

impl ProofVerifier for ScriptedVerifier {
    fn verify(
        &self,
        image: &[u8],
        kind: ProofKind,
        product_name: &str,
        platform: Platform,
    ) -> impl Future<Output = Verdict> + Send {
        self.calls.lock().unwrap().push(RecordedCall {
            kind,
            product_name: product_name.to_string(),
            platform,
            image_len: image.len(),
        });
        let verdict = self.next_verdict();
        async move { verdict }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn replays_script_then_repeats_last_verdict() {
        let verifier = ScriptedVerifier::new([
            Verdict::reject("blurry"),
            Verdict::accept("ok"),
        ]);

        let first = verifier
            .verify(b"a", ProofKind::Order, "Mouse", Platform::Amazon)
            .await;
        let second = verifier
            .verify(b"b", ProofKind::Order, "Mouse", Platform::Amazon)
            .await;
        let third = verifier
            .verify(b"c", ProofKind::Review, "Mouse", Platform::Amazon)
            .await;

        assert!(!first.valid);
        assert!(second.valid);
        assert!(third.valid);
        assert_eq!(verifier.call_count(), 3);
    }

    #[tokio::test]
    async fn records_call_details() {
        let verifier = ScriptedVerifier::always_valid();
        verifier
            .verify(b"bytes", ProofKind::Review, "Vitamin C Serum", Platform::Shopify)
            .await;

        let calls = verifier.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].kind, ProofKind::Review);
        assert_eq!(calls[0].product_name, "Vitamin C Serum");
        assert_eq!(calls[0].image_len, 5);
    }

    #[tokio::test]
    async fn empty_script_fails_closed() {
        let verifier = ScriptedVerifier::new([]);
        let verdict = verifier
            .verify(b"a", ProofKind::Order, "Mouse", Platform::Amazon)
            .await;
        assert!(!verdict.valid);
    }
}
