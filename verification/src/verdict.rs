//! The structured result of verifying a proof image.

use serde::{Deserialize, Serialize};

/// A verification verdict. `valid = false` is a business outcome, not an
/// error: the `reason` is shown to the user verbatim as retake guidance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub valid: bool,
    pub reason: String,
    /// Brief summary of what text the model actually found in the image.
    #[serde(
        rename = "detectedText",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub detected_text: Option<String>,
}

impl Verdict {
    pub fn accept(reason: impl Into<String>) -> Self {
        Self {
            valid: true,
            reason: reason.into(),
            detected_text: None,
        }
    }

    pub fn reject(reason: impl Into<String>) -> Self {
        Self {
            valid: false,
            reason: reason.into(),
            detected_text: None,
        }
    }

    /// The fail-closed verdict returned whenever the oracle is unreachable
    /// or its response cannot be parsed.
    pub fn unavailable() -> Self {
        Self::reject(
            "AI verification service is temporarily unavailable or could not \
             process the image. Please try uploading a clearer image.",
        )
    }
}
