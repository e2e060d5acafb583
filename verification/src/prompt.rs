//! Instruction templates sent to the vision model.
//!
//! The exact wording is not a contract — only the verdict schema and the
//! fail-closed policy are load-bearing — but the instructions are kept
//! deterministic per proof kind so identical submissions produce identical
//! requests.

use karo_types::{Platform, ProofKind};

/// Build the instruction for one proof image.
pub fn build_instruction(kind: ProofKind, product_name: &str, platform: Platform) -> String {
    match kind {
        ProofKind::Order => format!(
            "Analyze this image. It is supposed to be a screenshot of an order \
             confirmation from {platform}.\n\
             \n\
             Strictly verify the following:\n\
             1. Does the image look like an order confirmation page or receipt?\n\
             2. Is the product \"{product_name}\" (or something very similar) visible \
             in the item list?\n\
             3. Is there an order number or confirmation status visible?\n\
             \n\
             Return a JSON object with 'valid' (boolean) and 'reason' (string \
             explaining why)."
        ),
        ProofKind::Review => format!(
            "Analyze this image. It is supposed to be a screenshot of a published \
             product review on {platform}.\n\
             \n\
             Strictly verify the following:\n\
             1. Does the image look like a customer review section?\n\
             2. Is the review associated with the product \"{product_name}\"?\n\
             3. Is there a visible review text or star rating?\n\
             \n\
             Return a JSON object with 'valid' (boolean) and 'reason' (string \
             explaining why)."
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_instruction_names_product_and_platform() {
        let text = build_instruction(
            ProofKind::Order,
            "Stainless Steel Water Bottle",
            Platform::Amazon,
        );
        assert!(text.contains("order confirmation from Amazon"));
        assert!(text.contains("\"Stainless Steel Water Bottle\""));
        assert!(text.contains("order number"));
    }

    #[test]
    fn review_instruction_checks_review_layout() {
        let text = build_instruction(ProofKind::Review, "Vitamin C Serum", Platform::Shopify);
        assert!(text.contains("published product review on Shopify"));
        assert!(text.contains("customer review section"));
        assert!(text.contains("star rating"));
    }

    #[test]
    fn instructions_are_deterministic() {
        let a = build_instruction(ProofKind::Order, "Mouse", Platform::Walmart);
        let b = build_instruction(ProofKind::Order, "Mouse", Platform::Walmart);
        assert_eq!(a, b);
    }
}
