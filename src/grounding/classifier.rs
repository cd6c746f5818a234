//! Reply classification against the grounding contract
//!
//! A reply is a fallback if and only if it opens with [`FALLBACK_SENTENCE`].
//! The check is a prefix match: the service may decorate the sentence with a
//! suffix, but the contract guarantees the sentence itself comes first.
//!
//! Technical-error replies substituted by the caller do not start with the
//! sentence and therefore count as grounded.

use super::FALLBACK_SENTENCE;
use crate::types::Classification;

/// Classify a bot reply from its text alone
pub fn classify(bot_text: &str) -> Classification {
    if bot_text.starts_with(FALLBACK_SENTENCE) {
        Classification::Fallback
    } else {
        Classification::Grounded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_exact_sentence_is_fallback() {
        assert_eq!(classify(FALLBACK_SENTENCE), Classification::Fallback);
    }

    #[test]
    fn test_decorated_sentence_is_fallback() {
        let text = format!("{} Posso ajudar com outra coisa? 🙂", FALLBACK_SENTENCE);
        assert_eq!(classify(&text), Classification::Fallback);
    }

    #[test]
    fn test_sentence_not_at_start_is_grounded() {
        let text = format!("Olá! {}", FALLBACK_SENTENCE);
        assert_eq!(classify(&text), Classification::Grounded);
    }

    #[test]
    fn test_case_and_whitespace_must_match() {
        assert_eq!(
            classify(&FALLBACK_SENTENCE.to_lowercase()),
            Classification::Grounded
        );
        assert_eq!(
            classify(&format!(" {}", FALLBACK_SENTENCE)),
            Classification::Grounded
        );
    }

    #[test]
    fn test_empty_text_is_grounded() {
        assert_eq!(classify(""), Classification::Grounded);
    }

    proptest! {
        #[test]
        fn prop_fallback_prefix_always_fallback(suffix in ".*") {
            let text = format!("{}{}", FALLBACK_SENTENCE, suffix);
            prop_assert_eq!(classify(&text), Classification::Fallback);
        }

        #[test]
        fn prop_classification_matches_prefix(text in ".*") {
            let expected = if text.starts_with(FALLBACK_SENTENCE) {
                Classification::Fallback
            } else {
                Classification::Grounded
            };
            prop_assert_eq!(classify(&text), expected);
        }

        #[test]
        fn prop_non_empty_prefix_breaks_fallback(prefix in "[a-zA-Z0-9 ]{1,20}") {
            let text = format!("{}{}", prefix, FALLBACK_SENTENCE);
            prop_assert_eq!(classify(&text), Classification::Grounded);
        }
    }
}
