//! Integer label encoding for categorical columns

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use swapimpact_types::MlError;

/// A label resolved through the encoder, possibly via fallback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLabel {
    /// The label actually used (input, or the fallback substitute)
    pub label: String,
    /// Integer code in [0, vocabulary size)
    pub code: usize,
    /// True when the input was unseen and a substitute was used
    pub fell_back: bool,
}

/// Maps each distinct label of one categorical column to an integer
///
/// The vocabulary is the sorted set of distinct values seen at fit time,
/// so codes are stable across runs. Encoding is a bijection on the
/// fitted vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelEncoder {
    column: String,
    classes: Vec<String>,
}

impl LabelEncoder {
    /// Fit over the distinct values of a column
    pub fn fit<'a>(
        column: &str,
        values: impl IntoIterator<Item = &'a str>,
    ) -> Result<Self, MlError> {
        let distinct: BTreeSet<&str> = values.into_iter().collect();
        if distinct.is_empty() {
            return Err(MlError::EmptyVocabulary(column.to_string()));
        }
        Ok(Self {
            column: column.to_string(),
            classes: distinct.into_iter().map(String::from).collect(),
        })
    }

    /// Column this encoder was fitted for
    pub fn column(&self) -> &str {
        &self.column
    }

    /// Fitted vocabulary, sorted
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Vocabulary size
    pub fn cardinality(&self) -> usize {
        self.classes.len()
    }

    /// Encode a known label
    pub fn encode(&self, label: &str) -> Option<usize> {
        self.classes
            .binary_search_by(|c| c.as_str().cmp(label))
            .ok()
    }

    /// Decode a code back to its label
    pub fn decode(&self, code: usize) -> Option<&str> {
        self.classes.get(code).map(String::as_str)
    }

    /// Encode with the unseen-label fallback
    ///
    /// Unseen labels map to `fallback` when it is in the vocabulary,
    /// otherwise to the first (smallest) known label. Never fails: fit
    /// guarantees a non-empty vocabulary.
    pub fn resolve(&self, label: &str, fallback: &str) -> ResolvedLabel {
        if let Some(code) = self.encode(label) {
            return ResolvedLabel {
                label: label.to_string(),
                code,
                fell_back: false,
            };
        }
        if let Some(code) = self.encode(fallback) {
            return ResolvedLabel {
                label: fallback.to_string(),
                code,
                fell_back: true,
            };
        }
        ResolvedLabel {
            label: self.classes[0].clone(),
            code: 0,
            fell_back: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brand_encoder() -> LabelEncoder {
        LabelEncoder::fit("brand", ["Zara", "H&M", "Unknown", "Zara"]).unwrap()
    }

    #[test]
    fn test_vocabulary_sorted_and_deduplicated() {
        let enc = brand_encoder();
        assert_eq!(enc.classes(), ["H&M", "Unknown", "Zara"]);
        assert_eq!(enc.cardinality(), 3);
    }

    #[test]
    fn test_encode_decode_bijection() {
        let enc = brand_encoder();
        for label in enc.classes().to_vec() {
            let code = enc.encode(&label).unwrap();
            assert_eq!(enc.decode(code).unwrap(), label);
        }
    }

    #[test]
    fn test_unseen_falls_back_to_unknown() {
        let enc = brand_encoder();
        let resolved = enc.resolve("NoSuchBrand", "Unknown");
        assert!(resolved.fell_back);
        assert_eq!(resolved.label, "Unknown");
        assert_eq!(resolved.code, enc.encode("Unknown").unwrap());
    }

    #[test]
    fn test_unseen_falls_back_to_first_label_without_unknown() {
        let enc = LabelEncoder::fit("condition", ["Good", "Fair", "New"]).unwrap();
        let resolved = enc.resolve("Mint", "Unknown");
        assert!(resolved.fell_back);
        assert_eq!(resolved.label, "Fair");
        assert_eq!(resolved.code, 0);
    }

    #[test]
    fn test_known_label_never_falls_back() {
        let enc = brand_encoder();
        let resolved = enc.resolve("Zara", "Unknown");
        assert!(!resolved.fell_back);
        assert_eq!(resolved.label, "Zara");
    }

    #[test]
    fn test_empty_vocabulary_rejected() {
        let result = LabelEncoder::fit("brand", std::iter::empty::<&str>());
        assert!(matches!(result, Err(MlError::EmptyVocabulary(_))));
    }
}
