//! The convention-neutral intermediate representation.

use serde::{Deserialize, Serialize};

use crate::domain::privacy::PrivacyLevel;
use crate::domain::word::Word;

/// A parsed identifier: privacy level plus an ordered word sequence.
///
/// Every format codec decodes into this structure and encodes out of it;
/// transcoding threads one `Identifier` between a source decode and a
/// destination encode. Values are immutable — constructed fresh by each
/// decode and never mutated in place.
///
/// Word order is significant; duplicate words are allowed. An empty word
/// sequence is a valid identifier (it round-trips to the bare privacy
/// prefix).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identifier {
    privacy: PrivacyLevel,
    words: Vec<Word>,
}

impl Identifier {
    /// An identifier with an explicit privacy level.
    pub fn new(privacy: PrivacyLevel, words: Vec<Word>) -> Self {
        Self { privacy, words }
    }

    /// A public (privacy 0) identifier.
    pub fn public(words: Vec<Word>) -> Self {
        Self::new(0, words)
    }

    /// Count of leading marker characters in the source text.
    pub const fn privacy(&self) -> PrivacyLevel {
        self.privacy
    }

    /// The words, in source order.
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Whether the identifier carries no words at all.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_has_privacy_zero() {
        let id = Identifier::public(vec![Word::plain("fox")]);
        assert_eq!(id.privacy(), 0);
        assert_eq!(id.words().len(), 1);
    }

    #[test]
    fn empty_word_sequence_is_representable() {
        let id = Identifier::new(2, vec![]);
        assert!(id.is_empty());
        assert_eq!(id.privacy(), 2);
    }

    #[test]
    fn equality_is_structural_and_ordered() {
        let a = Identifier::public(vec![Word::plain("the"), Word::plain("fox")]);
        let b = Identifier::public(vec![Word::plain("fox"), Word::plain("the")]);
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn serializes_with_privacy_and_words() {
        let id = Identifier::new(1, vec![Word::plain("the"), Word::marked("HTTP")]);
        let json = serde_json::to_value(&id).unwrap();
        assert_eq!(json["privacy"], 1);
        assert_eq!(json["words"][1]["marked"], "HTTP");
    }
}
