//! Words and the word-case normalizer.
//!
//! A word is stored in exactly one of two canonical states:
//!
//! - **plain** — kept as scanned, expected lowercase (`the`, `fox`);
//! - **marked** — carried a capitalization signal in the source text and is
//!   canonicalized to fully uppercase (`BROWN`, `HTTP`).
//!
//! Marking collapses "first letter capitalized", "partially capitalized",
//! and "entirely capitalized" into one state. That lossy normalization is
//! the contract, not an accident: `Brown` and `BROWN` both decode to the
//! marked word `BROWN`, and nothing downstream can tell them apart.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One semantic token of an identifier.
///
/// Words are expected to be non-empty; the parsers in
/// [`segment`](crate::domain::segment) never produce empty words, and the
/// format codecs reject them on encode.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Word {
    /// Stored exactly as scanned, expected lowercase.
    Plain(String),
    /// Carried an uppercase signal; stored fully uppercase.
    Marked(String),
}

impl Word {
    /// A plain word, stored verbatim. The caller vouches that the text is
    /// lowercase; the encode path verifies.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::Plain(text.into())
    }

    /// A marked word. The text is canonicalized to uppercase here, so the
    /// all-caps invariant holds however the word was spelled.
    pub fn marked(text: impl Into<String>) -> Self {
        Self::Marked(text.into().to_uppercase())
    }

    /// The word-case normalizer: any uppercase letter marks the word (and
    /// upper-cases it wholesale); otherwise it stays plain.
    ///
    /// This is what makes decoding non-injective — `Brown` and `BROWN`
    /// normalize to the same marked word.
    pub fn normalize(raw: &str) -> Self {
        if raw.chars().any(char::is_uppercase) {
            Self::Marked(raw.to_uppercase())
        } else {
            Self::Plain(raw.to_string())
        }
    }

    /// The stored text, verbatim.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Plain(s) | Self::Marked(s) => s,
        }
    }

    /// Whether this word carried a capitalization signal.
    pub const fn is_marked(&self) -> bool {
        matches!(self, Self::Marked(_))
    }

    /// The camel-case rendering: first character upper-cased, remainder
    /// unchanged. Idempotent on marked (already all-caps) words.
    pub fn capitalized(&self) -> String {
        let text = self.as_str();
        let mut chars = text.chars();
        match chars.next() {
            Some(first) => {
                let mut out: String = first.to_uppercase().collect();
                out.push_str(chars.as_str());
                out
            }
            None => String::new(),
        }
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
