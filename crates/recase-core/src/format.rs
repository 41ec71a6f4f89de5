//! The four naming-convention codecs and the [`Format`] selector.
//!
//! # Design
//!
//! The conventions form a closed set — nobody registers new naming
//! conventions at runtime — so [`Format`] is a plain enum whose `codec()`
//! dispatches to one of four process-wide static instances. The instances
//! are stateless and immutable, safe to share across any number of threads.
//!
//! | Format       | Privacy marker | Word split        | Join | Casing on encode        |
//! |--------------|----------------|-------------------|------|-------------------------|
//! | `underscore` | `_` run        | separator `_`     | `_`  | verbatim                |
//! | `dash`       | `-` run        | separator `-`     | `-`  | verbatim                |
//! | `upper-camel`| `_` run        | capital boundary  | none | every word capitalized  |
//! | `lower-camel`| `_` run        | capital boundary  | none | first word untouched    |
//!
//! Round trips hold for canonical input (marked words fully upper, plain
//! words fully lower, single separators): `encode(decode(s)) == s`. For
//! arbitrary mixed-case input decode is a normalizing, lossy map.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::trace;

use crate::codec::Codec;
use crate::domain::{Identifier, PrivacyMarker, Word, segment};
use crate::error::{CodecError, CodecResult};

// ── static instances ──────────────────────────────────────────────────────────

/// `the_little_BROWN_fox`: underscore-separated, underscore privacy prefix.
pub static UNDERSCORE_CASE: SeparatorFormat =
    SeparatorFormat::new("underscore", PrivacyMarker::new('_'), '_');

/// `the-little-BROWN-fox`: dash-separated, dash privacy prefix.
pub static DASH_CASE: SeparatorFormat = SeparatorFormat::new("dash", PrivacyMarker::new('-'), '-');

/// `TheLittleBROWNFox`: capital-boundary words, underscore privacy prefix.
pub static UPPER_CAMEL_CASE: CamelFormat =
    CamelFormat::new("upper-camel", PrivacyMarker::new('_'), false);

/// `theLittleBROWNFox`: like upper camel, but the first word is emitted
/// untouched.
pub static LOWER_CAMEL_CASE: CamelFormat =
    CamelFormat::new("lower-camel", PrivacyMarker::new('_'), true);

// ── shared encode check ───────────────────────────────────────────────────────

/// Defensive check that a word is spellable in any supported convention.
///
/// Decode never produces a word that fails this; the check guards
/// identifiers assembled by hand (or deserialized) against values that
/// would not survive a round trip.
fn validate_word(word: &Word) -> CodecResult<()> {
    let invalid = |reason: &str| CodecError::InvalidIdentifierValue {
        word: word.as_str().to_string(),
        reason: reason.to_string(),
    };

    let text = word.as_str();
    if text.is_empty() {
        return Err(invalid("empty word"));
    }
    if let Some(ch) = text.chars().find(|c| !c.is_alphanumeric()) {
        return Err(invalid(&format!("contains non-alphanumeric '{ch}'")));
    }
    match word {
        Word::Plain(_) if text.chars().any(char::is_uppercase) => {
            Err(invalid("plain word contains uppercase"))
        }
        Word::Marked(_) if text.chars().any(char::is_lowercase) => {
            Err(invalid("marked word contains lowercase"))
        }
        _ => Ok(()),
    }
}

// ── separator formats ─────────────────────────────────────────────────────────

/// A convention whose words are delimited by a separator character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeparatorFormat {
    name: &'static str,
    marker: PrivacyMarker,
    separator: char,
}

impl SeparatorFormat {
    pub const fn new(name: &'static str, marker: PrivacyMarker, separator: char) -> Self {
        Self {
            name,
            marker,
            separator,
        }
    }

    /// The format's display name (`underscore`, `dash`).
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl Codec for SeparatorFormat {
    type Value = Identifier;
    type Repr = String;

    /// Parse separator-delimited text.
    ///
    /// Empty segments (doubled/leading/trailing separators) are dropped;
    /// an input that is all markers and separators decodes to an identifier
    /// with zero words rather than failing.
    fn decode(&self, input: &String) -> CodecResult<Identifier> {
        let (privacy, rest) = self.marker.strip(input);

        if let Some(ch) = rest
            .chars()
            .find(|&c| !c.is_alphanumeric() && c != self.separator)
        {
            return Err(CodecError::MalformedInput {
                format: self.name,
                input: input.clone(),
                reason: format!("unexpected character '{ch}'"),
            });
        }

        let words = segment::split_separator(rest, self.separator);
        trace!(format = self.name, privacy, words = words.len(), "decoded");
        Ok(Identifier::new(privacy, words))
    }

    fn encode(&self, identifier: &Identifier) -> CodecResult<String> {
        for word in identifier.words() {
            validate_word(word)?;
        }

        let mut out = self.marker.encode(&identifier.privacy())?;
        let mut first = true;
        for word in identifier.words() {
            if !first {
                out.push(self.separator);
            }
            out.push_str(word.as_str());
            first = false;
        }
        Ok(out)
    }
}

// ── camel formats ─────────────────────────────────────────────────────────────

/// A convention whose word boundaries are capital letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CamelFormat {
    name: &'static str,
    marker: PrivacyMarker,
    lower_first: bool,
}

impl CamelFormat {
    pub const fn new(name: &'static str, marker: PrivacyMarker, lower_first: bool) -> Self {
        Self {
            name,
            marker,
            lower_first,
        }
    }

    /// The format's display name (`upper-camel`, `lower-camel`).
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl Codec for CamelFormat {
    type Value = Identifier;
    type Repr = String;

    fn decode(&self, input: &String) -> CodecResult<Identifier> {
        let (privacy, rest) = self.marker.strip(input);

        if let Some(ch) = rest.chars().find(|c| !c.is_alphanumeric()) {
            return Err(CodecError::MalformedInput {
                format: self.name,
                input: input.clone(),
                reason: format!("unexpected character '{ch}'"),
            });
        }

        let words = segment::split_capitals(rest);
        trace!(format = self.name, privacy, words = words.len(), "decoded");
        Ok(Identifier::new(privacy, words))
    }

    /// Render words back-to-back, each capitalized.
    ///
    /// With `lower_first`, the first word is emitted exactly as stored —
    /// not forced lowercase. A leading marked word therefore renders as
    /// `HTTPRequest`, never `httpRequest`. That is the contract, inherited
    /// deliberately: lowering it would lose the acronym on the next decode.
    fn encode(&self, identifier: &Identifier) -> CodecResult<String> {
        for word in identifier.words() {
            validate_word(word)?;
        }

        let mut out = self.marker.encode(&identifier.privacy())?;
        for (index, word) in identifier.words().iter().enumerate() {
            if index == 0 && self.lower_first {
                out.push_str(word.as_str());
            } else {
                out.push_str(&word.capitalized());
            }
        }
        Ok(out)
    }
}

// ── Format selector ───────────────────────────────────────────────────────────

/// Marker trait for `text ⇄ Identifier` codecs, usable as a trait object.
pub trait IdentifierFormat: Codec<Value = Identifier, Repr = String> + Send + Sync {}

impl<T> IdentifierFormat for T where T: Codec<Value = Identifier, Repr = String> + Send + Sync {}

/// A supported naming convention.
///
/// The original vocabulary called the dash format "snake case"; here the
/// names say what the format does, and [`Format::from_str`] accepts the
/// common aliases (`snake`, `kebab`, `pascal`, `camel`) alongside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Format {
    Underscore,
    Dash,
    UpperCamel,
    LowerCamel,
}

/// A format name that does not resolve to any supported convention.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown format '{0}'; expected underscore, dash, upper-camel, or lower-camel")]
pub struct UnknownFormat(pub String);

impl Format {
    /// All supported formats, in display order.
    pub const ALL: [Format; 4] = [
        Self::Underscore,
        Self::Dash,
        Self::UpperCamel,
        Self::LowerCamel,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Underscore => "underscore",
            Self::Dash => "dash",
            Self::UpperCamel => "upper-camel",
            Self::LowerCamel => "lower-camel",
        }
    }

    /// Accepted spellings beyond [`Format::as_str`].
    pub const fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::Underscore => &["snake", "underscore_case", "snake_case"],
            Self::Dash => &["kebab", "dash-case", "kebab-case"],
            Self::UpperCamel => &["pascal", "pascalcase", "uppercamel"],
            Self::LowerCamel => &["camel", "camelcase", "lowercamel"],
        }
    }

    /// A canonical-form example identifier in this format.
    pub const fn example(&self) -> &'static str {
        match self {
            Self::Underscore => "the_little_BROWN_fox",
            Self::Dash => "the-little-BROWN-fox",
            Self::UpperCamel => "TheLittleBROWNFox",
            Self::LowerCamel => "theLittleBROWNFox",
        }
    }

    /// The process-wide codec instance for this format.
    pub fn codec(&self) -> &'static dyn IdentifierFormat {
        match self {
            Self::Underscore => &UNDERSCORE_CASE,
            Self::Dash => &DASH_CASE,
            Self::UpperCamel => &UPPER_CAMEL_CASE,
            Self::LowerCamel => &LOWER_CAMEL_CASE,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "underscore" | "snake" | "underscore_case" | "snake_case" => Ok(Self::Underscore),
            "dash" | "kebab" | "dash-case" | "kebab-case" => Ok(Self::Dash),
            "upper-camel" | "uppercamel" | "upper_camel" | "pascal" | "pascalcase" => {
                Ok(Self::UpperCamel)
            }
            "lower-camel" | "lowercamel" | "lower_camel" | "camel" | "camelcase" => {
                Ok(Self::LowerCamel)
            }
            other => Err(UnknownFormat(other.to_string())),
        }
    }
}
