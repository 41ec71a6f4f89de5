//! Privacy-marker codec.
//!
//! A run of leading marker characters (`_` or `-`) conventionally marks an
//! identifier as private/protected; the length of the run is the privacy
//! level. `__the_fox` has privacy 2, `the_fox` privacy 0.

use crate::codec::Codec;
use crate::error::CodecResult;

/// How many leading marker characters prefixed the identifier.
///
/// Zero is public. No upper bound.
pub type PrivacyLevel = usize;

/// Codec between a [`PrivacyLevel`] and a run of marker characters.
///
/// `decode` counts the maximal prefix run of the marker and ignores
/// everything after it; callers strip that many characters themselves before
/// parsing words (see [`PrivacyMarker::strip`]). `encode` produces exactly
/// `level` repetitions of the marker, so `decode(encode(n)) == n` for all
/// `n`, while `encode(decode(s))` reproduces only the marker prefix of `s`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrivacyMarker {
    marker: char,
}

/// Underscore-prefix privacy, used by the underscore and camel formats.
pub static UNDERSCORES: PrivacyMarker = PrivacyMarker::new('_');

/// Dash-prefix privacy, used by the dash format.
pub static DASHES: PrivacyMarker = PrivacyMarker::new('-');

impl PrivacyMarker {
    /// A privacy codec for an arbitrary marker character.
    pub const fn new(marker: char) -> Self {
        Self { marker }
    }

    /// The marker character this codec counts and emits.
    pub const fn marker(&self) -> char {
        self.marker
    }

    /// Split `input` into its privacy level and the remainder after the
    /// marker prefix.
    pub fn strip<'a>(&self, input: &'a str) -> (PrivacyLevel, &'a str) {
        let level = input.chars().take_while(|&c| c == self.marker).count();
        // The marker is ASCII for every built-in format, but count bytes
        // through char_indices so a non-ASCII marker would still slice
        // correctly.
        let offset = input
            .char_indices()
            .nth(level)
            .map_or(input.len(), |(i, _)| i);
        (level, &input[offset..])
    }
}

impl Codec for PrivacyMarker {
    type Value = PrivacyLevel;
    type Repr = String;

    fn decode(&self, repr: &String) -> CodecResult<PrivacyLevel> {
        Ok(repr.chars().take_while(|&c| c == self.marker).count())
    }

    fn encode(&self, level: &PrivacyLevel) -> CodecResult<String> {
        Ok(self.marker.to_string().repeat(*level))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_counts_prefix_run() {
        assert_eq!(UNDERSCORES.decode(&"__the_fox".to_string()).unwrap(), 2);
        assert_eq!(UNDERSCORES.decode(&"the_fox".to_string()).unwrap(), 0);
        assert_eq!(DASHES.decode(&"---x".to_string()).unwrap(), 3);
    }

    #[test]
    fn decode_ignores_interior_markers() {
        assert_eq!(UNDERSCORES.decode(&"a__b".to_string()).unwrap(), 0);
    }

    #[test]
    fn encode_repeats_marker() {
        assert_eq!(UNDERSCORES.encode(&0).unwrap(), "");
        assert_eq!(UNDERSCORES.encode(&3).unwrap(), "___");
        assert_eq!(DASHES.encode(&1).unwrap(), "-");
    }

    #[test]
    fn decode_inverts_encode_for_all_small_levels() {
        for n in 0..64 {
            let run = UNDERSCORES.encode(&n).unwrap();
            assert_eq!(UNDERSCORES.decode(&run).unwrap(), n);
        }
    }

    #[test]
    fn strip_returns_level_and_remainder() {
        assert_eq!(UNDERSCORES.strip("__the_fox"), (2, "the_fox"));
        assert_eq!(UNDERSCORES.strip("fox"), (0, "fox"));
        assert_eq!(UNDERSCORES.strip("___"), (3, ""));
        assert_eq!(DASHES.strip("-a-b"), (1, "a-b"));
    }
}
