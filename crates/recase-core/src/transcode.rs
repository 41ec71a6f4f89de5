//! Direct text-to-text transcoding between two naming conventions.
//!
//! A [`Transcoder`] is not a fifth kind of codec — it is the source format
//! inverted and composed with the destination format, threading the shared
//! [`Identifier`](crate::Identifier) between them. Decode failures from the
//! source format propagate unchanged; no extra validation happens here.

use tracing::debug;

use crate::codec::{Codec, Composed, Inverted, compose, invert};
use crate::error::CodecResult;
use crate::format::{Format, IdentifierFormat};

type Bridge = Composed<Inverted<&'static dyn IdentifierFormat>, &'static dyn IdentifierFormat>;

/// A `text ⇄ text` codec between two naming conventions.
///
/// Built as `compose(invert(from), to)`: the composed codec's encode
/// direction carries source-format text to destination-format text, and its
/// decode direction carries destination text back.
///
/// ```
/// use recase_core::{Format, Transcoder};
///
/// let t = Transcoder::new(Format::Underscore, Format::UpperCamel);
/// assert_eq!(t.convert("the_little_brown_fox").unwrap(), "TheLittleBrownFox");
/// assert_eq!(t.convert_back("TheLittleBrownFox").unwrap(), "the_little_brown_fox");
/// ```
#[derive(Clone, Copy)]
pub struct Transcoder {
    from: Format,
    to: Format,
    bridge: Bridge,
}

impl Transcoder {
    /// A transcoder from `from`-format text to `to`-format text.
    ///
    /// `from == to` is allowed and acts as a normalizer: decode then
    /// re-encode canonicalizes stray separators and mixed-case words.
    pub fn new(from: Format, to: Format) -> Self {
        Self {
            from,
            to,
            bridge: compose(invert(from.codec()), to.codec()),
        }
    }

    /// The source format.
    pub const fn from(&self) -> Format {
        self.from
    }

    /// The destination format.
    pub const fn to(&self) -> Format {
        self.to
    }

    /// Convert source-format text to destination-format text.
    pub fn convert(&self, input: &str) -> CodecResult<String> {
        let output = self.bridge.encode(&input.to_string())?;
        debug!(from = %self.from, to = %self.to, input, output, "transcoded");
        Ok(output)
    }

    /// Convert destination-format text back to source-format text.
    pub fn convert_back(&self, input: &str) -> CodecResult<String> {
        let output = self.bridge.decode(&input.to_string())?;
        debug!(from = %self.to, to = %self.from, input, output, "transcoded");
        Ok(output)
    }
}

impl std::fmt::Debug for Transcoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transcoder")
            .field("from", &self.from)
            .field("to", &self.to)
            .finish()
    }
}

/// One-shot transcode without keeping the [`Transcoder`] around.
pub fn transcode(input: &str, from: Format, to: Format) -> CodecResult<String> {
    Transcoder::new(from, to).convert(input)
}
