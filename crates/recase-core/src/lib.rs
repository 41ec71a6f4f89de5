//! # recase-core
//!
//! Bidirectional identifier case-format codecs.
//!
//! An identifier written in any supported naming convention decodes into a
//! convention-neutral [`Identifier`] — a privacy level (count of leading
//! `_`/`-` markers) plus an ordered sequence of [`Word`]s — and encodes
//! back out into any other convention. Transcoding between two conventions
//! is pure codec algebra: invert the source codec, compose with the
//! destination codec, thread the `Identifier` in between.
//!
//! ```text
//!   "simple_HTTP_request"                  "simpleHTTPRequest"
//!         │                                        ▲
//!         │ underscore.decode        lower_camel.encode
//!         ▼                                        │
//!   Identifier { privacy: 0, words: [simple, HTTP, request] }
//! ```
//!
//! ## Usage
//!
//! ```
//! use recase_core::{Format, Transcoder, transcode};
//!
//! // One-shot:
//! let out = transcode("the_little_brown_fox", Format::Underscore, Format::UpperCamel)?;
//! assert_eq!(out, "TheLittleBrownFox");
//!
//! // Reusable, both directions:
//! let t = Transcoder::new(Format::Underscore, Format::LowerCamel);
//! assert_eq!(t.convert("simple_HTTP_request")?, "simpleHTTPRequest");
//! assert_eq!(t.convert_back("simpleHTTPRequest")?, "simple_HTTP_request");
//! # Ok::<(), recase_core::CodecError>(())
//! ```
//!
//! ## Guarantees and losses
//!
//! - Decoding normalizes: any word with an uppercase letter becomes a fully
//!   upper-cased *marked* word (`Brown` and `BROWN` collapse). This is the
//!   documented contract, not a defect — see [`Word::normalize`].
//! - For input already canonical in its format, `encode(decode(s)) == s`.
//! - All codecs are pure, stateless, and shareable across threads; the
//!   per-format instances in [`format`] are process-wide statics.

pub mod codec;
pub mod domain;
pub mod error;
pub mod format;
pub mod transcode;

pub use codec::{Codec, Composed, Identity, Inverted, compose, identity, invert};
pub use domain::{DASHES, Identifier, PrivacyLevel, PrivacyMarker, UNDERSCORES, Word};
pub use error::{CodecError, CodecResult, ErrorCategory};
pub use format::{
    DASH_CASE, Format, IdentifierFormat, LOWER_CAMEL_CASE, UNDERSCORE_CASE, UPPER_CAMEL_CASE,
    UnknownFormat,
};
pub use transcode::{Transcoder, transcode};
