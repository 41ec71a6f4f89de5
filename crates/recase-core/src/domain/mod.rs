//! Domain model: the convention-neutral structure of an identifier.
//!
//! Decoding any supported naming convention produces an [`Identifier`]:
//! a [`PrivacyLevel`] (count of leading marker characters) plus an ordered
//! sequence of [`Word`]s. Encoding consumes the same structure. The modules
//! here are pure and std-only; the format codecs in [`crate::format`] are
//! the only consumers.

pub mod identifier;
pub mod privacy;
pub mod segment;
pub mod word;

pub use identifier::Identifier;
pub use privacy::{DASHES, PrivacyLevel, PrivacyMarker, UNDERSCORES};
pub use word::Word;
