//! Word-boundary parsing: flat text → ordered words.
//!
//! Two splitting strategies cover the supported conventions:
//!
//! - [`split_separator`] for underscore/dash formats — split on the
//!   separator, drop empty segments, normalize each survivor;
//! - [`split_capitals`] for camel formats — cut before every uppercase
//!   letter, then merge runs of single-letter chunks into acronym words.
//!
//! Both take the *privacy-stripped* remainder; leading markers are counted
//! and removed by [`PrivacyMarker::strip`](crate::PrivacyMarker::strip)
//! before either strategy runs.

use crate::domain::word::Word;

/// Split on a separator character, dropping empty segments.
///
/// Doubled, leading, and trailing separators are tolerated silently:
/// `"the__fox_"` yields `[the, fox]`. Each surviving segment goes through
/// the normalizer, so `"the_BROWN_fox"` yields a marked `BROWN`.
pub fn split_separator(input: &str, separator: char) -> Vec<Word> {
    input
        .split(separator)
        .filter(|segment| !segment.is_empty())
        .map(Word::normalize)
        .collect()
}

/// Split at capital-letter boundaries, merging acronym runs.
///
/// The text is first cut immediately before every uppercase letter, so
/// `"SimpleHTTPRequest"` chunks as `[Simple, H, T, T, P, Request]`. A single
/// forward scan then groups the chunks into words:
///
/// - a maximal run of single-character chunks accumulates into one acronym
///   word, concatenated verbatim;
/// - a multi-character chunk flushes any pending acronym, then becomes one
///   word, lower-cased (its leading capital is structure, not marking);
/// - end of input flushes a pending acronym as the final word, so a trailing
///   run like `"RequestHTTP"` keeps its `HTTP` instead of dropping it.
///
/// Acronym words are classified by the normalizer rather than marked
/// unconditionally: a bare lowercase first chunk of length one (`"aFox"`)
/// stays plain.
pub fn split_capitals(input: &str) -> Vec<Word> {
    let chunks = chunk_at_capitals(input);

    let mut words = Vec::with_capacity(chunks.len());
    let mut acronym = String::new();

    for chunk in chunks {
        if chunk.chars().count() == 1 {
            acronym.push_str(chunk);
        } else {
            if !acronym.is_empty() {
                words.push(Word::normalize(&acronym));
                acronym.clear();
            }
            words.push(Word::plain(chunk.to_lowercase()));
        }
    }
    if !acronym.is_empty() {
        words.push(Word::normalize(&acronym));
    }

    words
}

/// Cut `input` immediately before every uppercase letter.
///
/// Every chunk except a bare lowercase first chunk starts with exactly one
/// uppercase letter. The empty string yields no chunks.
fn chunk_at_capitals(input: &str) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut start = 0;

    for (idx, ch) in input.char_indices() {
        if ch.is_uppercase() && idx > start {
            chunks.push(&input[start..idx]);
            start = idx;
        }
    }
    if start < input.len() {
        chunks.push(&input[start..]);
    }

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(s: &str) -> Word {
        Word::plain(s)
    }

    fn marked(s: &str) -> Word {
        Word::marked(s)
    }

    // ── separator strategy ────────────────────────────────────────────────

    #[test]
    fn separator_splits_in_order() {
        assert_eq!(
            split_separator("the_little_brown_fox", '_'),
            vec![plain("the"), plain("little"), plain("brown"), plain("fox")]
        );
    }

    #[test]
    fn separator_drops_empty_segments() {
        assert_eq!(
            split_separator("the__fox_", '_'),
            vec![plain("the"), plain("fox")]
        );
        assert_eq!(split_separator("_", '_'), vec![]);
        assert_eq!(split_separator("", '_'), vec![]);
    }

    #[test]
    fn separator_normalizes_capitalized_segments() {
        assert_eq!(
            split_separator("the-Brown-fox", '-'),
            vec![plain("the"), marked("BROWN"), plain("fox")]
        );
    }

    // ── capital-boundary strategy ─────────────────────────────────────────

    #[test]
    fn chunks_cut_before_each_capital() {
        assert_eq!(
            chunk_at_capitals("SimpleHTTPRequest"),
            vec!["Simple", "H", "T", "T", "P", "Request"]
        );
        assert_eq!(chunk_at_capitals("simpleFox"), vec!["simple", "Fox"]);
        assert_eq!(chunk_at_capitals(""), Vec::<&str>::new());
    }

    #[test]
    fn capitals_merge_acronym_runs() {
        assert_eq!(
            split_capitals("SimpleHTTPRequest"),
            vec![plain("simple"), marked("HTTP"), plain("request")]
        );
    }

    #[test]
    fn capitals_flush_trailing_acronym() {
        // The straightforward left-to-right pairing would drop a run with
        // nothing after it; the end-of-input flush keeps it.
        assert_eq!(
            split_capitals("RequestHTTP"),
            vec![plain("request"), marked("HTTP")]
        );
        assert_eq!(split_capitals("X"), vec![marked("X")]);
        assert_eq!(split_capitals("HTTP"), vec![marked("HTTP")]);
    }

    #[test]
    fn capitals_handle_bare_lowercase_first_chunk() {
        assert_eq!(
            split_capitals("theLittleFox"),
            vec![plain("the"), plain("little"), plain("fox")]
        );
        // A single lowercase letter travels through the acronym buffer but
        // stays plain.
        assert_eq!(split_capitals("aFox"), vec![plain("a"), plain("fox")]);
    }

    #[test]
    fn capitals_handle_leading_acronym() {
        assert_eq!(
            split_capitals("HTTPRequest"),
            vec![marked("HTTP"), plain("request")]
        );
    }

    #[test]
    fn capitals_lowercase_multi_letter_chunks() {
        // The leading capital of a multi-letter chunk is word structure,
        // not a marking signal.
        assert_eq!(
            split_capitals("TheFox"),
            vec![plain("the"), plain("fox")]
        );
    }

    #[test]
    fn capitals_on_empty_input_yield_no_words() {
        assert_eq!(split_capitals(""), vec![]);
    }

    #[test]
    fn two_letter_acronym_before_word() {
        // "ABc" chunks as [A, Bc]: the single-letter run is just "A".
        assert_eq!(split_capitals("ABc"), vec![marked("A"), plain("bc")]);
    }
}
