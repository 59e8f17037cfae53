//! Turn raw text into a `Document` of tokenized sentences.
use lazy_static::lazy_static;
use regex::Regex;
use sa_types::{Document, Sentence};

lazy_static! {
    /// Anything that is not a word character, whitespace, or a sentence terminator.
    static ref NOISE: Regex = Regex::new(r"[^\w\s.!?]").unwrap();
    /// Terminators followed by whitespace end a sentence.
    static ref BOUNDARY: Regex = Regex::new(r"[.!?]\s+").unwrap();
}

const TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Lower-case `text`, drop punctuation other than `.!?`, split it into
/// sentences, and split each sentence into whitespace separated tokens.
///
/// Trailing terminators are removed from each sentence, and sentences without
/// tokens are dropped, so the result always passes `Document::validate`
/// unless it is empty.
pub fn preprocess(text: &str) -> Document {
    let text = text.to_lowercase();
    let text = NOISE.replace_all(&text, "");
    BOUNDARY
        .split(&text)
        .map(|s| Sentence::from_text(s.trim().trim_end_matches(TERMINATORS)))
        .filter(|s| s.token_count() > 0)
        .collect()
}
