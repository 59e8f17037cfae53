use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::ops::Index;

use crate::{AlignError, Cost};

/// A single word. Tokens are produced lower-cased and without punctuation.
pub type Token = String;

/// The atomic unit that the cost model compares.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum UnitMode {
    /// Characters of the concatenated tokens. Whitespace is not counted.
    #[default]
    Character,
    /// Whole tokens.
    Token,
}

/// Which of the two documents an error or index refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocId {
    A,
    B,
}

impl Display for DocId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocId::A => write!(f, "A"),
            DocId::B => write!(f, "B"),
        }
    }
}

/// An ordered list of tokens.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sentence {
    tokens: Vec<Token>,
}

impl Sentence {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    /// Split on whitespace. No other normalization is done.
    pub fn from_text(text: &str) -> Self {
        Self::new(text.split_whitespace().map(str::to_owned).collect())
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    /// Total number of characters over all tokens.
    pub fn char_len(&self) -> usize {
        self.tokens.iter().map(|t| t.chars().count()).sum()
    }

    /// The number of units in the given mode.
    /// This is the cost of deleting or inserting the sentence.
    pub fn size(&self, mode: UnitMode) -> Cost {
        (match mode {
            UnitMode::Character => self.char_len(),
            UnitMode::Token => self.token_count(),
        }) as Cost
    }

    /// The tokens joined by single spaces.
    pub fn text(&self) -> String {
        self.tokens.join(" ")
    }
}

/// An ordered list of sentences. Documents are never mutated once built.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    sentences: Vec<Sentence>,
}

impl Document {
    pub fn new(sentences: Vec<Sentence>) -> Self {
        Self { sentences }
    }

    /// Build a document from whitespace-tokenized sentences.
    pub fn from_texts<S: AsRef<str>>(texts: impl IntoIterator<Item = S>) -> Self {
        texts
            .into_iter()
            .map(|t| Sentence::from_text(t.as_ref()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sentence> {
        self.sentences.iter()
    }

    /// The size of each sentence in the given mode.
    pub fn sizes(&self, mode: UnitMode) -> Vec<Cost> {
        self.sentences.iter().map(|s| s.size(mode)).collect()
    }

    /// The total size of all sentences.
    pub fn total_size(&self, mode: UnitMode) -> Cost {
        self.sentences.iter().map(|s| s.size(mode)).sum()
    }

    /// Check that the document is a non-empty list of non-empty sentences
    /// made of non-empty tokens.
    pub fn validate(&self, doc: DocId) -> Result<(), AlignError> {
        if self.sentences.is_empty() {
            return Err(AlignError::EmptyDocument { doc });
        }
        for (index, sentence) in self.sentences.iter().enumerate() {
            if sentence.tokens.is_empty() {
                return Err(AlignError::EmptySentence { doc, index });
            }
            if let Some(token) = sentence.tokens.iter().position(|t| t.is_empty()) {
                return Err(AlignError::EmptyToken { doc, index, token });
            }
        }
        Ok(())
    }
}

impl Index<usize> for Document {
    type Output = Sentence;

    fn index(&self, index: usize) -> &Self::Output {
        &self.sentences[index]
    }
}

impl FromIterator<Sentence> for Document {
    fn from_iter<T: IntoIterator<Item = Sentence>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Sentence;
    type IntoIter = std::slice::Iter<'a, Sentence>;

    fn into_iter(self) -> Self::IntoIter {
        self.sentences.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes() {
        let s = Sentence::from_text("the cat  sat");
        assert_eq!(s.token_count(), 3);
        assert_eq!(s.char_len(), 9);
        assert_eq!(s.size(UnitMode::Character), 9);
        assert_eq!(s.size(UnitMode::Token), 3);
        assert_eq!(s.text(), "the cat sat");
    }

    #[test]
    fn validate() {
        let doc = Document::from_texts(["the cat sat", "on the mat"]);
        assert!(doc.validate(DocId::A).is_ok());
        assert_eq!(doc.total_size(UnitMode::Token), 6);

        assert!(matches!(
            Document::default().validate(DocId::B),
            Err(AlignError::EmptyDocument { doc: DocId::B })
        ));
        assert!(matches!(
            Document::from_texts(["a b", "  "]).validate(DocId::A),
            Err(AlignError::EmptySentence {
                doc: DocId::A,
                index: 1
            })
        ));
        let doc = Document::new(vec![Sentence::new(vec!["a".into(), "".into()])]);
        assert!(matches!(
            doc.validate(DocId::A),
            Err(AlignError::EmptyToken { index: 0, token: 1, .. })
        ));
    }
}
