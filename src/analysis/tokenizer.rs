//! Word and sentence segmentation
//!
//! Words are maximal runs of ASCII letters, apostrophes and hyphens. A
//! sentence is a run of non-terminator characters closed by one or more of
//! `.`, `!`, `?`; a trailing fragment without a terminator still counts.
//! Every extractor reads from the same `Tokens` so counts agree across
//! dimensions.

use regex::Regex;
use std::sync::OnceLock;

static WORD: OnceLock<Regex> = OnceLock::new();
static SENTENCE: OnceLock<Regex> = OnceLock::new();

fn word_pattern() -> &'static Regex {
    WORD.get_or_init(|| Regex::new(r"[a-zA-Z'-]+").expect("valid regex"))
}

fn sentence_pattern() -> &'static Regex {
    SENTENCE.get_or_init(|| Regex::new(r"[^.!?]*[.!?]+\s?|[^.!?]+$").expect("valid regex"))
}

/// Word tokens in order of appearance, case preserved
pub fn words(text: &str) -> Vec<&str> {
    word_pattern().find_iter(text).map(|m| m.as_str()).collect()
}

/// Trimmed, non-empty sentences in order of appearance
pub fn sentences(text: &str) -> Vec<&str> {
    sentence_pattern()
        .find_iter(text)
        .map(|m| m.as_str().trim())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Shared segmentation of one text
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    pub text: &'a str,
    pub words: Vec<&'a str>,
    /// Lower-cased copies of `words`, for marker lookups
    pub lower: Vec<String>,
    pub sentences: Vec<&'a str>,
}

impl<'a> Tokens<'a> {
    pub fn new(text: &'a str) -> Self {
        let words = words(text);
        let lower = words.iter().map(|w| w.to_lowercase()).collect();
        Self {
            text,
            words,
            lower,
            sentences: sentences(text),
        }
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Sentence count floored at 1, safe as a divisor
    pub fn sentence_count(&self) -> usize {
        self.sentences.len().max(1)
    }

    /// Word count of each sentence
    pub fn sentence_lengths(&self) -> Vec<usize> {
        self.sentences.iter().map(|s| words(s).len()).collect()
    }
}
