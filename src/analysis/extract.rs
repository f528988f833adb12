//! Dimension extractors
//!
//! Each dimension is a small pure function over the shared `Tokens`. They are
//! deliberately simple heuristics: the same rules run over the reference
//! samples and the checked text, so what matters is relative drift.

use super::markers::{self, Person};
use super::tokenizer::Tokens;
use crate::models::{Analysis, VoiceVector};
use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

static PASSIVE: OnceLock<Regex> = OnceLock::new();
static EMPHASIS_PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();

fn passive_pattern() -> &'static Regex {
    PASSIVE.get_or_init(|| {
        Regex::new(
            r"(?i)\b(is|are|was|were|been|being|be|am|has been|have been|had been|will be|would be|could be|should be|might be|must be)\s+(\w+ly\s+)?(\w+(?:ed|en|wn|nt|ght))\b",
        )
        .expect("valid regex")
    })
}

fn emphasis_patterns() -> &'static Vec<Regex> {
    EMPHASIS_PATTERNS.get_or_init(|| {
        vec![
            // ALL CAPS runs
            Regex::new(r"[A-Z]{2,}").expect("valid regex"),
            // Stacked exclamation marks
            Regex::new(r"!{2,}").expect("valid regex"),
            // Bold markup
            Regex::new(r"\*\*[^*]+\*\*").expect("valid regex"),
            Regex::new(r"__[^_]+__").expect("valid regex"),
        ]
    })
}

/// Round to one decimal place
pub(crate) fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// `count / total` as a percentage with one decimal; 0 when `total` is 0
fn percent_tenth(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (count as f64 / total as f64 * 1000.0).round() / 10.0
}

/// Estimate syllables by counting vowel groups, with silent-e and "-ed"
/// corrections. Never returns less than 1.
pub fn count_syllables(word: &str) -> usize {
    let word: String = word
        .chars()
        .map(|c| c.to_ascii_lowercase())
        .filter(|c| c.is_ascii_lowercase())
        .collect();
    if word.len() <= 2 {
        return 1;
    }

    let mut groups = 0;
    let mut in_group = false;
    for c in word.chars() {
        let vowel = matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
        if vowel && !in_group {
            groups += 1;
        }
        in_group = vowel;
    }
    let mut count = groups.max(1);

    if word.ends_with('e') && !word.ends_with("le") && count > 1 {
        count -= 1;
    }
    if word.ends_with("ed") && count > 1 && !word.ends_with("ted") && !word.ends_with("ded") {
        count -= 1;
    }

    count.max(1)
}

/// Share of formal markers among all register markers (0-100).
/// 50 when neither kind appears.
pub fn formality(lower: &[String]) -> f64 {
    let formal = markers::count_in(lower, markers::FORMAL_MARKERS);
    let informal = markers::count_in(lower, markers::INFORMAL_MARKERS);
    let total = formal + informal;
    if total == 0 {
        return 50.0;
    }
    (formal as f64 / total as f64 * 100.0).round()
}

pub fn avg_sentence_length(word_count: usize, sentence_count: usize) -> f64 {
    round_tenth(word_count as f64 / sentence_count.max(1) as f64)
}

/// Mean syllables per word mapped linearly from [1, 3] onto [0, 100]
pub fn vocabulary_complexity(words: &[&str]) -> f64 {
    if words.is_empty() {
        return 0.0;
    }
    let syllables: usize = words.iter().map(|w| count_syllables(w)).sum();
    let mean = syllables as f64 / words.len() as f64;
    ((mean - 1.0) / 2.0 * 100.0).clamp(0.0, 100.0).round()
}

/// Number of "be + [adverb] + participle" constructions
pub fn passive_count(text: &str) -> usize {
    passive_pattern().find_iter(text).count()
}

/// Sentences without a passive construction, as a percentage
pub fn active_ratio(text: &str, sentence_count: usize) -> f64 {
    let passive = passive_count(text) as f64;
    ((1.0 - passive / sentence_count.max(1) as f64) * 100.0)
        .clamp(0.0, 100.0)
        .round()
}

pub fn question_frequency(sentences: &[&str], sentence_count: usize) -> f64 {
    let questions = sentences
        .iter()
        .filter(|s| s.trim_end().ends_with('?'))
        .count();
    (questions as f64 / sentence_count.max(1) as f64 * 100.0).round()
}

/// Mean perspective of all pronouns: first person 0, second 50, third 100.
/// 50 when no pronouns appear.
pub fn pronoun_usage(lower: &[String]) -> f64 {
    let (total, weighted) = lower
        .iter()
        .filter_map(|w| Person::classify(w))
        .fold((0usize, 0.0f64), |(n, sum), p| (n + 1, sum + p.weight()));
    if total == 0 {
        return 50.0;
    }
    (weighted / total as f64).round()
}

pub fn power_word_density(lower: &[String]) -> f64 {
    percent_tenth(markers::count_in(lower, markers::POWER_WORDS), lower.len())
}

/// Emphasis markers plus every `!`, per 100 words
pub fn emphasis_rate(text: &str, word_count: usize) -> f64 {
    let markers: usize = emphasis_patterns()
        .iter()
        .map(|p| p.find_iter(text).count())
        .sum();
    let exclamations = text.matches('!').count();
    percent_tenth(markers + exclamations, word_count)
}

/// Coefficient of variation of sentence lengths, as a capped percentage
pub fn sentence_variety(lengths: &[usize]) -> f64 {
    if lengths.is_empty() {
        return 0.0;
    }
    let n = lengths.len() as f64;
    let mean = lengths.iter().sum::<usize>() as f64 / n;
    if mean <= 0.0 {
        return 0.0;
    }
    let variance = lengths
        .iter()
        .map(|&len| (len as f64 - mean).powi(2))
        .sum::<f64>()
        / n;
    (variance.sqrt() / mean * 100.0).min(100.0).round()
}

/// Measure all nine dimensions of `text`.
///
/// Returns `None` for blank text and for text without a single word token,
/// so every `Analysis` has `word_count >= 1` and `sentence_count >= 1`.
pub fn measure(text: &str) -> Option<Analysis> {
    if text.trim().is_empty() {
        return None;
    }

    let tokens = Tokens::new(text);
    let word_count = tokens.word_count();
    if word_count == 0 {
        debug!("No word tokens in {} bytes of text, skipping", text.len());
        return None;
    }
    let sentence_count = tokens.sentence_count();

    let dimensions = VoiceVector {
        formality: formality(&tokens.lower),
        avg_sentence_length: avg_sentence_length(word_count, sentence_count),
        vocabulary_complexity: vocabulary_complexity(&tokens.words),
        active_ratio: active_ratio(text, sentence_count),
        question_frequency: question_frequency(&tokens.sentences, sentence_count),
        pronoun_usage: pronoun_usage(&tokens.lower),
        power_word_density: power_word_density(&tokens.lower),
        emphasis_rate: emphasis_rate(text, word_count),
        sentence_variety: sentence_variety(&tokens.sentence_lengths()),
    };

    debug!(
        "Measured {} words in {} sentences: {:?}",
        word_count, sentence_count, dimensions
    );

    Some(Analysis {
        dimensions,
        word_count,
        sentence_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lower(text: &str) -> Vec<String> {
        Tokens::new(text).lower
    }

    #[test]
    fn test_count_syllables() {
        assert_eq!(count_syllables("I"), 1);
        assert_eq!(count_syllables("the"), 1);
        assert_eq!(count_syllables("make"), 1);
        assert_eq!(count_syllables("table"), 2);
        assert_eq!(count_syllables("jumped"), 1);
        assert_eq!(count_syllables("wanted"), 2);
        assert_eq!(count_syllables("beautiful"), 3);
        assert_eq!(count_syllables("rhythm"), 1);
        assert_eq!(count_syllables("Don't"), 1);
        assert_eq!(count_syllables("nth"), 1);
    }

    #[test]
    fn test_formality() {
        assert_eq!(formality(&lower("Therefore this is true.")), 100.0);
        assert_eq!(formality(&lower("Yeah that's cool stuff.")), 0.0);
        assert_eq!(formality(&lower("Thus we utilize stuff.")), 67.0);
        assert_eq!(formality(&lower("Plain words only.")), 50.0);
    }

    #[test]
    fn test_avg_sentence_length() {
        assert_eq!(avg_sentence_length(5, 2), 2.5);
        assert_eq!(avg_sentence_length(10, 3), 3.3);
        assert_eq!(avg_sentence_length(4, 0), 4.0);
    }

    #[test]
    fn test_vocabulary_complexity() {
        assert_eq!(vocabulary_complexity(&["the", "cat", "sat"]), 0.0);
        // hello=2, world=1, foo=1, bar=1, baz=1 -> 1.2 syllables
        assert_eq!(
            vocabulary_complexity(&["Hello", "world", "Foo", "bar", "baz"]),
            10.0
        );
        assert_eq!(vocabulary_complexity(&[]), 0.0);
    }

    #[test]
    fn test_passive_detection() {
        assert_eq!(passive_count("The report was written by the team."), 1);
        assert_eq!(passive_count("The cake WAS quickly eaten."), 1);
        assert_eq!(passive_count("The team wrote the report."), 0);
        assert_eq!(active_ratio("The report was written by the team.", 1), 0.0);
        assert_eq!(
            active_ratio("The report was written. We shipped it.", 2),
            50.0
        );
    }

    #[test]
    fn test_active_ratio_floors_at_zero() {
        let text = "It was painted and it was tested and it was shipped.";
        assert_eq!(passive_count(text), 3);
        assert_eq!(active_ratio(text, 1), 0.0);
    }

    #[test]
    fn test_question_frequency() {
        let tokens = Tokens::new("Is this right? Yes it is.");
        assert_eq!(
            question_frequency(&tokens.sentences, tokens.sentence_count()),
            50.0
        );
    }

    #[test]
    fn test_pronoun_usage() {
        assert_eq!(pronoun_usage(&lower("We love our work.")), 0.0);
        assert_eq!(pronoun_usage(&lower("You will love your results.")), 50.0);
        assert_eq!(pronoun_usage(&lower("They said it works.")), 100.0);
        assert_eq!(pronoun_usage(&lower("We help you.")), 25.0);
        assert_eq!(pronoun_usage(&lower("Nothing personal here.")), 50.0);
    }

    #[test]
    fn test_power_word_density() {
        assert_eq!(power_word_density(&lower("Get it free now.")), 50.0);
        assert_eq!(power_word_density(&lower("Nothing to see.")), 0.0);
        // 1 of 3 -> 33.3
        assert_eq!(power_word_density(&lower("Proven plain words.")), 33.3);
    }

    #[test]
    fn test_emphasis_rate() {
        // AMAZING, !!, **now**, plus two single '!' -> 5 markers over 5 words
        assert_eq!(emphasis_rate("This is AMAZING!! Buy **now**.", 5), 100.0);
        assert_eq!(emphasis_rate("A calm sentence.", 3), 0.0);
        assert_eq!(emphasis_rate("Go __now__ please", 3), 33.3);
        assert_eq!(emphasis_rate("!!!", 0), 0.0);
    }

    #[test]
    fn test_sentence_variety() {
        assert_eq!(sentence_variety(&[2, 3]), 20.0);
        assert_eq!(sentence_variety(&[4, 4, 4]), 0.0);
        assert_eq!(sentence_variety(&[1, 30]), 94.0);
        assert_eq!(sentence_variety(&[0, 0]), 0.0);
        assert_eq!(sentence_variety(&[]), 0.0);
    }

    #[test]
    fn test_measure_segmentation_scenario() {
        let a = measure("Hello world. Foo bar baz.").unwrap();
        assert_eq!(a.word_count, 5);
        assert_eq!(a.sentence_count, 2);
        assert_eq!(a.dimensions.avg_sentence_length, 2.5);
        assert_eq!(a.dimensions.sentence_variety, 20.0);
        assert_eq!(a.dimensions.formality, 50.0);
        assert_eq!(a.dimensions.pronoun_usage, 50.0);
        assert_eq!(a.dimensions.active_ratio, 100.0);
    }

    #[test]
    fn test_measure_blank_and_wordless() {
        assert!(measure("").is_none());
        assert!(measure("   \n\t").is_none());
        assert!(measure("123 456.").is_none());
    }

    #[test]
    fn test_measure_deterministic() {
        let text = "We built this for you. Isn't it AMAZING?! Try it free today.";
        assert_eq!(measure(text), measure(text));
    }
}
