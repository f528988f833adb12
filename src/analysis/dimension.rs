//! The nine voice dimensions and their fixed scoring constants

use serde::{Deserialize, Serialize};

/// One stylistic axis of a voice profile.
///
/// Variant order is the canonical display order; `Dimension::all()` returns it
/// and every breakdown is emitted in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Dimension {
    /// Formal vs. informal register markers (0-100)
    Formality,
    /// Words per sentence
    AvgSentenceLength,
    /// Mean syllables per word, normalized (0-100)
    VocabularyComplexity,
    /// Share of sentences without a passive construction (0-100)
    ActiveRatio,
    /// Percentage of sentences ending in `?`
    QuestionFrequency,
    /// Perspective axis: 0 = first person, 50 = second, 100 = third
    PronounUsage,
    /// Percentage of words that are persuasive power words
    PowerWordDensity,
    /// Emphasis markers per 100 words
    EmphasisRate,
    /// Coefficient of variation of sentence lengths (0-100)
    SentenceVariety,
}

impl Dimension {
    pub fn all() -> &'static [Dimension] {
        &[
            Dimension::Formality,
            Dimension::AvgSentenceLength,
            Dimension::VocabularyComplexity,
            Dimension::ActiveRatio,
            Dimension::QuestionFrequency,
            Dimension::PronounUsage,
            Dimension::PowerWordDensity,
            Dimension::EmphasisRate,
            Dimension::SentenceVariety,
        ]
    }

    /// Wire key, as used in persisted profiles and JSON output
    pub fn key(&self) -> &'static str {
        match self {
            Dimension::Formality => "formality",
            Dimension::AvgSentenceLength => "avgSentenceLength",
            Dimension::VocabularyComplexity => "vocabularyComplexity",
            Dimension::ActiveRatio => "activeRatio",
            Dimension::QuestionFrequency => "questionFrequency",
            Dimension::PronounUsage => "pronounUsage",
            Dimension::PowerWordDensity => "powerWordDensity",
            Dimension::EmphasisRate => "emphasisRate",
            Dimension::SentenceVariety => "sentenceVariety",
        }
    }

    pub fn from_key(key: &str) -> Option<Dimension> {
        Dimension::all().iter().copied().find(|d| d.key() == key)
    }

    /// Human-readable label for breakdown rows
    pub fn label(&self) -> &'static str {
        match self {
            Dimension::Formality => "Formality",
            Dimension::AvgSentenceLength => "Sentence Length",
            Dimension::VocabularyComplexity => "Vocabulary Level",
            Dimension::ActiveRatio => "Active Voice",
            Dimension::QuestionFrequency => "Question Usage",
            Dimension::PronounUsage => "Person/Perspective",
            Dimension::PowerWordDensity => "Power Words",
            Dimension::EmphasisRate => "Emphasis",
            Dimension::SentenceVariety => "Sentence Variety",
        }
    }

    /// Relative importance in the overall score
    pub fn weight(&self) -> f64 {
        match self {
            Dimension::Formality => 1.5,
            Dimension::AvgSentenceLength => 1.0,
            Dimension::VocabularyComplexity => 1.2,
            Dimension::ActiveRatio => 1.0,
            Dimension::QuestionFrequency => 0.8,
            Dimension::PronounUsage => 1.3,
            Dimension::PowerWordDensity => 0.8,
            Dimension::EmphasisRate => 0.7,
            Dimension::SentenceVariety => 0.7,
        }
    }

    /// Drift (absolute difference) still scored as a full match
    pub fn tolerance(&self) -> f64 {
        match self {
            Dimension::Formality => 20.0,
            Dimension::AvgSentenceLength => 5.0,
            Dimension::VocabularyComplexity => 15.0,
            Dimension::ActiveRatio => 15.0,
            Dimension::QuestionFrequency => 10.0,
            Dimension::PronounUsage => 15.0,
            Dimension::PowerWordDensity => 2.0,
            Dimension::EmphasisRate => 3.0,
            Dimension::SentenceVariety => 15.0,
        }
    }

    /// Captions for the low and high ends of a gauge
    pub fn poles(&self) -> (&'static str, &'static str) {
        match self {
            Dimension::Formality => ("Casual", "Formal"),
            Dimension::AvgSentenceLength => ("Short", "Long"),
            Dimension::VocabularyComplexity => ("Simple", "Complex"),
            Dimension::ActiveRatio => ("Passive", "Active"),
            Dimension::QuestionFrequency => ("None", "Frequent"),
            Dimension::PronounUsage => ("We/Brand", "They/Third"),
            Dimension::PowerWordDensity => ("Minimal", "Heavy"),
            Dimension::EmphasisRate => ("Understated", "Emphatic"),
            Dimension::SentenceVariety => ("Uniform", "Varied"),
        }
    }

    /// Value that fills a gauge completely. Unbounded dimensions get a
    /// practical ceiling.
    pub fn gauge_max(&self) -> f64 {
        match self {
            Dimension::AvgSentenceLength => 30.0,
            Dimension::PowerWordDensity | Dimension::EmphasisRate => 10.0,
            _ => 100.0,
        }
    }

    /// Fill percentage (0-100) of a gauge showing `value`
    pub fn gauge_percent(&self, value: f64) -> f64 {
        (value / self.gauge_max() * 100.0).clamp(0.0, 100.0)
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}
