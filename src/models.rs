//! Core data models for voiceprint
//!
//! Plain value types shared by the engine and its callers. All of them
//! serialize with camelCase keys so a persisted profile reads the same as the
//! dimension wire keys.

use crate::analysis::Dimension;
use serde::{Deserialize, Serialize};

/// The nine dimension values of one measurement or one profile
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceVector {
    pub formality: f64,
    pub avg_sentence_length: f64,
    pub vocabulary_complexity: f64,
    pub active_ratio: f64,
    pub question_frequency: f64,
    pub pronoun_usage: f64,
    pub power_word_density: f64,
    pub emphasis_rate: f64,
    pub sentence_variety: f64,
}

impl VoiceVector {
    pub fn get(&self, dim: Dimension) -> f64 {
        match dim {
            Dimension::Formality => self.formality,
            Dimension::AvgSentenceLength => self.avg_sentence_length,
            Dimension::VocabularyComplexity => self.vocabulary_complexity,
            Dimension::ActiveRatio => self.active_ratio,
            Dimension::QuestionFrequency => self.question_frequency,
            Dimension::PronounUsage => self.pronoun_usage,
            Dimension::PowerWordDensity => self.power_word_density,
            Dimension::EmphasisRate => self.emphasis_rate,
            Dimension::SentenceVariety => self.sentence_variety,
        }
    }

    pub fn set(&mut self, dim: Dimension, value: f64) {
        let slot = match dim {
            Dimension::Formality => &mut self.formality,
            Dimension::AvgSentenceLength => &mut self.avg_sentence_length,
            Dimension::VocabularyComplexity => &mut self.vocabulary_complexity,
            Dimension::ActiveRatio => &mut self.active_ratio,
            Dimension::QuestionFrequency => &mut self.question_frequency,
            Dimension::PronounUsage => &mut self.pronoun_usage,
            Dimension::PowerWordDensity => &mut self.power_word_density,
            Dimension::EmphasisRate => &mut self.emphasis_rate,
            Dimension::SentenceVariety => &mut self.sentence_variety,
        };
        *slot = value;
    }
}

/// Measurement of a single text
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    #[serde(flatten)]
    pub dimensions: VoiceVector,
    pub word_count: usize,
    pub sentence_count: usize,
}

impl Analysis {
    pub fn value(&self, dim: Dimension) -> f64 {
        self.dimensions.get(dim)
    }
}

/// Averaged voice signature built from reference samples.
///
/// Immutable once built; the engine never rewrites a profile it returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(flatten)]
    pub dimensions: VoiceVector,
    /// Samples that produced a valid analysis
    pub sample_count: usize,
    /// RFC 3339 creation time
    pub created_at: String,
    /// Sum of word counts over contributing samples
    pub total_words: usize,
}

impl Profile {
    pub fn value(&self, dim: Dimension) -> f64 {
        self.dimensions.get(dim)
    }
}

/// Per-dimension verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    Match,
    Partial,
    Mismatch,
}

impl MatchStatus {
    /// Bucket a 0-100 dimension score
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= 80 => MatchStatus::Match,
            s if s >= 50 => MatchStatus::Partial,
            _ => MatchStatus::Mismatch,
        }
    }
}

impl std::fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchStatus::Match => write!(f, "Match"),
            MatchStatus::Partial => write!(f, "Partial"),
            MatchStatus::Mismatch => write!(f, "Mismatch"),
        }
    }
}

/// Qualitative reading of the overall score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Verdict {
    OnBrand,
    MostlyConsistent,
    SomewhatOff,
    OffBrand,
}

impl Verdict {
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= 80 => Verdict::OnBrand,
            s if s >= 60 => Verdict::MostlyConsistent,
            s if s >= 40 => Verdict::SomewhatOff,
            _ => Verdict::OffBrand,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Verdict::OnBrand => "On-Brand",
            Verdict::MostlyConsistent => "Mostly Consistent",
            Verdict::SomewhatOff => "Somewhat Off",
            Verdict::OffBrand => "Off-Brand",
        }
    }

    pub fn summary(&self) -> &'static str {
        match self {
            Verdict::OnBrand => {
                "This copy closely matches your established voice profile. The tone and style are consistent."
            }
            Verdict::MostlyConsistent => {
                "This copy mostly aligns with your voice, but a few dimensions are off. See details below."
            }
            Verdict::SomewhatOff => {
                "This copy deviates from your established voice in several areas. Review the mismatched dimensions."
            }
            Verdict::OffBrand => {
                "This copy doesn't match your voice profile. Consider revising to align with your brand voice."
            }
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One row of a consistency breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionComparison {
    pub key: Dimension,
    pub label: String,
    pub profile_value: f64,
    pub current_value: f64,
    /// 0-100
    pub score: u32,
    pub status: MatchStatus,
    /// Corrective guidance, present only when status is not `Match`
    pub tip: Option<String>,
}

/// Result of checking one text against a profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsistencyResult {
    /// Weighted mean of the per-dimension scores (0-100)
    pub overall_score: u32,
    /// One row per dimension, in canonical order
    pub breakdown: Vec<DimensionComparison>,
    /// Measurement of the checked text
    pub current: Analysis,
}

impl ConsistencyResult {
    pub fn verdict(&self) -> Verdict {
        Verdict::from_score(self.overall_score)
    }

    /// Rows that need attention (partial or mismatch)
    pub fn flagged(&self) -> impl Iterator<Item = &DimensionComparison> {
        self.breakdown
            .iter()
            .filter(|row| row.status != MatchStatus::Match)
    }
}
