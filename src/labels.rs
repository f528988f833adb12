//! Qualitative labels and corrective tips
//!
//! Both mappings are total: every value gets a label and every drift gets a
//! tip. Bucket boundaries are half-open, `[low, high)`, with the top bucket
//! open-ended.

use crate::analysis::Dimension;

/// Short qualitative phrase for a raw dimension value
pub fn label_for(dim: Dimension, value: f64) -> &'static str {
    match dim {
        Dimension::Formality => bucket(
            value,
            &[(25.0, "Very Casual"), (45.0, "Casual"), (55.0, "Balanced"), (75.0, "Professional")],
            "Very Formal",
        ),
        Dimension::AvgSentenceLength => bucket(
            value,
            &[(10.0, "Very Short"), (15.0, "Short"), (20.0, "Moderate"), (25.0, "Long")],
            "Very Long",
        ),
        Dimension::VocabularyComplexity => bucket(
            value,
            &[(20.0, "Simple"), (40.0, "Accessible"), (60.0, "Moderate"), (80.0, "Advanced")],
            "Expert",
        ),
        Dimension::ActiveRatio => bucket(
            value,
            &[(50.0, "Mostly Passive"), (70.0, "Mixed"), (90.0, "Mostly Active")],
            "Very Active",
        ),
        Dimension::QuestionFrequency if value == 0.0 => "No Questions",
        Dimension::QuestionFrequency => bucket(
            value,
            &[(10.0, "Rare"), (25.0, "Occasional"), (50.0, "Frequent")],
            "Very Frequent",
        ),
        Dimension::PronounUsage => bucket(
            value,
            &[(20.0, "We-focused"), (40.0, "Brand-centric"), (60.0, "You-focused"), (80.0, "Reader-centric")],
            "Third Person",
        ),
        Dimension::PowerWordDensity => bucket(
            value,
            &[(1.0, "Minimal"), (3.0, "Moderate"), (5.0, "Strong")],
            "Very High",
        ),
        Dimension::EmphasisRate => bucket(
            value,
            &[(1.0, "Understated"), (3.0, "Moderate"), (6.0, "Energetic")],
            "Very Emphatic",
        ),
        Dimension::SentenceVariety => bucket(
            value,
            &[(20.0, "Uniform"), (40.0, "Somewhat Varied"), (60.0, "Varied")],
            "Very Varied",
        ),
    }
}

/// Label lookup by wire key. Unknown keys echo the value back.
pub fn label_for_key(key: &str, value: f64) -> String {
    match Dimension::from_key(key) {
        Some(dim) => label_for(dim, value).to_string(),
        None => value.to_string(),
    }
}

fn bucket(value: f64, bounds: &[(f64, &'static str)], top: &'static str) -> &'static str {
    bounds
        .iter()
        .find(|(upper, _)| value < *upper)
        .map(|(_, label)| *label)
        .unwrap_or(top)
}

/// Directional advice for a drifting dimension. Picks the "higher" sentence
/// when the checked text measures above the profile.
pub fn tip_for(dim: Dimension, profile_value: f64, current_value: f64) -> String {
    let higher = current_value > profile_value;

    let tip = match (dim, higher) {
        (Dimension::Formality, true) => {
            "This copy is more formal than your usual voice. Try using shorter, more conversational words."
        }
        (Dimension::Formality, false) => {
            "This copy is more casual than your usual voice. Consider using more polished language."
        }
        (Dimension::AvgSentenceLength, true) => {
            return format!(
                "Your sentences average {current_value} words, longer than your typical {profile_value}. Break up longer sentences."
            );
        }
        (Dimension::AvgSentenceLength, false) => {
            return format!(
                "Your sentences average {current_value} words, shorter than your typical {profile_value}. Consider adding detail to key sentences."
            );
        }
        (Dimension::VocabularyComplexity, true) => {
            "You're using more complex vocabulary than usual. Swap multi-syllable words for simpler alternatives."
        }
        (Dimension::VocabularyComplexity, false) => {
            "Your vocabulary is simpler than usual. If the topic calls for it, use more precise terminology."
        }
        (Dimension::ActiveRatio, true) => {
            "Even more active voice than usual. Keep it up."
        }
        (Dimension::ActiveRatio, false) => {
            "More passive voice than your typical copy. Rewrite \"was done by\" patterns to \"[subject] did.\""
        }
        (Dimension::QuestionFrequency, true) => {
            "More questions than usual. Make sure they're rhetorical and purposeful, not filler."
        }
        (Dimension::QuestionFrequency, false) => {
            "Fewer questions than usual. Adding a question can engage readers and break up statements."
        }
        (Dimension::PronounUsage, true) => {
            "Less \"you\"-focused than usual. Shift some sentences to address the reader directly."
        }
        (Dimension::PronounUsage, false) => {
            "More \"you\"-focused than usual. Consider balancing with brand perspective (\"we\")."
        }
        (Dimension::PowerWordDensity, true) => {
            "More power words than usual. Make sure they feel natural, not forced."
        }
        (Dimension::PowerWordDensity, false) => {
            "Fewer persuasive power words than usual. Consider adding words like \"proven\", \"free\", or \"instant\"."
        }
        (Dimension::EmphasisRate, true) => {
            "More emphasis markers (caps, exclamation marks) than usual. Tone it down to match your established voice."
        }
        (Dimension::EmphasisRate, false) => {
            "Less emphasis than usual. Add strategic bold text or exclamation for key points."
        }
        (Dimension::SentenceVariety, true) => {
            "More sentence length variation than usual. This can be good, just make sure it reads smoothly."
        }
        (Dimension::SentenceVariety, false) => {
            "Sentences are more uniform than usual. Mix short punchy sentences with longer explanatory ones."
        }
    };

    tip.to_string()
}
