//! Profile aggregation from sample texts

use crate::analysis::{measure, round_tenth, Dimension};
use crate::models::{Analysis, Profile, VoiceVector};
use chrono::{DateTime, Utc};
use tracing::{debug, info};

/// Build a profile stamped with the current time.
///
/// Blank or wordless samples are skipped. Returns `None` when no sample
/// yields an analysis.
pub fn build<S: AsRef<str>>(samples: &[S]) -> Option<Profile> {
    build_at(samples, Utc::now())
}

/// Build a profile with an explicit creation time
pub fn build_at<S: AsRef<str>>(samples: &[S], created_at: DateTime<Utc>) -> Option<Profile> {
    let analyses: Vec<Analysis> = samples
        .iter()
        .filter_map(|s| measure(s.as_ref()))
        .collect();

    if analyses.is_empty() {
        debug!("None of {} samples produced an analysis", samples.len());
        return None;
    }
    if analyses.len() < samples.len() {
        debug!(
            "Skipped {} empty samples",
            samples.len() - analyses.len()
        );
    }

    let mut dimensions = VoiceVector::default();
    for dim in Dimension::all() {
        let mut values: Vec<f64> = analyses.iter().map(|a| a.value(*dim)).collect();
        dimensions.set(*dim, round_tenth(mean(&mut values)));
    }

    let total_words = analyses.iter().map(|a| a.word_count).sum();

    info!(
        "Built voice profile from {} samples ({} words)",
        analyses.len(),
        total_words
    );

    Some(Profile {
        dimensions,
        sample_count: analyses.len(),
        created_at: created_at.to_rfc3339(),
        total_words,
    })
}

/// Arithmetic mean, summed in sorted order so the result does not depend on
/// sample order
fn mean(values: &mut [f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    values.iter().sum::<f64>() / values.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const CASUAL: &str = "Hey, we're gonna make this super easy. You'll love it! Seriously, it's awesome.";
    const FORMAL: &str = "Therefore, the committee shall implement the aforementioned policy. \
        Subsequent reviews will be conducted quarterly. Moreover, compliance is mandatory.";

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 14, 9, 30, 0).unwrap()
    }

    #[test]
    fn test_empty_inputs() {
        let none: [&str; 0] = [];
        assert!(build(&none).is_none());
        assert!(build(&["", "   ", "\n"]).is_none());
    }

    #[test]
    fn test_skips_blank_samples() {
        let profile = build(&[CASUAL, "  ", FORMAL]).unwrap();
        assert_eq!(profile.sample_count, 2);
    }

    #[test]
    fn test_single_sample_matches_its_analysis() {
        let analysis = measure(FORMAL).unwrap();
        let profile = build(&[FORMAL]).unwrap();
        assert_eq!(profile.sample_count, 1);
        assert_eq!(profile.total_words, analysis.word_count);
        for dim in Dimension::all() {
            assert_eq!(profile.value(*dim), analysis.value(*dim), "{dim}");
        }
    }

    #[test]
    fn test_mean_rounded_to_tenth() {
        let a = measure(CASUAL).unwrap();
        let b = measure(FORMAL).unwrap();
        let profile = build(&[CASUAL, FORMAL]).unwrap();
        for dim in Dimension::all() {
            let expected = round_tenth((a.value(*dim) + b.value(*dim)) / 2.0);
            assert!(
                (profile.value(*dim) - expected).abs() < 1e-9,
                "{dim}: {} vs {}",
                profile.value(*dim),
                expected
            );
        }
        assert_eq!(profile.total_words, a.word_count + b.word_count);
    }

    #[test]
    fn test_order_independent() {
        let third = "Is it fast? Yes. Is it cheap? Also yes!";
        let forward = build_at(&[CASUAL, FORMAL, third], fixed_time()).unwrap();
        let reversed = build_at(&[third, FORMAL, CASUAL], fixed_time()).unwrap();
        let shuffled = build_at(&[FORMAL, third, CASUAL], fixed_time()).unwrap();
        assert_eq!(forward, reversed);
        assert_eq!(forward, shuffled);
    }

    #[test]
    fn test_created_at_is_rfc3339() {
        let profile = build_at(&[CASUAL], fixed_time()).unwrap();
        assert_eq!(profile.created_at, "2026-03-14T09:30:00+00:00");
        assert!(DateTime::parse_from_rfc3339(&profile.created_at).is_ok());
    }
}
