//! Profile vs. text comparison

use crate::analysis::{measure, Dimension};
use crate::labels::tip_for;
use crate::models::{Analysis, ConsistencyResult, DimensionComparison, MatchStatus, Profile};
use tracing::{debug, info};

/// Score one dimension's drift against its tolerance (0-100)
pub fn score_dimension(profile_value: f64, current_value: f64, tolerance: f64) -> u32 {
    let diff = (profile_value - current_value).abs();
    let raw = if diff <= tolerance {
        100.0
    } else {
        (100.0 - (diff - tolerance) / tolerance * 100.0).max(0.0)
    };
    raw.round() as u32
}

/// Check `text` against `profile`.
///
/// Returns `None` when the text is blank or wordless, or when no profile is
/// given.
pub fn check<'a>(text: &str, profile: impl Into<Option<&'a Profile>>) -> Option<ConsistencyResult> {
    let profile = profile.into()?;
    let current = measure(text)?;
    Some(check_analysis(current, profile))
}

/// Compare an existing measurement against a profile
pub fn check_analysis(current: Analysis, profile: &Profile) -> ConsistencyResult {
    let mut weighted_total = 0.0;
    let mut weight_total = 0.0;
    let mut breakdown = Vec::with_capacity(Dimension::all().len());

    for dim in Dimension::all() {
        let profile_value = profile.value(*dim);
        let current_value = current.value(*dim);
        let score = score_dimension(profile_value, current_value, dim.tolerance());
        let status = MatchStatus::from_score(score);

        let tip = match status {
            MatchStatus::Match => None,
            _ => Some(tip_for(*dim, profile_value, current_value)),
        };

        debug!(
            "{}: profile={} current={} score={} ({})",
            dim.key(),
            profile_value,
            current_value,
            score,
            status
        );

        weighted_total += score as f64 * dim.weight();
        weight_total += dim.weight();

        breakdown.push(DimensionComparison {
            key: *dim,
            label: dim.label().to_string(),
            profile_value,
            current_value,
            score,
            status,
            tip,
        });
    }

    let overall_score = (weighted_total / weight_total).round() as u32;
    let result = ConsistencyResult {
        overall_score,
        breakdown,
        current,
    };

    info!(
        "Consistency score: {} ({}) with {} flagged dimensions",
        overall_score,
        result.verdict(),
        result.flagged().count()
    );

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calibrate::build;
    use crate::models::VoiceVector;

    fn flat_profile(value: f64) -> Profile {
        let mut dimensions = VoiceVector::default();
        for dim in Dimension::all() {
            dimensions.set(*dim, value);
        }
        Profile {
            dimensions,
            sample_count: 1,
            created_at: "2026-01-01T00:00:00+00:00".into(),
            total_words: 10,
        }
    }

    #[test]
    fn test_tolerance_plateau() {
        for dim in Dimension::all() {
            let t = dim.tolerance();
            assert_eq!(score_dimension(50.0, 50.0 + t, t), 100, "{dim}");
            assert_eq!(score_dimension(50.0, 50.0 - t, t), 100, "{dim}");
            assert_eq!(score_dimension(50.0, 50.0 + 2.0 * t, t), 0, "{dim}");
        }
    }

    #[test]
    fn test_linear_falloff() {
        // tolerance 20: diff 30 is half a tolerance past the plateau
        assert_eq!(score_dimension(50.0, 80.0, 20.0), 50);
        assert_eq!(score_dimension(50.0, 74.0, 20.0), 80);
        assert_eq!(score_dimension(0.0, 100.0, 20.0), 0);
        // rounds to nearest
        assert_eq!(score_dimension(10.0, 15.5, 5.0), 90);
        assert_eq!(score_dimension(10.0, 15.25, 5.0), 95);
    }

    #[test]
    fn test_absent_inputs() {
        let profile = flat_profile(50.0);
        assert!(check("", &profile).is_none());
        assert!(check("   ", &profile).is_none());
        assert!(check("Some text.", None::<&Profile>).is_none());
    }

    #[test]
    fn test_self_consistency() {
        let text = "We build tools for writers. Do you want to try them? They are free, and they are fast!";
        let profile = build(&[text]).unwrap();
        let result = check(text, &profile).unwrap();
        assert_eq!(result.overall_score, 100);
        for row in &result.breakdown {
            assert_eq!(row.score, 100, "{}", row.key);
            assert_eq!(row.status, MatchStatus::Match);
            assert!(row.tip.is_none());
        }
    }

    #[test]
    fn test_breakdown_in_canonical_order() {
        let result = check("A plain sentence.", &flat_profile(0.0)).unwrap();
        let keys: Vec<Dimension> = result.breakdown.iter().map(|r| r.key).collect();
        assert_eq!(keys, Dimension::all().to_vec());
        assert_eq!(result.breakdown[5].label, "Person/Perspective");
    }

    #[test]
    fn test_tip_iff_not_match() {
        let result = check(
            "OMG this is SO cool!!! You gotta see it, lol!",
            &flat_profile(50.0),
        )
        .unwrap();
        for row in &result.breakdown {
            assert!(row.score <= 100);
            assert_eq!(row.status, MatchStatus::from_score(row.score));
            assert_eq!(row.tip.is_some(), row.status != MatchStatus::Match, "{}", row.key);
        }
        assert!(result.overall_score <= 100);
    }

    #[test]
    fn test_overall_is_weighted_mean() {
        // Only formality (weight 1.5) drifts out of range; everything else
        // is within tolerance of a profile built from the same text.
        let text = "Therefore the plan holds.";
        let mut profile = build(&[text]).unwrap();
        profile.dimensions.formality = 0.0;
        let result = check(text, &profile).unwrap();
        assert_eq!(result.breakdown[0].score, 0);
        // round((0 * 1.5 + 100 * 7.5) / 9.0) = round(83.33)
        assert_eq!(result.overall_score, 83);
        assert_eq!(result.flagged().count(), 1);
        let tip = result.breakdown[0].tip.as_deref().unwrap();
        assert!(tip.contains("more formal"));
    }
}
