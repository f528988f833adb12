//! Markdown reporter for GitHub-flavored Markdown output
//!
//! Suitable for pull request comments on copy changes and for pasting a
//! profile into a style guide.

use super::{format_created, plural, CheckedText, RenderOptions};
use crate::analysis::Dimension;
use crate::labels::label_for;
use crate::models::{Analysis, ConsistencyResult, MatchStatus, Profile, Verdict};
use anyhow::Result;
use chrono::Local;

/// Render consistency results as GitHub-flavored Markdown
pub fn render_checks(checks: &[CheckedText], options: RenderOptions) -> Result<String> {
    let mut md = String::new();

    md.push_str("# Voice Consistency Report\n\n");
    md.push_str(&format!(
        "Generated: {}\n\n",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    ));

    if checks.len() > 1 {
        md.push_str(&render_summary_table(checks, options));
        md.push('\n');
    }

    for check in checks {
        md.push_str(&render_check(check, options));
        md.push('\n');
    }

    md.push_str(&render_footer());
    Ok(md)
}

fn verdict_emoji(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::OnBrand => "🎯",
        Verdict::MostlyConsistent => "👍",
        Verdict::SomewhatOff => "⚠️",
        Verdict::OffBrand => "❌",
    }
}

fn status_cell(status: MatchStatus, no_emoji: bool) -> String {
    if no_emoji {
        return status.to_string();
    }
    let emoji = match status {
        MatchStatus::Match => "✅",
        MatchStatus::Partial => "⚠️",
        MatchStatus::Mismatch => "❌",
    };
    format!("{emoji} {status}")
}

fn render_summary_table(checks: &[CheckedText], options: RenderOptions) -> String {
    let mut md = String::from("## Summary\n\n| Source | Score | Verdict |\n|--------|------:|---------|\n");
    for check in checks {
        md.push_str(&format!(
            "| `{}` | {} | {} |\n",
            check.source,
            check.result.overall_score,
            verdict_text(&check.result, options)
        ));
    }
    md
}

fn verdict_text(result: &ConsistencyResult, options: RenderOptions) -> String {
    let verdict = result.verdict();
    if options.no_emoji {
        verdict.to_string()
    } else {
        format!("{} {}", verdict_emoji(verdict), verdict)
    }
}

fn render_check(check: &CheckedText, options: RenderOptions) -> String {
    let result = &check.result;
    let mut md = format!(
        "## `{}`\n\n**Score: {}/100** | **{}**\n\n> {}\n\n",
        check.source,
        result.overall_score,
        verdict_text(result, options),
        result.verdict().summary()
    );

    md.push_str("| Dimension | Profile | Current | Score | Status |\n");
    md.push_str("|-----------|--------:|--------:|------:|--------|\n");
    for row in &result.breakdown {
        md.push_str(&format!(
            "| {} | {} | {} | {} | {} |\n",
            row.label,
            row.profile_value,
            row.current_value,
            row.score,
            status_cell(row.status, options.no_emoji)
        ));
    }

    let tips: Vec<_> = result
        .flagged()
        .filter_map(|row| row.tip.as_ref().map(|tip| (row.label.as_str(), tip)))
        .collect();
    if !tips.is_empty() {
        md.push_str("\n### Tips\n\n");
        for (label, tip) in tips {
            md.push_str(&format!("- **{label}**: {tip}\n"));
        }
    }

    md
}

/// Render a profile as a Markdown table
pub fn render_profile(profile: &Profile, _options: RenderOptions) -> Result<String> {
    let mut md = String::from("# Voice Profile\n\n");
    md.push_str(&format!(
        "Built from **{}** ({}) on {}\n\n",
        plural(profile.sample_count, "sample"),
        plural(profile.total_words, "word"),
        format_created(&profile.created_at)
    ));
    md.push_str(&dimension_table(|dim| profile.value(dim)));
    md.push('\n');
    md.push_str(&render_footer());
    Ok(md)
}

/// Render one measurement as a Markdown table
pub fn render_analysis(source: &str, analysis: &Analysis) -> Result<String> {
    let mut md = format!("# Voice Measurement: `{source}`\n\n");
    md.push_str(&format!(
        "{}, {}\n\n",
        plural(analysis.word_count, "word"),
        plural(analysis.sentence_count, "sentence")
    ));
    md.push_str(&dimension_table(|dim| analysis.value(dim)));
    Ok(md)
}

fn dimension_table(value_of: impl Fn(Dimension) -> f64) -> String {
    let mut md = String::from("| Dimension | Value | Reading | Range |\n");
    md.push_str("|-----------|------:|---------|-------|\n");
    for dim in Dimension::all() {
        let value = value_of(*dim);
        let (low, high) = dim.poles();
        md.push_str(&format!(
            "| {} | {} | {} | {} to {} |\n",
            dim.label(),
            value,
            label_for(*dim, value),
            low,
            high
        ));
    }
    md
}

fn render_footer() -> String {
    "---\n\n*Generated by voiceprint*\n".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::{test_checks, test_profile};

    #[test]
    fn test_checks_render() {
        let md = render_checks(&test_checks(), RenderOptions::default()).expect("render markdown");
        assert!(md.starts_with("# Voice Consistency Report"));
        assert!(md.contains("## Summary"));
        assert!(md.contains("## `on.txt`"));
        assert!(md.contains("| Dimension | Profile | Current | Score | Status |"));
        assert!(md.contains("### Tips"));
    }

    #[test]
    fn test_single_check_skips_summary() {
        let checks = test_checks();
        let md = render_checks(&checks[..1], RenderOptions::default()).expect("render markdown");
        assert!(!md.contains("## Summary"));
    }

    #[test]
    fn test_no_emoji() {
        let md = render_checks(&test_checks(), RenderOptions { no_emoji: true })
            .expect("render markdown");
        assert!(!md.contains('✅'));
        assert!(!md.contains('🎯'));
    }

    #[test]
    fn test_profile_render() {
        let md = render_profile(&test_profile(), RenderOptions::default()).expect("render markdown");
        assert!(md.contains("**2 samples**"));
        assert!(md.contains("Mar 14, 2026"));
        assert!(md.contains("| Formality |"));
        assert!(md.contains("Casual to Formal"));
    }
}
