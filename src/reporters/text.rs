//! Text (terminal) reporter with colors and formatting

use super::{format_created, plural, CheckedText, RenderOptions};
use crate::analysis::Dimension;
use crate::labels::label_for;
use crate::models::{Analysis, MatchStatus, Profile, Verdict};
use anyhow::Result;

/// Verdict colors (ANSI escape codes)
fn verdict_color(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::OnBrand => "\x1b[32m",          // Green
        Verdict::MostlyConsistent => "\x1b[92m", // Light green
        Verdict::SomewhatOff => "\x1b[33m",      // Yellow
        Verdict::OffBrand => "\x1b[31m",         // Red
    }
}

fn status_color(status: MatchStatus) -> &'static str {
    match status {
        MatchStatus::Match => "\x1b[32m",
        MatchStatus::Partial => "\x1b[33m",
        MatchStatus::Mismatch => "\x1b[31m",
    }
}

fn status_tag(status: MatchStatus, no_emoji: bool) -> &'static str {
    match (status, no_emoji) {
        (MatchStatus::Match, false) => "✅",
        (MatchStatus::Partial, false) => "⚠️ ",
        (MatchStatus::Mismatch, false) => "❌",
        (MatchStatus::Match, true) => "[ok]",
        (MatchStatus::Partial, true) => "[~~]",
        (MatchStatus::Mismatch, true) => "[!!]",
    }
}

/// Reset ANSI color
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

const RULE: &str = "──────────────────────────────────────";
const GAUGE_WIDTH: usize = 20;

/// Render consistency results as formatted terminal output
pub fn render_checks(checks: &[CheckedText], options: RenderOptions) -> Result<String> {
    let mut out = String::new();

    for check in checks {
        let result = &check.result;
        let verdict = result.verdict();
        let vc = verdict_color(verdict);

        out.push_str(&format!("\n{BOLD}Voice Check{RESET} {DIM}{}{RESET}\n", check.source));
        out.push_str(&format!("{DIM}{RULE}{RESET}\n"));
        out.push_str(&format!(
            "Score: {vc}{BOLD}{}/100{RESET}  {vc}{}{RESET}  ",
            result.overall_score, verdict
        ));
        out.push_str(&format!(
            "Words: {}  Sentences: {}\n",
            result.current.word_count, result.current.sentence_count
        ));
        out.push_str(&format!("{DIM}{}{RESET}\n\n", verdict.summary()));

        out.push_str(&format!(
            "{DIM}  {:<26} {:>8} {:>8} {:>6}{RESET}\n",
            "DIMENSION", "PROFILE", "CURRENT", "SCORE"
        ));
        for row in &result.breakdown {
            let sc = status_color(row.status);
            out.push_str(&format!(
                "  {} {:<23} {:>8} {:>8} {sc}{:>6}{RESET}\n",
                status_tag(row.status, options.no_emoji),
                row.label,
                row.profile_value,
                row.current_value,
                row.score
            ));
        }

        let flagged: Vec<_> = result.flagged().collect();
        if !flagged.is_empty() {
            out.push_str(&format!("\n{BOLD}TIPS{RESET}\n"));
            for row in flagged {
                if let Some(tip) = &row.tip {
                    out.push_str(&format!("  {BOLD}{}{RESET}: {}\n", row.label, tip));
                }
            }
        }
    }

    Ok(out)
}

/// Render a profile card with one gauge per dimension
pub fn render_profile(profile: &Profile, _options: RenderOptions) -> Result<String> {
    let mut out = String::new();

    out.push_str(&format!("\n{BOLD}Voice Profile{RESET}\n"));
    out.push_str(&format!("{DIM}{RULE}{RESET}\n"));
    out.push_str(&format!(
        "Built from {}  {DIM}|{RESET}  {}  {DIM}|{RESET}  Created {}\n\n",
        plural(profile.sample_count, "sample"),
        plural(profile.total_words, "word"),
        format_created(&profile.created_at)
    ));

    for dim in Dimension::all() {
        let value = profile.value(*dim);
        out.push_str(&gauge_line(*dim, value));
    }

    Ok(out)
}

/// Render one measurement with gauges
pub fn render_analysis(source: &str, analysis: &Analysis) -> Result<String> {
    let mut out = String::new();

    out.push_str(&format!("\n{BOLD}Voice Measurement{RESET} {DIM}{source}{RESET}\n"));
    out.push_str(&format!("{DIM}{RULE}{RESET}\n"));
    out.push_str(&format!(
        "{}  {DIM}|{RESET}  {}\n\n",
        plural(analysis.word_count, "word"),
        plural(analysis.sentence_count, "sentence")
    ));

    for dim in Dimension::all() {
        out.push_str(&gauge_line(*dim, analysis.value(*dim)));
    }

    Ok(out)
}

fn gauge_line(dim: Dimension, value: f64) -> String {
    let (low, high) = dim.poles();
    format!(
        "  {BOLD}{:<23}{RESET} {:<18} {:>6}\n  {DIM}{:<11}{RESET} {} {DIM}{}{RESET}\n",
        dim.label(),
        label_for(dim, value),
        value,
        low,
        gauge_bar(dim.gauge_percent(value)),
        high
    )
}

/// Fixed-width bar filled proportionally to `percent`
fn gauge_bar(percent: f64) -> String {
    let filled = ((percent / 100.0) * GAUGE_WIDTH as f64).round() as usize;
    let filled = filled.min(GAUGE_WIDTH);
    format!("{}{}", "█".repeat(filled), "░".repeat(GAUGE_WIDTH - filled))
}
