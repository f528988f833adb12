//! JSON reporter
//!
//! Pretty-printed JSON with the same camelCase keys a persisted profile uses.
//! Useful for piping to jq or feeding another tool.

use crate::analysis::Dimension;
use crate::labels::label_for;
use crate::models::Analysis;
use anyhow::Result;
use serde::Serialize;

/// Render any serializable result as JSON
pub fn render<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Render a measurement alongside its qualitative labels
pub fn render_analysis(source: &str, analysis: &Analysis) -> Result<String> {
    let labels: serde_json::Map<String, serde_json::Value> = Dimension::all()
        .iter()
        .map(|dim| {
            (
                dim.key().to_string(),
                serde_json::Value::from(label_for(*dim, analysis.value(*dim))),
            )
        })
        .collect();

    render(&serde_json::json!({
        "source": source,
        "analysis": analysis,
        "labels": labels,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::{test_checks, test_profile};

    #[test]
    fn test_checks_render_as_array() {
        let json_str = render(test_checks().as_slice()).expect("render JSON");
        let parsed: serde_json::Value = serde_json::from_str(&json_str).expect("parse JSON");
        let items = parsed.as_array().expect("array");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["source"], "on.txt");
        assert!(items[0]["overallScore"].is_u64());
        assert_eq!(items[0]["breakdown"].as_array().expect("breakdown").len(), 9);
        assert_eq!(items[0]["breakdown"][0]["key"], "formality");
        assert!(items[0]["current"]["wordCount"].is_u64());
    }

    #[test]
    fn test_profile_render() {
        let json_str = render(&test_profile()).expect("render JSON");
        let parsed: serde_json::Value = serde_json::from_str(&json_str).expect("parse JSON");
        assert_eq!(parsed["sampleCount"], 2);
        assert!(parsed["createdAt"].as_str().expect("createdAt").starts_with("2026-03-14"));
    }

    #[test]
    fn test_analysis_render_includes_labels() {
        let analysis = crate::analysis::measure("Therefore this is true.").expect("analysis");
        let json_str = render_analysis("<text>", &analysis).expect("render JSON");
        let parsed: serde_json::Value = serde_json::from_str(&json_str).expect("parse JSON");
        assert_eq!(parsed["analysis"]["formality"], 100.0);
        assert_eq!(parsed["labels"]["formality"], "Very Formal");
        assert_eq!(parsed["source"], "<text>");
    }
}
