//! Voice consistency scoring
//!
//! Compares a fresh measurement against a profile, one dimension at a time,
//! then folds the dimension scores into a weighted overall score.
//!
//! # Scoring Formula
//!
//! ```text
//! diff  = |profile - current|
//! score = 100                                   if diff <= tolerance
//!       = max(0, 100 - (diff - tol) / tol * 100) otherwise
//!
//! Overall = round(Σ score × weight / Σ weight)
//! ```
//!
//! A dimension therefore keeps a full score anywhere inside its tolerance
//! band and reaches zero at twice the tolerance.
//!
//! # Status buckets
//!
//! - score ≥ 80: match
//! - 50 ≤ score < 80: partial (tip attached)
//! - score < 50: mismatch (tip attached)

mod consistency;

pub use consistency::{check, check_analysis, score_dimension};
