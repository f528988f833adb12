//! voiceprint - tone and voice consistency analysis
//!
//! Distills 2-3 reference writing samples into a voice profile along nine
//! stylistic dimensions, then scores new copy against that profile.
//!
//! The engine is synchronous and stateless. Every operation is a pure
//! function of its inputs and reports "nothing to work with" as `None`:
//!
//! ```
//! use voiceprint::{build, check, label_for, Dimension};
//!
//! let profile = build(&[
//!     "We make it simple. You sign up, we do the rest.",
//!     "Our team loves helping you. Questions? Just ask.",
//! ])
//! .expect("non-empty samples");
//!
//! let result = check("You will love how easy we make it.", &profile).expect("non-empty text");
//! assert!(result.overall_score <= 100);
//! println!("{}", label_for(Dimension::Formality, profile.dimensions.formality));
//! ```
//!
//! Persistence and presentation belong to the caller. The bundled CLI is one
//! such caller.

pub mod analysis;
pub mod calibrate;
pub mod config;
pub mod labels;
pub mod models;
pub mod reporters;
pub mod scoring;
pub mod store;

pub use analysis::{measure, Dimension};
pub use calibrate::build;
pub use labels::{label_for, label_for_key, tip_for};
pub use models::{
    Analysis, ConsistencyResult, DimensionComparison, MatchStatus, Profile, Verdict, VoiceVector,
};
pub use scoring::check;
