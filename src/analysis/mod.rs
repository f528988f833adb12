//! Text measurement
//!
//! Splits raw text into words and sentences once, then runs the nine
//! dimension extractors over that shared segmentation.

mod dimension;
mod extract;
pub mod markers;
pub mod tokenizer;

pub use dimension::Dimension;
pub use extract::{count_syllables, measure, passive_count};

pub(crate) use extract::round_tenth;
