//! Weighted merge of judge and grounded signals, and the composite scores.
//!
//! ```text
//! merged = 0.6 * judge + 0.4 * grounded            (per signal)
//! CARS   = 0.40*F + 0.25*R + 0.20*E + 0.15*C
//! TCS    = (1 - FNLS) * CARS
//! HP     = 1 - TCS
//! ```
//!
//! Under [`MergeStrategy::Eliminating`] a response whose grounded factual
//! accuracy is below the floor gets CARS `-1.0`, TCS `0.0` and HP `1.0`.

pub mod error;
pub mod merger;
pub mod types;


pub use error::ScoringError;
pub use merger::{compose, merge};
pub use types::{CompositeScores, MergeStrategy, MergedSignals};
