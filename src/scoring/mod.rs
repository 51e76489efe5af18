//! Scoring engine: per-combat results, aggregation and ranking

pub mod ranking;
pub mod score;
pub mod settings;
pub mod standing;

pub use ranking::{rank, summary, RankedStanding, Summary};
pub use score::{Cut, Hits, Matches, Score};
pub use settings::{FiorDellaSpada, ScoringSettings};
pub use standing::Standing;
