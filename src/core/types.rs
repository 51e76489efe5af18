//! Identifier types and deterministic id allocation

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Ids that are handed out in increasing order and never reused
pub trait SequentialId: Copy + Ord {
    /// First id handed out when nothing exists yet
    fn initial() -> Self;

    /// The id directly after this one
    fn successor(self) -> Self;
}

/// Next free id: one past the largest existing id, or the initial id.
///
/// Pure function of its input, so there is no counter to keep in sync with
/// the data it describes.
pub fn next_id<I, Id>(existing: I) -> Id
where
    I: IntoIterator<Item = Id>,
    Id: SequentialId,
{
    existing
        .into_iter()
        .max()
        .map(SequentialId::successor)
        .unwrap_or_else(Id::initial)
}

/// Unique identifier for competitors within an event
#[derive(
    Debug, Display, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct CompetitorId(u64);

impl CompetitorId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl SequentialId for CompetitorId {
    fn initial() -> Self {
        Self(0)
    }

    fn successor(self) -> Self {
        Self(self.0 + 1)
    }
}

/// Unique identifier for tournaments within an event
#[derive(
    Debug, Display, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TournamentId(u64);

impl TournamentId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl SequentialId for TournamentId {
    fn initial() -> Self {
        Self(0)
    }

    fn successor(self) -> Self {
        Self(self.0 + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_id_of_nothing_is_initial() {
        let none: Vec<CompetitorId> = Vec::new();
        assert_eq!(next_id(none), CompetitorId::initial());
        assert_eq!(next_id(std::iter::empty::<TournamentId>()), TournamentId::new(0));
    }

    #[test]
    fn test_next_id_skips_past_max() {
        let ids = [CompetitorId::new(3), CompetitorId::new(0), CompetitorId::new(7)];
        assert_eq!(next_id(ids), CompetitorId::new(8));
    }

    #[test]
    fn test_next_id_ignores_gaps() {
        // Gaps are never refilled, ids are not reused
        let ids = [TournamentId::new(0), TournamentId::new(5)];
        assert_eq!(next_id(ids), TournamentId::new(6));
    }

    #[test]
    fn test_ids_order_and_display() {
        assert!(CompetitorId::new(1) < CompetitorId::new(2));
        assert_eq!(CompetitorId::new(42).to_string(), "42");
        assert_eq!(TournamentId::new(3).get(), 3);
    }

    #[test]
    fn test_id_serializes_as_plain_number() {
        let json = serde_json::to_string(&CompetitorId::new(9)).unwrap();
        assert_eq!(json, "9");
        let back: CompetitorId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, CompetitorId::new(9));
    }
}
