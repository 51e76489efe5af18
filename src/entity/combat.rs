use serde::{Deserialize, Serialize};

use crate::core::types::CompetitorId;
use crate::scoring::score::{Hits, Score};

/// One recorded bout
///
/// Any scores are legal, ties included. Whether both fencers may fight in a
/// tournament is checked when the combat is registered there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Combat {
    pub competitor_a: CompetitorId,
    pub competitor_b: CompetitorId,
    pub score_a: Score,
    pub score_b: Score,
    pub double_hits: Hits,
}

impl Combat {
    pub fn new(
        competitor_a: CompetitorId,
        competitor_b: CompetitorId,
        score_a: Score,
        score_b: Score,
        double_hits: Hits,
    ) -> Self {
        Self {
            competitor_a,
            competitor_b,
            score_a,
            score_b,
            double_hits,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_field_names() {
        let combat = Combat::new(
            CompetitorId::new(4),
            CompetitorId::new(2),
            Score::new(7),
            Score::new(7),
            Hits::NONE,
        );

        assert_eq!(
            serde_json::to_value(combat).unwrap(),
            serde_json::json!({
                "competitor_a": 4,
                "competitor_b": 2,
                "score_a": 7,
                "score_b": 7,
                "double_hits": 0
            })
        );
    }
}
