//! Scoring rules
//!
//! [`ScoringSettings`] is a closed set of rule variants. Adding a rule means
//! adding a variant and one arm to each `match` below.

use serde::{Deserialize, Serialize};

use super::score::{Hits, Matches, Score};
use super::standing::Standing;
use crate::core::types::CompetitorId;
use crate::entity::combat::Combat;

/// Points awarded for the best single action in Fior della Spada rules
const MAX_AWARDED: u32 = 3;

const DEFAULT_WINNING_THRESHOLD: Score = Score::new(7);

/// Active scoring rule of a tournament
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ScoringSettings {
    #[serde(rename = "fior-della-spada-scoring")]
    FiorDellaSpada(FiorDellaSpada),
}

impl Default for ScoringSettings {
    fn default() -> Self {
        ScoringSettings::FiorDellaSpada(FiorDellaSpada::default())
    }
}

impl ScoringSettings {
    pub fn fior_della_spada(winning_threshold: Score) -> Self {
        ScoringSettings::FiorDellaSpada(FiorDellaSpada::new(winning_threshold))
    }

    /// Split one combat into the standing of each participant, `a` first
    pub fn result_of_combat(&self, combat: &Combat) -> [(CompetitorId, Standing); 2] {
        match self {
            ScoringSettings::FiorDellaSpada(rules) => rules.result_of_combat(combat),
        }
    }

    /// Did the combat have too many double hits to be scored normally?
    pub fn is_punished(&self, combat: &Combat) -> bool {
        match self {
            ScoringSettings::FiorDellaSpada(rules) => rules.is_punished(combat),
        }
    }

    /// Standing given to both fencers of a punished combat
    pub fn punishment_result(&self) -> Standing {
        match self {
            ScoringSettings::FiorDellaSpada(rules) => rules.punishment_result(),
        }
    }

    pub fn winning_threshold(&self) -> Score {
        match self {
            ScoringSettings::FiorDellaSpada(rules) => rules.winning_threshold,
        }
    }

    pub fn double_hit_threshold(&self) -> Hits {
        match self {
            ScoringSettings::FiorDellaSpada(rules) => rules.double_hit_threshold(),
        }
    }

    /// Same rule with the winning threshold replaced
    pub fn with_winning_threshold(self, threshold: Score) -> Self {
        match self {
            ScoringSettings::FiorDellaSpada(rules) => {
                ScoringSettings::FiorDellaSpada(rules.with_winning_threshold(threshold))
            }
        }
    }
}

/// Fior della Spada: bouts go to a winning threshold and too many double
/// hits turn the bout into a loss for both fencers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct FiorDellaSpada {
    pub winning_threshold: Score,
}

impl Default for FiorDellaSpada {
    fn default() -> Self {
        Self {
            winning_threshold: DEFAULT_WINNING_THRESHOLD,
        }
    }
}

impl FiorDellaSpada {
    pub fn new(winning_threshold: Score) -> Self {
        Self { winning_threshold }
    }

    pub fn with_winning_threshold(self, winning_threshold: Score) -> Self {
        Self { winning_threshold }
    }

    /// Most double hits a bout may contain: `ceil(threshold / 3) - 1`.
    ///
    /// Saturates at zero for a zero threshold.
    pub fn double_hit_threshold(&self) -> Hits {
        Hits::new(
            self.winning_threshold
                .get()
                .div_ceil(MAX_AWARDED)
                .saturating_sub(1),
        )
    }

    pub fn is_punished(&self, combat: &Combat) -> bool {
        combat.double_hits > self.double_hit_threshold()
    }

    pub fn punishment_result(&self) -> Standing {
        Standing {
            matches: Matches::ONE,
            wins: Matches::NONE,
            losses: Matches::ONE,
            scored: Score::ZERO,
            conceded: self.winning_threshold,
            double_hits: self.double_hit_threshold() + Hits::new(1),
        }
    }

    pub fn result_of_combat(&self, combat: &Combat) -> [(CompetitorId, Standing); 2] {
        if self.is_punished(combat) {
            let punished = self.punishment_result();
            return [(combat.competitor_a, punished), (combat.competitor_b, punished)];
        }

        [
            (
                combat.competitor_a,
                Standing::from_bout(combat.score_a, combat.score_b, combat.double_hits),
            ),
            (
                combat.competitor_b,
                Standing::from_bout(combat.score_b, combat.score_a, combat.double_hits),
            ),
        ]
    }
}
