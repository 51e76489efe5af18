//! Per-competitor performance accumulator
//!
//! A [`Standing`] is the outcome of one combat for one fencer, or the sum of
//! many. Summation is field-wise, so it is associative and commutative with
//! [`Standing::default`] as identity. A standing carries no competitor id:
//! callers group by id first and only ever add standings of the same fencer.

use derive_more::Add;
use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::AddAssign;

use super::score::{Cut, Hits, Matches, Score};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Add, Serialize, Deserialize)]
pub struct Standing {
    pub matches: Matches,
    pub wins: Matches,
    pub losses: Matches,
    pub scored: Score,
    pub conceded: Score,
    pub double_hits: Hits,
}

impl Standing {
    /// One regularly scored bout from the point of view of the fencer who
    /// scored `scored`. Equal scores are neither a win nor a loss.
    pub fn from_bout(scored: Score, conceded: Score, double_hits: Hits) -> Self {
        Self {
            matches: Matches::ONE,
            wins: if scored > conceded { Matches::ONE } else { Matches::NONE },
            losses: if scored < conceded { Matches::ONE } else { Matches::NONE },
            scored,
            conceded,
            double_hits,
        }
    }

    /// Ratio of scored to conceded points, computed on demand
    pub fn cut(&self) -> Cut {
        self.scored / self.conceded
    }
}

impl AddAssign for Standing {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for Standing {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Standing::default(), |acc, s| acc + s)
    }
}

impl<'a> Sum<&'a Standing> for Standing {
    fn sum<I: Iterator<Item = &'a Standing>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bout(scored: u32, conceded: u32, double_hits: u32) -> Standing {
        Standing::from_bout(Score::new(scored), Score::new(conceded), Hits::new(double_hits))
    }

    #[test]
    fn test_from_bout_win_loss_tie() {
        let win = bout(7, 3, 1);
        assert_eq!(win.wins, Matches::ONE);
        assert_eq!(win.losses, Matches::NONE);

        let loss = bout(3, 7, 1);
        assert_eq!(loss.wins, Matches::NONE);
        assert_eq!(loss.losses, Matches::ONE);

        let tie = bout(5, 5, 0);
        assert_eq!(tie.matches, Matches::ONE);
        assert_eq!(tie.wins, Matches::NONE);
        assert_eq!(tie.losses, Matches::NONE);
    }

    #[test]
    fn test_default_is_identity() {
        let s = bout(7, 3, 2);
        assert_eq!(s + Standing::default(), s);
        assert_eq!(Standing::default() + s, s);
    }

    #[test]
    fn test_addition_is_field_wise() {
        let total = bout(7, 3, 1) + bout(2, 7, 2);
        assert_eq!(total.matches, Matches::new(2));
        assert_eq!(total.wins, Matches::new(1));
        assert_eq!(total.losses, Matches::new(1));
        assert_eq!(total.scored, Score::new(9));
        assert_eq!(total.conceded, Score::new(10));
        assert_eq!(total.double_hits, Hits::new(3));
    }

    #[test]
    fn test_sum_in_any_order() {
        let a = bout(7, 3, 0);
        let b = bout(4, 7, 2);
        let c = bout(6, 6, 1);

        let forward: Standing = [a, b, c].iter().sum();
        let backward: Standing = [c, b, a].into_iter().sum();
        let grouped = a + (b + c);

        assert_eq!(forward, backward);
        assert_eq!(forward, grouped);
        assert_eq!(forward.matches, Matches::new(3));
    }

    #[test]
    fn test_add_assign() {
        let mut total = Standing::default();
        total += bout(7, 0, 0);
        total += bout(7, 0, 0);
        assert_eq!(total.scored, Score::new(14));
        assert!(total.cut().is_infinite());
    }

    #[test]
    fn test_cut_of_empty_standing_is_undefined() {
        assert!(!Standing::default().cut().is_defined());
    }
}
