//! Ordering standings into a ranking table

use std::cmp::Ordering;
use std::collections::BTreeMap;

use super::score::{Hits, Score};
use super::standing::Standing;
use crate::core::types::CompetitorId;
use crate::entity::competitor::Competitor;

/// One row of a ranking
#[derive(Debug, Clone, PartialEq)]
pub struct RankedStanding {
    /// 1-based place in the ranking
    pub position: usize,
    pub competitor: Competitor,
    pub standing: Standing,
}

/// Totals over every competitor of a tournament
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    pub scored: Score,
    pub conceded: Score,
    /// Double hits of the tournament, each counted once
    pub double_hits: Hits,
}

/// Tiebreak order: CUT descending (undefined CUT last), fewer double hits,
/// more wins, then name.
fn compare(a: &(Competitor, Standing), b: &(Competitor, Standing)) -> Ordering {
    let (ca, sa) = a;
    let (cb, sb) = b;
    sb.cut()
        .rank_key()
        .cmp(&sa.cut().rank_key())
        .then(sa.double_hits.cmp(&sb.double_hits))
        .then(sb.wins.cmp(&sa.wins))
        .then_with(|| ca.name.as_str().cmp(cb.name.as_str()))
}

/// Rank tournament results. Results for ids that are not in `competitors`
/// are skipped.
///
/// Competitors with an undefined CUT (nothing scored or conceded) rank below
/// everyone who has fenced.
pub fn rank(
    competitors: &BTreeMap<CompetitorId, Competitor>,
    results: &BTreeMap<CompetitorId, Standing>,
) -> Vec<RankedStanding> {
    let mut rows: Vec<(Competitor, Standing)> = results
        .iter()
        .filter_map(|(id, standing)| match competitors.get(id) {
            Some(competitor) => Some((competitor.clone(), *standing)),
            None => {
                tracing::warn!("Standing for unknown competitor {} left out of ranking", id);
                None
            }
        })
        .collect();

    rows.sort_by(compare);

    rows.into_iter()
        .enumerate()
        .map(|(i, (competitor, standing))| RankedStanding {
            position: i + 1,
            competitor,
            standing,
        })
        .collect()
}

/// Sum every standing. Both fencers record each double hit, so the total is halved.
pub fn summary(results: &BTreeMap<CompetitorId, Standing>) -> Summary {
    let total: Standing = results.values().sum();
    Summary {
        scored: total.scored,
        conceded: total.conceded,
        double_hits: total.double_hits.half(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::names::{CompetitorName, RegistrationNumber};
    use crate::scoring::score::Matches;

    fn competitor(id: u64, name: &str) -> Competitor {
        Competitor::new(
            CompetitorId::new(id),
            RegistrationNumber::new(&format!("{}", 100 + id)).unwrap(),
            CompetitorName::new(name).unwrap(),
        )
    }

    fn standing(scored: u32, conceded: u32, wins: u32, double_hits: u32) -> Standing {
        Standing {
            matches: Matches::new(1),
            wins: Matches::new(wins),
            losses: Matches::NONE,
            scored: Score::new(scored),
            conceded: Score::new(conceded),
            double_hits: Hits::new(double_hits),
        }
    }

    fn roster(names: &[&str]) -> BTreeMap<CompetitorId, Competitor> {
        names
            .iter()
            .enumerate()
            .map(|(i, n)| (CompetitorId::new(i as u64), competitor(i as u64, n)))
            .collect()
    }

    fn names(ranking: &[RankedStanding]) -> Vec<&str> {
        ranking.iter().map(|r| r.competitor.name.as_str()).collect()
    }

    #[test]
    fn test_higher_cut_ranks_first() {
        let competitors = roster(&["Alice", "Bob", "Carla"]);
        let results = BTreeMap::from([
            (CompetitorId::new(0), standing(3, 7, 0, 0)),
            (CompetitorId::new(1), standing(7, 0, 1, 0)),
            (CompetitorId::new(2), standing(7, 3, 1, 0)),
        ]);

        let ranking = rank(&competitors, &results);
        assert_eq!(names(&ranking), vec!["Bob", "Carla", "Alice"]);
        assert_eq!(ranking[0].position, 1);
        assert_eq!(ranking[2].position, 3);
    }

    #[test]
    fn test_tiebreaks_double_hits_then_wins_then_name() {
        let competitors = roster(&["Dora", "Bob", "Anna", "Carl"]);
        let results = BTreeMap::from([
            (CompetitorId::new(0), standing(6, 6, 0, 2)),
            (CompetitorId::new(1), standing(6, 6, 0, 1)),
            (CompetitorId::new(2), standing(6, 6, 1, 1)),
            (CompetitorId::new(3), standing(6, 6, 1, 1)),
        ]);

        let ranking = rank(&competitors, &results);
        assert_eq!(names(&ranking), vec!["Anna", "Carl", "Bob", "Dora"]);
    }

    #[test]
    fn test_without_bouts_ranks_last() {
        let competitors = roster(&["Idle", "Loser"]);
        let results = BTreeMap::from([
            (CompetitorId::new(0), Standing::default()),
            (CompetitorId::new(1), standing(0, 7, 0, 0)),
        ]);

        let ranking = rank(&competitors, &results);
        assert_eq!(names(&ranking), vec!["Loser", "Idle"]);
    }

    #[test]
    fn test_unknown_competitor_skipped() {
        let competitors = roster(&["Alice"]);
        let results = BTreeMap::from([
            (CompetitorId::new(0), standing(7, 3, 1, 0)),
            (CompetitorId::new(9), standing(3, 7, 0, 0)),
        ]);

        assert_eq!(rank(&competitors, &results).len(), 1);
    }

    #[test]
    fn test_summary_halves_double_hits() {
        let results = BTreeMap::from([
            (CompetitorId::new(0), standing(7, 3, 1, 2)),
            (CompetitorId::new(1), standing(3, 7, 0, 2)),
        ]);

        let totals = summary(&results);
        assert_eq!(totals.scored, Score::new(10));
        assert_eq!(totals.conceded, Score::new(10));
        assert_eq!(totals.double_hits, Hits::new(2));
    }

    #[test]
    fn test_summary_of_nothing() {
        assert_eq!(summary(&BTreeMap::new()), Summary::default());
    }
}
