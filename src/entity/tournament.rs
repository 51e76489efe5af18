//! Tournament: registered fencers, combat record and standings

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use super::combat::Combat;
use super::names::TournamentName;
use crate::core::types::{CompetitorId, TournamentId};
use crate::core::validation::{ensure, zip, Validated};
use crate::persistence::document::TournamentDocument;
use crate::scoring::score::Score;
use crate::scoring::settings::ScoringSettings;
use crate::scoring::standing::Standing;

/// A tournament within an event
///
/// # Invariants
/// - Every combat in the record was fought between registered competitors.
/// - Registrations are never removed and combats are never edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TournamentDocument", into = "TournamentDocument")]
pub struct Tournament {
    id: TournamentId,
    name: TournamentName,
    scoring_settings: ScoringSettings,
    registered: BTreeSet<CompetitorId>,
    record: Vec<Combat>,
}

impl Tournament {
    /// New tournament with nobody registered and no combats
    pub fn new(id: TournamentId, name: TournamentName, scoring_settings: ScoringSettings) -> Self {
        Self {
            id,
            name,
            scoring_settings,
            registered: BTreeSet::new(),
            record: Vec::new(),
        }
    }

    /// Rebuild a tournament from stored parts, checking the combat record
    pub(crate) fn from_parts(
        id: TournamentId,
        name: TournamentName,
        scoring_settings: ScoringSettings,
        registered: BTreeSet<CompetitorId>,
        record: Vec<Combat>,
    ) -> Validated<Self> {
        let empty = Self {
            id,
            name,
            scoring_settings,
            registered,
            record: Vec::with_capacity(record.len()),
        };

        let checks = record.iter().map(|combat| empty.ensure_participants_registered(combat));
        crate::core::validation::accumulate(checks)?;

        Ok(Self { record, ..empty })
    }

    pub fn id(&self) -> TournamentId {
        self.id
    }

    pub fn name(&self) -> &TournamentName {
        &self.name
    }

    pub fn scoring_settings(&self) -> &ScoringSettings {
        &self.scoring_settings
    }

    pub fn registered(&self) -> &BTreeSet<CompetitorId> {
        &self.registered
    }

    pub fn record(&self) -> &[Combat] {
        &self.record
    }

    pub fn is_registered(&self, competitor: CompetitorId) -> bool {
        self.registered.contains(&competitor)
    }

    /// Add a competitor to the registration set. Registering twice is a no-op.
    ///
    /// Whether the competitor exists is the enclosing event's business.
    pub fn register_competitor(&self, competitor: CompetitorId) -> Tournament {
        let mut next = self.clone();
        next.registered.insert(competitor);
        next
    }

    /// Append a combat to the record. Both participants must be registered;
    /// if neither is, both are reported.
    pub fn register_combat(&self, combat: Combat) -> Validated<Tournament> {
        self.ensure_participants_registered(&combat)?;

        let mut next = self.clone();
        next.record.push(combat);
        Ok(next)
    }

    /// Standings of every registered competitor under the active scoring rule.
    ///
    /// Competitors without combats appear with an empty standing. Nothing is
    /// cached: a changed rule applies to the whole record.
    pub fn get_results(&self) -> BTreeMap<CompetitorId, Standing> {
        let seed: BTreeMap<CompetitorId, Standing> = self
            .registered
            .iter()
            .map(|&id| (id, Standing::default()))
            .collect();

        self.record
            .iter()
            .flat_map(|combat| self.scoring_settings.result_of_combat(combat))
            .fold(seed, |mut totals, (id, standing)| {
                *totals.entry(id).or_default() += standing;
                totals
            })
    }

    /// Same tournament scored under a different winning threshold.
    ///
    /// The record is kept; standings are recomputed from it on demand.
    pub fn with_winning_threshold(&self, threshold: Score) -> Tournament {
        let mut next = self.clone();
        next.scoring_settings = self.scoring_settings.with_winning_threshold(threshold);
        next
    }

    fn ensure_participants_registered(&self, combat: &Combat) -> Validated<()> {
        zip(
            self.ensure_registered(combat.competitor_a),
            self.ensure_registered(combat.competitor_b),
        )
        .map(|_| ())
    }

    fn ensure_registered(&self, competitor: CompetitorId) -> Validated<()> {
        ensure(self.is_registered(competitor), || {
            format!(
                "Competitor {} is not registered for tournament {}",
                competitor, self.name
            )
        })
    }
}
