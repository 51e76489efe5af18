//! The event aggregate
//!
//! An [`Event`] is an immutable snapshot. Every operation returns a new,
//! fully valid event or the list of every rule it broke; the receiver is never
//! touched. Snapshots share structure: the competitor map and the tournaments
//! that an operation doesn't touch are reference-counted and reused, and only
//! the changed path is copied (`Arc::make_mut`).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

use super::combat::Combat;
use super::competitor::Competitor;
use super::names::{CompetitorName, EventName, RegistrationNumber, TournamentName};
use super::tournament::Tournament;
use crate::core::types::{next_id, CompetitorId, SequentialId, TournamentId};
use crate::core::validation::{ensure, fail, zip, Validated};
use crate::persistence::document::EventDocument;
use crate::scoring::score::Score;
use crate::scoring::settings::ScoringSettings;

/// Root aggregate: competitors and the tournaments they fence in
///
/// # Invariants
/// - Map keys equal the ids of the competitors and tournaments they hold.
/// - Competitor ids and registration numbers are unique.
/// - Tournaments only register competitors that exist in the event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "EventDocument", into = "EventDocument")]
pub struct Event {
    name: EventName,
    competitors: Arc<BTreeMap<CompetitorId, Competitor>>,
    tournaments: Arc<BTreeMap<TournamentId, Arc<Tournament>>>,
}

impl Event {
    /// Event without competitors or tournaments
    pub fn new(name: EventName) -> Self {
        Self {
            name,
            competitors: Arc::new(BTreeMap::new()),
            tournaments: Arc::new(BTreeMap::new()),
        }
    }

    /// Event with a single empty tournament under the initial tournament id
    pub fn with_default_tournament(
        name: EventName,
        tournament_name: TournamentName,
        scoring_settings: ScoringSettings,
    ) -> Self {
        let tournament = Tournament::new(TournamentId::initial(), tournament_name, scoring_settings);
        Self::new(name).with_tournament(tournament)
    }

    pub(crate) fn from_parts(
        name: EventName,
        competitors: BTreeMap<CompetitorId, Competitor>,
        tournaments: BTreeMap<TournamentId, Tournament>,
    ) -> Self {
        Self {
            name,
            competitors: Arc::new(competitors),
            tournaments: Arc::new(
                tournaments
                    .into_iter()
                    .map(|(id, t)| (id, Arc::new(t)))
                    .collect(),
            ),
        }
    }

    pub fn name(&self) -> &EventName {
        &self.name
    }

    pub fn competitors(&self) -> &BTreeMap<CompetitorId, Competitor> {
        &self.competitors
    }

    pub fn tournaments(&self) -> impl Iterator<Item = &Tournament> {
        self.tournaments.values().map(Arc::as_ref)
    }

    pub fn competitor(&self, id: CompetitorId) -> Option<&Competitor> {
        self.competitors.get(&id)
    }

    pub fn tournament(&self, id: TournamentId) -> Option<&Tournament> {
        self.tournaments.get(&id).map(Arc::as_ref)
    }

    pub fn competitor_by_registration(&self, registration: &RegistrationNumber) -> Option<&Competitor> {
        self.competitors
            .values()
            .find(|c| &c.registration_number == registration)
    }

    /// Register a new competitor under the next free id.
    ///
    /// Rejected if the registration number is already taken.
    pub fn add_competitor(
        &self,
        registration_number: RegistrationNumber,
        name: CompetitorName,
    ) -> Validated<Event> {
        let id = self.next_competitor_id();

        let checked = zip(
            ensure(!self.competitors.contains_key(&id), || {
                format!("There already is a competitor with id {}", id)
            }),
            ensure(
                self.competitor_by_registration(&registration_number).is_none(),
                || {
                    format!(
                        "There already is a competitor with registration {}",
                        registration_number
                    )
                },
            ),
        );

        logged("add competitor", checked.map(|_| {
            tracing::debug!("Adding competitor {} ({}. {})", id, registration_number, name);
            self.with_competitor(Competitor::new(id, registration_number, name))
        }))
    }

    /// Add a tournament under the next free tournament id
    pub fn add_tournament(
        &self,
        name: TournamentName,
        scoring_settings: ScoringSettings,
    ) -> Validated<Event> {
        let id: TournamentId = next_id(self.tournaments.keys().copied());

        let checked = ensure(!self.tournaments.contains_key(&id), || {
            format!("There already is a tournament with id {}", id)
        });

        logged("add tournament", checked.map(|_| {
            tracing::debug!("Adding tournament {} ({})", id, name);
            self.with_tournament(Tournament::new(id, name, scoring_settings))
        }))
    }

    /// Register an existing competitor for an existing tournament.
    ///
    /// Both references are checked; registering twice is not an error.
    pub fn register_competitor_for_tournament(
        &self,
        competitor: CompetitorId,
        tournament: TournamentId,
    ) -> Validated<Event> {
        let checked = zip(self.find_competitor(competitor), self.find_tournament(tournament));

        logged("register competitor", checked.map(|(_, t)| {
            tracing::debug!("Registering competitor {} for tournament {}", competitor, tournament);
            self.with_tournament(t.register_competitor(competitor))
        }))
    }

    /// Record a combat in a tournament; both fencers must be registered there
    pub fn register_combat_for_tournament(
        &self,
        tournament: TournamentId,
        combat: Combat,
    ) -> Validated<Event> {
        let result = self
            .find_tournament(tournament)
            .and_then(|t| t.register_combat(combat))
            .map(|updated| {
                tracing::debug!(
                    "Recording combat {} vs {} ({}:{}, {} double hits) in tournament {}",
                    combat.competitor_a,
                    combat.competitor_b,
                    combat.score_a,
                    combat.score_b,
                    combat.double_hits,
                    tournament
                );
                self.with_tournament(updated)
            });

        logged("register combat", result)
    }

    /// Change the winning threshold of a tournament's scoring rule
    pub fn set_winning_threshold(
        &self,
        tournament: TournamentId,
        threshold: Score,
    ) -> Validated<Event> {
        let result = self.find_tournament(tournament).map(|t| {
            tracing::debug!("Winning threshold of tournament {} set to {}", tournament, threshold);
            self.with_tournament(t.with_winning_threshold(threshold))
        });

        logged("set winning threshold", result)
    }

    /// Add a competitor and register them for a tournament in one step.
    ///
    /// Stops at the first failing step: there's no one to register if the
    /// competitor couldn't be added.
    pub fn add_competitor_to_tournament(
        &self,
        registration_number: RegistrationNumber,
        name: CompetitorName,
        tournament: TournamentId,
    ) -> Validated<Event> {
        let id = self.next_competitor_id();
        self.add_competitor(registration_number, name)?
            .register_competitor_for_tournament(id, tournament)
    }

    // === with-field helpers ===

    pub fn with_name(&self, name: EventName) -> Event {
        Event {
            name,
            ..self.clone()
        }
    }

    /// Insert or replace a competitor, keyed by its id. Unchecked.
    pub(crate) fn with_competitor(&self, competitor: Competitor) -> Event {
        let mut competitors = Arc::clone(&self.competitors);
        Arc::make_mut(&mut competitors).insert(competitor.id, competitor);
        Event {
            competitors,
            ..self.clone()
        }
    }

    /// Insert or replace a tournament, keyed by its id. Unchecked.
    pub(crate) fn with_tournament(&self, tournament: Tournament) -> Event {
        let mut tournaments = Arc::clone(&self.tournaments);
        Arc::make_mut(&mut tournaments).insert(tournament.id(), Arc::new(tournament));
        Event {
            tournaments,
            ..self.clone()
        }
    }

    fn next_competitor_id(&self) -> CompetitorId {
        next_id(self.competitors.keys().copied())
    }

    fn find_competitor(&self, id: CompetitorId) -> Validated<&Competitor> {
        match self.competitors.get(&id) {
            Some(c) => Ok(c),
            None => fail(format!("No competitor with id {}", id)),
        }
    }

    fn find_tournament(&self, id: TournamentId) -> Validated<&Tournament> {
        match self.tournaments.get(&id) {
            Some(t) => Ok(t.as_ref()),
            None => fail(format!("No tournament with id {}", id)),
        }
    }
}

fn logged(operation: &str, result: Validated<Event>) -> Validated<Event> {
    if let Err(errors) = &result {
        tracing::debug!("Validation failed while trying to {}: {}", operation, errors);
    }
    result
}
