//! Stored shape of an event
//!
//! Id-keyed maps are written as lists ordered by id and rebuilt on load; the
//! ids are the join key and list order carries no meaning. Loading checks every
//! invariant the in-memory types rely on and reports all violations at once.

use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::core::types::{CompetitorId, TournamentId};
use crate::core::validation::{accumulate, ensure, Validated, ValidationErrors};
use crate::entity::combat::Combat;
use crate::entity::competitor::Competitor;
use crate::entity::event::Event;
use crate::entity::names::{EventName, TournamentName};
use crate::entity::tournament::Tournament;
use crate::scoring::settings::ScoringSettings;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TournamentDocument {
    pub id: TournamentId,
    pub name: TournamentName,
    #[serde(default)]
    pub scoring_settings: ScoringSettings,
    #[serde(default)]
    pub registered: Vec<CompetitorId>,
    #[serde(default)]
    pub record: Vec<Combat>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventDocument {
    pub name: EventName,
    #[serde(default)]
    pub competitors: Vec<Competitor>,
    #[serde(default)]
    pub tournaments: Vec<TournamentDocument>,
}

impl From<Tournament> for TournamentDocument {
    fn from(tournament: Tournament) -> Self {
        Self {
            id: tournament.id(),
            name: tournament.name().clone(),
            scoring_settings: *tournament.scoring_settings(),
            registered: tournament.registered().iter().copied().collect(),
            record: tournament.record().to_vec(),
        }
    }
}

impl TryFrom<TournamentDocument> for Tournament {
    type Error = ValidationErrors;

    fn try_from(doc: TournamentDocument) -> Validated<Self> {
        Tournament::from_parts(
            doc.id,
            doc.name,
            doc.scoring_settings,
            doc.registered.into_iter().collect(),
            doc.record,
        )
    }
}

impl From<Event> for EventDocument {
    fn from(event: Event) -> Self {
        Self {
            name: event.name().clone(),
            competitors: event.competitors().values().cloned().collect(),
            tournaments: event
                .tournaments()
                .cloned()
                .map(TournamentDocument::from)
                .collect(),
        }
    }
}

impl TryFrom<EventDocument> for Event {
    type Error = ValidationErrors;

    fn try_from(doc: EventDocument) -> Validated<Self> {
        let mut checks: Vec<Validated<()>> = Vec::new();

        let mut ids = AHashSet::new();
        let mut registrations = AHashSet::new();
        for competitor in &doc.competitors {
            checks.push(ensure(ids.insert(competitor.id), || {
                format!("Duplicate competitor id {}", competitor.id)
            }));
            checks.push(ensure(
                registrations.insert(&competitor.registration_number),
                || format!("Duplicate registration number {}", competitor.registration_number),
            ));
        }

        let mut tournament_ids = AHashSet::new();
        for tournament in &doc.tournaments {
            checks.push(ensure(tournament_ids.insert(tournament.id), || {
                format!("Duplicate tournament id {}", tournament.id)
            }));
            for registered in &tournament.registered {
                checks.push(ensure(ids.contains(registered), || {
                    format!(
                        "Tournament {} registers unknown competitor {}",
                        tournament.name, registered
                    )
                }));
            }
        }

        // Integrity of each combat record is checked while rebuilding
        let rebuilt = accumulate(doc.tournaments.into_iter().map(Tournament::try_from));
        let checked = accumulate(checks);

        let (_, tournaments) = crate::core::validation::zip(checked, rebuilt)?;

        let competitors: BTreeMap<CompetitorId, Competitor> =
            doc.competitors.into_iter().map(|c| (c.id, c)).collect();
        let tournaments: BTreeMap<TournamentId, Tournament> =
            tournaments.into_iter().map(|t| (t.id(), t)).collect();

        Ok(Event::from_parts(doc.name, competitors, tournaments))
    }
}
