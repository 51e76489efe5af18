//! Event integration tests
//!
//! Drive a whole event through its public operations: competitors join,
//! register, fence, and the standings come out of the combat record.

use piste::core::{CompetitorId, TournamentId};
use piste::entity::{
    Combat, CompetitorName, Event, EventName, RegistrationNumber, TournamentName,
};
use piste::scoring::{rank, summary, Cut, Hits, Matches, Score, ScoringSettings};

const T0: TournamentId = TournamentId::new(0);

fn reg(s: &str) -> RegistrationNumber {
    RegistrationNumber::new(s).unwrap()
}

fn name(s: &str) -> CompetitorName {
    CompetitorName::new(s).unwrap()
}

fn id(n: u64) -> CompetitorId {
    CompetitorId::new(n)
}

fn combat(a: u64, b: u64, score_a: u32, score_b: u32, double_hits: u32) -> Combat {
    Combat::new(id(a), id(b), Score::new(score_a), Score::new(score_b), Hits::new(double_hits))
}

fn spring_cup() -> Event {
    Event::with_default_tournament(
        EventName::new("Spring Cup").unwrap(),
        TournamentName::new("Longsword").unwrap(),
        ScoringSettings::fior_della_spada(Score::new(7)),
    )
}

fn with_three_fencers() -> Event {
    spring_cup()
        .add_competitor_to_tournament(reg("101"), name("Alice"), T0)
        .unwrap()
        .add_competitor_to_tournament(reg("102"), name("Bob"), T0)
        .unwrap()
        .add_competitor_to_tournament(reg("103"), name("Carla"), T0)
        .unwrap()
}

#[test]
fn test_single_bout_scenario() {
    let event = spring_cup()
        .add_competitor(reg("101"), name("Alice"))
        .unwrap()
        .add_competitor(reg("102"), name("Bob"))
        .unwrap()
        .register_competitor_for_tournament(id(0), T0)
        .unwrap()
        .register_competitor_for_tournament(id(1), T0)
        .unwrap()
        .register_combat_for_tournament(T0, combat(0, 1, 7, 3, 1))
        .unwrap();

    let results = event.tournament(T0).unwrap().get_results();
    assert_eq!(results.len(), 2);

    let alice = results[&id(0)];
    assert_eq!(alice.matches, Matches::ONE);
    assert_eq!(alice.wins, Matches::ONE);
    assert_eq!(alice.scored, Score::new(7));
    assert_eq!(alice.conceded, Score::new(3));
    assert_eq!(alice.double_hits, Hits::new(1));

    let bob = results[&id(1)];
    assert_eq!(bob.losses, Matches::ONE);
    assert_eq!(bob.scored, Score::new(3));
    assert_eq!(bob.conceded, Score::new(7));
    assert_eq!(bob.double_hits, Hits::new(1));
}

#[test]
fn test_too_many_double_hits_punish_both() {
    // Threshold 7 tolerates two double hits; three is a loss for both
    let event = with_three_fencers()
        .register_combat_for_tournament(T0, combat(0, 1, 7, 1, 3))
        .unwrap();

    let results = event.tournament(T0).unwrap().get_results();
    for fencer in [id(0), id(1)] {
        let s = results[&fencer];
        assert_eq!(s.matches, Matches::ONE);
        assert_eq!(s.wins, Matches::NONE);
        assert_eq!(s.losses, Matches::ONE);
        assert_eq!(s.scored, Score::ZERO);
        assert_eq!(s.conceded, Score::new(7));
        assert_eq!(s.double_hits, Hits::new(3));
    }
    assert_eq!(results[&id(2)].matches, Matches::NONE);
}

#[test]
fn test_duplicate_registration_leaves_event_unchanged() {
    let event = with_three_fencers();
    let before = event.clone();

    let err = event.add_competitor(reg("102"), name("Dora")).unwrap_err();
    assert_eq!(err.len(), 1);
    assert_eq!(
        err.first().message(),
        "There already is a competitor with registration 102"
    );
    assert_eq!(event, before);
    assert_eq!(event.competitors().len(), 3);
}

#[test]
fn test_unregistered_fencer_a_only() {
    let event = spring_cup()
        .add_competitor(reg("101"), name("Alice"))
        .unwrap()
        .add_competitor_to_tournament(reg("102"), name("Bob"), T0)
        .unwrap();

    let err = event
        .register_combat_for_tournament(T0, combat(0, 1, 7, 3, 0))
        .unwrap_err();
    let messages: Vec<&str> = err.messages().collect();
    assert_eq!(
        messages,
        vec!["Competitor 0 is not registered for tournament Longsword"]
    );
}

#[test]
fn test_unregistered_fencer_b_only() {
    let event = spring_cup()
        .add_competitor_to_tournament(reg("101"), name("Alice"), T0)
        .unwrap()
        .add_competitor(reg("102"), name("Bob"))
        .unwrap();

    let err = event
        .register_combat_for_tournament(T0, combat(0, 1, 7, 3, 0))
        .unwrap_err();
    let messages: Vec<&str> = err.messages().collect();
    assert_eq!(
        messages,
        vec!["Competitor 1 is not registered for tournament Longsword"]
    );
}

#[test]
fn test_snapshots_are_independent() {
    let before = with_three_fencers();
    let after = before
        .register_combat_for_tournament(T0, combat(0, 1, 7, 3, 0))
        .unwrap();

    assert!(before.tournament(T0).unwrap().record().is_empty());
    assert_eq!(after.tournament(T0).unwrap().record().len(), 1);
    assert_eq!(before.competitors(), after.competitors());
}

#[test]
fn test_second_tournament_is_separate() {
    let event = with_three_fencers()
        .add_tournament(
            TournamentName::new("Sabre").unwrap(),
            ScoringSettings::fior_della_spada(Score::new(5)),
        )
        .unwrap();
    let sabre = TournamentId::new(1);

    let err = event
        .register_combat_for_tournament(sabre, combat(0, 1, 5, 3, 0))
        .unwrap_err();
    assert_eq!(err.len(), 2);

    let event = event
        .register_competitor_for_tournament(id(0), sabre)
        .unwrap()
        .register_competitor_for_tournament(id(1), sabre)
        .unwrap()
        .register_combat_for_tournament(sabre, combat(0, 1, 5, 3, 0))
        .unwrap();

    assert!(event.tournament(T0).unwrap().record().is_empty());
    assert_eq!(event.tournament(sabre).unwrap().get_results().len(), 2);
}

#[test]
fn test_ranking_of_a_round_robin() {
    let event = with_three_fencers()
        .register_combat_for_tournament(T0, combat(0, 1, 7, 2, 0))
        .unwrap()
        .register_combat_for_tournament(T0, combat(1, 2, 7, 4, 2))
        .unwrap()
        .register_combat_for_tournament(T0, combat(2, 0, 7, 5, 1))
        .unwrap();

    let results = event.tournament(T0).unwrap().get_results();
    let ranking = rank(event.competitors(), &results);
    let order: Vec<&str> = ranking.iter().map(|r| r.competitor.name.as_str()).collect();

    // Alice 12:9, Bob 9:11, Carla 11:12
    assert_eq!(order, vec!["Alice", "Carla", "Bob"]);
    assert_eq!(ranking[0].position, 1);
    assert_eq!(ranking[0].standing.cut().to_string(), "133.33\u{202F}%");

    let totals = summary(&results);
    assert_eq!(totals.scored, Score::new(32));
    assert_eq!(totals.conceded, Score::new(32));
    assert_eq!(totals.double_hits, Hits::new(3));
}

#[test]
fn test_lowering_threshold_rescores_history() {
    let event = with_three_fencers()
        .register_combat_for_tournament(T0, combat(0, 1, 7, 4, 2))
        .unwrap();
    assert_eq!(
        event.tournament(T0).unwrap().get_results()[&id(0)].wins,
        Matches::ONE
    );

    let stricter = event.set_winning_threshold(T0, Score::new(3)).unwrap();
    let alice = stricter.tournament(T0).unwrap().get_results()[&id(0)];
    assert_eq!(alice.losses, Matches::ONE);
    assert_eq!(alice.scored, Score::ZERO);
    assert_eq!(alice.cut(), Cut::new(0.0));
}
