//! Piste - Entry Point
//!
//! Command-line front end over an event file. Each subcommand loads the
//! current snapshot, applies one operation and writes the new snapshot back
//! only when the operation was accepted.

use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use piste::core::config::{self, PisteConfig};
use piste::core::error::Result;
use piste::core::types::{CompetitorId, TournamentId};
use piste::core::validation::{fail, Validated};
use piste::entity::{
    Combat, CompetitorName, Event, EventName, RegistrationNumber, Tournament, TournamentName,
};
use piste::persistence::{read_event, write_event, WriteMode};
use piste::scoring::{rank, summary, Hits, RankedStanding, Score, ScoringSettings};

/// Keep score of fencing tournaments
#[derive(Parser, Debug)]
#[command(name = "piste")]
#[command(about = "Record competitors and combats of a fencing event and rank the results")]
struct Args {
    /// Configuration file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Event file (JSON)
    file: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a new event file with one empty tournament
    New {
        /// Event name (defaults to the configured name)
        #[arg(long)]
        name: Option<EventName>,
    },

    /// Add a competitor and register them for a tournament
    AddCompetitor {
        registration: RegistrationNumber,
        name: CompetitorName,
        #[arg(long, default_value_t = 0)]
        tournament: u64,
    },

    /// Register an existing competitor for a tournament
    Register {
        competitor: u64,
        #[arg(long, default_value_t = 0)]
        tournament: u64,
    },

    /// Add another tournament to the event
    AddTournament {
        name: TournamentName,
        /// Winning threshold (defaults to the configured threshold)
        #[arg(long)]
        winning_threshold: Option<Score>,
    },

    /// Record a combat between two registered competitors
    Combat {
        a: u64,
        b: u64,
        score_a: Score,
        score_b: Score,
        #[arg(long, default_value = "0")]
        double_hits: Hits,
        #[arg(long, default_value_t = 0)]
        tournament: u64,
    },

    /// Change the winning threshold of a tournament
    Threshold {
        threshold: Score,
        #[arg(long, default_value_t = 0)]
        tournament: u64,
    },

    /// Print the ranking of a tournament
    Standings {
        #[arg(long, default_value_t = 0)]
        tournament: u64,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

/// JSON output row
#[derive(Serialize)]
struct StandingRow {
    position: usize,
    registration_number: String,
    name: String,
    matches: u32,
    wins: u32,
    losses: u32,
    scored: u32,
    conceded: u32,
    cut: String,
    double_hits: u32,
}

impl From<&RankedStanding> for StandingRow {
    fn from(row: &RankedStanding) -> Self {
        let s = &row.standing;
        Self {
            position: row.position,
            registration_number: row.competitor.registration_number.to_string(),
            name: row.competitor.name.to_string(),
            matches: s.matches.get(),
            wins: s.wins.get(),
            losses: s.losses.get(),
            scored: s.scored.get(),
            conceded: s.conceded.get(),
            cut: s.cut().to_string(),
            double_hits: s.double_hits.get(),
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let config = match args.config.as_deref().map(PisteConfig::load).transpose() {
        Ok(config) => config.unwrap_or_default(),
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config);
    if config::set_config(config).is_err() {
        tracing::warn!("Config was already initialized");
    }

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!("Command failed: {}", e);
            for message in e.messages() {
                eprintln!("error: {}", message);
            }
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(config: &PisteConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Args) -> Result<()> {
    match args.command {
        Command::New { name } => create_event(&args.file, name),
        Command::Standings { tournament, json } => {
            let event = read_event(&args.file)?;
            print_standings(&event, TournamentId::new(tournament), json)
        }
        command => {
            let event = read_event(&args.file)?;
            let next = apply(&event, command)?;
            write_event(&args.file, &next, WriteMode::Overwrite)
        }
    }
}

fn create_event(path: &Path, name: Option<EventName>) -> Result<()> {
    let config = config::config();
    let name = match name {
        Some(name) => name,
        None => EventName::new(config.event_name.as_str())?,
    };
    let event = Event::with_default_tournament(
        name,
        TournamentName::new(config.tournament_name.as_str())?,
        ScoringSettings::fior_della_spada(Score::new(config.winning_threshold)),
    );

    write_event(path, &event, WriteMode::CreateNew)
}

/// Apply one state-changing command to the current snapshot
fn apply(event: &Event, command: Command) -> Validated<Event> {
    match command {
        Command::AddCompetitor {
            registration,
            name,
            tournament,
        } => event.add_competitor_to_tournament(registration, name, TournamentId::new(tournament)),
        Command::Register {
            competitor,
            tournament,
        } => event.register_competitor_for_tournament(
            CompetitorId::new(competitor),
            TournamentId::new(tournament),
        ),
        Command::AddTournament {
            name,
            winning_threshold,
        } => {
            let threshold =
                winning_threshold.unwrap_or(Score::new(config::config().winning_threshold));
            event.add_tournament(name, ScoringSettings::fior_della_spada(threshold))
        }
        Command::Combat {
            a,
            b,
            score_a,
            score_b,
            double_hits,
            tournament,
        } => event.register_combat_for_tournament(
            TournamentId::new(tournament),
            Combat::new(
                CompetitorId::new(a),
                CompetitorId::new(b),
                score_a,
                score_b,
                double_hits,
            ),
        ),
        Command::Threshold {
            threshold,
            tournament,
        } => event.set_winning_threshold(TournamentId::new(tournament), threshold),
        Command::New { .. } | Command::Standings { .. } => Ok(event.clone()),
    }
}

fn find_tournament(event: &Event, id: TournamentId) -> Validated<&Tournament> {
    match event.tournament(id) {
        Some(tournament) => Ok(tournament),
        None => fail(format!("No tournament with id {}", id)),
    }
}

fn print_standings(event: &Event, tournament: TournamentId, json: bool) -> Result<()> {
    let tournament = find_tournament(event, tournament)?;
    let results = tournament.get_results();
    let ranking = rank(event.competitors(), &results);

    if json {
        let rows: Vec<StandingRow> = ranking.iter().map(StandingRow::from).collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    let settings = tournament.scoring_settings();
    println!("=== {} / {} ===", event.name(), tournament.name());
    println!(
        "Winning threshold: {}, double hits tolerated: {}",
        settings.winning_threshold(),
        settings.double_hit_threshold()
    );
    println!();
    println!(
        "{:>3}  {:>6}  {:<20} {:>3} {:>3} {:>3} {:>7} {:>9} {:>10} {:>12}",
        "#", "Nr.", "Name", "M", "W", "L", "Scored", "Conceded", "CUT", "Double Hits"
    );
    for row in &ranking {
        let s = &row.standing;
        println!(
            "{:>3}  {:>6}  {:<20} {:>3} {:>3} {:>3} {:>7} {:>9} {:>10} {:>12}",
            row.position,
            row.competitor.registration_number.as_str(),
            row.competitor.name.as_str(),
            s.matches.get(),
            s.wins.get(),
            s.losses.get(),
            s.scored.get(),
            s.conceded.get(),
            s.cut().to_string(),
            s.double_hits.get()
        );
    }

    let totals = summary(&results);
    println!(
        "{:>3}  {:>6}  {:<20} {:>3} {:>3} {:>3} {:>7} {:>9} {:>10} {:>12}",
        "",
        "",
        "Summary",
        "",
        "",
        "",
        totals.scored.get(),
        totals.conceded.get(),
        "",
        totals.double_hits.get()
    );

    Ok(())
}
