pub mod combat;
pub mod competitor;
pub mod event;
pub mod names;
pub mod tournament;

pub use combat::Combat;
pub use competitor::Competitor;
pub use event::Event;
pub use names::{CompetitorName, EventName, RegistrationNumber, TournamentName};
pub use tournament::Tournament;
