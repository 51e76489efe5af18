pub mod config;
pub mod error;
pub mod types;
pub mod validation;

pub use config::PisteConfig;
pub use error::{PisteError, Result};
pub use types::{next_id, CompetitorId, SequentialId, TournamentId};
pub use validation::{Validated, ValidationError, ValidationErrors};
