use serde::{Deserialize, Serialize};
use std::fmt;

use super::names::{CompetitorName, RegistrationNumber};
use crate::core::types::CompetitorId;

/// A fencer taking part in an event
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Competitor {
    pub id: CompetitorId,
    pub registration_number: RegistrationNumber,
    pub name: CompetitorName,
}

impl Competitor {
    pub fn new(id: CompetitorId, registration_number: RegistrationNumber, name: CompetitorName) -> Self {
        Self {
            id,
            registration_number,
            name,
        }
    }
}

/// `"101. Alice"`
impl fmt::Display for Competitor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.registration_number, self.name)
    }
}
