//! Non-blank text values
//!
//! Every constructor (including deserialization and `FromStr`) rejects empty
//! and whitespace-only input, so holding one of these types is proof that the
//! text is usable.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::validation::{ensure, Validated, ValidationErrors};

macro_rules! non_blank_text {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Validated<Self> {
                let value = value.into();
                ensure(!value.trim().is_empty(), || {
                    format!("{} mustn't be blank", $label)
                })?;
                Ok(Self(value))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = ValidationErrors;

            fn try_from(value: String) -> Validated<Self> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> String {
                value.0
            }
        }

        impl FromStr for $name {
            type Err = ValidationErrors;

            fn from_str(s: &str) -> Validated<Self> {
                Self::new(s)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

non_blank_text!(
    /// Club-assigned identifier of a fencer, distinct from [`CompetitorId`](crate::core::CompetitorId)
    RegistrationNumber,
    "Registration number"
);

non_blank_text!(CompetitorName, "Competitor name");

non_blank_text!(EventName, "Event name");

non_blank_text!(TournamentName, "Tournament name");
