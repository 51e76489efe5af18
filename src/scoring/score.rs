//! Scoring value types: points, double hits, match counts and CUT

use derive_more::Display;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Div};
use std::str::FromStr;

use crate::core::validation::{Validated, ValidationError, ValidationErrors};

/// Counters add with saturation: a tally pinned at `u32::MAX` stays there
macro_rules! saturating_add {
    ($($name:ident),+) => {
        $(
            impl Add for $name {
                type Output = $name;

                fn add(self, rhs: Self) -> $name {
                    $name(self.0.saturating_add(rhs.0))
                }
            }

            impl AddAssign for $name {
                fn add_assign(&mut self, rhs: Self) {
                    *self = *self + rhs;
                }
            }
        )+
    };
}

saturating_add!(Score, Hits, Matches);

/// Points scored in a bout
#[derive(
    Debug,
    Display,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct Score(u32);

impl Score {
    pub const ZERO: Score = Score(0);

    pub const fn new(points: u32) -> Self {
        Self(points)
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    /// Parse user input such as `"7"`
    pub fn parse(value: &str) -> Validated<Score> {
        value
            .trim()
            .parse::<u32>()
            .map(Score)
            .map_err(|_| ValidationError::new(format!("Expected a number, but got {}", value)).into())
    }
}

impl FromStr for Score {
    type Err = ValidationErrors;

    fn from_str(s: &str) -> Validated<Self> {
        Score::parse(s)
    }
}

impl Div for Score {
    type Output = Cut;

    fn div(self, rhs: Self) -> Cut {
        Cut::new(self.0 as f64 / rhs.0 as f64)
    }
}

/// Number of double hits (both fencers hit simultaneously)
#[derive(
    Debug,
    Display,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct Hits(u32);

impl Hits {
    pub const NONE: Hits = Hits(0);

    pub const fn new(hits: u32) -> Self {
        Self(hits)
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    /// Halve a total that counted every double hit once per fencer
    pub const fn half(self) -> Self {
        Self(self.0 / 2)
    }

    pub fn parse(value: &str) -> Validated<Hits> {
        value.trim().parse::<u32>().map(Hits).map_err(|_| {
            ValidationError::new(format!(
                "Expected a non-negative number, but got {}",
                value
            ))
            .into()
        })
    }
}

impl FromStr for Hits {
    type Err = ValidationErrors;

    fn from_str(s: &str) -> Validated<Self> {
        Hits::parse(s)
    }
}

/// Count of bouts (fought, won or lost)
#[derive(
    Debug,
    Display,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct Matches(u32);

impl Matches {
    pub const NONE: Matches = Matches(0);
    pub const ONE: Matches = Matches(1);

    pub const fn new(count: u32) -> Self {
        Self(count)
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

/// Ratio of points scored to points conceded
///
/// Infinite when nothing was conceded, NaN when nothing was scored either.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cut(f64);

impl Cut {
    pub const fn new(ratio: f64) -> Self {
        Self(ratio)
    }

    pub fn is_defined(self) -> bool {
        !self.0.is_nan()
    }

    pub fn is_infinite(self) -> bool {
        self.0.is_infinite()
    }

    /// Total order for ranking: undefined sorts below every real ratio
    pub fn rank_key(self) -> OrderedFloat<f64> {
        if self.0.is_nan() {
            OrderedFloat(f64::NEG_INFINITY)
        } else {
            OrderedFloat(self.0)
        }
    }
}

impl fmt::Display for Cut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_nan() {
            Ok(())
        } else if self.0.is_infinite() {
            f.write_str("\u{221E}")
        } else {
            write!(f, "{:.2}\u{202F}%", self.0 * 100.0)
        }
    }
}
