//! Validated computations
//!
//! A [`Validated`] value either holds a result or a non-empty list of
//! [`ValidationError`]s. Two ways of composing checks are provided and they
//! are not interchangeable:
//!
//! - **Fail-fast** with `?`: a later check needs the earlier one to have
//!   succeeded (you can't look inside a tournament that doesn't exist).
//! - **Accumulate** with [`zip`] / [`accumulate`]: independent checks all run
//!   and every failure is reported.

use std::fmt;

/// A single broken domain rule
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Ordered, never-empty collection of validation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    first: ValidationError,
    rest: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn new(first: ValidationError) -> Self {
        Self {
            first,
            rest: Vec::new(),
        }
    }

    /// Append one more error, keeping order
    pub fn with(mut self, error: ValidationError) -> Self {
        self.rest.push(error);
        self
    }

    /// Concatenate two error lists, `self` first
    pub fn append(mut self, other: ValidationErrors) -> Self {
        self.rest.push(other.first);
        self.rest.extend(other.rest);
        self
    }

    pub fn first(&self) -> &ValidationError {
        &self.first
    }

    pub fn len(&self) -> usize {
        1 + self.rest.len()
    }

    /// Always false; kept for clippy's `len_without_is_empty`
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        std::iter::once(&self.first).chain(self.rest.iter())
    }

    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.iter().map(ValidationError::message)
    }

    pub fn contains_message(&self, needle: &str) -> bool {
        self.messages().any(|m| m.contains(needle))
    }

    pub fn into_vec(self) -> Vec<ValidationError> {
        let mut all = Vec::with_capacity(self.len());
        all.push(self.first);
        all.extend(self.rest);
        all
    }
}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        Self::new(error)
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<&str> = self.messages().collect();
        f.write_str(&joined.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Success value or every reason it was rejected
pub type Validated<T> = Result<T, ValidationErrors>;

/// Reject with a single message
pub fn fail<T>(message: impl Into<String>) -> Validated<T> {
    Err(ValidationError::new(message).into())
}

/// Check a condition; the message is only built on failure
pub fn ensure(condition: bool, message: impl FnOnce() -> String) -> Validated<()> {
    if condition {
        Ok(())
    } else {
        fail(message())
    }
}

/// Run two independent checks and keep the failures of both
pub fn zip<A, B>(a: Validated<A>, b: Validated<B>) -> Validated<(A, B)> {
    match (a, b) {
        (Ok(a), Ok(b)) => Ok((a, b)),
        (Err(ea), Ok(_)) => Err(ea),
        (Ok(_), Err(eb)) => Err(eb),
        (Err(ea), Err(eb)) => Err(ea.append(eb)),
    }
}

/// Run any number of independent checks and keep every failure, in order
pub fn accumulate<T, I>(checks: I) -> Validated<Vec<T>>
where
    I: IntoIterator<Item = Validated<T>>,
{
    let mut values = Vec::new();
    let mut errors: Option<ValidationErrors> = None;

    for check in checks {
        match check {
            Ok(value) => values.push(value),
            Err(e) => {
                errors = Some(match errors {
                    Some(acc) => acc.append(e),
                    None => e,
                });
            }
        }
    }

    match errors {
        Some(errors) => Err(errors),
        None => Ok(values),
    }
}
