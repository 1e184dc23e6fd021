//! Human-readable user identifiers
//!
//! A user ID is the upper-cased first and last initials followed by a random
//! five digit number, e.g. `JD48213`. IDs are not guaranteed unique: the
//! registration flow detects collisions at insert time and retries under an
//! [`IdRetryPolicy`].

use std::future::Future;

use rand::Rng;

use crate::error::DomainError;

const SUFFIX_RANGE: std::ops::RangeInclusive<u32> = 10_000..=99_999;

/// Generate a candidate user ID from a first and last name
///
/// Each call is independent; two calls may return the same value.
pub fn generate_user_id(first_name: &str, last_name: &str) -> Result<String, DomainError> {
    let first = initial(first_name)
        .ok_or_else(|| DomainError::ValidationError("first_name must not be empty".to_string()))?;
    let last = initial(last_name)
        .ok_or_else(|| DomainError::ValidationError("last_name must not be empty".to_string()))?;

    let suffix = rand::thread_rng().gen_range(SUFFIX_RANGE);
    Ok(format!("{first}{last}{suffix}"))
}

/// First character of the trimmed name, upper-cased to exactly one char
fn initial(name: &str) -> Option<char> {
    let first = name.trim().chars().next()?;
    first.to_uppercase().next()
}

/// Bounded retry policy for inserting a generated user ID
///
/// Attempt 0 uses the generated ID as is; every later attempt appends one
/// random digit (0-9) to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdRetryPolicy {
    max_attempts: u8,
}

impl Default for IdRetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl IdRetryPolicy {
    /// One initial insert plus one retry
    pub const DEFAULT_MAX_ATTEMPTS: u8 = 2;

    /// Create a policy, clamping the attempt count to 1..=2
    pub fn new(max_attempts: u8) -> Self {
        Self {
            max_attempts: max_attempts.clamp(1, Self::DEFAULT_MAX_ATTEMPTS),
        }
    }

    #[inline]
    pub fn max_attempts(&self) -> u8 {
        self.max_attempts
    }

    /// Candidate ID for the given zero-based attempt
    pub fn candidate<R: Rng + ?Sized>(&self, base: &str, attempt: u8, rng: &mut R) -> String {
        if attempt == 0 {
            base.to_string()
        } else {
            format!("{base}{}", rng.gen_range(0..=9u8))
        }
    }

    /// Run `insert` with successive candidates until it stops reporting a
    /// user ID collision or the attempts are used up
    ///
    /// Any error other than [`DomainError::UserIdTaken`] is returned at once.
    pub async fn run<T, F, Fut>(&self, base: &str, mut insert: F) -> Result<T, DomainError>
    where
        F: FnMut(String) -> Fut,
        Fut: Future<Output = Result<T, DomainError>>,
    {
        for attempt in 0..self.max_attempts {
            let candidate = self.candidate(base, attempt, &mut rand::thread_rng());
            match insert(candidate).await {
                Err(DomainError::UserIdTaken(_)) => continue,
                other => return other,
            }
        }

        Err(DomainError::UserIdExhausted {
            attempts: self.max_attempts,
        })
    }
}
