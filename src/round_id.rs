//! Round ID generation
//!
//! Round IDs scope every answer to the round it was given in. They are
//! minted from the wall clock in milliseconds and bumped past the previous
//! ID whenever the clock has not moved forward, so a single minter never
//! hands out the same value twice.

use std::{fmt::Display, num::ParseIntError, str::FromStr};

use serde_with::{DeserializeFromStr, SerializeDisplay};
use web_time::SystemTime;

/// A unique identifier for a quiz round
///
/// Only equality and ordering carry meaning; the numeric value is an
/// implementation detail of how IDs are minted.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, SerializeDisplay, DeserializeFromStr,
)]
pub struct RoundId(u64);

impl RoundId {
    /// Mints an ID strictly greater than `previous`
    ///
    /// The current time in milliseconds is used when it is ahead of
    /// `previous`, otherwise `previous + 1`. IDs stop increasing once
    /// `previous` is `u64::MAX`, which a millisecond clock never reaches.
    ///
    /// # Arguments
    ///
    /// * `previous` - The last ID handed out by the same minter, if any
    pub fn next_after(previous: Option<RoundId>) -> Self {
        let now = now_millis();
        match previous {
            Some(RoundId(last)) if now <= last => Self(last.saturating_add(1)),
            _ => Self(now),
        }
    }
}

/// Milliseconds since the Unix epoch, or zero if the clock is before it
fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}

impl Display for RoundId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RoundId {
    type Err = ParseIntError;

    /// Parses a round ID from its decimal representation
    ///
    /// # Errors
    ///
    /// Returns a `ParseIntError` if the string is not a decimal `u64`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}
