//! Group filter over the integer part of the length.

use crate::errors::{AppError, AppResult};
use std::fmt;
use std::str::FromStr;

pub const FIRST_BUCKET: i64 = 5;
pub const LAST_BUCKET: i64 = 10;

/// Integer floor of a length (`4.99 → 4`, `-0.5 → -1`).
pub fn bucket_of(length: f64) -> i64 {
    length.floor() as i64
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GroupFilter {
    #[default]
    All,
    Bucket(i64),
    /// Everything whose bucket falls outside `[5, 10]`, negatives included.
    Other,
}

impl GroupFilter {
    /// Selector entries in display order: All, 5..10, Other.
    pub fn choices() -> Vec<GroupFilter> {
        let mut out = vec![GroupFilter::All];
        out.extend((FIRST_BUCKET..=LAST_BUCKET).map(GroupFilter::Bucket));
        out.push(GroupFilter::Other);
        out
    }

    pub fn matches(&self, length: f64) -> bool {
        let bucket = bucket_of(length);
        match self {
            GroupFilter::All => true,
            GroupFilter::Bucket(b) => bucket == *b,
            GroupFilter::Other => !(FIRST_BUCKET..=LAST_BUCKET).contains(&bucket),
        }
    }

    pub fn next(self) -> Self {
        self.step(1)
    }

    pub fn prev(self) -> Self {
        self.step(-1)
    }

    fn step(self, delta: isize) -> Self {
        let choices = Self::choices();
        let len = choices.len() as isize;
        let idx = choices.iter().position(|c| *c == self).unwrap_or(0) as isize;
        choices[(idx + delta).rem_euclid(len) as usize]
    }
}

impl fmt::Display for GroupFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupFilter::All => write!(f, "All"),
            GroupFilter::Bucket(b) => write!(f, "{b}"),
            GroupFilter::Other => write!(f, "Other"),
        }
    }
}

impl FromStr for GroupFilter {
    type Err = AppError;

    /// Accepts `all`/`hepsi`, `other`/`diger`/`diğer` and the buckets 5..10.
    fn from_str(s: &str) -> AppResult<Self> {
        let v = s.trim().to_lowercase();
        match v.as_str() {
            "all" | "hepsi" => Ok(GroupFilter::All),
            "other" | "diger" | "diğer" => Ok(GroupFilter::Other),
            _ => match v.parse::<i64>() {
                Ok(b) if (FIRST_BUCKET..=LAST_BUCKET).contains(&b) => Ok(GroupFilter::Bucket(b)),
                _ => Err(AppError::InvalidGroup(s.to_string())),
            },
        }
    }
}
