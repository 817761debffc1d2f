//! Row model for the `records` table.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

/// How long a freshly created record stays highlighted.
pub const RECENT_WINDOW_HOURS: i64 = 24;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub id: i64,
    /// Cut length ("boy") in meters, always rounded to 2 decimals.
    pub length: f64,
    /// Buffer label ("tampon").
    pub buffer_type: String,
    pub created_at: DateTime<Utc>,
}

impl Record {
    /// Instant at which the record stops counting as recent.
    pub fn highlight_until(&self) -> DateTime<Utc> {
        self.created_at + Duration::hours(RECENT_WINDOW_HOURS)
    }

    /// A record exactly at its expiry instant is no longer recent.
    pub fn is_recent(&self, now: DateTime<Utc>) -> bool {
        now < self.highlight_until()
    }
}
