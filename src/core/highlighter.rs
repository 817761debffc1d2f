//! Blinking highlight for records younger than 24 hours.
//!
//! The highlighter never owns a timer. Whoever drives the UI loop asks
//! [`RecencyHighlighter::sync`] whether a tick must be scheduled, then calls
//! [`RecencyHighlighter::tick`] every [`RecencyHighlighter::interval`] until a
//! tick reports `reschedule == false`. Expiry is always re-evaluated against
//! the wall clock, so rows that leave and re-enter the filtered view pick up
//! the right state on the next refresh.

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::time::Duration;

pub const DEFAULT_BLINK_INTERVAL: Duration = Duration::from_millis(700);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tick {
    /// Records that aged out on this tick; their highlight is cleared for good.
    pub cleared: Vec<i64>,
    /// Highlight state applied to every record still tracked.
    pub lit: bool,
    /// Whether the caller must schedule another tick.
    pub reschedule: bool,
}

#[derive(Debug)]
pub struct RecencyHighlighter {
    expiries: HashMap<i64, DateTime<Utc>>,
    toggle: bool,
    lit: bool,
    running: bool,
    interval: Duration,
}

impl Default for RecencyHighlighter {
    fn default() -> Self {
        Self::new(DEFAULT_BLINK_INTERVAL)
    }
}

impl RecencyHighlighter {
    pub fn new(interval: Duration) -> Self {
        Self {
            expiries: HashMap::new(),
            toggle: false,
            lit: false,
            running: false,
            interval,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_tracked(&self, id: i64) -> bool {
        self.expiries.contains_key(&id)
    }

    pub fn tracked_count(&self) -> usize {
        self.expiries.len()
    }

    /// Whether `id` is currently drawn highlighted.
    pub fn is_lit(&self, id: i64) -> bool {
        self.lit && self.is_tracked(id)
    }

    /// Replace the tracked set with the currently displayed recent records.
    ///
    /// Returns true when the loop was idle and now has work, i.e. the
    /// caller has to schedule the first tick. A loop that is already
    /// running keeps its schedule.
    pub fn sync<I>(&mut self, recent: I) -> bool
    where
        I: IntoIterator<Item = (i64, DateTime<Utc>)>,
    {
        self.expiries = recent.into_iter().collect();

        if !self.running && !self.expiries.is_empty() {
            self.running = true;
            return true;
        }
        false
    }

    /// One blink step: drop aged-out records, flip the shared toggle and
    /// report whether another tick is needed.
    pub fn tick(&mut self, now: DateTime<Utc>) -> Tick {
        let mut cleared: Vec<i64> = self
            .expiries
            .iter()
            .filter(|(_, expiry)| now >= **expiry)
            .map(|(id, _)| *id)
            .collect();
        cleared.sort_unstable();

        for id in &cleared {
            self.expiries.remove(id);
        }

        self.lit = self.toggle;
        self.toggle = !self.toggle;

        let reschedule = !self.expiries.is_empty();
        if !reschedule {
            self.running = false;
            self.lit = false;
        }

        Tick {
            cleared,
            lit: self.lit,
            reschedule,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration as ChronoDuration, TimeZone};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 2, 1, 9, 0, 0).unwrap()
    }

    #[test]
    fn sync_requests_start_only_once() {
        let mut h = RecencyHighlighter::default();
        assert!(!h.sync(Vec::new()));

        assert!(h.sync(vec![(1, t0() + ChronoDuration::hours(1))]));
        assert!(h.is_running());

        // already running: the existing schedule continues
        assert!(!h.sync(vec![(2, t0() + ChronoDuration::hours(1))]));
        assert!(h.is_tracked(2));
        assert!(!h.is_tracked(1));
    }

    #[test]
    fn ticks_blink_in_lockstep() {
        let mut h = RecencyHighlighter::default();
        let exp = t0() + ChronoDuration::hours(2);
        h.sync(vec![(1, exp), (2, exp)]);

        let first = h.tick(t0());
        let second = h.tick(t0());
        assert_ne!(first.lit, second.lit);
        assert!(first.reschedule && second.reschedule);
        assert_eq!(h.is_lit(1), h.is_lit(2));
    }

    #[test]
    fn expiry_instant_counts_as_expired() {
        let mut h = RecencyHighlighter::default();
        let exp = t0() + ChronoDuration::hours(24);
        h.sync(vec![(7, exp), (8, exp + ChronoDuration::seconds(1))]);

        let tick = h.tick(exp);
        assert_eq!(tick.cleared, vec![7]);
        assert!(!h.is_tracked(7));
        assert!(!h.is_lit(7));
        assert!(h.is_tracked(8));
        assert!(tick.reschedule);
    }

    #[test]
    fn loop_stops_when_nothing_is_left() {
        let mut h = RecencyHighlighter::default();
        let exp = t0() + ChronoDuration::seconds(1);
        h.sync(vec![(1, exp)]);

        let tick = h.tick(exp + ChronoDuration::seconds(1));
        assert_eq!(tick.cleared, vec![1]);
        assert!(!tick.reschedule);
        assert!(!tick.lit);
        assert!(!h.is_running());

        // a later refresh with new work restarts it
        assert!(h.sync(vec![(2, exp + ChronoDuration::hours(1))]));
    }

    #[test]
    fn hidden_records_are_not_tracked() {
        let mut h = RecencyHighlighter::default();
        h.sync(vec![(1, t0() + ChronoDuration::hours(3))]);
        h.sync(Vec::new());
        assert_eq!(h.tracked_count(), 0);

        // still running until the next tick notices there is nothing left
        assert!(h.is_running());
        assert!(!h.tick(t0()).reschedule);
    }
}
