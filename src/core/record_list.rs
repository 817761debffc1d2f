//! Visible rows of the record list: group filter + creation order.

use crate::models::{GroupFilter, Record};
use chrono::{DateTime, Utc};

#[derive(Debug, Default)]
pub struct RecordListController {
    filter: GroupFilter,
    visible: Vec<Record>,
}

impl RecordListController {
    pub fn new(filter: GroupFilter) -> Self {
        Self {
            filter,
            visible: Vec::new(),
        }
    }

    pub fn filter(&self) -> GroupFilter {
        self.filter
    }

    /// Change the selection. The caller refreshes afterwards; stored
    /// records are never touched.
    pub fn set_filter(&mut self, filter: GroupFilter) {
        self.filter = filter;
    }

    pub fn visible(&self) -> &[Record] {
        &self.visible
    }

    pub fn find(&self, id: i64) -> Option<&Record> {
        self.visible.iter().find(|r| r.id == id)
    }

    /// Recompute the visible rows from the full record set, oldest first.
    ///
    /// Returns `(id, expiry)` for every visible record still inside its
    /// 24 hour window, ready to hand to the highlighter.
    pub fn refresh(
        &mut self,
        mut records: Vec<Record>,
        now: DateTime<Utc>,
    ) -> Vec<(i64, DateTime<Utc>)> {
        records.retain(|r| self.filter.matches(r.length));
        records.sort_by_key(|r| (r.created_at, r.id));
        self.visible = records;

        self.visible
            .iter()
            .filter(|r| r.is_recent(now))
            .map(|r| (r.id, r.highlight_until()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn rec(id: i64, length: f64, created_at: DateTime<Utc>) -> Record {
        Record {
            id,
            length,
            buffer_type: "Sabit".into(),
            created_at,
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 10, 12, 0, 0).unwrap()
    }

    fn sample() -> Vec<Record> {
        let t = now();
        vec![
            rec(3, 11.0, t - Duration::hours(1)),
            rec(1, 4.99, t - Duration::hours(50)),
            rec(2, 5.0, t - Duration::hours(30)),
            rec(4, 10.99, t - Duration::minutes(5)),
        ]
    }

    #[test]
    fn all_shows_everything_oldest_first() {
        let mut list = RecordListController::default();
        list.refresh(sample(), now());
        let ids: Vec<i64> = list.visible().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn other_keeps_buckets_outside_five_to_ten() {
        let mut list = RecordListController::new(GroupFilter::Other);
        list.refresh(sample(), now());
        let ids: Vec<i64> = list.visible().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn numeric_bucket_matches_floor() {
        let mut list = RecordListController::new(GroupFilter::Bucket(10));
        list.refresh(sample(), now());
        let ids: Vec<i64> = list.visible().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![4]);
    }

    #[test]
    fn only_visible_recent_records_are_reported() {
        let mut list = RecordListController::default();
        let recent = list.refresh(sample(), now());
        let ids: Vec<i64> = recent.iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, vec![3, 4]);
        assert_eq!(recent[0].1, now() - Duration::hours(1) + Duration::hours(24));

        list.set_filter(GroupFilter::Bucket(10));
        let recent = list.refresh(sample(), now());
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].0, 4);
    }

    #[test]
    fn record_created_now_is_tracked_but_not_one_from_yesterday() {
        let t = now();
        let mut list = RecordListController::default();
        let recent = list.refresh(
            vec![rec(1, 6.0, t), rec(2, 6.0, t - Duration::hours(25))],
            t,
        );
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].0, 1);
    }
}
