//! CompletionSet and CompletionLog - the host's record of finished activities.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::ActivityId;

/// Set of activity ids considered done.
///
/// Values are never mutated in place by the engine; additions produce a new set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompletionSet(BTreeSet<ActivityId>);

impl CompletionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &ActivityId) -> bool {
        self.0.contains(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ActivityId> {
        self.0.iter()
    }

    /// Returns a new set equal to `self ∪ {id}`.
    pub fn with(&self, id: ActivityId) -> Self {
        let mut next = self.0.clone();
        next.insert(id);
        Self(next)
    }
}

impl FromIterator<ActivityId> for CompletionSet {
    fn from_iter<I: IntoIterator<Item = ActivityId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Dated completion history kept by the host.
///
/// Maps each completed activity to the UTC calendar day it was first
/// completed. The [`CompletionSet`] handed to the engine is its key set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompletionLog(BTreeMap<ActivityId, NaiveDate>);

impl CompletionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn completion_set(&self) -> CompletionSet {
        self.0.keys().cloned().collect()
    }

    pub fn completed_on(&self, id: &ActivityId) -> Option<NaiveDate> {
        self.0.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Records a completion. An existing entry keeps its original date.
    ///
    /// Returns true if the activity was not recorded before.
    pub fn record(&mut self, id: ActivityId, on: NaiveDate) -> bool {
        use std::collections::btree_map::Entry;
        match self.0.entry(id) {
            Entry::Vacant(slot) => {
                slot.insert(on);
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    /// Removes the given activities, returning how many entries were dropped.
    pub fn remove_all<'a>(&mut self, ids: impl IntoIterator<Item = &'a ActivityId>) -> usize {
        ids.into_iter()
            .filter(|id| self.0.remove(*id).is_some())
            .count()
    }

    /// Distinct calendar days on which anything was completed.
    pub fn active_days(&self) -> BTreeSet<NaiveDate> {
        self.0.values().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> ActivityId {
        ActivityId::new(s).unwrap()
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    #[test]
    fn with_returns_new_set_and_leaves_original() {
        let original: CompletionSet = [id("a1")].into_iter().collect();
        let next = original.with(id("a2"));

        assert_eq!(original.len(), 1);
        assert_eq!(next.len(), 2);
        assert!(next.contains(&id("a2")));
    }

    #[test]
    fn record_keeps_first_completion_date() {
        let mut log = CompletionLog::new();
        assert!(log.record(id("a1"), day(1)));
        assert!(!log.record(id("a1"), day(5)));
        assert_eq!(log.completed_on(&id("a1")), Some(day(1)));
    }

    #[test]
    fn completion_set_is_key_set() {
        let mut log = CompletionLog::new();
        log.record(id("a1"), day(1));
        log.record(id("b1"), day(2));

        let set = log.completion_set();
        assert_eq!(set.len(), 2);
        assert!(set.contains(&id("a1")));
        assert!(set.contains(&id("b1")));
    }

    #[test]
    fn remove_all_counts_only_present_entries() {
        let mut log = CompletionLog::new();
        log.record(id("a1"), day(1));
        log.record(id("a2"), day(1));

        let removed = log.remove_all(&[id("a1"), id("zz")]);
        assert_eq!(removed, 1);
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn active_days_are_deduplicated() {
        let mut log = CompletionLog::new();
        log.record(id("a1"), day(1));
        log.record(id("a2"), day(1));
        log.record(id("a3"), day(3));

        let days: Vec<NaiveDate> = log.active_days().into_iter().collect();
        assert_eq!(days, vec![day(1), day(3)]);
    }

    #[test]
    fn log_serializes_as_map() {
        let mut log = CompletionLog::new();
        log.record(id("w1d1"), day(4));
        let json = serde_json::to_string(&log).unwrap();
        assert_eq!(json, r#"{"w1d1":"2024-03-04"}"#);

        let back: CompletionLog = serde_json::from_str(&json).unwrap();
        assert_eq!(back, log);
    }
}
