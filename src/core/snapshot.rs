//! Time-ordered value observations for a single account.

use super::clock::Clock;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A value observed at an instant (epoch seconds).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub timestamp: i64,
    pub value: Decimal,
}

impl Snapshot {
    pub fn new(timestamp: i64, value: Decimal) -> Self {
        Self { timestamp, value }
    }
}

/// Snapshots of one account, kept sorted ascending by timestamp.
///
/// Snapshots sharing a timestamp stay in import order, so the most recently
/// imported one is the value visible after that instant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnapshotHistory {
    snapshots: Vec<Snapshot>,
}

impl SnapshotHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn import_snapshot(&mut self, snapshot: Snapshot) {
        // Upper bound: after every snapshot at or before this timestamp.
        let index = self
            .snapshots
            .partition_point(|s| s.timestamp <= snapshot.timestamp);
        debug!(
            timestamp = snapshot.timestamp,
            value = %snapshot.value,
            index,
            "Importing snapshot"
        );
        self.snapshots.insert(index, snapshot);
    }

    pub fn all(&self) -> &[Snapshot] {
        &self.snapshots
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Value of the latest snapshot strictly before `query_time`, or zero.
    ///
    /// A snapshot taken exactly at `query_time` is not yet visible.
    pub fn value(&self, query_time: i64) -> Decimal {
        let visible = self
            .snapshots
            .partition_point(|s| s.timestamp < query_time);
        match visible.checked_sub(1) {
            Some(index) => self.snapshots[index].value,
            None => Decimal::ZERO,
        }
    }

    pub fn value_now(&self, clock: &dyn Clock) -> Decimal {
        self.value(clock.now())
    }

    /// Greatest timestamp in the history, `None` if nothing was imported.
    pub fn last_updated(&self) -> Option<i64> {
        self.snapshots.last().map(|s| s.timestamp)
    }
}
