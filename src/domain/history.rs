//! Append-only version history of one minutes record

use crate::domain::models::{HistoryEntry, SummarySections, VersionSnapshot};
use crate::services::differ;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Ordered log of snapshots for a single minutes record
///
/// Snapshots are only ever appended. Each one gets the next sequence id,
/// which orders snapshots that share a timestamp.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct VersionHistory {
    snapshots: Vec<VersionSnapshot>,
}

impl VersionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a new snapshot of the given sections
    pub fn record(
        &mut self,
        sections: SummarySections,
        editor: Option<String>,
        created_at: DateTime<Utc>,
    ) -> &VersionSnapshot {
        let mut snapshot = VersionSnapshot::new(sections, editor);
        snapshot.created_at = created_at;
        self.append(snapshot)
    }

    /// Appends a snapshot, overwriting its id with the next sequence number
    pub fn append(&mut self, mut snapshot: VersionSnapshot) -> &VersionSnapshot {
        snapshot.id = self.snapshots.len() as u64 + 1;
        self.snapshots.push(snapshot);
        &self.snapshots[self.snapshots.len() - 1]
    }

    /// Snapshots in insertion order
    pub fn snapshots(&self) -> &[VersionSnapshot] {
        &self.snapshots
    }

    pub fn latest(&self) -> Option<&VersionSnapshot> {
        self.snapshots.last()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Change history, oldest first
    pub fn history(&self) -> Vec<HistoryEntry> {
        differ::list_history(&self.snapshots)
    }
}
