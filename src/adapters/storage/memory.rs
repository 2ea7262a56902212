/// In-memory history store adapter
///
/// Implements HistoryStorePort on top of a map of VersionHistory logs. Used by
/// embedders without a database and by tests.
use crate::domain::history::VersionHistory;
use crate::domain::models::VersionSnapshot;
use crate::error::{MinutesError, Result};
use crate::ports::history::HistoryStorePort;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

#[derive(Default)]
struct StoreState {
    records: HashMap<i64, VersionHistory>,
    next_id: i64,
}

/// In-memory history store
#[derive(Default)]
pub struct InMemoryHistoryStore {
    state: Mutex<StoreState>,
}

impl InMemoryHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, StoreState>> {
        self.state
            .lock()
            .map_err(|e| MinutesError::Storage(format!("history store lock poisoned: {}", e)))
    }
}

#[async_trait]
impl HistoryStorePort for InMemoryHistoryStore {
    async fn create_record(&self) -> Result<i64> {
        let mut state = self.lock()?;
        state.next_id += 1;
        let id = state.next_id;
        state.records.insert(id, VersionHistory::new());
        Ok(id)
    }

    async fn append_snapshot(
        &self,
        minutes_id: i64,
        snapshot: VersionSnapshot,
    ) -> Result<Option<VersionSnapshot>> {
        let mut state = self.lock()?;
        Ok(state
            .records
            .get_mut(&minutes_id)
            .map(|history| history.append(snapshot).clone()))
    }

    async fn snapshots(&self, minutes_id: i64) -> Result<Option<Vec<VersionSnapshot>>> {
        let state = self.lock()?;
        Ok(state
            .records
            .get(&minutes_id)
            .map(|history| history.snapshots().to_vec()))
    }

    async fn delete_record(&self, minutes_id: i64) -> Result<bool> {
        let mut state = self.lock()?;
        Ok(state.records.remove(&minutes_id).is_some())
    }
}
