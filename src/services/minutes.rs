//! Minutes versioning service
//!
//! Enforces the character budget on every create or update and records a
//! snapshot in the history store. Also renders change history for a record.

use crate::config::SummaryConfig;
use crate::domain::models::{FieldDiff, HistoryEntry, MinutesDraft, VersionSnapshot};
use crate::error::{MinutesError, Result};
use crate::ports::history::HistoryStorePort;
use crate::services::differ;
use std::sync::Arc;

/// Versioned minutes operations over a history store
pub struct MinutesService<S: HistoryStorePort> {
    store: Arc<S>,
    config: SummaryConfig,
}

impl<S: HistoryStorePort> MinutesService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self::with_config(store, SummaryConfig::default())
    }

    pub fn with_config(store: Arc<S>, config: SummaryConfig) -> Self {
        Self { store, config }
    }

    /// Creates a minutes record and stores its first snapshot
    ///
    /// If the first snapshot cannot be stored the new record is deleted again,
    /// so a failed create leaves no empty record behind.
    pub async fn create_minutes(&self, draft: MinutesDraft) -> Result<(i64, VersionSnapshot)> {
        let minutes_id = self.store.create_record().await?;
        log::info!("Created minutes record {} ('{}')", minutes_id, draft.title);

        match self.save_version(minutes_id, draft).await {
            Ok(snapshot) => Ok((minutes_id, snapshot)),
            Err(e) => {
                log::warn!("First version of minutes {} failed: {}", minutes_id, e);
                if let Err(cleanup) = self.store.delete_record(minutes_id).await {
                    log::error!("Failed to remove minutes record {}: {}", minutes_id, cleanup);
                }
                Err(e)
            }
        }
    }

    /// Stores a new snapshot for an existing record
    pub async fn update_minutes(
        &self,
        minutes_id: i64,
        draft: MinutesDraft,
    ) -> Result<VersionSnapshot> {
        self.save_version(minutes_id, draft).await
    }

    async fn save_version(&self, minutes_id: i64, draft: MinutesDraft) -> Result<VersionSnapshot> {
        let draft = draft.enforce_limits(&self.config);
        let snapshot = VersionSnapshot::new(draft.sections, draft.editor);

        let stored = self
            .store
            .append_snapshot(minutes_id, snapshot)
            .await?
            .ok_or_else(|| not_found(minutes_id))?;

        log::debug!(
            "Recorded version {} of minutes {} ({} characters)",
            stored.id,
            minutes_id,
            stored.sections.total_characters()
        );
        Ok(stored)
    }

    /// Change history of a record, oldest first
    pub async fn history(&self, minutes_id: i64) -> Result<Vec<HistoryEntry>> {
        let snapshots = self.snapshots(minutes_id).await?;
        Ok(differ::list_history(&snapshots))
    }

    /// Diffs introduced by the most recent snapshot
    ///
    /// Empty when the record has no snapshots yet.
    pub async fn latest_diffs(&self, minutes_id: i64) -> Result<Vec<FieldDiff>> {
        let history = self.history(minutes_id).await?;
        Ok(history.into_iter().last().map(|entry| entry.diffs).unwrap_or_default())
    }

    /// Deletes a record and its history
    pub async fn delete_minutes(&self, minutes_id: i64) -> Result<()> {
        if !self.store.delete_record(minutes_id).await? {
            return Err(not_found(minutes_id));
        }
        log::info!("Deleted minutes record {}", minutes_id);
        Ok(())
    }

    async fn snapshots(&self, minutes_id: i64) -> Result<Vec<VersionSnapshot>> {
        self.store
            .snapshots(minutes_id)
            .await?
            .ok_or_else(|| not_found(minutes_id))
    }
}

fn not_found(minutes_id: i64) -> MinutesError {
    MinutesError::NotFound(format!("Minutes {} not found", minutes_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryHistoryStore;
    use crate::domain::models::{Section, SummarySections};
    use crate::ports::history::MockHistoryStorePort;
    use chrono::NaiveDate;

    fn draft(sections: SummarySections, editor: Option<&str>) -> MinutesDraft {
        MinutesDraft {
            title: "開発定例".to_string(),
            meeting_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            participants: vec!["田中".to_string(), "佐藤".to_string()],
            sections,
            raw_input: "目的: 確認".to_string(),
            editor: editor.map(str::to_string),
        }
    }

    fn service() -> MinutesService<InMemoryHistoryStore> {
        MinutesService::new(Arc::new(InMemoryHistoryStore::new()))
    }

    #[tokio::test]
    async fn test_create_enforces_limits() {
        let service = service();
        let long = "あ".repeat(300);
        let (id, snapshot) = service
            .create_minutes(draft(
                SummarySections::new(long.clone(), long.clone(), long.clone(), long),
                Some("田中"),
            ))
            .await
            .unwrap();

        assert_eq!(snapshot.sections.total_characters(), 1000);
        assert_eq!(snapshot.editor.as_deref(), Some("田中"));
        assert_eq!(service.history(id).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_appends_and_diffs() {
        let service = service();
        let (id, _) = service
            .create_minutes(draft(SummarySections::new("p", "d", "a", "g"), None))
            .await
            .unwrap();
        let updated = service
            .update_minutes(id, draft(SummarySections::new("p", "d\nd2", "a", "g"), Some("佐藤")))
            .await
            .unwrap();
        assert_eq!(updated.id, 2);

        let diffs = service.latest_diffs(id).await.unwrap();
        assert_eq!(diffs[1].field, Section::Decisions);
        assert_eq!(diffs[1].diff, "  d\n+ d2");
        assert!(diffs[0].diff.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_record_is_not_found() {
        let service = service();
        let err = service
            .update_minutes(99, draft(SummarySections::default(), None))
            .await
            .unwrap_err();
        assert!(matches!(err, MinutesError::NotFound(_)));
        assert!(matches!(
            service.history(99).await,
            Err(MinutesError::NotFound(_))
        ));
        assert!(matches!(
            service.delete_minutes(99).await,
            Err(MinutesError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_delete_removes_history() {
        let service = service();
        let (id, _) = service
            .create_minutes(draft(SummarySections::new("p", "", "", ""), None))
            .await
            .unwrap();
        service.delete_minutes(id).await.unwrap();
        assert!(service.history(id).await.is_err());
    }

    #[tokio::test]
    async fn test_store_errors_propagate() {
        let mut store = MockHistoryStorePort::new();
        store
            .expect_snapshots()
            .returning(|_| Err(MinutesError::Storage("connection lost".to_string())));

        let service = MinutesService::new(Arc::new(store));
        let err = service.history(1).await.unwrap_err();
        assert!(matches!(err, MinutesError::Storage(_)));
    }

    #[tokio::test]
    async fn test_failed_create_removes_record() {
        let mut store = MockHistoryStorePort::new();
        store.expect_create_record().times(1).returning(|| Ok(7));
        store
            .expect_append_snapshot()
            .times(1)
            .returning(|_, _| Err(MinutesError::Storage("disk full".to_string())));
        store
            .expect_delete_record()
            .withf(|id| *id == 7)
            .times(1)
            .returning(|_| Ok(true));

        let service = MinutesService::new(Arc::new(store));
        let err = service
            .create_minutes(draft(SummarySections::new("p", "", "", ""), None))
            .await
            .unwrap_err();
        assert!(matches!(err, MinutesError::Storage(msg) if msg == "disk full"));
    }

    #[tokio::test]
    async fn test_failed_cleanup_keeps_original_error() {
        let mut store = MockHistoryStorePort::new();
        store.expect_create_record().returning(|| Ok(3));
        store.expect_append_snapshot().returning(|_, _| Ok(None));
        store
            .expect_delete_record()
            .times(1)
            .returning(|_| Err(MinutesError::Storage("connection lost".to_string())));

        let service = MinutesService::new(Arc::new(store));
        let err = service
            .create_minutes(draft(SummarySections::default(), None))
            .await
            .unwrap_err();
        assert!(matches!(err, MinutesError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_latest_diffs_on_empty_record() {
        let mut store = MockHistoryStorePort::new();
        store.expect_snapshots().returning(|_| Ok(Some(Vec::new())));

        let service = MinutesService::new(Arc::new(store));
        assert!(service.latest_diffs(5).await.unwrap().is_empty());
    }
}
