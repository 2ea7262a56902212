/// Version history store port
///
/// Defines the interface the persistence layer implements to keep the
/// append-only snapshot log of each minutes record.
use crate::domain::models::VersionSnapshot;
use crate::error::Result;
use async_trait::async_trait;

/// Port trait for version history storage
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HistoryStorePort: Send + Sync {
    /// Create an empty history for a new minutes record, returning its ID
    async fn create_record(&self) -> Result<i64>;

    /// Append a snapshot to a record's history
    ///
    /// Returns the stored snapshot (with its sequence id assigned), or None if
    /// the record does not exist.
    async fn append_snapshot(
        &self,
        minutes_id: i64,
        snapshot: VersionSnapshot,
    ) -> Result<Option<VersionSnapshot>>;

    /// All snapshots of a record in insertion order, or None if it does not exist
    async fn snapshots(&self, minutes_id: i64) -> Result<Option<Vec<VersionSnapshot>>>;

    /// Delete a record together with its whole history
    ///
    /// Returns false if the record did not exist.
    async fn delete_record(&self, minutes_id: i64) -> Result<bool>;
}
