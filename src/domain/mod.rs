/// Domain layer - core minutes models
///
/// These models are storage-agnostic and represent core business entities.
pub mod history;
pub mod keywords;
pub mod models;
pub mod text;

pub use history::VersionHistory;
pub use keywords::{FallbackText, SECTION_KEYWORDS};
pub use models::{
    FieldDiff, HistoryEntry, InputMode, MinutesDraft, ParsedSections, RawInput, Section,
    SummaryRequest, SummaryResponse, SummarySections, VersionSnapshot,
};
