/// Services - the minutes pipeline and version history operations
///
/// Classification, assembly and budgeting are pure functions. The minutes
/// service is the only part that talks to a port.
pub mod assembler;
pub mod budget;
pub mod classifier;
pub mod differ;
pub mod minutes;
pub mod summarizer;

pub use assembler::{assemble, fallback_digest};
pub use budget::{enforce_limits, enforce_limits_with, truncate_sections, truncate_sections_with};
pub use classifier::classify;
pub use differ::{compute_diffs, list_history};
pub use minutes::MinutesService;
pub use summarizer::{summarize, summarize_request, summarize_request_with, summarize_with};
