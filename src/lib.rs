//! Meeting-minutes core
//!
//! Extracts purpose, decisions, action items and a digest from free-text or
//! bulleted meeting notes, keeps the four sections within a shared character
//! budget, and renders field-level diffs across saved versions.
//!
//! ```
//! use chrono::NaiveDate;
//! use minutes_core::{summarize, RawInput};
//!
//! let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
//! let input = RawInput::new("定例", date, "目的: 新機能の検討\n決定: A案を採用");
//! let summary = summarize(&input);
//! assert_eq!(summary.sections.purpose, "新機能の検討");
//! assert!(summary.total_characters <= minutes_core::MAX_CHARACTERS);
//! ```

pub mod adapters;
pub mod config;
pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

pub use adapters::storage::InMemoryHistoryStore;
pub use config::{SummaryConfig, MAX_CHARACTERS};
pub use domain::{
    FieldDiff, HistoryEntry, InputMode, MinutesDraft, ParsedSections, RawInput, Section,
    SummaryRequest, SummaryResponse, SummarySections, VersionHistory, VersionSnapshot,
};
pub use error::{MinutesError, Result};
pub use ports::HistoryStorePort;
pub use services::{
    assemble, classify, compute_diffs, enforce_limits, enforce_limits_with, fallback_digest,
    list_history, summarize, summarize_request, summarize_request_with, summarize_with,
    truncate_sections, truncate_sections_with, MinutesService,
};
