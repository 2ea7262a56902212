/// Domain models for the minutes core
///
/// These models are storage-agnostic and represent the inputs and outputs of
/// classification, budgeting and version diffing.
use crate::error::{MinutesError, Result};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One of the four structured minutes fields
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Purpose,
    Decisions,
    ActionItems,
    Digest,
}

impl Section {
    /// Fixed declaration order. Keyword ties, budget rotation and diff output
    /// all follow it.
    pub const ALL: [Section; 4] = [
        Section::Purpose,
        Section::Decisions,
        Section::ActionItems,
        Section::Digest,
    ];
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Section::Purpose => write!(f, "purpose"),
            Section::Decisions => write!(f, "decisions"),
            Section::ActionItems => write!(f, "action_items"),
            Section::Digest => write!(f, "digest"),
        }
    }
}

/// How the raw notes were written
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    #[default]
    Free,
    Bullet,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputMode::Free => write!(f, "free"),
            InputMode::Bullet => write!(f, "bullet"),
        }
    }
}

impl FromStr for InputMode {
    type Err = MinutesError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "free" => Ok(InputMode::Free),
            "bullet" => Ok(InputMode::Bullet),
            _ => Err(MinutesError::InvalidInput(
                "input_mode must be 'free' or 'bullet'".to_string(),
            )),
        }
    }
}

fn default_input_mode() -> String {
    InputMode::Free.to_string()
}

/// Summary request as received from the API layer
///
/// `input_mode` stays a plain string here; it is validated when converted
/// into a [`RawInput`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryRequest {
    pub title: String,
    pub meeting_date: NaiveDate,
    #[serde(default)]
    pub participants: Vec<String>,
    pub text: String,
    #[serde(default = "default_input_mode")]
    pub input_mode: String, // "free" or "bullet"
}

/// Validated input to classification
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RawInput {
    pub title: String,
    pub meeting_date: NaiveDate,
    pub participants: Vec<String>,
    pub text: String,
    pub input_mode: InputMode,
}

impl RawInput {
    /// Creates a free-mode input with no participants
    pub fn new(title: impl Into<String>, meeting_date: NaiveDate, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            meeting_date,
            participants: Vec::new(),
            text: text.into(),
            input_mode: InputMode::Free,
        }
    }

    /// Switches the input mode
    pub fn with_mode(mut self, input_mode: InputMode) -> Self {
        self.input_mode = input_mode;
        self
    }
}

impl TryFrom<SummaryRequest> for RawInput {
    type Error = MinutesError;

    fn try_from(request: SummaryRequest) -> Result<Self> {
        let input_mode = request.input_mode.parse()?;
        Ok(Self {
            title: request.title,
            meeting_date: request.meeting_date,
            participants: request.participants,
            text: request.text,
            input_mode,
        })
    }
}

impl TryFrom<&SummaryRequest> for RawInput {
    type Error = MinutesError;

    fn try_from(request: &SummaryRequest) -> Result<Self> {
        let input_mode = request.input_mode.parse()?;
        Ok(Self {
            title: request.title.clone(),
            meeting_date: request.meeting_date,
            participants: request.participants.clone(),
            text: request.text.clone(),
            input_mode,
        })
    }
}

/// Per-section line buckets produced by one classification run
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParsedSections {
    pub purpose: Vec<String>,
    pub decisions: Vec<String>,
    pub action_items: Vec<String>,
    pub digest: Vec<String>,
    /// Lines seen before any header that matched no keyword
    pub remainder: Vec<String>,
}

impl ParsedSections {
    /// Lines collected for a section
    pub fn lines(&self, section: Section) -> &[String] {
        match section {
            Section::Purpose => &self.purpose,
            Section::Decisions => &self.decisions,
            Section::ActionItems => &self.action_items,
            Section::Digest => &self.digest,
        }
    }

    pub(crate) fn lines_mut(&mut self, section: Section) -> &mut Vec<String> {
        match section {
            Section::Purpose => &mut self.purpose,
            Section::Decisions => &mut self.decisions,
            Section::ActionItems => &mut self.action_items,
            Section::Digest => &mut self.digest,
        }
    }
}

/// The four joined minutes fields
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SummarySections {
    #[serde(default)]
    pub purpose: String,
    #[serde(default)]
    pub decisions: String,
    #[serde(default)]
    pub action_items: String,
    #[serde(default)]
    pub digest: String,
}

impl SummarySections {
    pub fn new(
        purpose: impl Into<String>,
        decisions: impl Into<String>,
        action_items: impl Into<String>,
        digest: impl Into<String>,
    ) -> Self {
        Self {
            purpose: purpose.into(),
            decisions: decisions.into(),
            action_items: action_items.into(),
            digest: digest.into(),
        }
    }

    pub fn get(&self, section: Section) -> &str {
        match section {
            Section::Purpose => &self.purpose,
            Section::Decisions => &self.decisions,
            Section::ActionItems => &self.action_items,
            Section::Digest => &self.digest,
        }
    }

    pub fn get_mut(&mut self, section: Section) -> &mut String {
        match section {
            Section::Purpose => &mut self.purpose,
            Section::Decisions => &mut self.decisions,
            Section::ActionItems => &mut self.action_items,
            Section::Digest => &mut self.digest,
        }
    }

    /// Combined length in characters (not bytes)
    pub fn total_characters(&self) -> usize {
        Section::ALL
            .iter()
            .map(|section| self.get(*section).chars().count())
            .sum()
    }
}

/// Result of summarizing raw notes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SummaryResponse {
    #[serde(flatten)]
    pub sections: SummarySections,
    pub total_characters: usize,
}

impl From<SummarySections> for SummaryResponse {
    fn from(sections: SummarySections) -> Self {
        let total_characters = sections.total_characters();
        Self {
            sections,
            total_characters,
        }
    }
}

/// Create/update payload for a minutes record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MinutesDraft {
    pub title: String,
    pub meeting_date: NaiveDate,
    #[serde(default)]
    pub participants: Vec<String>,
    #[serde(flatten)]
    pub sections: SummarySections,
    pub raw_input: String,
    pub editor: Option<String>,
}

/// Immutable recorded state of the four sections
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VersionSnapshot {
    /// Insertion sequence within the owning history; breaks `created_at` ties
    pub id: u64,
    #[serde(flatten)]
    pub sections: SummarySections,
    pub editor: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl VersionSnapshot {
    /// Creates a snapshot that has not been assigned a sequence id yet
    pub fn new(sections: SummarySections, editor: Option<String>) -> Self {
        Self {
            id: 0,
            sections,
            editor,
            created_at: Utc::now(),
        }
    }
}

/// Change of one field between two adjacent snapshots
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldDiff {
    pub field: Section,
    pub previous: String,
    pub current: String,
    pub diff: String,
}

/// One snapshot together with its diffs against the previous one
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HistoryEntry {
    pub version: VersionSnapshot,
    pub diffs: Vec<FieldDiff>,
}
