//! Summary pipeline: classify, assemble, then enforce the budget

use crate::config::SummaryConfig;
use crate::domain::models::{RawInput, SummaryRequest, SummaryResponse};
use crate::error::Result;
use crate::services::{assembler, budget, classifier};

/// Summarizes raw notes with the default budget
///
/// Never fails; messy or empty notes degrade to placeholder text.
pub fn summarize(input: &RawInput) -> SummaryResponse {
    summarize_with(input, &SummaryConfig::default())
}

/// Summarizes raw notes with a custom budget
pub fn summarize_with(input: &RawInput, config: &SummaryConfig) -> SummaryResponse {
    log::info!(
        "Summarizing '{}' ({} mode, {} characters)",
        input.title,
        input.input_mode,
        input.text.chars().count()
    );

    let parsed = classifier::classify(&input.text, input.input_mode);
    let sections = assembler::assemble(&parsed, input);
    let sections = budget::truncate_sections_with(&sections, config);

    SummaryResponse::from(sections)
}

/// Validates an API request and summarizes it
///
/// Fails with `InvalidInput` when `input_mode` is not `free` or `bullet`.
pub fn summarize_request(request: &SummaryRequest) -> Result<SummaryResponse> {
    summarize_request_with(request, &SummaryConfig::default())
}

/// Validates an API request and summarizes it with a custom budget
pub fn summarize_request_with(
    request: &SummaryRequest,
    config: &SummaryConfig,
) -> Result<SummaryResponse> {
    let input = RawInput::try_from(request)?;
    Ok(summarize_with(&input, config))
}
