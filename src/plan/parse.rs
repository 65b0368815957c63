//! Turning model text into a typed plan.

use tracing::debug;

use crate::error::FitError;
use crate::types::GeneratedPlan;

/// Parse the model's reply into a plan, all or nothing.
pub fn parse_plan(text: &str) -> Result<GeneratedPlan, FitError> {
    let json_text = strip_code_fences(text);
    if json_text.is_empty() {
        return Err(FitError::EmptyResponse);
    }

    let plan: GeneratedPlan = serde_json::from_str(json_text)?;
    if plan.macro_split.len() > 1 {
        debug!(
            entries = plan.macro_split.len(),
            "Ignoring macro split entries after the first"
        );
    }
    Ok(plan)
}

/// Strip markdown code fences from JSON response.
fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(after_ticks) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the language tag, whatever its case, up to the first newline.
    let body = match after_ticks.split_once('\n') {
        Some((_, rest)) => rest,
        None => after_ticks.trim_start_matches(|c: char| c.is_ascii_alphanumeric()),
    };
    body.strip_suffix("```").unwrap_or(body).trim()
}
