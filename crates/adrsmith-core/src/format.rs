// ABOUTME: Formats collected inputs into the NFR and transformation-context text blocks.
// ABOUTME: Pure functions of AdrInputs; both blocks are embedded verbatim in rendered documents.

use crate::input::AdrInputs;

/// Render the three NFR fields as a bulleted block with fixed label prefixes.
/// Values are inserted verbatim; no escaping or validation is performed.
pub fn nfr_block(inputs: &AdrInputs) -> String {
    format!(
        "- Availability: {}\n- Latency: {}\n- Cost Cap: {}",
        inputs.availability, inputs.latency_target, inputs.cost_cap
    )
}

/// Render the three transformation dimensions as heading + value pairs,
/// in fixed order: application, database, infrastructure.
pub fn context_block(inputs: &AdrInputs) -> String {
    format!(
        "### Application Transformation\n{}\n\n### Database Transformation\n{}\n\n### Infrastructure Transformation\n{}",
        inputs.application_context, inputs.database_context, inputs.infrastructure_context
    )
}
