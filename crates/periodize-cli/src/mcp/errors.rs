//! Mapping of engine errors onto MCP error responses.

use periodize_core::EngineError;
use rmcp::ErrorData;

/// Converts an engine error into an MCP error, prefixed with `message`.
///
/// Problems with the caller's request (bad parameters, unknown ids, a
/// structure that must be cleared first) become `invalid_params` so the
/// client can correct the call; everything else is an internal error.
pub fn to_mcp_error(message: &str, error: &EngineError) -> ErrorData {
    let text = format!("{message}: {error}");
    match error {
        EngineError::InvalidInput { .. }
        | EngineError::PlanNotFound { .. }
        | EngineError::DayNotFound { .. }
        | EngineError::StructureExists { .. } => ErrorData::invalid_params(text, None),
        _ => ErrorData::internal_error(text, None),
    }
}

/// Error for a lookup that found nothing.
pub fn not_found(kind: &str, id: u64) -> ErrorData {
    ErrorData::invalid_params(format!("{kind} with ID {id} not found"), None)
}
