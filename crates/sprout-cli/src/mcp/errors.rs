//! Error handling utilities for MCP server

use rmcp::ErrorData;
use sprout_core::TrackerError;

/// Convert a tracker error into the MCP error a client can act on.
///
/// Unknown plants become `resource_not_found`, rejected input becomes
/// `invalid_params`, and anything else is an internal error.
pub fn to_mcp_error(message: &str, error: &TrackerError) -> ErrorData {
    let text = format!("{message}: {error}");
    if error.is_not_found() {
        ErrorData::resource_not_found(text, None)
    } else if error.is_validation() {
        ErrorData::invalid_params(text, None)
    } else {
        ErrorData::internal_error(text, None)
    }
}

#[cfg(test)]
mod tests {
    use rmcp::model::ErrorCode;

    use super::*;

    #[test]
    fn test_error_codes() {
        let not_found = to_mcp_error("Failed to water plant", &TrackerError::PlantNotFound { id: 3 });
        assert_eq!(not_found.code, ErrorCode::RESOURCE_NOT_FOUND);
        assert!(not_found.message.contains("Failed to water plant"));

        let invalid = to_mcp_error(
            "Failed to add plant",
            &TrackerError::invalid_input("frequency").with_reason("must be positive"),
        );
        assert_eq!(invalid.code, ErrorCode::INVALID_PARAMS);

        let internal = to_mcp_error(
            "Failed to list plants",
            &TrackerError::Configuration {
                message: "boom".to_string(),
            },
        );
        assert_eq!(internal.code, ErrorCode::INTERNAL_ERROR);
    }
}
