//! JSON output formatter for machine processing

use crate::domain::ValidationResult;
use crate::error::ReportError;
use crate::output::OutputFormatter;
use serde::Serialize;
use std::io::Write;

/// Written instead of the report when serialization fails
pub const JSON_ERROR_PAYLOAD: &str = r#"{"error": "failed to marshal result"}"#;

/// JSON formatter for machine-readable output
#[derive(Debug, Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Serialize the result with 2-space indentation
    pub fn render(result: &ValidationResult) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(result)?)
    }
}

/// Write `value` as pretty JSON, or [`JSON_ERROR_PAYLOAD`] if it fails to serialize
fn write_json<T: Serialize>(value: &T, writer: &mut dyn Write) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(ReportError::from)
        .unwrap_or_else(|e| {
            tracing::error!("{}", e);
            JSON_ERROR_PAYLOAD.to_string()
        });

    writeln!(writer, "{}", json)
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, result: &ValidationResult, writer: &mut dyn Write) -> std::io::Result<()> {
        write_json(result, writer)
    }
}
