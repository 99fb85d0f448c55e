//! Conversion between command-line text and option values.

use serde_json::Value;

use crate::error::{OptionsError, Result};
use crate::options::{value_kind, Options};

/// Interpret a command-line value.
///
/// Valid JSON (`42`, `true`, `[1,2]`, `"quoted"`) is stored as parsed;
/// anything else is stored as a plain string.
pub fn parse_value(input: &str) -> Value {
    serde_json::from_str(input).unwrap_or_else(|_| Value::String(input.to_string()))
}

/// Parse a JSON object into an options record.
pub fn parse_record(input: &str) -> Result<Options> {
    let value: Value = serde_json::from_str(input).map_err(|e| OptionsError::InvalidValue {
        message: format!("not valid JSON: {}", e),
    })?;

    match value {
        Value::Object(options) => Ok(options),
        other => Err(OptionsError::InvalidValue {
            message: format!("expected a JSON object, got {}", value_kind(&other)),
        }),
    }
}

/// Render a value for display. Strings print without quotes.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
