//! Environment-driven settings for the demo binary.

use std::str::FromStr;

use optionals_core::error::CoreError;

/// Environment variable selecting the output format.
pub const FORMAT_VAR: &str = "DEMO_FORMAT";

/// How demonstration results are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(CoreError::Validation(format!(
                "{FORMAT_VAR} must be 'text' or 'json', got '{other}'"
            ))),
        }
    }
}

/// Resolve the output format from a raw variable value; unset means the
/// default.
pub fn output_format_from(value: Option<String>) -> Result<OutputFormat, CoreError> {
    let Some(raw) = value else {
        return Ok(OutputFormat::default());
    };
    raw.parse()
}

pub fn output_format() -> Result<OutputFormat, CoreError> {
    output_format_from(std::env::var(FORMAT_VAR).ok())
}
