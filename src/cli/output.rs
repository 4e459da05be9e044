//! Output formatting for CLI commands.
//!
//! Supports text and JSON output formats.

use crate::distance::Mode;
use crate::error::{CommandError, Error, ErrorKind};
use serde::Serialize;

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// The bare integer followed by a newline.
    Text,
    /// JSON output.
    Json,
}

/// Description of one compared input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputSummary {
    /// Path as given on the command line.
    pub path: String,
    /// Number of bytes compared.
    pub size: usize,
    /// Whether the read limit cut the file short.
    pub truncated: bool,
}

/// Result of one computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Metric that was computed.
    pub mode: Mode,
    /// The distance or bound.
    pub value: usize,
    /// First input.
    pub first: InputSummary,
    /// Second input.
    pub second: InputSummary,
    /// Window size, for the upper bound only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window: Option<usize>,
}

/// Formats a computation result.
///
/// # Errors
///
/// Returns [`CommandError::OutputFormat`] if the report cannot be
/// serialized.
pub fn format_report(report: &Report, format: OutputFormat) -> Result<String, CommandError> {
    match format {
        OutputFormat::Text => Ok(format!("{}\n", report.value)),
        OutputFormat::Json => {
            let mut json = format_json(report)?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// Formats an error.
///
/// Text output is the error message alone; the caller adds any prefix.
/// If the JSON body cannot be serialized, the plain message is returned.
#[must_use]
pub fn format_error(error: &Error, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => error.to_string(),
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct ErrorBody {
                error: ErrorKind,
                message: String,
            }
            format_json(&ErrorBody {
                error: error.kind(),
                message: error.to_string(),
            })
            .unwrap_or_else(|_| error.to_string())
        }
    }
}

/// Formats a value as JSON.
fn format_json<T: Serialize>(value: &T) -> Result<String, CommandError> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ArithmeticError, ParseSizeError};
    use std::collections::BTreeMap;

    fn sample_report() -> Report {
        Report {
            mode: Mode::Upper,
            value: 42,
            first: InputSummary {
                path: "a.bin".to_string(),
                size: 2048,
                truncated: false,
            },
            second: InputSummary {
                path: "b.bin".to_string(),
                size: 100,
                truncated: true,
            },
            window: Some(1024),
        }
    }

    #[test]
    fn test_output_format_value_enum() {
        use clap::ValueEnum;

        assert_eq!(OutputFormat::from_str("json", false), Ok(OutputFormat::Json));
        assert_eq!(OutputFormat::from_str("text", false), Ok(OutputFormat::Text));
        assert!(OutputFormat::from_str("xml", false).is_err());
    }

    #[test]
    fn test_format_json_serialization_failure() {
        // JSON object keys must be strings.
        let mut map = BTreeMap::new();
        map.insert((1u8, 2u8), 3u8);
        let err = format_json(&map).unwrap_err();
        assert!(matches!(err, CommandError::OutputFormat(_)));
        assert_eq!(Error::from(err).kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn test_format_report_text() {
        assert_eq!(format_report(&sample_report(), OutputFormat::Text).unwrap(), "42\n");
    }

    #[test]
    fn test_format_report_json() {
        let json = format_report(&sample_report(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["mode"], "upper");
        assert_eq!(value["value"], 42);
        assert_eq!(value["first"]["size"], 2048);
        assert_eq!(value["second"]["truncated"], true);
        assert_eq!(value["window"], 1024);
    }

    #[test]
    fn test_format_report_json_without_window() {
        let mut report = sample_report();
        report.mode = Mode::Lower;
        report.window = None;
        let json = format_report(&report, OutputFormat::Json).unwrap();
        assert!(!json.contains("window"));
        assert!(json.contains("\"mode\": \"lower\""));
    }

    #[test]
    fn test_format_error_text() {
        let err: Error = CommandError::InvalidReadLimit {
            input: "12a".to_string(),
            source: ParseSizeError::InvalidDigit {
                character: 'a',
                offset: 2,
            },
        }
        .into();
        let text = format_error(&err, OutputFormat::Text);
        assert!(text.contains("read limit"));
        assert!(text.contains("12a"));
    }

    #[test]
    fn test_format_error_json() {
        let err: Error = ArithmeticError::Overflow {
            operation: "add",
            lhs: usize::MAX,
            rhs: 1,
        }
        .into();
        let json = format_error(&err, OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["error"], "arithmetic_overflow");
        assert!(value["message"].as_str().unwrap().contains("add"));
    }
}
