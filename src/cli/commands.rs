//! CLI command implementation.
//!
//! Loads both inputs, runs the selected metric and formats the result.

use crate::cli::output::{InputSummary, OutputFormat, Report, format_report};
use crate::cli::parser::Cli;
use crate::core::{ByteBuffer, checked};
use crate::distance::{Mode, create_metric};
use crate::error::{CommandError, Result};
use crate::io::load;
use std::path::Path;
use tracing::debug;

/// Executes the CLI command.
///
/// # Arguments
///
/// * `cli` - Parsed CLI arguments.
///
/// # Returns
///
/// Result with output string on success.
///
/// # Errors
///
/// Returns an error if the read limit is malformed, a file cannot be
/// loaded, or the computation fails. No output is produced in that case.
pub fn execute(cli: &Cli) -> Result<String> {
    let format = cli.format;
    let mode = cli.mode.selected().ok_or_else(|| {
        CommandError::InvalidArgument("one of -d, -l or -u is required".to_string())
    })?;
    let max_size = parse_read_limit(cli.read_limit.as_deref())?;
    let metric = create_metric(mode, cli.window)?;

    let first = load_input(&cli.file1, max_size, "first")?;
    let second = load_input(&cli.file2, max_size, "second")?;

    debug!(
        mode = %mode,
        first = first.size(),
        second = second.size(),
        "computing"
    );
    let value = metric.compute(&first, &second)?;
    debug!(value, "computed");

    let report = Report {
        mode,
        value,
        first: summarize(&cli.file1, &first),
        second: summarize(&cli.file2, &second),
        window: matches!(mode, Mode::Upper).then_some(cli.window),
    };
    Ok(format_report(&report, format)?)
}

/// Parses the optional read limit, defaulting to no limit.
///
/// # Errors
///
/// Returns [`CommandError::InvalidReadLimit`] if the string is not an
/// unsigned decimal that fits `usize`.
pub fn parse_read_limit(input: Option<&str>) -> Result<usize> {
    input.map_or(Ok(usize::MAX), |raw| {
        checked::parse_size(raw).map_err(|source| {
            CommandError::InvalidReadLimit {
                input: raw.to_string(),
                source,
            }
            .into()
        })
    })
}

/// Loads one input, tagging failures with which input it was.
fn load_input(path: &Path, max_size: usize, which: &'static str) -> Result<ByteBuffer> {
    load(path, max_size).map_err(|source| {
        CommandError::InputFailed {
            which,
            source: Box::new(source),
        }
        .into()
    })
}

fn summarize(path: &Path, buffer: &ByteBuffer) -> InputSummary {
    InputSummary {
        path: path.to_string_lossy().to_string(),
        size: buffer.size(),
        truncated: buffer.is_truncated(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::parser::ModeArgs;
    use crate::error::{Error, ErrorKind, IoError, ParseSizeError};
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn make_cli(mode: Mode, file1: PathBuf, file2: PathBuf) -> Cli {
        Cli {
            mode: ModeArgs::from_mode(mode),
            file1,
            file2,
            read_limit: None,
            window: crate::distance::DEFAULT_WINDOW,
            verbose: false,
            format: OutputFormat::Text,
        }
    }

    fn write_pair(dir: &TempDir, a: &[u8], b: &[u8]) -> (PathBuf, PathBuf) {
        let first = dir.path().join("a.bin");
        let second = dir.path().join("b.bin");
        std::fs::write(&first, a).unwrap();
        std::fs::write(&second, b).unwrap();
        (first, second)
    }

    #[test]
    fn test_parse_read_limit_default() {
        assert_eq!(parse_read_limit(None).unwrap(), usize::MAX);
        assert_eq!(parse_read_limit(Some("0")).unwrap(), 0);
        assert_eq!(parse_read_limit(Some("4096")).unwrap(), 4096);
    }

    #[test]
    fn test_parse_read_limit_rejects() {
        let err = parse_read_limit(Some("-1")).unwrap_err();
        assert!(matches!(
            err,
            Error::Command(CommandError::InvalidReadLimit {
                source: ParseSizeError::Signed,
                ..
            })
        ));
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn test_execute_each_mode() {
        let temp_dir = TempDir::new().unwrap();
        let (a, b) = write_pair(&temp_dir, b"kitten", b"sitting");

        let exact = execute(&make_cli(Mode::Distance, a.clone(), b.clone())).unwrap();
        assert_eq!(exact, "3\n");

        let lower = execute(&make_cli(Mode::Lower, a.clone(), b.clone())).unwrap();
        let upper = execute(&make_cli(Mode::Upper, a, b)).unwrap();
        let lower: usize = lower.trim().parse().unwrap();
        let upper: usize = upper.trim().parse().unwrap();
        assert!(lower <= 3);
        assert!(upper >= 3);
    }

    #[test]
    fn test_execute_with_read_limit() {
        let temp_dir = TempDir::new().unwrap();
        let (a, b) = write_pair(&temp_dir, b"abcXXXX", b"abcYY");

        let mut cli = make_cli(Mode::Distance, a, b);
        cli.read_limit = Some("3".to_string());
        assert_eq!(execute(&cli).unwrap(), "0\n");
    }

    #[test]
    fn test_execute_json() {
        let temp_dir = TempDir::new().unwrap();
        let (a, b) = write_pair(&temp_dir, b"aaaa", b"bbbb");

        let mut cli = make_cli(Mode::Lower, a, b);
        cli.format = OutputFormat::Json;
        let output = execute(&cli).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["mode"], "lower");
        assert_eq!(value["value"], 4);
        assert!(value.get("window").is_none());
    }

    #[test]
    fn test_execute_missing_second_file() {
        let temp_dir = TempDir::new().unwrap();
        let (a, _) = write_pair(&temp_dir, b"a", b"b");
        let missing = temp_dir.path().join("missing.bin");

        let err = execute(&make_cli(Mode::Distance, a, missing)).unwrap_err();
        match err {
            Error::Command(CommandError::InputFailed { which, source }) => {
                assert_eq!(which, "second");
                assert!(matches!(*source, Error::Io(IoError::FileNotFound { .. })));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_execute_zero_window() {
        let temp_dir = TempDir::new().unwrap();
        let (a, b) = write_pair(&temp_dir, b"a", b"b");

        let mut cli = make_cli(Mode::Upper, a, b);
        cli.window = 0;
        assert!(execute(&cli).is_err());
    }

    #[test]
    fn test_execute_without_mode() {
        let temp_dir = TempDir::new().unwrap();
        let (a, b) = write_pair(&temp_dir, b"a", b"b");

        let mut cli = make_cli(Mode::Distance, a, b);
        cli.mode = ModeArgs::default();
        assert!(matches!(
            execute(&cli),
            Err(Error::Command(CommandError::InvalidArgument(_)))
        ));
    }
}
