//! Batch conversion command
//!
//! Reads one input per line from a file or stdin, converts all lines in
//! parallel and prints the results in input order.

use std::fs;
use std::io::{self, Read};

use clap::ArgMatches;
use log::{info, warn};
use serde::Serialize;

use crate::api::{ConversionResult, CoordKit};
use crate::commands::command_traits::Command;
use crate::errors::{CoordError, CoordResult};
use crate::input::InputFormat;
use crate::utils::progress::ProgressTracker;

/// Source path meaning standard input
const STDIN_SOURCE: &str = "-";

/// Command for converting a list of inputs
pub struct BatchCommand<'a> {
    /// Input file path, or `-` for stdin
    source: String,
    format: InputFormat,
    kit: &'a CoordKit,
}

/// One line of batch output
#[derive(Debug, Serialize)]
struct BatchEntry<'r> {
    line: usize,
    input: &'r str,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<&'r ConversionResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<'a> BatchCommand<'a> {
    /// Create a new batch command
    pub fn new(args: &ArgMatches, kit: &'a CoordKit) -> CoordResult<Self> {
        let source = args.get_one::<String>("batch")
            .ok_or_else(|| CoordError::Config("Missing batch source".to_string()))?
            .clone();
        super::ensure_no_positional(args)?;

        Ok(BatchCommand {
            source,
            format: super::input_format(args)?,
            kit,
        })
    }

    fn read_source(&self) -> CoordResult<String> {
        if self.source == STDIN_SOURCE {
            let mut content = String::new();
            io::stdin().read_to_string(&mut content)?;
            Ok(content)
        } else {
            fs::read_to_string(&self.source)
                .map_err(|e| CoordError::Io(format!("Cannot read {}: {}", self.source, e)))
        }
    }
}

/// Non-empty lines that are not `#` comments, with their 1-based line numbers
pub fn input_lines(content: &str) -> Vec<(usize, &str)> {
    content.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .collect()
}

impl<'a> Command for BatchCommand<'a> {
    fn execute(&self) -> CoordResult<()> {
        let content = self.read_source()?;
        let lines = input_lines(&content);
        let inputs: Vec<&str> = lines.iter().map(|(_, text)| *text).collect();
        info!("Converting {} inputs from {}", inputs.len(), self.source);

        let progress = if self.source == STDIN_SOURCE {
            ProgressTracker::hidden()
        } else {
            ProgressTracker::new(inputs.len() as u64, "Converting")
        };
        let results = self.kit.convert_all(&inputs, self.format, Some(&progress));
        progress.finish();

        let mut failed = 0;
        let mut entries = Vec::with_capacity(results.len());
        for (&(line, input), result) in lines.iter().zip(&results) {
            let entry = match result {
                Ok(converted) => BatchEntry { line, input, result: Some(converted), error: None },
                Err(e) => {
                    failed += 1;
                    warn!("Line {}: {}", line, e);
                    BatchEntry { line, input, result: None, error: Some(e.to_string()) }
                },
            };
            entries.push(entry);
        }

        if self.kit.config().json {
            println!("{}", serde_json::to_string_pretty(&entries)?);
        } else {
            for entry in &entries {
                match (entry.result, &entry.error) {
                    (Some(result), _) => println!("# {}: {}\n{}\n", entry.line, entry.input, result.to_text()),
                    (None, Some(error)) => println!("# {}: {}\nerror: {}\n", entry.line, entry.input, error),
                    (None, None) => {},
                }
            }
        }

        info!("Converted {} of {} inputs", entries.len() - failed, entries.len());
        if failed > 0 {
            return Err(CoordError::BatchFailed { failed, total: entries.len() });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_lines_skip_blanks_and_comments() {
        let content = "# header\n31UDQ4826010878\n\n  POINT(1 2)  \n#40N 79W\n40 N 79 W";
        assert_eq!(input_lines(content), vec![
            (2, "31UDQ4826010878"),
            (4, "POINT(1 2)"),
            (6, "40 N 79 W"),
        ]);
    }
}
