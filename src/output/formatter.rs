use std::fs;
use std::io::Write;
use std::path::Path;

use super::PercentageReport;
use crate::error::{IoError, Result};

pub struct OutputFormatter;

impl OutputFormatter {
    /// Pretty JSON object with two-space indentation and sorted keys.
    pub fn to_json(report: &PercentageReport) -> serde_json::Result<String> {
        serde_json::to_string_pretty(report)
    }

    /// Write the rendered report to `output_file`, or to stdout when none is given.
    pub fn write(rendered: &str, output_file: Option<&Path>) -> Result<()> {
        match output_file {
            Some(path) => {
                fs::write(path, format!("{rendered}\n")).map_err(|e| IoError::write(path, e))?;
            }
            None => {
                let stdout = std::io::stdout();
                let mut handle = stdout.lock();
                writeln!(handle, "{rendered}").map_err(|e| IoError::write("<stdout>", e))?;
            }
        }
        Ok(())
    }
}
