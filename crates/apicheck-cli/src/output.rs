//! Output formatting and writing utilities
//!
//! This module renders a validation report either as human-readable status
//! lines or as a serialized document (JSON, YAML). A report is always
//! formatted completely before anything is written, so a failure while
//! rendering never leaves a partial report on stdout.

use crate::cli::OutputFormat;
use crate::error::Result;
use apicheck_schemas::{CheckStatus, ValidationReport};
use colored::Colorize;
use serde::Serialize;
use std::fmt;
use std::io::{self, Write};
use std::path::Path;
use tracing::trace;

/// Severity tag that starts each status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Success,
    Warning,
    Error,
}

impl fmt::Display for StatusLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusLevel::Success => f.write_str("SUCCESS:"),
            StatusLevel::Warning => f.write_str("WARNING:"),
            StatusLevel::Error => f.write_str("ERROR:"),
        }
    }
}

impl From<CheckStatus> for StatusLevel {
    fn from(status: CheckStatus) -> Self {
        match status {
            CheckStatus::Present => StatusLevel::Success,
            CheckStatus::Missing => StatusLevel::Warning,
        }
    }
}

/// Render `message` behind its level tag
pub fn status_line(level: StatusLevel, message: &str, use_color: bool) -> String {
    if !use_color {
        return format!("{} {}", level, message);
    }

    let tag = level.to_string();
    let tag = match level {
        StatusLevel::Success => tag.green().bold(),
        StatusLevel::Warning => tag.yellow().bold(),
        StatusLevel::Error => tag.red().bold(),
    };
    format!("{} {}", tag, message)
}

/// Machine-readable wrapper around a report
#[derive(Debug, Serialize)]
pub struct ReportEnvelope<'a> {
    pub document: String,
    pub complete: bool,
    pub present: usize,
    pub missing: usize,
    #[serde(flatten)]
    pub report: &'a ValidationReport,
}

impl<'a> ReportEnvelope<'a> {
    pub fn new(document: &Path, report: &'a ValidationReport) -> Self {
        Self {
            document: document.display().to_string(),
            complete: report.is_complete(),
            present: report.present_count(),
            missing: report.missing_count(),
            report,
        }
    }
}

/// Trait for formatting output with specialized support for reports
pub trait OutputFormatter {
    /// Format a serializable value
    fn format<T: Serialize>(&self, value: &T) -> Result<String>;

    /// Format a validation report for `document`
    fn format_report(&self, document: &Path, report: &ValidationReport, use_color: bool) -> Result<String>;
}

impl OutputFormatter for OutputFormat {
    fn format<T: Serialize>(&self, value: &T) -> Result<String> {
        match self {
            OutputFormat::Json => Ok(serde_json::to_string(value)?),
            OutputFormat::JsonPretty => Ok(serde_json::to_string_pretty(value)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(value)?),
            OutputFormat::Human => {
                // For human format, use pretty JSON as fallback
                Ok(serde_json::to_string_pretty(value)?)
            }
        }
    }

    fn format_report(&self, document: &Path, report: &ValidationReport, use_color: bool) -> Result<String> {
        match self {
            OutputFormat::Human => Ok(format_report_human(document, report, use_color)),
            machine => machine.format(&ReportEnvelope::new(document, report)),
        }
    }
}

/// Output writer that handles different output formats and colors
pub struct OutputWriter {
    format: OutputFormat,
    use_color: bool,
    writer: Box<dyn Write>,
}

impl OutputWriter {
    /// Create a new output writer on stdout
    pub fn new(format: OutputFormat, use_color: bool) -> Self {
        Self {
            format,
            use_color,
            writer: Box::new(io::stdout()),
        }
    }

    /// Create an output writer with a custom writer
    #[allow(dead_code)]
    pub fn with_writer(format: OutputFormat, use_color: bool, writer: Box<dyn Write>) -> Self {
        Self {
            format,
            use_color,
            writer,
        }
    }

    /// Write raw output
    pub fn write(&mut self, content: &str) -> Result<()> {
        write!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write a complete validation report in the configured format
    pub fn report(&mut self, document: &Path, report: &ValidationReport) -> Result<()> {
        let mut formatted = self.format.format_report(document, report, self.use_color)?;
        trace!(bytes = formatted.len(), format = ?self.format, "Writing report");

        if !formatted.ends_with('\n') {
            formatted.push('\n');
        }
        self.write(&formatted)
    }
}

/// Format a validation report as status and metadata lines
pub fn format_report_human(document: &Path, report: &ValidationReport, use_color: bool) -> String {
    let summary = &report.summary;
    let mut lines = Vec::with_capacity(report.checks.len() + 11);

    lines.push(status_line(
        StatusLevel::Success,
        &format!("Document parsed successfully: {}", document.display()),
        use_color,
    ));
    lines.push(format!("OpenAPI version: {}", summary.version_display()));
    lines.push(format!("API title: {}", summary.title_display()));
    lines.push(format!("API description: {}", summary.description_excerpt));
    lines.push(format!("Server count: {}", summary.server_count));
    lines.push(format!("Tag count: {}", summary.tag_count));
    lines.push(format!("Path count: {}", summary.path_count));
    lines.push(format!("Schema count: {}", summary.schema_count));

    for check in &report.checks {
        lines.push(status_line(
            check.status.into(),
            &format!("{} {}: {}", check.category, check.status, check.identifier),
            use_color,
        ));
    }

    lines.push(String::new());
    lines.push(status_line(
        StatusLevel::Success,
        "Document validation complete",
        use_color,
    ));

    let mut output = lines.join("\n");
    output.push('\n');
    output
}
