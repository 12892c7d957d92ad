//! Output formatting for fetched grading criteria

use crate::error::CliError;
use gc_http_client::{CourseId, CriteriaHead, GradingCriteriaItem};
use std::io::Write;

/// How a successful result is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable summary
    Summary,
    /// Pretty JSON after a header line
    Json,
    /// Pretty JSON only
    Quiet,
}

impl OutputMode {
    /// Resolve from `--json` / `--quiet`; quiet wins
    pub fn from_flags(json: bool, quiet: bool) -> Self {
        match (json, quiet) {
            (_, true) => OutputMode::Quiet,
            (true, false) => OutputMode::Json,
            (false, false) => OutputMode::Summary,
        }
    }
}

/// Output formatter for grading criteria
pub struct OutputFormatter {
    mode: OutputMode,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }

    /// Print the items to stdout
    pub fn print(&self, course_id: &CourseId, items: &[GradingCriteriaItem]) -> Result<(), CliError> {
        let stdout = std::io::stdout();
        self.write(&mut stdout.lock(), course_id, items)
    }

    /// Write the items to `out`
    pub fn write(
        &self,
        out: &mut impl Write,
        course_id: &CourseId,
        items: &[GradingCriteriaItem],
    ) -> Result<(), CliError> {
        match self.mode {
            OutputMode::Quiet => {
                writeln!(out, "{}", serde_json::to_string_pretty(items)?)?;
            }
            OutputMode::Json => {
                writeln!(out, "{}", header(course_id, items))?;
                writeln!(out, "{}", serde_json::to_string_pretty(items)?)?;
            }
            OutputMode::Summary => {
                writeln!(out, "{}", header(course_id, items))?;
                for (index, item) in items.iter().enumerate() {
                    let labels: Vec<&str> = item.criteria_heads.iter().filter_map(label).collect();
                    if labels.is_empty() {
                        writeln!(out, "  #{}: {} criteria", index + 1, item.criteria_heads.len())?;
                    } else {
                        writeln!(
                            out,
                            "  #{}: {} criteria ({})",
                            index + 1,
                            item.criteria_heads.len(),
                            labels.join(", ")
                        )?;
                    }
                }
            }
        }
        Ok(())
    }
}

fn header(course_id: &CourseId, items: &[GradingCriteriaItem]) -> String {
    format!(
        "✓ Course {}: {} grading criteria item(s)",
        course_id,
        items.len()
    )
}

/// Best-effort display name of a criterion
fn label(head: &CriteriaHead) -> Option<&str> {
    ["title", "name"]
        .iter()
        .find_map(|key| head.get(key)?.as_str())
}
