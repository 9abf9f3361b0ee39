use crate::processor::SearchMatch;
use colored::*;
use serde_json::json;

/// Output format types
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// The one-line result message printed by the demo entry points.
pub fn format_offsets(offsets: &[usize]) -> String {
    if offsets.is_empty() {
        "Pattern not found.".to_string()
    } else {
        let joined = offsets
            .iter()
            .map(|o| o.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        format!("Pattern found at index {joined}")
    }
}

pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Format search results
    pub fn format_results(&self, matches: &[SearchMatch], pattern: &str) -> String {
        match self.format {
            OutputFormat::Text => self.format_text(matches),
            OutputFormat::Json => self.format_json(matches, pattern),
        }
    }

    fn format_text(&self, matches: &[SearchMatch]) -> String {
        if matches.is_empty() {
            return format!("{}\n", "No matches found".yellow());
        }

        let mut out = format!(
            "{} {} {}\n",
            "Found".green(),
            matches.len(),
            "matches:".green()
        );
        for m in matches {
            out.push_str(&format!(
                "{}:{}:{}: {}\n",
                m.path.display().to_string().cyan(),
                m.line_number.to_string().yellow(),
                m.column,
                m.line
            ));
        }
        out
    }

    fn format_json(&self, matches: &[SearchMatch], pattern: &str) -> String {
        let result = json!({
            "pattern": pattern,
            "total_matches": matches.len(),
            "matches": matches,
        });
        let mut out = serde_json::to_string_pretty(&result).unwrap_or_else(|_| "{}".to_string());
        out.push('\n');
        out
    }
}
