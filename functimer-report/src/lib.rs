#![warn(missing_docs)]
//! Functimer Report - Results and Output
//!
//! Turns trial durations into the immutable [`TimeitResult`] and renders it:
//! - One-line brief (also the `Display` form)
//! - Multi-line human-readable block
//! - JSON (machine-readable)

mod human;
mod json;
mod result;

pub use human::format_human_output;
pub use json::{NamedResult, Report, ReportMeta, generate_json_report};
pub use result::{TimeitResult, format_brief, format_significant};

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable terminal output
    #[default]
    Human,
    /// JSON with metadata
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "human" | "text" => Ok(OutputFormat::Human),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}
