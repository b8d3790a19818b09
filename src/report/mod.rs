pub mod chart;
pub mod json;
pub mod md;

use crate::error::SimError;
use crate::types::report::SimReport;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render(report: &SimReport, format: OutputFormat) -> Result<String, SimError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(SimError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report)),
    }
}
