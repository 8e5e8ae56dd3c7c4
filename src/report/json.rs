use crate::errors::Result;

use super::{MonthlyReport, ReportWriter};

/// Machine-readable report for spreadsheet imports and archiving.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonReportWriter;

impl ReportWriter for JsonReportWriter {
    fn extension(&self) -> &'static str {
        "json"
    }

    fn render(&self, report: &MonthlyReport) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec_pretty(report)?)
    }
}
