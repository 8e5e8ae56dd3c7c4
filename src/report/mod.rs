//! Monthly report assembly and export.
//!
//! [`MonthlyReport`] holds every table the report shows. Turning it into a file
//! is the job of a [`ReportWriter`]; richer document formats plug in behind the
//! same trait.

pub mod json;
pub mod table;
pub mod text;

use std::{
    fs,
    path::{Path, PathBuf},
};

use chrono::NaiveDate;
use serde::Serialize;
use tracing::info;

use crate::core::calculations::{Distribution, MonthlySummary, PaymentStatus};
use crate::domain::Month;
use crate::errors::Result;
use crate::store::RentalSnapshot;
use crate::utils::paths::ensure_dir;

pub use json::JsonReportWriter;
pub use text::TextReportWriter;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantRow {
    pub name: String,
    pub unit: String,
    pub rent: f64,
    pub paid: f64,
    pub payment_date: Option<NaiveDate>,
    /// Absolute balance; `status` says which way it points.
    pub balance: f64,
    pub status: PaymentStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpenseRow {
    pub label: String,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyReport {
    pub month: Month,
    pub prepared_by: Option<String>,
    pub tenants: Vec<TenantRow>,
    pub expenses: Vec<ExpenseRow>,
    pub summary: MonthlySummary,
    pub distribution: Vec<Distribution>,
    pub notes: Option<String>,
}

impl MonthlyReport {
    pub fn build(snapshot: &RentalSnapshot) -> Self {
        let tenants = snapshot
            .tenants
            .iter()
            .map(|tenant| {
                let balance = tenant.balance();
                TenantRow {
                    name: tenant.name.clone(),
                    unit: tenant.unit.clone(),
                    rent: tenant.rent,
                    paid: tenant.payment,
                    payment_date: tenant.payment_date,
                    balance: balance.balance.abs(),
                    status: balance.status,
                }
            })
            .collect();
        let expenses = snapshot
            .expenses
            .entries()
            .map(|(field, amount)| ExpenseRow {
                label: field.label().to_string(),
                amount,
            })
            .collect();

        Self {
            month: snapshot.current_month,
            prepared_by: non_empty(&snapshot.prepared_by),
            tenants,
            expenses,
            summary: snapshot.summary(),
            distribution: snapshot.distribution(),
            notes: non_empty(&snapshot.monthly_notes),
        }
    }

    /// `rental-report-<YYYY-MM>.<ext>`
    pub fn file_name(&self, extension: &str) -> String {
        format!("rental-report-{}.{}", self.month, extension)
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Serializes a report into a downloadable artifact.
pub trait ReportWriter {
    fn extension(&self) -> &'static str;
    fn render(&self, report: &MonthlyReport) -> Result<Vec<u8>>;
}

/// Renders `report` with `writer` into `dir`, returning the written path.
pub fn export_report(writer: &dyn ReportWriter, report: &MonthlyReport, dir: &Path) -> Result<PathBuf> {
    ensure_dir(dir)?;
    let path = dir.join(report.file_name(writer.extension()));
    let bytes = writer.render(report)?;
    fs::write(&path, bytes)?;
    info!(path = %path.display(), "report exported");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Expenses, Shareholder, Tenant};

    fn snapshot() -> RentalSnapshot {
        let mut advance = Tenant::new("Ahead", "Unit 3").with_rent(1000.0);
        advance.payment = 1200.0;
        RentalSnapshot {
            tenants: vec![advance],
            expenses: Expenses::default(),
            shareholders: vec![Shareholder::new("Solo", 100.0)],
            current_month: "2024-01".parse().unwrap(),
            monthly_notes: "   ".into(),
            prepared_by: String::new(),
        }
    }

    #[test]
    fn balance_column_is_absolute() {
        let report = MonthlyReport::build(&snapshot());
        assert_eq!(report.tenants[0].balance, 200.0);
        assert_eq!(report.tenants[0].status, PaymentStatus::AdvancePayment);
    }

    #[test]
    fn blank_notes_are_omitted() {
        let report = MonthlyReport::build(&snapshot());
        assert_eq!(report.notes, None);
        assert_eq!(report.prepared_by, None);
    }

    #[test]
    fn file_name_uses_month() {
        let report = MonthlyReport::build(&snapshot());
        assert_eq!(report.file_name("pdf"), "rental-report-2024-01.pdf");
    }
}
