use crate::currency::{format_currency, format_percentage};
use crate::errors::Result;

use super::table::{Table, TableColumn};
use super::{MonthlyReport, ReportWriter};

const TITLE: &str = "Rental Property Management Report";

/// Plain-text rendering of the report, one titled table per section.
#[derive(Debug, Clone)]
pub struct TextReportWriter {
    currency_symbol: String,
}

impl TextReportWriter {
    pub fn new(currency_symbol: impl Into<String>) -> Self {
        Self {
            currency_symbol: currency_symbol.into(),
        }
    }

    fn money(&self, amount: f64) -> String {
        format_currency(amount, &self.currency_symbol)
    }

    pub fn render_text(&self, report: &MonthlyReport) -> String {
        let mut sections = vec![format!(
            "{}\nMonth: {}",
            TITLE,
            report.month.long_label()
        )];
        if let Some(preparer) = &report.prepared_by {
            sections[0].push_str(&format!("\nPrepared by: {}", preparer));
        }

        let mut tenants = Table::new(vec![
            TableColumn::left("Tenant"),
            TableColumn::left("Unit").max_width(32),
            TableColumn::right("Rent"),
            TableColumn::right("Paid"),
            TableColumn::left("Date"),
            TableColumn::right("Balance"),
            TableColumn::left("Status"),
        ]);
        for row in &report.tenants {
            tenants.push_row(vec![
                row.name.clone(),
                row.unit.clone(),
                self.money(row.rent),
                self.money(row.paid),
                row.payment_date
                    .map(|date| date.format("%Y-%m-%d").to_string())
                    .unwrap_or_else(|| "-".into()),
                self.money(row.balance),
                row.status.to_string(),
            ]);
        }
        sections.push(titled("Tenant Payments", &tenants));

        let mut expenses = Table::new(vec![
            TableColumn::left("Expense Type"),
            TableColumn::right("Amount"),
        ]);
        for row in &report.expenses {
            expenses.push_row(vec![row.label.clone(), self.money(row.amount)]);
        }
        sections.push(titled("Monthly Expenses", &expenses));

        let summary = &report.summary;
        let mut totals = Table::new(vec![TableColumn::left("Item"), TableColumn::right("Amount")]);
        for (label, amount) in [
            ("Total Expected Rent", summary.total_expected),
            ("Total Rent Collected", summary.total_collected),
            ("Outstanding Balance", summary.outstanding_balance),
            ("Total Expenses", summary.total_expenses),
            ("Net Income for Distribution", summary.net_income),
        ] {
            totals.push_row(vec![label.to_string(), self.money(amount)]);
        }
        sections.push(titled("Monthly Summary", &totals));

        let mut distribution = Table::new(vec![
            TableColumn::left("Shareholder"),
            TableColumn::right("Ownership %"),
            TableColumn::right("Distribution Amount"),
        ]);
        for share in &report.distribution {
            distribution.push_row(vec![
                share.name.clone(),
                format_percentage(share.percentage),
                self.money(share.amount),
            ]);
        }
        sections.push(titled("Shareholder Distribution", &distribution));

        if let Some(notes) = &report.notes {
            sections.push(format!("Notes:\n{}", notes.trim_end()));
        }

        let mut out = sections.join("\n\n");
        out.push('\n');
        out
    }
}

impl ReportWriter for TextReportWriter {
    fn extension(&self) -> &'static str {
        "txt"
    }

    fn render(&self, report: &MonthlyReport) -> Result<Vec<u8>> {
        Ok(self.render_text(report).into_bytes())
    }
}

fn titled(title: &str, table: &Table) -> String {
    format!("{}\n{}", title, table.render())
}
