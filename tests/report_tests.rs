mod common;

use rental_core::report::{export_report, JsonReportWriter, MonthlyReport, TextReportWriter};
use rental_core::store::seed;

use common::{date, memory_store, temp_base};

#[test]
fn text_report_has_every_section() {
    let (mut store, _) = memory_store(date(2024, 3, 5));
    store.mark_all_paid();
    store.set_prepared_by("Maru Fabian");
    store.set_monthly_notes("Water heater replaced.");

    let report = MonthlyReport::build(&store.snapshot());
    let text = TextReportWriter::new("₱").render_text(&report);

    for needle in [
        "Rental Property Management Report",
        "Month: March 2024",
        "Prepared by: Maru Fabian",
        "Tenant Payments",
        "Monthly Expenses",
        "Monthly Summary",
        "Net Income for Distribution",
        "Shareholder Distribution",
        "Notes:\nWater heater replaced.",
        "₱1,585.54",
        "₱7,000.00",
    ] {
        assert!(text.contains(needle), "missing `{}` in:\n{}", needle, text);
    }
}

#[test]
fn text_report_omits_empty_notes() {
    let (store, _) = memory_store(date(2024, 3, 5));
    let report = MonthlyReport::build(&store.snapshot());
    let text = TextReportWriter::new("₱").render_text(&report);
    assert!(!text.contains("Notes:"));
    assert!(!text.contains("Prepared by:"));
}

#[test]
fn advance_payments_show_absolute_balance() {
    let (mut store, _) = memory_store(date(2024, 3, 5));
    store
        .update_tenant("franz", &rental_core::domain::TenantPatch::payment(2500.0))
        .unwrap();
    let report = MonthlyReport::build(&store.snapshot());
    let franz = report.tenants.iter().find(|row| row.name == "Franz").unwrap();
    assert_eq!(franz.balance, 500.0);

    let text = TextReportWriter::new("₱").render_text(&report);
    assert!(text.contains("Advance Payment"));
}

#[test]
fn export_writes_month_named_files() {
    let (store, _) = memory_store(date(2024, 3, 5));
    let report = MonthlyReport::build(&store.snapshot());
    let dir = temp_base().join("reports");

    let txt = export_report(&TextReportWriter::new("₱"), &report, &dir).unwrap();
    assert_eq!(txt.file_name().unwrap(), "rental-report-2024-03.txt");
    assert!(std::fs::read_to_string(&txt).unwrap().contains("Tenant Payments"));

    let json = export_report(&JsonReportWriter, &report, &dir).unwrap();
    assert_eq!(json.file_name().unwrap(), "rental-report-2024-03.json");
    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&json).unwrap()).unwrap();
    assert_eq!(value["month"], "2024-03");
    assert_eq!(value["tenants"].as_array().unwrap().len(), 6);
    assert_eq!(value["summary"]["totalExpected"], 7000.0);
    assert_eq!(value["distribution"][0]["name"], "Maru Fabian");
    assert!(value["tenants"][1]["unit"] == seed::UNIT_3);
}
