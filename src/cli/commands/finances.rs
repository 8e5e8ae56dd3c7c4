use crate::cli::context::{CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::currency::{format_currency, format_percentage};
use crate::domain::ExpenseField;
use crate::report::table::{Table, TableColumn};

use super::{parse_amount, required};

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("expenses", "Show this month's expenses", "expenses", cmd_expenses),
        CommandEntry::new(
            "expense",
            "Set an expense (internet, water, electricity, maintenance, other)",
            "expense <field> <amount>",
            cmd_expense,
        ),
        CommandEntry::new("summary", "Show the monthly totals", "summary", cmd_summary),
        CommandEntry::new(
            "distribution",
            "Show each shareholder's share of net income",
            "distribution",
            cmd_distribution,
        ),
    ]
}

fn cmd_expenses(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let symbol = &context.config.currency_symbol;
    let expenses = context.store.expenses();
    let mut table = Table::new(vec![TableColumn::left("Expense"), TableColumn::right("Amount")]);
    for (field, amount) in expenses.entries() {
        table.push_row(vec![field.label().to_string(), format_currency(amount, symbol)]);
    }
    table.push_row(vec!["Total".into(), format_currency(expenses.total(), symbol)]);
    output::section("Expenses");
    output::info(table.render());
    Ok(())
}

fn cmd_expense(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    const USAGE: &str = "expense <field> <amount>";
    let field: ExpenseField = required(args, 0, USAGE)?.parse()?;
    let amount = parse_amount(required(args, 1, USAGE)?)?;
    context.store.update_expense(field, amount);
    output::success(format!(
        "{} set to {}",
        field.label(),
        format_currency(amount, &context.config.currency_symbol)
    ));
    Ok(())
}

fn cmd_summary(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let symbol = &context.config.currency_symbol;
    let summary = context.store.summary();
    let mut table = Table::new(vec![TableColumn::left("Item"), TableColumn::right("Amount")]);
    for (label, amount) in [
        ("Total Expected Rent", summary.total_expected),
        ("Total Rent Collected", summary.total_collected),
        ("Outstanding Balance", summary.outstanding_balance),
        ("Total Expenses", summary.total_expenses),
        ("Net Income for Distribution", summary.net_income),
    ] {
        table.push_row(vec![label.to_string(), format_currency(amount, symbol)]);
    }
    output::section(format!("Summary ({})", context.store.current_month()));
    output::info(table.render());
    Ok(())
}

fn cmd_distribution(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let symbol = &context.config.currency_symbol;
    let mut table = Table::new(vec![
        TableColumn::left("Shareholder"),
        TableColumn::right("Share"),
        TableColumn::right("Amount"),
    ]);
    for share in context.store.distribution() {
        table.push_row(vec![
            share.name,
            format_percentage(share.percentage),
            format_currency(share.amount, symbol),
        ]);
    }
    output::section("Shareholder Distribution");
    output::info(table.render());
    Ok(())
}
