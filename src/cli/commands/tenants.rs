use crate::cli::context::{CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::currency::format_currency;
use crate::domain::{Tenant, TenantPatch};
use crate::errors::RentalError;
use crate::report::table::{Table, TableColumn};
use crate::store::seed;

use super::{parse_amount, parse_date, required, usage_error};

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("tenants", "List tenants and balances", "tenants", cmd_tenants),
        CommandEntry::new("add", "Add a tenant", "add <name> [unit]", cmd_add),
        CommandEntry::new("remove", "Remove a tenant", "remove <id>", cmd_remove),
        CommandEntry::new("undo", "Restore the last removed tenant", "undo", cmd_undo),
        CommandEntry::new(
            "pay",
            "Record a tenant's payment",
            "pay <id> <amount> [YYYY-MM-DD]",
            cmd_pay,
        ),
        CommandEntry::new("rent", "Set a fixed-unit tenant's rent", "rent <id> <amount>", cmd_rent),
        CommandEntry::new("move", "Move a tenant to another unit", "move <id> <unit>", cmd_move),
        CommandEntry::new(
            "mark-all-paid",
            "Record full rent as paid today for everyone",
            "mark-all-paid",
            cmd_mark_all_paid,
        ),
    ]
}

fn cmd_tenants(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let tenants = context.store.tenants();
    if tenants.is_empty() {
        output::info("No tenants.");
        return Ok(());
    }

    let symbol = &context.config.currency_symbol;
    let mut table = Table::new(vec![
        TableColumn::left("Id").max_width(12),
        TableColumn::left("Name"),
        TableColumn::left("Unit").max_width(32),
        TableColumn::right("Rent"),
        TableColumn::right("Paid"),
        TableColumn::right("Balance"),
        TableColumn::left("Status"),
    ]);
    for tenant in tenants {
        let balance = tenant.balance();
        table.push_row(vec![
            tenant.id.clone(),
            tenant.name.clone(),
            tenant.unit.clone(),
            format_currency(tenant.rent, symbol),
            format_currency(tenant.payment, symbol),
            format_currency(balance.balance, symbol),
            balance.status.to_string(),
        ]);
    }
    output::section(format!("Tenants ({})", context.store.current_month()));
    output::info(table.render());
    Ok(())
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    const USAGE: &str = "add <name> [unit]";
    let name = required(args, 0, USAGE)?.trim();
    if name.is_empty() {
        return Err(usage_error(USAGE));
    }
    let unit = match args.get(1) {
        Some(raw) => resolve_unit(context, raw),
        None => seed::DEFAULT_NEW_TENANT_UNIT.to_string(),
    };
    let tenant = context.store.add_tenant(name, unit);
    output::success(format!(
        "Added {} ({}) to {}, rent {}",
        tenant.name,
        tenant.id,
        tenant.unit,
        format_currency(tenant.rent, &context.config.currency_symbol)
    ));
    Ok(())
}

fn cmd_remove(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let id = required(args, 0, "remove <id>")?;
    let removed = context
        .store
        .remove_tenant(id)
        .ok_or_else(|| not_found(id))?;
    output::success(format!("Removed {}. Use `undo` to restore.", removed.name));
    context.last_removed = Some(removed);
    Ok(())
}

fn cmd_undo(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let Some(tenant) = context.last_removed.take() else {
        output::info("Nothing to undo.");
        return Ok(());
    };
    let name = tenant.name.clone();
    if context.store.restore_tenant(tenant) {
        output::success(format!("Restored {}.", name));
    } else {
        output::warning(format!("{} is already present.", name));
    }
    Ok(())
}

fn cmd_pay(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    const USAGE: &str = "pay <id> <amount> [YYYY-MM-DD]";
    let id = required(args, 0, USAGE)?;
    let amount = parse_amount(required(args, 1, USAGE)?)?;
    let date = match args.get(2) {
        Some(raw) => parse_date(raw)?,
        None => context.store.today(),
    };
    let patch = TenantPatch::payment(amount).with_payment_date(Some(date));
    let tenant = context.store.update_tenant(id, &patch)?;
    report_balance(context, &tenant);
    Ok(())
}

fn cmd_rent(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    const USAGE: &str = "rent <id> <amount>";
    let id = required(args, 0, USAGE)?;
    let amount = parse_amount(required(args, 1, USAGE)?)?;
    let tenant = context.store.update_tenant(id, &TenantPatch::rent(amount))?;
    if context.store.units().is_shared(&tenant.unit) {
        output::warning(format!(
            "{} is in a shared unit; rent is set by occupancy.",
            tenant.name
        ));
    }
    report_balance(context, &tenant);
    Ok(())
}

fn cmd_move(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    const USAGE: &str = "move <id> <unit>";
    let id = required(args, 0, USAGE)?;
    let raw_unit = args[1..].join(" ");
    if raw_unit.trim().is_empty() {
        return Err(usage_error(USAGE));
    }
    let unit = resolve_unit(context, &raw_unit);
    let tenant = context.store.update_tenant(id, &TenantPatch::unit(unit))?;
    output::success(format!("{} moved to {}.", tenant.name, tenant.unit));
    report_balance(context, &tenant);
    Ok(())
}

fn cmd_mark_all_paid(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.store.mark_all_paid();
    output::success(format!(
        "All {} tenants marked paid on {}.",
        context.store.tenants().len(),
        context.store.today()
    ));
    Ok(())
}

fn report_balance(context: &ShellContext, tenant: &Tenant) {
    let balance = tenant.balance();
    output::info(format!(
        "{}: rent {}, paid {}, balance {} ({})",
        tenant.name,
        format_currency(tenant.rent, &context.config.currency_symbol),
        format_currency(tenant.payment, &context.config.currency_symbol),
        format_currency(balance.balance, &context.config.currency_symbol),
        balance.status
    ));
}

fn not_found(id: &str) -> CommandError {
    CommandError::Core(RentalError::TenantNotFound(id.to_string()))
}

/// Maps shorthand like `unit 2` onto a known unit label; anything that does
/// not match exactly one known label is used verbatim.
fn resolve_unit(context: &ShellContext, raw: &str) -> String {
    let needle = raw.trim().to_lowercase();
    let mut known: Vec<&str> = context
        .store
        .units()
        .units()
        .iter()
        .map(|unit| unit.label.as_str())
        .chain(context.store.tenants().iter().map(|tenant| tenant.unit.as_str()))
        .collect();
    known.sort_unstable();
    known.dedup();

    if let Some(exact) = known.iter().find(|label| label.to_lowercase() == needle) {
        return exact.to_string();
    }
    let matches: Vec<&&str> = known
        .iter()
        .filter(|label| label.to_lowercase().starts_with(&needle))
        .collect();
    match matches.as_slice() {
        [single] => single.to_string(),
        _ => raw.trim().to_string(),
    }
}
