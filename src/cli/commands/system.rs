use std::path::PathBuf;

use crate::cli::context::{CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::domain::Month;
use crate::report::{export_report, JsonReportWriter, MonthlyReport, ReportWriter, TextReportWriter};
use crate::utils::build_info;

use super::{required, usage_error};

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("help", "Show available commands", "help [command]", cmd_help),
        CommandEntry::new("version", "Show build metadata", "version", cmd_version),
        CommandEntry::new(
            "month",
            "Show or set the month being tracked",
            "month [YYYY-MM]",
            cmd_month,
        ),
        CommandEntry::new("notes", "Show or replace the monthly notes", "notes [text]", cmd_notes),
        CommandEntry::new(
            "prepared-by",
            "Show or set who prepared the report",
            "prepared-by [name]",
            cmd_prepared_by,
        ),
        CommandEntry::new(
            "reset",
            "Restore tenants, expenses and shareholders to defaults",
            "reset",
            cmd_reset,
        ),
        CommandEntry::new(
            "export",
            "Write the monthly report to a file",
            "export <txt|json> [dir]",
            cmd_export,
        ),
        CommandEntry::new("exit", "Exit the shell", "exit", cmd_exit),
    ]
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if let Some(name) = args.first() {
        match context.command(&name.to_lowercase()) {
            Some(entry) => {
                output::section(entry.name);
                output::info(entry.description);
                output::info(format!("usage: {}", entry.usage));
            }
            None => context.suggest_command(name),
        }
        return Ok(());
    }

    let grouped = context.registry.grouped();
    let width = grouped
        .iter()
        .flat_map(|(_, entries)| entries.iter().map(|entry| entry.usage.len()))
        .max()
        .unwrap_or(0);
    for (group, entries) in grouped {
        output::section(group.heading());
        for entry in entries {
            output::info(format!("  {:<width$}  {}", entry.usage, entry.description, width = width));
        }
    }
    Ok(())
}

fn cmd_version(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let meta = build_info::current();
    output::info(meta.summary());
    output::info(format!("  Rustc : {}", meta.rustc));
    Ok(())
}

fn cmd_month(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if let Some(raw) = args.first() {
        let month: Month = raw.parse()?;
        context.store.set_current_month(month);
        output::success(format!("Tracking {}", month.long_label()));
    } else {
        let month = context.store.current_month();
        output::info(format!("{} ({})", month.long_label(), month));
    }
    Ok(())
}

fn cmd_notes(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.is_empty() {
        let notes = context.store.monthly_notes();
        if notes.trim().is_empty() {
            output::info("No notes for this month.");
        } else {
            output::info(notes);
        }
        return Ok(());
    }
    context.store.set_monthly_notes(args.join(" "));
    output::success("Notes saved.");
    Ok(())
}

fn cmd_prepared_by(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.is_empty() {
        match context.store.prepared_by() {
            "" => output::info("Preparer not set."),
            name => output::info(format!("Prepared by: {}", name)),
        }
        return Ok(());
    }
    context.store.set_prepared_by(args.join(" "));
    output::success(format!("Prepared by: {}", context.store.prepared_by()));
    Ok(())
}

fn cmd_reset(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.store.reset_to_defaults();
    context.last_removed = None;
    output::success("Data restored to defaults.");
    Ok(())
}

fn cmd_export(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    const USAGE: &str = "export <txt|json> [dir]";
    let format = required(args, 0, USAGE)?.to_lowercase();
    let writer: Box<dyn ReportWriter> = match format.as_str() {
        "txt" | "text" => Box::new(TextReportWriter::new(context.config.currency_symbol.clone())),
        "json" => Box::new(JsonReportWriter),
        other => {
            return Err(CommandError::InvalidArguments(format!(
                "unsupported export format `{}` (expected txt or json)",
                other
            )))
        }
    };
    if args.len() > 2 {
        return Err(usage_error(USAGE));
    }
    let dir = args
        .get(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| context.default_report_dir());

    let report = MonthlyReport::build(&context.store.snapshot());
    let path = export_report(writer.as_ref(), &report, &dir)?;
    output::success(format!("Report written to {}", path.display()));
    Ok(())
}

fn cmd_exit(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.running = false;
    Ok(())
}
