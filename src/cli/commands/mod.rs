pub mod finances;
pub mod system;
pub mod tenants;

use chrono::NaiveDate;

use super::context::CommandError;
use super::registry::{CommandEntry, CommandGroup};

pub(crate) fn all_definitions() -> Vec<CommandEntry> {
    let mut commands = Vec::new();
    commands.extend(in_group(CommandGroup::System, system::definitions()));
    commands.extend(in_group(CommandGroup::Tenants, tenants::definitions()));
    commands.extend(in_group(CommandGroup::Finances, finances::definitions()));
    commands
}

fn in_group(group: CommandGroup, entries: Vec<CommandEntry>) -> impl Iterator<Item = CommandEntry> {
    entries.into_iter().map(move |entry| entry.in_group(group))
}

pub(crate) fn usage_error(usage: &str) -> CommandError {
    CommandError::InvalidArguments(format!("usage: {}", usage))
}

pub(crate) fn required<'a>(args: &[&'a str], idx: usize, usage: &str) -> Result<&'a str, CommandError> {
    args.get(idx).copied().ok_or_else(|| usage_error(usage))
}

/// Parses a non-negative amount, accepting thousands separators.
pub(crate) fn parse_amount(raw: &str) -> Result<f64, CommandError> {
    let cleaned: String = raw.chars().filter(|c| *c != ',').collect();
    match cleaned.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(value),
        _ => Err(CommandError::InvalidArguments(format!(
            "`{}` is not a valid amount",
            raw
        ))),
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, CommandError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
        CommandError::InvalidArguments(format!("`{}` is not a date (YYYY-MM-DD)", raw))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amounts_accept_separators() {
        assert_eq!(parse_amount("1,585.54").unwrap(), 1585.54);
        assert!(parse_amount("-5").is_err());
        assert!(parse_amount("abc").is_err());
    }

    #[test]
    fn dates_are_iso() {
        assert_eq!(
            parse_date("2024-02-29").unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
        assert!(parse_date("02/29/2024").is_err());
    }
}
