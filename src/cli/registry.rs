use std::collections::HashMap;

use super::context::{CommandResult, ShellContext};

pub type CommandHandler = fn(&mut ShellContext, &[&str]) -> CommandResult;

/// Headings under which `help` lists commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandGroup {
    Tenants,
    Finances,
    System,
}

impl CommandGroup {
    pub const ALL: [CommandGroup; 3] = [
        CommandGroup::Tenants,
        CommandGroup::Finances,
        CommandGroup::System,
    ];

    pub fn heading(&self) -> &'static str {
        match self {
            CommandGroup::Tenants => "Tenants & payments",
            CommandGroup::Finances => "Expenses & distribution",
            CommandGroup::System => "Month, reports & shell",
        }
    }
}

pub struct CommandEntry {
    pub name: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    pub group: CommandGroup,
    pub handler: CommandHandler,
}

impl CommandEntry {
    pub const fn new(
        name: &'static str,
        description: &'static str,
        usage: &'static str,
        handler: CommandHandler,
    ) -> Self {
        Self {
            name,
            description,
            usage,
            group: CommandGroup::System,
            handler,
        }
    }

    pub fn in_group(mut self, group: CommandGroup) -> Self {
        self.group = group;
        self
    }
}

/// Rental shell commands, looked up by name and listed by group.
#[derive(Default)]
pub struct CommandRegistry {
    commands: HashMap<&'static str, CommandEntry>,
    order: Vec<&'static str>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `entry`; a later entry with the same name replaces the earlier one.
    pub fn register(&mut self, entry: CommandEntry) {
        let name = entry.name;
        if self.commands.insert(name, entry).is_none() {
            self.order.push(name);
        }
    }

    pub fn get(&self, name: &str) -> Option<&CommandEntry> {
        self.commands.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.order.iter().copied()
    }

    pub fn handler(&self, name: &str) -> Option<CommandHandler> {
        self.commands.get(name).map(|entry| entry.handler)
    }

    /// Non-empty groups in `CommandGroup::ALL` order, each listing its
    /// commands in registration order.
    pub fn grouped(&self) -> Vec<(CommandGroup, Vec<&CommandEntry>)> {
        CommandGroup::ALL
            .iter()
            .filter_map(|group| {
                let entries: Vec<&CommandEntry> = self
                    .order
                    .iter()
                    .filter_map(|name| self.commands.get(name))
                    .filter(|entry| entry.group == *group)
                    .collect();
                (!entries.is_empty()).then_some((*group, entries))
            })
            .collect()
    }
}
