use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::RentalError;

/// Shared monthly running costs of the property.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Expenses {
    #[serde(default)]
    pub internet: f64,
    #[serde(default)]
    pub water: f64,
    #[serde(default)]
    pub electricity: f64,
    #[serde(default)]
    pub maintenance: f64,
    #[serde(default)]
    pub other: f64,
}

impl Expenses {
    pub fn get(&self, field: ExpenseField) -> f64 {
        match field {
            ExpenseField::Internet => self.internet,
            ExpenseField::Water => self.water,
            ExpenseField::Electricity => self.electricity,
            ExpenseField::Maintenance => self.maintenance,
            ExpenseField::Other => self.other,
        }
    }

    pub fn set(&mut self, field: ExpenseField, amount: f64) {
        let slot = match field {
            ExpenseField::Internet => &mut self.internet,
            ExpenseField::Water => &mut self.water,
            ExpenseField::Electricity => &mut self.electricity,
            ExpenseField::Maintenance => &mut self.maintenance,
            ExpenseField::Other => &mut self.other,
        };
        *slot = amount;
    }

    /// Category amounts in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = (ExpenseField, f64)> + '_ {
        ExpenseField::ALL
            .iter()
            .map(move |field| (*field, self.get(*field)))
    }

    pub fn total(&self) -> f64 {
        self.entries().map(|(_, amount)| amount).sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpenseField {
    Internet,
    Water,
    Electricity,
    Maintenance,
    Other,
}

impl ExpenseField {
    pub const ALL: [ExpenseField; 5] = [
        ExpenseField::Internet,
        ExpenseField::Water,
        ExpenseField::Electricity,
        ExpenseField::Maintenance,
        ExpenseField::Other,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ExpenseField::Internet => "internet",
            ExpenseField::Water => "water",
            ExpenseField::Electricity => "electricity",
            ExpenseField::Maintenance => "maintenance",
            ExpenseField::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExpenseField::Internet => "Internet",
            ExpenseField::Water => "Water",
            ExpenseField::Electricity => "Electricity",
            ExpenseField::Maintenance => "Maintenance",
            ExpenseField::Other => "Other",
        }
    }
}

impl fmt::Display for ExpenseField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ExpenseField {
    type Err = RentalError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let needle = value.trim().to_ascii_lowercase();
        ExpenseField::ALL
            .iter()
            .copied()
            .find(|field| field.key() == needle)
            .ok_or_else(|| RentalError::InvalidInput(format!("unknown expense `{}`", value)))
    }
}
