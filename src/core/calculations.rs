//! Stateless bookkeeping arithmetic.
//!
//! Every function takes a snapshot and returns a freshly computed value; none
//! validate their inputs or round their outputs.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{Expenses, Shareholder, Tenant};

/// Payment standing of a single tenant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    Pending,
    Paid,
    #[serde(rename = "Advance Payment")]
    AdvancePayment,
}

impl PaymentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "Pending",
            PaymentStatus::Paid => "Paid",
            PaymentStatus::AdvancePayment => "Advance Payment",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TenantBalance {
    /// Rent minus payment. Negative when the tenant paid ahead.
    pub balance: f64,
    pub status: PaymentStatus,
}

pub fn tenant_balance(rent: f64, payment: f64) -> TenantBalance {
    let balance = rent - payment;
    let status = if balance > 0.0 {
        PaymentStatus::Pending
    } else if balance == 0.0 {
        PaymentStatus::Paid
    } else {
        PaymentStatus::AdvancePayment
    };
    TenantBalance { balance, status }
}

pub fn total_collected<I>(payments: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    payments.into_iter().sum()
}

pub fn total_expected(tenants: &[Tenant]) -> f64 {
    tenants.iter().map(|tenant| tenant.rent).sum()
}

pub fn net_income(total_collected: f64, expenses: &Expenses) -> f64 {
    total_collected - expenses.total()
}

/// A shareholder's cut of the month's net income.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Distribution {
    pub name: String,
    pub percentage: f64,
    pub amount: f64,
}

pub fn shareholder_distribution(net_income: f64, shareholders: &[Shareholder]) -> Vec<Distribution> {
    shareholders
        .iter()
        .map(|holder| Distribution {
            name: holder.name.clone(),
            percentage: holder.percentage,
            amount: net_income * holder.percentage / 100.0,
        })
        .collect()
}

/// Headline figures for a month.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySummary {
    pub total_expected: f64,
    pub total_collected: f64,
    pub outstanding_balance: f64,
    pub total_expenses: f64,
    pub net_income: f64,
}

impl MonthlySummary {
    pub fn from_snapshot(tenants: &[Tenant], expenses: &Expenses) -> Self {
        let total_expected = total_expected(tenants);
        let total_collected = total_collected(tenants.iter().map(|tenant| tenant.payment));
        Self {
            total_expected,
            total_collected,
            outstanding_balance: total_expected - total_collected,
            total_expenses: expenses.total(),
            net_income: net_income(total_collected, expenses),
        }
    }
}
