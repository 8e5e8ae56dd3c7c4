//! The rental state container.
//!
//! [`RentalStore`] owns every collection, mirrors each one to its own key, and
//! re-runs the shared-unit allocator after any change to tenant membership so
//! callers never see stale shared rents.

mod persisted;
pub mod seed;

use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::core::{
    allocation::UnitTable,
    calculations::{shareholder_distribution, Distribution, MonthlySummary},
    rollover::{apply_rollover, RolloverOutcome},
    time::Clock,
};
use crate::domain::{
    common::position_by_id, ExpenseField, Expenses, Month, Shareholder, Tenant, TenantPatch,
};
use crate::errors::{RentalError, Result};
use crate::storage::{keys, KeyValueStore};

pub use persisted::Persisted;

/// Owned copy of everything a report needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalSnapshot {
    pub tenants: Vec<Tenant>,
    pub expenses: Expenses,
    pub shareholders: Vec<Shareholder>,
    pub current_month: Month,
    pub monthly_notes: String,
    pub prepared_by: String,
}

impl RentalSnapshot {
    pub fn summary(&self) -> MonthlySummary {
        MonthlySummary::from_snapshot(&self.tenants, &self.expenses)
    }

    pub fn distribution(&self) -> Vec<Distribution> {
        shareholder_distribution(self.summary().net_income, &self.shareholders)
    }
}

pub struct RentalStore {
    units: UnitTable,
    clock: Arc<dyn Clock>,
    tenants: Persisted<Vec<Tenant>>,
    expenses: Persisted<Expenses>,
    shareholders: Persisted<Vec<Shareholder>>,
    current_month: Persisted<Month>,
    monthly_notes: Persisted<String>,
    prepared_by: Persisted<String>,
    last_reset_month: Persisted<Option<Month>>,
}

impl RentalStore {
    /// Loads every value from `backend` without checking for a new month.
    pub fn load(backend: Arc<dyn KeyValueStore>, units: UnitTable, clock: Arc<dyn Clock>) -> Self {
        let today_month = clock.current_month();
        let seeded_tenants = || {
            let mut tenants = seed::tenants();
            units.allocate(&mut tenants);
            tenants
        };
        let tenants = Persisted::load(backend.clone(), keys::TENANTS, seeded_tenants);
        let expenses = Persisted::load(backend.clone(), keys::EXPENSES, seed::expenses);
        let shareholders = Persisted::load(backend.clone(), keys::SHAREHOLDERS, seed::shareholders);
        let current_month = Persisted::load(backend.clone(), keys::CURRENT_MONTH, || today_month);
        let monthly_notes = Persisted::load(backend.clone(), keys::MONTHLY_NOTES, String::new);
        let prepared_by = Persisted::load(backend.clone(), keys::PREPARED_BY, String::new);
        let last_reset_month = Persisted::load(backend, keys::LAST_RESET_MONTH, || None);

        let mut store = Self {
            units,
            clock,
            tenants,
            expenses,
            shareholders,
            current_month,
            monthly_notes,
            prepared_by,
            last_reset_month,
        };
        store.reallocate_if_needed();
        store
    }

    /// Loads the store and runs the once-per-start month check.
    pub fn open(
        backend: Arc<dyn KeyValueStore>,
        units: UnitTable,
        clock: Arc<dyn Clock>,
    ) -> (Self, RolloverOutcome) {
        let mut store = Self::load(backend, units, clock);
        let current = store.clock.current_month();
        let outcome = apply_rollover(&mut store, current);
        (store, outcome)
    }

    pub fn units(&self) -> &UnitTable {
        &self.units
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn tenants(&self) -> &[Tenant] {
        self.tenants.get()
    }

    pub fn tenant(&self, id: &str) -> Option<&Tenant> {
        position_by_id(self.tenants.get(), id).map(|idx| &self.tenants.get()[idx])
    }

    pub fn expenses(&self) -> &Expenses {
        self.expenses.get()
    }

    pub fn shareholders(&self) -> &[Shareholder] {
        self.shareholders.get()
    }

    pub fn current_month(&self) -> Month {
        *self.current_month.get()
    }

    pub fn monthly_notes(&self) -> &str {
        self.monthly_notes.get()
    }

    pub fn prepared_by(&self) -> &str {
        self.prepared_by.get()
    }

    pub fn last_reset_month(&self) -> Option<Month> {
        *self.last_reset_month.get()
    }

    pub fn summary(&self) -> MonthlySummary {
        MonthlySummary::from_snapshot(self.tenants(), self.expenses())
    }

    pub fn distribution(&self) -> Vec<Distribution> {
        shareholder_distribution(self.summary().net_income, self.shareholders())
    }

    pub fn snapshot(&self) -> RentalSnapshot {
        RentalSnapshot {
            tenants: self.tenants().to_vec(),
            expenses: *self.expenses(),
            shareholders: self.shareholders().to_vec(),
            current_month: self.current_month(),
            monthly_notes: self.monthly_notes().to_string(),
            prepared_by: self.prepared_by().to_string(),
        }
    }

    /// Replaces the whole tenant list; shared rents are recomputed first.
    pub fn set_tenants(&mut self, mut tenants: Vec<Tenant>) {
        self.units.allocate(&mut tenants);
        self.tenants.set(tenants);
    }

    /// Adds a tenant with a fresh id to `unit` and returns the stored record.
    pub fn add_tenant(&mut self, name: impl Into<String>, unit: impl Into<String>) -> Tenant {
        let tenant = Tenant::new(name, unit);
        let idx = self.tenants().len();
        info!(tenant = %tenant.id, unit = %tenant.unit, "tenant added");
        self.mutate_tenants(|tenants| tenants.push(tenant));
        self.tenants()[idx].clone()
    }

    /// Removes a tenant, returning the record so it can be restored.
    pub fn remove_tenant(&mut self, id: &str) -> Option<Tenant> {
        let idx = position_by_id(self.tenants(), id)?;
        let mut removed = None;
        self.mutate_tenants(|tenants| removed = Some(tenants.remove(idx)));
        info!(tenant = %id, "tenant removed");
        removed
    }

    /// Re-inserts a previously removed tenant at the end of the list.
    ///
    /// Returns false, changing nothing, if a tenant with the same id exists.
    pub fn restore_tenant(&mut self, tenant: Tenant) -> bool {
        if position_by_id(self.tenants(), &tenant.id).is_some() {
            warn!(tenant = %tenant.id, "tenant already present, not restoring");
            return false;
        }
        let id = tenant.id.clone();
        self.mutate_tenants(|tenants| tenants.push(tenant));
        info!(tenant = %id, "tenant restored");
        true
    }

    /// Edits one tenant's fields; shared rents are recomputed afterwards so a
    /// unit change takes effect immediately.
    pub fn update_tenant(&mut self, id: &str, patch: &TenantPatch) -> Result<Tenant> {
        let idx = position_by_id(self.tenants(), id)
            .ok_or_else(|| RentalError::TenantNotFound(id.to_string()))?;
        self.mutate_tenants(|tenants| patch.apply(&mut tenants[idx]));
        if patch.is_structural() {
            info!(tenant = %id, unit = %self.tenants()[idx].unit, "tenant moved");
        }
        Ok(self.tenants()[idx].clone())
    }

    /// Sets every tenant's payment to their rent, dated today.
    pub fn mark_all_paid(&mut self) {
        let today = self.today();
        self.tenants.update(|tenants| {
            for tenant in tenants.iter_mut() {
                tenant.mark_paid(today);
            }
        });
        info!(date = %today, "all tenants marked paid");
    }

    pub fn set_expenses(&mut self, expenses: Expenses) {
        self.expenses.set(expenses);
    }

    pub fn update_expense(&mut self, field: ExpenseField, amount: f64) {
        self.expenses.update(|expenses| expenses.set(field, amount));
    }

    pub fn set_shareholders(&mut self, shareholders: Vec<Shareholder>) {
        self.shareholders.set(shareholders);
    }

    pub fn set_current_month(&mut self, month: Month) {
        self.current_month.set(month);
    }

    pub fn set_monthly_notes(&mut self, notes: impl Into<String>) {
        self.monthly_notes.set(notes.into());
    }

    pub fn set_prepared_by(&mut self, name: impl Into<String>) {
        self.prepared_by.set(name.into());
    }

    pub fn set_last_reset_month(&mut self, month: Option<Month>) {
        self.last_reset_month.set(month);
    }

    /// Restores tenants, expenses, shareholders, month and notes to seed
    /// values. The preparer and the reset marker are left alone.
    pub fn reset_to_defaults(&mut self) {
        self.set_tenants(seed::tenants());
        self.expenses.set(seed::expenses());
        self.shareholders.set(seed::shareholders());
        let month = self.clock.current_month();
        self.current_month.set(month);
        self.monthly_notes.set(String::new());
        info!("store reset to defaults");
    }

    /// Clears the data that only lives for one month.
    pub(crate) fn clear_monthly_data(&mut self, month: Month) {
        self.set_tenants(seed::tenants());
        self.expenses.set(seed::expenses());
        self.monthly_notes.set(String::new());
        self.prepared_by.set(String::new());
        self.current_month.set(month);
    }

    fn mutate_tenants<F>(&mut self, apply: F)
    where
        F: FnOnce(&mut Vec<Tenant>),
    {
        let units = &self.units;
        self.tenants.update(|tenants| {
            apply(tenants);
            units.allocate(tenants);
        });
    }

    fn reallocate_if_needed(&mut self) {
        let mut tenants = self.tenants().to_vec();
        self.units.allocate(&mut tenants);
        if tenants.as_slice() != self.tenants() {
            self.tenants.set(tenants);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::time::FixedClock;
    use crate::storage::MemoryStore;

    fn store() -> RentalStore {
        let clock = FixedClock(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
        RentalStore::load(
            Arc::new(MemoryStore::new()),
            seed::standard_units(),
            Arc::new(clock),
        )
    }

    #[test]
    fn fresh_store_uses_seed_data() {
        let store = store();
        assert_eq!(store.tenants().len(), 6);
        assert_eq!(store.current_month().to_string(), "2024-03");
        assert_eq!(store.last_reset_month(), None);
    }

    #[test]
    fn unit_change_reallocates_both_units() {
        let mut store = store();
        store
            .update_tenant("lyn", &TenantPatch::unit(seed::UNIT_2))
            .unwrap();
        assert_eq!(store.tenant("lyn").unwrap().rent, seed::UNIT_2_MINIMUM);
        assert_eq!(store.tenant("ging").unwrap().rent, 1250.0);
    }

    #[test]
    fn unknown_tenant_update_is_an_error() {
        let mut store = store();
        let err = store
            .update_tenant("nobody", &TenantPatch::payment(1.0))
            .unwrap_err();
        assert!(matches!(err, RentalError::TenantNotFound(_)));
    }

    #[test]
    fn duplicate_restore_is_rejected() {
        let mut store = store();
        let franz = store.tenant("franz").cloned().unwrap();
        assert!(!store.restore_tenant(franz));
        assert_eq!(store.tenants().len(), 6);
    }
}
