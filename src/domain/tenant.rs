use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::calculations::{tenant_balance, TenantBalance};
use crate::domain::common::{optional_date, Identifiable};

/// A person renting space in one of the units.
///
/// `rent` is authoritative for fixed-rent units and derived by the allocator
/// for shared units.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    pub id: String,
    pub name: String,
    pub unit: String,
    pub rent: f64,
    #[serde(default)]
    pub payment: f64,
    #[serde(default, with = "optional_date")]
    pub payment_date: Option<NaiveDate>,
    #[serde(default)]
    pub notes: String,
}

impl Tenant {
    /// Creates a tenant with a fresh identifier and nothing paid yet.
    pub fn new(name: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            unit: unit.into(),
            rent: 0.0,
            payment: 0.0,
            payment_date: None,
            notes: String::new(),
        }
    }

    /// Builder used for seed data, where identifiers are fixed slugs.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_rent(mut self, rent: f64) -> Self {
        self.rent = rent;
        self
    }

    pub fn balance(&self) -> TenantBalance {
        tenant_balance(self.rent, self.payment)
    }

    /// Records the full rent as paid on `date`.
    pub fn mark_paid(&mut self, date: NaiveDate) {
        self.payment = self.rent;
        self.payment_date = Some(date);
    }
}

impl Identifiable for Tenant {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Partial edit of a tenant's fields; `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TenantPatch {
    pub name: Option<String>,
    pub unit: Option<String>,
    pub rent: Option<f64>,
    pub payment: Option<f64>,
    pub payment_date: Option<Option<NaiveDate>>,
    pub notes: Option<String>,
}

impl TenantPatch {
    pub fn payment(amount: f64) -> Self {
        Self {
            payment: Some(amount),
            ..Self::default()
        }
    }

    pub fn unit(label: impl Into<String>) -> Self {
        Self {
            unit: Some(label.into()),
            ..Self::default()
        }
    }

    pub fn rent(amount: f64) -> Self {
        Self {
            rent: Some(amount),
            ..Self::default()
        }
    }

    pub fn with_payment_date(mut self, date: Option<NaiveDate>) -> Self {
        self.payment_date = Some(date);
        self
    }

    /// Returns true when the edit can change which unit a tenant occupies.
    pub fn is_structural(&self) -> bool {
        self.unit.is_some()
    }

    /// Applies the edit in place. Negative payments are stored as zero.
    pub fn apply(&self, tenant: &mut Tenant) {
        if let Some(name) = &self.name {
            tenant.name = name.clone();
        }
        if let Some(unit) = &self.unit {
            tenant.unit = unit.clone();
        }
        if let Some(rent) = self.rent {
            tenant.rent = rent;
        }
        if let Some(payment) = self.payment {
            tenant.payment = payment.max(0.0);
        }
        if let Some(date) = self.payment_date {
            tenant.payment_date = date;
        }
        if let Some(notes) = &self.notes {
            tenant.notes = notes.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_tenants_get_unique_ids() {
        let a = Tenant::new("A", "Unit 3");
        let b = Tenant::new("A", "Unit 3");
        assert_ne!(a.id, b.id);
        assert_eq!(a.payment_date, None);
    }

    #[test]
    fn serializes_with_camel_case_and_empty_date() {
        let tenant = Tenant::new("Franz", "Unit 1")
            .with_id("franz")
            .with_rent(2000.0);
        let json = serde_json::to_value(&tenant).unwrap();
        assert_eq!(json["paymentDate"], "");
        assert_eq!(json["id"], "franz");

        let parsed: Tenant = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, tenant);
    }

    #[test]
    fn patch_clamps_negative_payment() {
        let mut tenant = Tenant::new("Lyn", "Unit 3").with_rent(1000.0);
        TenantPatch::payment(-50.0).apply(&mut tenant);
        assert_eq!(tenant.payment, 0.0);
    }

    #[test]
    fn legacy_records_without_optional_fields_load() {
        let json = r#"{"id":"x","name":"X","unit":"Unit 1","rent":1500}"#;
        let tenant: Tenant = serde_json::from_str(json).unwrap();
        assert_eq!(tenant.payment, 0.0);
        assert!(tenant.notes.is_empty());
    }
}
