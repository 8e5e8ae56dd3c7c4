//! Default data used on first run, after a reset and after a rollover.

use once_cell::sync::Lazy;

use crate::core::allocation::{AllocationRule, SharedUnit, UnitTable};
use crate::domain::{Expenses, Shareholder, Tenant};

pub const UNIT_1: &str = "Unit 1 (2 pax) - studio type 1";
pub const UNIT_2: &str = "Unit 2 (4 pax) - studio type 2";
pub const UNIT_3: &str = "Unit 3 (10 pax) - up/down";

pub const UNIT_2_MINIMUM: f64 = 3000.0;
pub const UNIT_2_PER_PERSON_FLOOR: f64 = 1000.0;
pub const UNIT_3_POOL: f64 = 5000.0;

/// New tenants land here unless a unit is given.
pub const DEFAULT_NEW_TENANT_UNIT: &str = UNIT_3;

static STANDARD_UNITS: Lazy<UnitTable> = Lazy::new(|| {
    UnitTable::new(vec![
        SharedUnit::new(
            UNIT_2,
            AllocationRule::MinimumFloor {
                minimum: UNIT_2_MINIMUM,
                per_person_floor: UNIT_2_PER_PERSON_FLOOR,
            },
        ),
        SharedUnit::new(UNIT_3, AllocationRule::PoolSplit { pool: UNIT_3_POOL }),
    ])
});

pub fn standard_units() -> UnitTable {
    STANDARD_UNITS.clone()
}

/// Seed tenants with shared-unit rents left at zero; callers run the
/// allocator with their own unit table.
pub fn tenants() -> Vec<Tenant> {
    let mut tenants = vec![Tenant::new("Franz", UNIT_1)
        .with_id("franz")
        .with_rent(2000.0)];
    tenants.extend(
        [
            ("ging", "Ging Bagro"),
            ("ryzza", "Ryzza Maglanque"),
            ("shane", "Shane Mikaela Galang"),
            ("shiky", "Shiky Cagaitan"),
            ("lyn", "Lyn Villanueva"),
        ]
        .into_iter()
        .map(|(id, name)| Tenant::new(name, UNIT_3).with_id(id)),
    );
    tenants
}

pub fn expenses() -> Expenses {
    Expenses {
        internet: 1585.54,
        ..Expenses::default()
    }
}

pub fn shareholders() -> Vec<Shareholder> {
    vec![
        Shareholder::new("Maru Fabian", 35.0),
        Shareholder::new("Ruby Fabian", 35.0),
        Shareholder::new("Zeddrix Fabian", 30.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_shareholders_cover_the_whole_property() {
        let total: f64 = shareholders().iter().map(|s| s.percentage).sum();
        assert_eq!(total, 100.0);
    }

    #[test]
    fn seeded_unit_three_splits_the_pool() {
        let mut tenants = tenants();
        standard_units().allocate(&mut tenants);
        for tenant in tenants.iter().filter(|t| t.unit == UNIT_3) {
            assert_eq!(tenant.rent, 1000.0);
        }
        assert_eq!(tenants[0].rent, 2000.0);
    }
}
