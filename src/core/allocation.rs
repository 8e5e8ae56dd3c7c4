//! Occupancy-based rent for shared units.
//!
//! Rents are always re-derived from the full tenant list; nothing here keeps
//! state between calls.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::Tenant;

/// How a shared unit's rent is divided among its occupants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AllocationRule {
    /// A fixed pool split evenly across occupants.
    PoolSplit { pool: f64 },
    /// A lone occupant pays `minimum`; larger groups split it but never go
    /// below `per_person_floor` each.
    MinimumFloor { minimum: f64, per_person_floor: f64 },
}

impl AllocationRule {
    pub fn rent_per_occupant(&self, occupants: usize) -> f64 {
        if occupants == 0 {
            return 0.0;
        }
        match *self {
            AllocationRule::PoolSplit { pool } => pool / occupants as f64,
            AllocationRule::MinimumFloor {
                minimum,
                per_person_floor,
            } => {
                if occupants == 1 {
                    minimum
                } else {
                    per_person_floor.max(minimum / occupants as f64)
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SharedUnit {
    pub label: String,
    pub rule: AllocationRule,
}

impl SharedUnit {
    pub fn new(label: impl Into<String>, rule: AllocationRule) -> Self {
        Self {
            label: label.into(),
            rule,
        }
    }
}

/// Shared units keyed by their exact label. Units not listed keep whatever
/// rent is stored on the tenant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnitTable {
    units: Vec<SharedUnit>,
}

impl UnitTable {
    pub fn new(units: Vec<SharedUnit>) -> Self {
        Self { units }
    }

    pub fn units(&self) -> &[SharedUnit] {
        &self.units
    }

    pub fn rule_for(&self, label: &str) -> Option<&AllocationRule> {
        self.units
            .iter()
            .find(|unit| unit.label == label)
            .map(|unit| &unit.rule)
    }

    pub fn is_shared(&self, label: &str) -> bool {
        self.rule_for(label).is_some()
    }

    /// Rent each occupant of `label` owes with `occupants` people, or `None`
    /// for a fixed-rent unit.
    pub fn rent_for(&self, label: &str, occupants: usize) -> Option<f64> {
        self.rule_for(label)
            .map(|rule| rule.rent_per_occupant(occupants))
    }

    /// Recomputes rent for every tenant living in a shared unit.
    pub fn allocate(&self, tenants: &mut [Tenant]) {
        if self.units.is_empty() {
            return;
        }
        let mut occupancy: HashMap<&str, usize> = HashMap::new();
        for tenant in tenants.iter() {
            if self.is_shared(&tenant.unit) {
                *occupancy.entry(tenant.unit.as_str()).or_default() += 1;
            }
        }
        let rents: HashMap<String, f64> = occupancy
            .into_iter()
            .filter_map(|(label, count)| {
                self.rent_for(label, count)
                    .map(|rent| (label.to_string(), rent))
            })
            .collect();

        for tenant in tenants.iter_mut() {
            if let Some(rent) = rents.get(&tenant.unit) {
                tenant.rent = *rent;
            }
        }
        debug!(shared_units = rents.len(), "recomputed shared-unit rents");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> UnitTable {
        UnitTable::new(vec![
            SharedUnit::new("Pool", AllocationRule::PoolSplit { pool: 5000.0 }),
            SharedUnit::new(
                "Floor",
                AllocationRule::MinimumFloor {
                    minimum: 3000.0,
                    per_person_floor: 1000.0,
                },
            ),
        ])
    }

    #[test]
    fn pool_split_divides_evenly() {
        let rule = AllocationRule::PoolSplit { pool: 5000.0 };
        assert_eq!(rule.rent_per_occupant(0), 0.0);
        assert_eq!(rule.rent_per_occupant(4), 1250.0);
    }

    #[test]
    fn minimum_floor_never_drops_below_floor() {
        let rule = AllocationRule::MinimumFloor {
            minimum: 3000.0,
            per_person_floor: 1000.0,
        };
        assert_eq!(rule.rent_per_occupant(0), 0.0);
        assert_eq!(rule.rent_per_occupant(1), 3000.0);
        assert_eq!(rule.rent_per_occupant(2), 1500.0);
        assert_eq!(rule.rent_per_occupant(3), 1000.0);
        assert_eq!(rule.rent_per_occupant(5), 1000.0);
    }

    #[test]
    fn allocate_leaves_fixed_units_alone() {
        let mut tenants = vec![
            Tenant::new("a", "Pool"),
            Tenant::new("b", "Pool"),
            Tenant::new("c", "Fixed").with_rent(2000.0),
            Tenant::new("d", "Floor"),
        ];
        table().allocate(&mut tenants);
        assert_eq!(tenants[0].rent, 2500.0);
        assert_eq!(tenants[1].rent, 2500.0);
        assert_eq!(tenants[2].rent, 2000.0);
        assert_eq!(tenants[3].rent, 3000.0);
    }

    #[test]
    fn labels_must_match_exactly() {
        let mut tenants = vec![Tenant::new("a", "pool ").with_rent(10.0)];
        table().allocate(&mut tenants);
        assert_eq!(tenants[0].rent, 10.0);
    }

    #[test]
    fn rules_round_trip_through_json() {
        let json = serde_json::to_string(&table()).unwrap();
        assert!(json.contains("\"kind\":\"pool_split\""));
        let parsed: UnitTable = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, table());
    }
}
