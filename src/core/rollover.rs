//! Detection and execution of the start-of-month reset.

use tracing::info;

use crate::domain::Month;
use crate::store::RentalStore;

/// Relationship between the last recorded reset and the live month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RolloverState {
    /// No reset has ever been recorded.
    FreshInstall,
    Current,
    Stale { last: Month, current: Month },
}

pub fn detect_rollover(last_reset: Option<Month>, current: Month) -> RolloverState {
    match last_reset {
        None => RolloverState::FreshInstall,
        Some(last) if last == current => RolloverState::Current,
        Some(last) => RolloverState::Stale { last, current },
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RolloverOutcome {
    pub state: RolloverState,
    /// True when monthly data was cleared.
    pub cleared: bool,
}

/// Brings the store up to `current`.
///
/// A stale store loses its tenants, expenses, notes and preparer back to seed
/// values; shareholders are kept. A fresh install only records the marker.
pub fn apply_rollover(store: &mut RentalStore, current: Month) -> RolloverOutcome {
    let state = detect_rollover(store.last_reset_month(), current);
    let cleared = match state {
        RolloverState::Current => false,
        RolloverState::FreshInstall => {
            info!(month = %current, "recording first reset month");
            store.set_last_reset_month(Some(current));
            false
        }
        RolloverState::Stale { last, current } => {
            info!(from = %last, to = %current, "new month detected, clearing monthly data");
            store.clear_monthly_data(current);
            store.set_last_reset_month(Some(current));
            true
        }
    };
    RolloverOutcome { state, cleared }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn month(value: &str) -> Month {
        value.parse().unwrap()
    }

    #[test]
    fn detects_each_state() {
        assert_eq!(
            detect_rollover(None, month("2024-02")),
            RolloverState::FreshInstall
        );
        assert_eq!(
            detect_rollover(Some(month("2024-02")), month("2024-02")),
            RolloverState::Current
        );
        assert_eq!(
            detect_rollover(Some(month("2024-01")), month("2024-02")),
            RolloverState::Stale {
                last: month("2024-01"),
                current: month("2024-02")
            }
        );
    }

    #[test]
    fn going_backwards_still_counts_as_stale() {
        assert!(matches!(
            detect_rollover(Some(month("2024-03")), month("2024-02")),
            RolloverState::Stale { .. }
        ));
    }
}
