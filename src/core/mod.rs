//! Bookkeeping rules: arithmetic, shared-unit rent, and the monthly rollover.

pub mod allocation;
pub mod calculations;
pub mod rollover;
pub mod time;

pub use allocation::{AllocationRule, SharedUnit, UnitTable};
pub use calculations::{
    net_income, shareholder_distribution, tenant_balance, total_collected, total_expected,
    Distribution, MonthlySummary, PaymentStatus, TenantBalance,
};
pub use rollover::{detect_rollover, RolloverOutcome, RolloverState};
pub use time::{Clock, FixedClock, SystemClock};
