//! Entities owned by the rental store: tenants, expenses, shareholders and months.

pub mod common;
pub mod expenses;
pub mod month;
pub mod shareholder;
pub mod tenant;

pub use common::Identifiable;
pub use expenses::{ExpenseField, Expenses};
pub use month::Month;
pub use shareholder::Shareholder;
pub use tenant::{Tenant, TenantPatch};
