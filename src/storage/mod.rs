//! Durable key-value backends. Each key holds one JSON document.

pub mod json_backend;
pub mod memory;

use crate::errors::Result;

/// Namespaced keys under which the store mirrors its values.
pub mod keys {
    pub const TENANTS: &str = "propfit-tenants";
    pub const EXPENSES: &str = "propfit-expenses";
    pub const SHAREHOLDERS: &str = "propfit-shareholders";
    pub const CURRENT_MONTH: &str = "propfit-current-month";
    pub const MONTHLY_NOTES: &str = "propfit-monthly-notes";
    pub const PREPARED_BY: &str = "propfit-prepared-by";
    pub const LAST_RESET_MONTH: &str = "propfit-last-reset-month";

    pub const ALL: [&str; 7] = [
        TENANTS,
        EXPENSES,
        SHAREHOLDERS,
        CURRENT_MONTH,
        MONTHLY_NOTES,
        PREPARED_BY,
        LAST_RESET_MONTH,
    ];
}

/// Abstraction over persistence backends holding raw JSON strings by key.
pub trait KeyValueStore: Send + Sync {
    /// Returns `Ok(None)` when the key has never been written.
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

pub use json_backend::JsonFileStore;
pub use memory::MemoryStore;
