//! Store layer: adapters implementing the history store contract.

pub mod json_store;
pub mod memory;

/// Returns the store module name for smoke checks.
pub fn module_name() -> &'static str {
    "store"
}
