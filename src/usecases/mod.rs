//! Use case layer: application workflows over the history store.

pub mod bootstrap;
pub mod context;
pub mod contracts;
pub mod delete_message;
pub mod list_contacts;
pub mod open_conversation;
pub mod send_message;

/// Returns the usecases module name for smoke checks.
pub fn module_name() -> &'static str {
    "usecases"
}
