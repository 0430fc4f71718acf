//! Domain layer: the conversation record model and contact summaries.

pub mod contact;
pub mod history;
pub mod message;
pub mod notification;

/// Returns the domain module name for smoke checks.
pub fn module_name() -> &'static str {
    "domain"
}
