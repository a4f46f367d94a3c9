//! Core functionality for the sigactor runtime.

pub mod actor;
pub mod log;

pub use actor::*;

// Re-exports for derive macros
pub use sigactor_message_derive_rs::Message;
