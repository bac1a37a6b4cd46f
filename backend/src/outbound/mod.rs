//! Outbound adapters implementing domain ports for infrastructure.
//!
//! - **memory**: process-local repositories backing every driven port
//!
//! Adapters are thin translators between domain types and their storage
//! representation. They contain no business logic.

pub mod memory;
