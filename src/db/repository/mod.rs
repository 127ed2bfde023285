//! Repository layer: entity-scoped database operations.
//!
//! Free functions over a borrowed `rusqlite::Connection`; callers own
//! connection lifetime and locking.

mod symptom_analysis;

pub use symptom_analysis::*;
