//! API endpoint handlers.

pub mod health;
pub mod symptom_analysis;
