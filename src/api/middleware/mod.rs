//! API middleware stack.
//!
//! Execution order (outermost → innermost):
//! 1. Access logger: one event per request, rejected ones included
//! 2. Patient context: reject requests without a patient identity

pub mod audit;
pub mod patient;
