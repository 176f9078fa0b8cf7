//! Rostering Domain Concerns

pub mod employees;
pub mod tenants;
pub mod time_slots;
