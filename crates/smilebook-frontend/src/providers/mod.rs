//! Context providers for shared application state and services.

pub mod api;
pub mod appointments;

pub use appointments::{AppointmentsProvider, use_appointments};
