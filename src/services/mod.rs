//! Business logic services.

pub mod aggregate;
pub mod dashboard;
pub mod livingapps;
