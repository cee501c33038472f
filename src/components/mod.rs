//! Reusable view components.

pub mod truss_field;
