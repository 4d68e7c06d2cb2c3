//! Data models for the employee backend.
//!
//! Field names follow the camelCase JSON contract of the REST API.

mod employee;

pub use employee::*;
