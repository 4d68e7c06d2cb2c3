//! REST API module.
//!
//! Handlers return bare JSON bodies; failures render through `AppError`.

mod employees;

pub use employees::*;
