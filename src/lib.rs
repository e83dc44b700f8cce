//! Registration form engine
//!
//! Field rules, password strength, form state and the simulated submit
//! lifecycle. The `signup-tui` binary is one consumer of this library.

pub mod account;
pub mod config;
pub mod state;
pub mod submission;
pub mod validation;
