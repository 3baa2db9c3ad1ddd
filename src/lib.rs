//! provider-info — provider endpoint and credential lookup (library crate).
//!
//! Re-exports public modules for integration tests and external use.

pub mod config;
pub mod constants;
pub mod env;
pub mod models;
pub mod output;
pub mod providers;
