//! Command handlers for sdv CLI
//!
//! Each subcommand has its own module with handler functions.

pub mod configure;
pub mod objects;
