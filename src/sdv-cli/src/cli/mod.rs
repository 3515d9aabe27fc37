//! CLI argument definitions for sdv
//!
//! This module contains all clap-derived structs and enums for CLI parsing.

mod core;

pub use core::{Cli, Commands, PathArgs};
