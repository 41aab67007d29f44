//! Output formatting for computed plans.
//!
//! This module handles presenting and persisting a plan:
//! - [`terminal`] - Terminal output with colors
//! - [`json`] - JSON plan files for the provisioning engine

mod json;
mod terminal;

pub use json::{read_plan_file, write_plan_file};
pub use terminal::{format_field, print_plan};
