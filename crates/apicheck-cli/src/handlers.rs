//! Command handlers for the CLI
//!
//! This module contains the implementation logic behind the command line.

mod validate;

pub use validate::handle_validate;
