//! Command-line interface
//!
//! Argument parsing, command dispatch, and report rendering.

pub mod args;
pub mod commands;
