//! CLI infrastructure for the solver
//!
//! The commands only consume the public library API: they parse a board,
//! run the search, and report.

pub mod commands;
pub mod config;
pub mod output;
