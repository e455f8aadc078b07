//! CLI infrastructure for the oxo engine
//!
//! This module provides the command-line interface for playing against
//! the engine and analyzing positions.

pub mod commands;
pub mod output;
