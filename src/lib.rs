//! oxo - exact tic-tac-toe engine
//!
//! This crate provides:
//! - Complete tic-tac-toe board implementation with validation
//! - Exhaustive minimax search that plays game-theoretically optimal moves
//! - D4 symmetry utilities for position analysis
//! - A CLI for interactive play and position analysis

pub mod board;
pub mod cli;
pub mod engine;
pub mod error;
pub mod game;
pub mod rules;
pub mod symmetry;
pub mod validation;

pub use board::{BoardState, Cell, Move, Player};
pub use engine::{MinimaxEngine, WIN_BASE};
pub use error::{Error, Result};
pub use game::{Game, GameOutcome, PlayedMove};
pub use rules::{LineAnalyzer, WINNING_LINES, is_full};
pub use symmetry::D4Transform;
