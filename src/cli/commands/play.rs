//! Play command - Interactive game against the engine

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result, bail};
use clap::Parser;

use crate::board::{BoardState, Move};
use crate::cli::commands::parse_player_token;
use crate::cli::output::{print_section, render_board};
use crate::engine::MinimaxEngine;
use crate::game::{Game, GameOutcome};

#[derive(Parser, Debug)]
#[command(about = "Play an interactive game against the engine")]
pub struct PlayArgs {
    /// Which mark the engine controls (`x` or `o`). X always moves first,
    /// so the engine opens the game when it holds X.
    #[arg(long, short = 'e', default_value = "o")]
    pub engine_mark: String,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let engine_player = parse_player_token(&args.engine_mark, "--engine-mark")?;
    let human = engine_player.opponent();
    let engine = MinimaxEngine::new(engine_player);

    print_section("Tic-Tac-Toe");
    println!("You are '{human}', the engine is '{engine_player}'. X moves first.");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut game = Game::new();

    while game.outcome.is_none() {
        let state = game.current_state()?;
        println!("\n{}", render_board(&state));

        let mv = if state.to_move == human {
            prompt_human_move(&mut lines, &state)?
        } else {
            let mut cells = state.cells;
            let mv = engine
                .best_move(&mut cells)
                .context("engine failed to produce a move")?;
            println!("Engine plays {mv}");
            mv
        };

        game.play(mv)?;
    }

    let final_state = game.current_state()?;
    println!("\n{}", render_board(&final_state));

    match game.outcome {
        Some(GameOutcome::Win(winner)) if winner == human => {
            println!("You win!");
        }
        Some(GameOutcome::Win(_)) => {
            println!("The engine wins. Better luck next time.");
        }
        Some(GameOutcome::Draw) => {
            println!("It's a draw.");
        }
        None => unreachable!("game loop exits only on a terminal state"),
    }

    Ok(())
}

/// Prompt until the human enters a legal move for the current position.
fn prompt_human_move(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    state: &BoardState,
) -> Result<Move> {
    loop {
        print!("Your move (row col): ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            bail!("input closed before the game finished");
        };
        let line = line.context("failed to read move")?;

        match parse_move(&line) {
            Ok(mv) if state.is_empty(mv.position()) => return Ok(mv),
            Ok(mv) => println!("Cell {mv} is already taken. Try again."),
            Err(message) => println!("{message}"),
        }
    }
}

fn parse_move(line: &str) -> std::result::Result<Move, String> {
    let mut parts = line.split_whitespace();
    let (Some(row), Some(col), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err("Enter two numbers: row and column (0, 1 or 2).".to_string());
    };

    let row: usize = row
        .parse()
        .map_err(|_| format!("'{row}' is not a number."))?;
    let col: usize = col
        .parse()
        .map_err(|_| format!("'{col}' is not a number."))?;

    Move::new(row, col).map_err(|_| "Row and column must each be 0, 1 or 2.".to_string())
}
