//! Analyze command - Exact evaluation of a position

use anyhow::{Context, Result, bail};
use clap::Parser;
use serde::Serialize;

use crate::board::{BoardState, Player};
use crate::cli::output::{print_kv, print_section, render_board};
use crate::engine::MinimaxEngine;
use crate::rules::LineAnalyzer;

#[derive(Parser, Debug)]
#[command(about = "Compute the optimal move and exact scores for a position")]
pub struct AnalyzeArgs {
    /// Board as 9 cell characters in row-major order (`X`, `O`, `.`),
    /// with an optional `_X`/`_O` suffix forcing the side to move,
    /// e.g. `XO.......` or `XOX.O...._O`
    pub position: String,

    /// Emit the report as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct MoveReport {
    row: usize,
    col: usize,
    score: i32,
}

#[derive(Serialize)]
struct AnalysisReport {
    position: String,
    to_move: Player,
    best: MoveReport,
    moves: Vec<MoveReport>,
    /// Cells that win immediately for the side to move
    winning_now: Vec<usize>,
    /// Cells the opponent would win on next turn if left open
    must_block: Vec<usize>,
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let state = BoardState::from_string(&args.position)
        .with_context(|| format!("failed to parse position '{}'", args.position))?;

    if !state.is_valid() {
        bail!(
            "position '{}' is not reachable under the game rules",
            args.position
        );
    }

    if state.is_terminal() {
        match state.winner() {
            Some(winner) => bail!("nothing to analyze: {winner} has already won"),
            None => bail!("nothing to analyze: the board is full (draw)"),
        }
    }

    let report = build_report(&state)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&state, &report);
    }

    Ok(())
}

fn build_report(state: &BoardState) -> Result<AnalysisReport> {
    // Analyze from the perspective of the side to move
    let engine = MinimaxEngine::new(state.to_move);
    let mut cells = state.cells;

    let scored = engine.move_scores(&mut cells)?;
    let best = engine.best_move(&mut cells)?;
    let best_score = scored
        .iter()
        .find(|(mv, _)| *mv == best)
        .map(|&(_, score)| score)
        .context("best move missing from the score table")?;

    let mut winning_now: Vec<usize> =
        LineAnalyzer::winning_moves(&state.cells, state.to_move).into_iter().collect();
    winning_now.sort_unstable();

    let mut must_block: Vec<usize> =
        LineAnalyzer::winning_moves(&state.cells, state.to_move.opponent())
            .into_iter()
            .collect();
    must_block.sort_unstable();

    Ok(AnalysisReport {
        position: state.encode(),
        to_move: state.to_move,
        best: MoveReport {
            row: best.row(),
            col: best.col(),
            score: best_score,
        },
        moves: scored
            .into_iter()
            .map(|(mv, score)| MoveReport {
                row: mv.row(),
                col: mv.col(),
                score,
            })
            .collect(),
        winning_now,
        must_block,
    })
}

fn print_report(state: &BoardState, report: &AnalysisReport) {
    print_section("Position analysis");
    println!("{}", render_board(state));

    print_kv("Position", &report.position);
    print_kv("To move", &report.to_move.to_string());
    print_kv(
        "Best move",
        &format!(
            "({}, {}) with score {}",
            report.best.row, report.best.col, report.best.score
        ),
    );

    if !report.winning_now.is_empty() {
        print_kv("Immediate wins", &format!("{:?}", report.winning_now));
    }
    if !report.must_block.is_empty() {
        print_kv("Must block", &format!("{:?}", report.must_block));
    }

    println!("\n  Move scores (higher is better for {}):", report.to_move);
    for mv in &report.moves {
        println!("    ({}, {})  {:+}", mv.row, mv.col, mv.score);
    }
}
