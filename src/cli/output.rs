//! Output formatting for CLI

use crate::board::BoardState;

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Render the board as a bordered grid with row and column indices
pub fn render_board(state: &BoardState) -> String {
    let mut out = String::from("    0   1   2\n");
    out.push_str("  -------------\n");
    for row in 0..3 {
        out.push_str(&format!("{row} |"));
        for col in 0..3 {
            let c = state.get(row * 3 + col).to_char();
            let shown = if c == '.' { ' ' } else { c };
            out.push_str(&format!(" {shown} |"));
        }
        out.push_str("\n  -------------\n");
    }
    out
}
