//! Text rendering of the board, the round's pieces and suggestions.

use std::fmt::Write;

use gridblast_core::{Grid, PieceSlot, Sequence};

const BLOCK: char = '■';
const EMPTY: char = '.';
const PIECE_COLUMN_WIDTH: usize = 25;

pub fn board(grid: &Grid, score: u32) -> String {
    let mut out = String::new();
    let rule = format!("  {}", "-".repeat(Grid::WIDTH * 2 + 1));

    let _ = writeln!(out, "SCORE: {score}\n");
    let header: Vec<String> = (0..Grid::WIDTH).map(|c| c.to_string()).collect();
    let _ = writeln!(out, "   {}", header.join(" "));
    let _ = writeln!(out, "{rule}");
    for row in 0..Grid::HEIGHT {
        let cells: Vec<String> = (0..Grid::WIDTH)
            .map(|col| {
                if grid.get(row, col) { BLOCK } else { EMPTY }.to_string()
            })
            .collect();
        let _ = writeln!(out, "{row} | {} |", cells.join(" "));
    }
    let _ = writeln!(out, "{rule}");
    out
}

fn piece_lines(index: usize, slot: &PieceSlot) -> Vec<String> {
    if slot.placed {
        return vec![format!("Piece {}: Placed", index + 1)];
    }

    let shape = &slot.shape;
    let mut lines = vec![format!("Piece {} ({} blocks):", index + 1, shape.len())];
    for row in 0..shape.height() {
        let cells: Vec<String> = (0..shape.width())
            .map(|col| {
                if shape.contains(row, col) { BLOCK } else { ' ' }.to_string()
            })
            .collect();
        lines.push(cells.join(" "));
    }
    lines
}

/// Pieces side by side, one fixed-width column each.
pub fn pieces(slots: &[PieceSlot]) -> String {
    let columns: Vec<Vec<String>> = slots
        .iter()
        .enumerate()
        .map(|(i, slot)| piece_lines(i, slot))
        .collect();
    let height = columns.iter().map(Vec::len).max().unwrap_or(0);

    let mut out = String::from("--- Available Pieces ---\n");
    for line in 0..height {
        let mut text = String::new();
        for column in &columns {
            let cell = column.get(line).map(String::as_str).unwrap_or("");
            let _ = write!(text, "{cell:<PIECE_COLUMN_WIDTH$}");
        }
        let _ = writeln!(out, "{}", text.trim_end());
    }
    let _ = writeln!(out, "{}", "-".repeat(PIECE_COLUMN_WIDTH * 3));
    out
}

pub fn suggestion(sequence: Option<&Sequence>) -> String {
    let Some(sequence) = sequence else {
        return "AI could not find a valid move sequence.\n".to_string();
    };

    let mut out = String::from("AI Suggestion:\n");
    for mv in sequence {
        let _ = writeln!(
            out,
            "  - Place Piece {} at (Row: {}, Col: {})",
            mv.piece + 1,
            mv.row,
            mv.col
        );
    }
    out
}
