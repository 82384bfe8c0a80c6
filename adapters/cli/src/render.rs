//! ASCII drawing of assembled worlds.

use std::fmt::Write as _;

use ricochet_worlds_board::Board;
use ricochet_worlds_core::{CellCoord, Direction, Marker};
use ricochet_worlds_system_assembler::AssembledWorld;

const CORNER: char = '+';
const HORIZONTAL_WALL: &str = "---";
const HORIZONTAL_OPEN: &str = "   ";

/// Draws the world with the north edge on top.
///
/// Planets show their color tag, the swirl shows `@`, and the goal cell is
/// bracketed.
pub(crate) fn render_text(world: &AssembledWorld, with_candidates: bool) -> String {
    let board = world.board();
    let goal = world.goal();
    let mut out = String::new();

    let _ = writeln!(out, "goal: ({}, {})", goal.x(), goal.y());
    if with_candidates {
        let listed: Vec<String> = world
            .candidates()
            .iter()
            .map(|cell| format!("({}, {})", cell.x(), cell.y()))
            .collect();
        let _ = writeln!(out, "candidates: {}", listed.join(" "));
    }

    for y in (0..board.height()).rev() {
        out.push_str(&horizontal_line(board, y, Direction::North));
        out.push('\n');
        for x in 0..board.width() {
            let cell = CellCoord::new(x, y);
            out.push(if board.wall(cell, Direction::West) {
                '|'
            } else {
                ' '
            });
            out.push_str(&cell_label(board.marker(cell), cell == goal));
        }
        out.push('|');
        out.push('\n');
    }
    out.push_str(&horizontal_line(board, 0, Direction::South));

    out
}

fn horizontal_line(board: &Board, y: u32, side: Direction) -> String {
    let mut line = String::with_capacity(board.width() as usize * 4 + 1);
    for x in 0..board.width() {
        line.push(CORNER);
        line.push_str(if board.wall(CellCoord::new(x, y), side) {
            HORIZONTAL_WALL
        } else {
            HORIZONTAL_OPEN
        });
    }
    line.push(CORNER);
    line
}

fn cell_label(marker: Option<Marker>, is_goal: bool) -> String {
    let symbol = match marker {
        Some(Marker::Planet(color)) => color.tag(),
        Some(Marker::Swirl) => '@',
        Some(Marker::Plain) | None => ' ',
    };
    if is_goal {
        format!("[{symbol}]")
    } else {
        format!(" {symbol} ")
    }
}
