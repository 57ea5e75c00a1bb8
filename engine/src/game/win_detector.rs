use super::board::Board;
use super::types::{Cell, CellIndex, LineIndex, Side};

/// Rows, then columns, then diagonals. Order decides which line is reported
/// when more than one is complete.
pub const WIN_LINES: [[CellIndex; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub index: LineIndex,
    pub cells: [CellIndex; 3],
    pub side: Side,
}

pub fn find_winning_line(board: &Board) -> Option<LineIndex> {
    let cells = board.cells();
    WIN_LINES.iter().position(|&[a, b, c]| {
        cells[a] != Cell::Empty && cells[a] == cells[b] && cells[a] == cells[c]
    })
}

pub fn winning_cell_value(board: &Board, line: LineIndex) -> Cell {
    board.cells()[WIN_LINES[line][0]]
}

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    let index = find_winning_line(board)?;
    let side = winning_cell_value(board, index).side()?;
    Some(WinningLine {
        index,
        cells: WIN_LINES[index],
        side,
    })
}

pub fn check_win(board: &Board) -> Option<Side> {
    check_win_with_line(board).map(|line| line.side)
}
