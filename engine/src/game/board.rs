use std::fmt;

use crate::error::BoardError;
use super::types::{CELL_COUNT, Cell, CellIndex, Side};

/// The 3x3 grid, row-major:
///
/// ```text
/// 0 1 2
/// 3 4 5
/// 6 7 8
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, index: CellIndex) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    pub fn is_empty_at(&self, index: CellIndex) -> bool {
        self.get(index) == Some(Cell::Empty)
    }

    pub fn place(&mut self, index: CellIndex, side: Side) -> Result<(), BoardError> {
        match self.cells.get_mut(index) {
            None => Err(BoardError::OutOfRange { index }),
            Some(cell) if *cell != Cell::Empty => Err(BoardError::Occupied { index }),
            Some(cell) => {
                *cell = side.into();
                Ok(())
            }
        }
    }

    /// Unchecked write used by the search to make and undo moves.
    pub(crate) fn set(&mut self, index: CellIndex, cell: Cell) {
        self.cells[index] = cell;
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Cell::Empty)
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| cell == Cell::Empty)
    }

    pub fn clear(&mut self) {
        self.cells = [Cell::Empty; CELL_COUNT];
    }

    pub fn count(&self, side: Side) -> usize {
        let target = Cell::from(side);
        self.cells.iter().filter(|&&cell| cell == target).count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_index, row) in self.cells.chunks(3).enumerate() {
            if row_index > 0 {
                write!(f, " / ")?;
            }
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}

pub fn get_available_moves(board: &Board) -> Vec<CellIndex> {
    board
        .cells()
        .iter()
        .enumerate()
        .filter(|(_, cell)| **cell == Cell::Empty)
        .map(|(index, _)| index)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_then_clear_returns_to_empty() {
        let mut board = Board::new();
        board.place(4, Side::PlayerOne).unwrap();
        board.place(0, Side::PlayerTwo).unwrap();
        assert!(!board.is_empty());

        board.clear();
        assert!(board.is_empty());
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_place_rejects_out_of_range() {
        let mut board = Board::new();
        assert_eq!(board.place(9, Side::PlayerOne), Err(BoardError::OutOfRange { index: 9 }));
    }

    #[test]
    fn test_place_rejects_occupied_cell() {
        let mut board = Board::new();
        board.place(3, Side::PlayerOne).unwrap();
        assert_eq!(board.place(3, Side::PlayerTwo), Err(BoardError::Occupied { index: 3 }));
        assert_eq!(board.get(3), Some(Cell::PlayerOne));
    }

    #[test]
    fn test_is_full_iff_no_empty_cell() {
        let mut board = Board::new();
        let mut side = Side::PlayerOne;
        for index in 0..CELL_COUNT {
            assert!(!board.is_full());
            board.place(index, side).unwrap();
            side = side.opponent();
        }
        assert!(board.is_full());
        assert!(get_available_moves(&board).is_empty());
    }

    #[test]
    fn test_available_moves_in_index_order() {
        let mut board = Board::new();
        board.place(1, Side::PlayerOne).unwrap();
        board.place(5, Side::PlayerTwo).unwrap();
        assert_eq!(get_available_moves(&board), vec![0, 2, 3, 4, 6, 7, 8]);
    }

    #[test]
    fn test_display_rows() {
        let mut board = Board::new();
        board.place(0, Side::PlayerOne).unwrap();
        board.place(4, Side::PlayerTwo).unwrap();
        assert_eq!(board.to_string(), "X.. / .O. / ...");
    }
}
