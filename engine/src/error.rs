use thiserror::Error;

use crate::game::CellIndex;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    #[error("invalid move: cell {index} is outside the board")]
    OutOfRange { index: CellIndex },

    #[error("invalid move: cell {index} is already occupied")]
    Occupied { index: CellIndex },
}
