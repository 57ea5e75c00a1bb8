mod board;
mod bot_controller;
mod match_state;
mod types;
mod win_detector;

pub use board::{Board, get_available_moves};
pub use bot_controller::{BotInput, MoveChoice, calculate_move, negamax, rank_moves, use_second_best};
pub use match_state::{MATCH_POINT, MatchState};
pub use types::{CELL_COUNT, Cell, CellIndex, LightColor, LineIndex, Side};
pub use win_detector::{WIN_LINES, WinningLine, check_win, check_win_with_line, find_winning_line, winning_cell_value};
