use super::board::{Board, get_available_moves};
use super::match_state::MatchState;
use super::types::{Cell, CellIndex, Side};
use super::win_detector::{find_winning_line, winning_cell_value};

pub struct BotInput {
    pub board: Board,
    pub computer_side: Side,
    pub move_count: u32,
    pub first_move_of_round: bool,
}

impl BotInput {
    pub fn from_match_state(board: &Board, state: &MatchState) -> Self {
        Self {
            board: *board,
            computer_side: state.computer_side,
            move_count: state.computer_move_count,
            first_move_of_round: state.computer_first_move_of_round,
        }
    }
}

/// Result of ranking every empty cell for one side.
///
/// `second_best` is the cell that held the lead right before `best` took it,
/// in evaluation order. It is not necessarily the runner-up by score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveChoice {
    pub best: CellIndex,
    pub second_best: Option<CellIndex>,
    pub score: i8,
}

pub fn calculate_move(input: &BotInput) -> Option<CellIndex> {
    let mut board = input.board;
    let choice = rank_moves(&mut board, input.computer_side)?;

    match choice.second_best {
        Some(index)
            if board.is_empty_at(index)
                && use_second_best(input.move_count, input.first_move_of_round) =>
        {
            Some(index)
        }
        _ => Some(choice.best),
    }
}

pub fn use_second_best(move_count: u32, first_move_of_round: bool) -> bool {
    (first_move_of_round && move_count % 2 == 0) || move_count % 8 == 0
}

pub fn rank_moves(board: &mut Board, side: Side) -> Option<MoveChoice> {
    let mut best = None;
    let mut second_best = None;
    let mut best_score = i8::MIN;

    for index in get_available_moves(board) {
        board.set(index, side.into());
        let score = -negamax(board, side.opponent());
        board.set(index, Cell::Empty);

        if score > best_score {
            second_best = best;
            best_score = score;
            best = Some(index);
        }
    }

    best.map(|best| MoveChoice {
        best,
        second_best,
        score: best_score,
    })
}

/// Exact value of `board` for `side`, which is to move: 1 win, 0 draw, -1 loss.
pub fn negamax(board: &mut Board, side: Side) -> i8 {
    if let Some(line) = find_winning_line(board) {
        return winning_cell_value(board, line).value() * side.sign();
    }

    let mut best: Option<i8> = None;
    for index in 0..board.cells().len() {
        if !board.is_empty_at(index) {
            continue;
        }
        board.set(index, side.into());
        let score = -negamax(board, side.opponent());
        board.set(index, Cell::Empty);

        if best.is_none_or(|current| score > current) {
            best = Some(score);
        }
    }

    // Full board without a line.
    best.unwrap_or(0)
}
