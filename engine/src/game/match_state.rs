use super::types::{LightColor, Side};

/// Round wins needed to take a best-of-three match.
pub const MATCH_POINT: u8 = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchState {
    pub turn: Side,
    /// The side whose moves and wins are shown in green.
    pub color_side: Side,
    pub computer_enabled: bool,
    pub computer_side: Side,
    pub wins_one: u8,
    pub wins_two: u8,
    /// Never reset; only feeds the alternate-move policy.
    pub computer_move_count: u32,
    pub computer_first_move_of_round: bool,
}

impl MatchState {
    pub fn new(computer_enabled: bool, computer_side: Side, color_side: Side) -> Self {
        Self {
            turn: Side::PlayerOne,
            color_side,
            computer_enabled,
            computer_side,
            wins_one: 0,
            wins_two: 0,
            computer_move_count: 0,
            computer_first_move_of_round: true,
        }
    }

    pub fn is_computer_turn(&self) -> bool {
        self.computer_enabled && self.turn == self.computer_side
    }

    pub fn color_for(&self, side: Side) -> LightColor {
        if side == self.color_side {
            LightColor::Green
        } else {
            LightColor::Blue
        }
    }

    pub fn switch_turn(&mut self) {
        self.turn = self.turn.opponent();
    }

    pub fn score(&self, side: Side) -> u8 {
        match side {
            Side::PlayerOne => self.wins_one,
            Side::PlayerTwo => self.wins_two,
        }
    }

    pub fn record_round_win(&mut self, side: Side) -> u8 {
        let wins = match side {
            Side::PlayerOne => &mut self.wins_one,
            Side::PlayerTwo => &mut self.wins_two,
        };
        *wins += 1;
        *wins
    }

    pub fn match_winner(&self) -> Option<Side> {
        if self.wins_one >= MATCH_POINT {
            Some(Side::PlayerOne)
        } else if self.wins_two >= MATCH_POINT {
            Some(Side::PlayerTwo)
        } else {
            None
        }
    }

    pub fn record_computer_move(&mut self) {
        self.computer_move_count = self.computer_move_count.wrapping_add(1);
        self.computer_first_move_of_round = false;
    }

    pub fn start_round(&mut self) {
        self.computer_first_move_of_round = true;
    }

    pub fn reset_scores(&mut self) {
        self.wins_one = 0;
        self.wins_two = 0;
    }

    /// Switch-off reset: scores, turn and round flags, but not the move counter.
    pub fn reset(&mut self) {
        self.turn = Side::PlayerOne;
        self.reset_scores();
        self.start_round();
    }
}
