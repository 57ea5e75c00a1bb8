use crate::config::{CabinetConfig, ChannelMap};
use crate::game::{
    Board, BotInput, CellIndex, MatchState, Side, WinningLine, calculate_move, check_win_with_line,
};
use crate::hardware::{CabinetIo, Clock};
use crate::input_scanner::InputScanner;
use crate::lights::{LightSequencer, Playback, SequencePlayer, Speed, Step};
use crate::log;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    /// Switch disengaged; board and round scores are clear.
    Idle,
    HumanTurn,
    ComputerTurn,
    /// Held internally while end-of-round animations play; `tick` always
    /// leaves the controller in one of the other states.
    RoundOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Idle,
    NoMove,
    Moved {
        cell: CellIndex,
        side: Side,
    },
    RoundWon {
        cell: CellIndex,
        line: WinningLine,
        match_won: bool,
    },
    Draw {
        cell: CellIndex,
    },
    /// The switch dropped during an animation and the match was reset.
    Interrupted,
}

pub struct TurnController<TIo: CabinetIo, TClock: Clock> {
    io: TIo,
    clock: TClock,
    channels: ChannelMap,
    scanner: InputScanner,
    sequencer: LightSequencer,
    board: Board,
    state: MatchState,
    control: ControllerState,
    rounds_played: u32,
}

impl<TIo: CabinetIo, TClock: Clock> TurnController<TIo, TClock> {
    pub fn new(io: TIo, clock: TClock, config: &CabinetConfig) -> Self {
        let mut controller = Self {
            io,
            clock,
            channels: config.channels.clone(),
            scanner: InputScanner::new(config.timing.debounce_ms),
            sequencer: LightSequencer::new(config.timing.clone()),
            board: Board::new(),
            state: MatchState::new(config.computer_enabled, config.computer_side, config.color_side),
            control: ControllerState::Idle,
            rounds_played: 0,
        };
        controller.clear_board();
        controller
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn match_state(&self) -> &MatchState {
        &self.state
    }

    pub fn state(&self) -> ControllerState {
        self.control
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    pub fn io(&self) -> &TIo {
        &self.io
    }

    pub fn io_mut(&mut self) -> &mut TIo {
        &mut self.io
    }

    pub fn clock(&self) -> &TClock {
        &self.clock
    }

    /// One pass of the control loop: switch check, then at most one move and
    /// whatever animation it triggers.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.check_switch() {
            return TickOutcome::Idle;
        }

        let mover = self.state.turn;
        let Some(cell) = self.next_move(mover) else {
            return TickOutcome::NoMove;
        };

        let step = self
            .sequencer
            .light_on(cell, self.state.color_for(mover), Speed::Slow);
        SequencePlayer::new(&mut self.io, &mut self.clock, &self.channels).run(&step);

        let outcome = self.resolve(cell, mover);
        if outcome != TickOutcome::Interrupted {
            self.state.switch_turn();
            self.control = self.turn_state();
        }
        outcome
    }

    fn check_switch(&mut self) -> bool {
        let engaged = self.io.read_switch();
        if !engaged {
            if self.control != ControllerState::Idle {
                log!("Switch disengaged, clearing board and scores");
                self.reset_to_idle();
            }
        } else if self.control == ControllerState::Idle {
            self.control = self.turn_state();
            log!("Switch engaged, {:?} to move ({:?})", self.state.turn, self.control);
        }
        engaged
    }

    fn turn_state(&self) -> ControllerState {
        if self.state.is_computer_turn() {
            ControllerState::ComputerTurn
        } else {
            ControllerState::HumanTurn
        }
    }

    fn next_move(&mut self, mover: Side) -> Option<CellIndex> {
        if !self.state.is_computer_turn() {
            return self
                .scanner
                .poll_pressed_cell(&mut self.io, &mut self.clock, &mut self.board, mover);
        }

        let input = BotInput::from_match_state(&self.board, &self.state);
        let cell = calculate_move(&input)?;
        if let Err(e) = self.board.place(cell, mover) {
            log!("Computer move rejected: {}", e);
            return None;
        }
        self.state.record_computer_move();
        log!(
            "Computer plays {} (move #{}) on {}",
            cell,
            self.state.computer_move_count,
            self.board
        );
        Some(cell)
    }

    fn resolve(&mut self, cell: CellIndex, mover: Side) -> TickOutcome {
        if let Some(line) = check_win_with_line(&self.board) {
            self.control = ControllerState::RoundOver;
            self.state.record_round_win(line.side);
            log!(
                "{:?} wins the round on {:?} (score {} - {})",
                line.side,
                line.cells,
                self.state.wins_one,
                self.state.wins_two
            );

            let color = self.state.color_for(line.side);
            let steps = self.sequencer.win(line.cells, color);
            if self.play(&steps).is_aborted() {
                return self.interrupt();
            }

            let match_won = self.state.match_winner().is_some();
            if match_won {
                log!("{:?} takes the match", line.side);
                let steps = self.sequencer.match_win(color);
                if self.play(&steps).is_aborted() {
                    return self.interrupt();
                }
                self.state.reset_scores();
            }

            self.finish_round();
            return TickOutcome::RoundWon {
                cell,
                line,
                match_won,
            };
        }

        if self.board.is_full() {
            self.control = ControllerState::RoundOver;
            log!("Round drawn on {}", self.board);
            let steps = self.sequencer.draw();
            if self.play(&steps).is_aborted() {
                return self.interrupt();
            }
            self.finish_round();
            return TickOutcome::Draw { cell };
        }

        TickOutcome::Moved { cell, side: mover }
    }

    fn play(&mut self, steps: &[Step]) -> Playback {
        SequencePlayer::new(&mut self.io, &mut self.clock, &self.channels).play(steps)
    }

    fn interrupt(&mut self) -> TickOutcome {
        log!("Switch disengaged during animation, clearing board and scores");
        self.reset_to_idle();
        TickOutcome::Interrupted
    }

    fn finish_round(&mut self) {
        self.rounds_played += 1;
        self.clear_board();
        self.state.start_round();
    }

    fn reset_to_idle(&mut self) {
        self.state.reset();
        self.clear_board();
        self.control = ControllerState::Idle;
    }

    fn clear_board(&mut self) {
        self.board.clear();
        SequencePlayer::new(&mut self.io, &mut self.clock, &self.channels).clear_lights();
    }

    #[cfg(test)]
    fn load(&mut self, board: Board, turn: Side) {
        self.board = board;
        self.state.turn = turn;
        self.control = self.turn_state();
    }
}
