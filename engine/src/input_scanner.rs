use crate::game::{Board, CellIndex, Side};
use crate::hardware::{CabinetIo, Clock, INPUT_CHANNELS, InputChannel};

/// Debounced polling of the nine cell buttons.
#[derive(Debug, Clone, Copy)]
pub struct InputScanner {
    debounce_ms: u32,
}

impl InputScanner {
    pub fn new(debounce_ms: u32) -> Self {
        Self { debounce_ms }
    }

    /// Marks and returns the first empty cell whose button is still down after
    /// the debounce delay. Presses on occupied cells are skipped.
    pub fn poll_pressed_cell<TIo: CabinetIo, TClock: Clock>(
        &self,
        io: &mut TIo,
        clock: &mut TClock,
        board: &mut Board,
        turn: Side,
    ) -> Option<CellIndex> {
        for (cell, &channel) in INPUT_CHANNELS.iter().enumerate() {
            if !Self::is_pressed(io, channel) {
                continue;
            }

            clock.sleep_ms(self.debounce_ms);
            if Self::is_pressed(io, channel) && board.place(cell, turn).is_ok() {
                return Some(cell);
            }
        }
        None
    }

    fn is_pressed<TIo: CabinetIo>(io: &mut TIo, channel: InputChannel) -> bool {
        !io.read_input(channel)
    }
}
