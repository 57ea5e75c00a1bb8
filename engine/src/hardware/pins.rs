use serde::{Deserialize, Serialize};

use crate::game::CELL_COUNT;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Port {
    A,
    B,
    C,
    D,
}

/// A physical output bit driving one color of one button.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OutputPin {
    pub port: Port,
    pub bit: u8,
}

impl OutputPin {
    pub const fn new(port: Port, bit: u8) -> Self {
        Self { port, bit }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    On,
    Off,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputBank {
    A,
    B,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct InputChannel {
    pub bank: InputBank,
    pub bit: u8,
}

impl InputChannel {
    const fn new(bank: InputBank, bit: u8) -> Self {
        Self { bank, bit }
    }

    pub fn cell(&self) -> Option<usize> {
        INPUT_CHANNELS.iter().position(|channel| channel == self)
    }
}

/// Buttons for cells 0-4 sit on bank A, cells 5-8 on bank B.
pub const INPUT_CHANNELS: [InputChannel; CELL_COUNT] = [
    InputChannel::new(InputBank::A, 0),
    InputChannel::new(InputBank::A, 1),
    InputChannel::new(InputBank::A, 2),
    InputChannel::new(InputBank::A, 3),
    InputChannel::new(InputBank::A, 4),
    InputChannel::new(InputBank::B, 0),
    InputChannel::new(InputBank::B, 1),
    InputChannel::new(InputBank::B, 2),
    InputChannel::new(InputBank::B, 3),
];
