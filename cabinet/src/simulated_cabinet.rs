use std::collections::HashMap;

use engine::config::ChannelMap;
use engine::game::{CELL_COUNT, CellIndex, LightColor};
use engine::hardware::{CabinetIo, Clock, InputChannel, Level, OutputPin};

use crate::session_rng::SessionRng;

/// Chance that a simulated press is only contact bounce.
const BOUNCE_PROBABILITY: f64 = 0.1;

#[derive(Debug, Clone, Copy)]
struct Press {
    cell: CellIndex,
    bounce: bool,
}

/// In-memory GPIO driver with a simulated player at the buttons.
pub struct SimulatedCabinet {
    channels: ChannelMap,
    levels: HashMap<OutputPin, Level>,
    switch_engaged: bool,
    press: Option<Press>,
    rng: SessionRng,
    pub bounces: u32,
}

impl SimulatedCabinet {
    pub fn new(channels: ChannelMap, rng: SessionRng) -> Self {
        Self {
            channels,
            levels: HashMap::new(),
            switch_engaged: true,
            press: None,
            rng,
            bounces: 0,
        }
    }

    pub fn set_switch(&mut self, engaged: bool) {
        self.switch_engaged = engaged;
    }

    pub fn is_lit(&self, cell: CellIndex) -> bool {
        [LightColor::Green, LightColor::Blue]
            .iter()
            .any(|&color| self.levels.get(&self.channels.pin(cell, color)) == Some(&Level::On))
    }

    /// Puts a finger on a random dark button, unless one is already down.
    pub fn press_random_cell(&mut self) {
        if self.press.is_some() {
            return;
        }
        let dark: Vec<CellIndex> = (0..CELL_COUNT).filter(|&cell| !self.is_lit(cell)).collect();
        let Some(cell) = self.rng.pick(&dark) else {
            return;
        };
        let bounce = self.rng.chance(BOUNCE_PROBABILITY);
        self.press = Some(Press { cell, bounce });
    }

    pub fn release(&mut self) {
        self.press = None;
    }

    pub fn render(&self) -> String {
        let mut rows = Vec::new();
        for row in 0..3 {
            let mut line = String::new();
            for col in 0..3 {
                let cell = row * 3 + col;
                let green = self.levels.get(&self.channels.pin(cell, LightColor::Green)) == Some(&Level::On);
                let blue = self.levels.get(&self.channels.pin(cell, LightColor::Blue)) == Some(&Level::On);
                line.push(match (green, blue) {
                    (true, false) => 'G',
                    (false, true) => 'B',
                    (true, true) => '*',
                    (false, false) => '.',
                });
            }
            rows.push(line);
        }
        rows.join(" / ")
    }
}

impl CabinetIo for SimulatedCabinet {
    fn read_input(&mut self, channel: InputChannel) -> bool {
        let Some(press) = self.press else {
            return true;
        };
        if channel.cell() != Some(press.cell) {
            return true;
        }
        if press.bounce {
            self.bounces += 1;
            self.press = None;
        }
        false
    }

    fn read_switch(&mut self) -> bool {
        self.switch_engaged
    }

    fn set_output(&mut self, pin: OutputPin, level: Level) {
        self.levels.insert(pin, level);
        // The finger lifts once its button lights up.
        if level == Level::On
            && let Some(press) = self.press
            && self.is_lit(press.cell)
        {
            self.press = None;
        }
    }
}

/// Counts simulated time without blocking.
#[derive(Debug, Default)]
pub struct VirtualClock {
    pub elapsed_ms: u64,
}

impl Clock for VirtualClock {
    fn sleep_ms(&mut self, ms: u32) {
        self.elapsed_ms += u64::from(ms);
    }
}
