use crate::config::ChannelMap;
use crate::hardware::{CabinetIo, Clock, Level};
use super::sequence::{Step, StepAction};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Playback {
    Completed,
    /// The switch read disengaged before a guarded step; `executed` steps ran.
    Aborted { executed: usize },
}

impl Playback {
    pub fn is_aborted(&self) -> bool {
        matches!(self, Playback::Aborted { .. })
    }
}

/// Drives step lists out to the hardware, one blocking delay per step.
pub struct SequencePlayer<'a, TIo: CabinetIo, TClock: Clock> {
    io: &'a mut TIo,
    clock: &'a mut TClock,
    channels: &'a ChannelMap,
}

impl<'a, TIo: CabinetIo, TClock: Clock> SequencePlayer<'a, TIo, TClock> {
    pub fn new(io: &'a mut TIo, clock: &'a mut TClock, channels: &'a ChannelMap) -> Self {
        Self { io, clock, channels }
    }

    pub fn play(&mut self, steps: &[Step]) -> Playback {
        for (executed, step) in steps.iter().enumerate() {
            if step.guarded && !self.io.read_switch() {
                return Playback::Aborted { executed };
            }
            self.run(step);
        }
        Playback::Completed
    }

    pub fn run(&mut self, step: &Step) {
        if let StepAction::Light { cell, color, level } = step.action {
            self.io.set_output(self.channels.pin(cell, color), level);
        }
        self.clock.sleep_ms(step.delay_ms);
    }

    pub fn clear_lights(&mut self) {
        for pin in self.channels.all_pins() {
            self.io.set_output(pin, Level::Off);
        }
    }
}
