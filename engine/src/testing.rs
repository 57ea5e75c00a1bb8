use std::collections::{HashMap, VecDeque};

use crate::game::CellIndex;
use crate::hardware::{CabinetIo, Clock, InputChannel, Level, OutputPin};

/// Records every sleep instead of blocking.
#[derive(Debug, Default)]
pub(crate) struct ManualClock {
    pub elapsed_ms: u64,
    pub sleeps: Vec<u32>,
}

impl Clock for ManualClock {
    fn sleep_ms(&mut self, ms: u32) {
        self.elapsed_ms += u64::from(ms);
        self.sleeps.push(ms);
    }
}

#[derive(Debug, Clone, Copy)]
struct Press {
    cell: CellIndex,
    /// Reads left before the button springs back; `None` holds it down.
    reads_left: Option<u32>,
}

/// Scripted switch and buttons; remembers every output command.
#[derive(Debug)]
pub(crate) struct ScriptedIo {
    switch_script: VecDeque<bool>,
    switch_default: bool,
    press: Option<Press>,
    pub switch_reads: usize,
    pub outputs: Vec<(OutputPin, Level)>,
    levels: HashMap<OutputPin, Level>,
}

impl ScriptedIo {
    pub fn engaged() -> Self {
        Self {
            switch_script: VecDeque::new(),
            switch_default: true,
            press: None,
            switch_reads: 0,
            outputs: Vec::new(),
            levels: HashMap::new(),
        }
    }

    /// Queues switch readings; once drained, reads return `then`.
    pub fn script_switch(&mut self, readings: &[bool], then: bool) {
        self.switch_script.extend(readings.iter().copied());
        self.switch_default = then;
    }

    pub fn set_switch(&mut self, engaged: bool) {
        self.switch_script.clear();
        self.switch_default = engaged;
    }

    pub fn hold(&mut self, cell: CellIndex) {
        self.press = Some(Press { cell, reads_left: None });
    }

    /// Press that reads low `reads` times, at least once, then releases.
    pub fn tap(&mut self, cell: CellIndex, reads: u32) {
        self.press = Some(Press {
            cell,
            reads_left: Some(reads),
        });
    }

    pub fn release(&mut self) {
        self.press = None;
    }

    pub fn is_lit(&self, pin: OutputPin) -> bool {
        self.levels.get(&pin) == Some(&Level::On)
    }

    pub fn lit_count(&self) -> usize {
        self.levels.values().filter(|&&level| level == Level::On).count()
    }
}

impl CabinetIo for ScriptedIo {
    fn read_input(&mut self, channel: InputChannel) -> bool {
        let Some(press) = self.press.as_mut() else {
            return true;
        };
        if channel.cell() != Some(press.cell) {
            return true;
        }
        if let Some(reads) = press.reads_left.as_mut() {
            *reads = reads.saturating_sub(1);
            if *reads == 0 {
                self.press = None;
            }
        }
        false
    }

    fn read_switch(&mut self) -> bool {
        self.switch_reads += 1;
        self.switch_script.pop_front().unwrap_or(self.switch_default)
    }

    fn set_output(&mut self, pin: OutputPin, level: Level) {
        self.outputs.push((pin, level));
        self.levels.insert(pin, level);
    }
}
