use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::game::{CELL_COUNT, CellIndex, LightColor, Side};
use crate::hardware::{OutputPin, Port};
use super::Validate;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct CabinetConfig {
    pub computer_enabled: bool,
    pub computer_side: Side,
    pub color_side: Side,
    pub timing: TimingConfig,
    pub channels: ChannelMap,
}

impl Default for CabinetConfig {
    fn default() -> Self {
        Self {
            computer_enabled: true,
            computer_side: Side::PlayerTwo,
            color_side: Side::PlayerTwo,
            timing: TimingConfig::default(),
            channels: ChannelMap::default(),
        }
    }
}

impl Validate for CabinetConfig {
    fn validate(&self) -> Result<(), String> {
        self.timing.validate()?;
        self.channels.validate()?;
        Ok(())
    }
}

/// Delays in milliseconds.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct TimingConfig {
    pub debounce_ms: u32,
    /// Hold after a move lights up, so a held button cannot register twice.
    pub lock_input_ms: u32,
    pub snake_ms: u32,
    pub sweep_lead_in_ms: u32,
    pub celebration_ms: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 25,
            lock_input_ms: 100,
            snake_ms: 50,
            sweep_lead_in_ms: 200,
            celebration_ms: 1000,
        }
    }
}

impl TimingConfig {
    pub fn fast_off_ms(&self) -> u32 {
        self.snake_ms / 2
    }
}

impl Validate for TimingConfig {
    fn validate(&self) -> Result<(), String> {
        if self.debounce_ms == 0 {
            return Err("debounce_ms must be greater than 0".to_string());
        }
        if self.debounce_ms >= self.lock_input_ms {
            return Err(format!(
                "debounce_ms ({}) must be shorter than lock_input_ms ({})",
                self.debounce_ms, self.lock_input_ms
            ));
        }
        if self.snake_ms < 2 {
            return Err("snake_ms must be at least 2".to_string());
        }
        if self.sweep_lead_in_ms == 0 || self.celebration_ms == 0 {
            return Err("sweep_lead_in_ms and celebration_ms must be greater than 0".to_string());
        }
        Ok(())
    }
}

/// Logical cell to physical output, one table per color.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct ChannelMap {
    pub green: [OutputPin; CELL_COUNT],
    pub blue: [OutputPin; CELL_COUNT],
}

impl Default for ChannelMap {
    fn default() -> Self {
        use Port::{A, C, D};
        let pin = OutputPin::new;
        Self {
            green: [
                pin(C, 5),
                pin(C, 2),
                pin(C, 1),
                pin(C, 7),
                pin(A, 7),
                pin(D, 7),
                pin(D, 1),
                pin(D, 4),
                pin(D, 6),
            ],
            blue: [
                pin(C, 4),
                pin(C, 3),
                pin(C, 0),
                pin(C, 6),
                pin(A, 6),
                pin(A, 5),
                pin(D, 2),
                pin(D, 3),
                pin(D, 5),
            ],
        }
    }
}

impl ChannelMap {
    pub fn pin(&self, cell: CellIndex, color: LightColor) -> OutputPin {
        match color {
            LightColor::Green => self.green[cell],
            LightColor::Blue => self.blue[cell],
        }
    }

    pub fn all_pins(&self) -> impl Iterator<Item = OutputPin> + '_ {
        self.green.iter().chain(self.blue.iter()).copied()
    }
}

impl Validate for ChannelMap {
    fn validate(&self) -> Result<(), String> {
        let mut seen = HashSet::new();
        for pin in self.all_pins() {
            if pin.bit > 7 {
                return Err(format!("bit {} on port {:?} is out of range 0-7", pin.bit, pin.port));
            }
            if !seen.insert(pin) {
                return Err(format!("pin {:?}{} is mapped more than once", pin.port, pin.bit));
            }
        }
        Ok(())
    }
}
