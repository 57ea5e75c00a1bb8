use super::pins::{InputChannel, Level, OutputPin};

/// The GPIO driver as seen by the engine.
pub trait CabinetIo {
    /// Electrical level of a button input. Buttons pull the line low while pressed.
    fn read_input(&mut self, channel: InputChannel) -> bool;

    /// On/off switch, high while engaged.
    fn read_switch(&mut self) -> bool;

    fn set_output(&mut self, pin: OutputPin, level: Level);
}
