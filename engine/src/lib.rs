pub mod config;
pub mod error;
pub mod game;
pub mod hardware;
pub mod input_scanner;
pub mod lights;
pub mod logger;
pub mod turn_controller;

#[cfg(test)]
mod testing;

pub use error::BoardError;
pub use input_scanner::InputScanner;
pub use turn_controller::{ControllerState, TickOutcome, TurnController};
