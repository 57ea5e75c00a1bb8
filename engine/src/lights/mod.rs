mod player;
mod sequence;

pub use player::{Playback, SequencePlayer};
pub use sequence::{DRAW_SWEEP, LightSequencer, MATCH_SWEEP, Speed, Step, StepAction, total_duration_ms};
