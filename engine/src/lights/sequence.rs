use crate::config::TimingConfig;
use crate::game::{CellIndex, LightColor};
use crate::hardware::Level;

/// Visiting order of the draw sweep.
pub const DRAW_SWEEP: [CellIndex; 9] = [8, 7, 6, 3, 4, 5, 2, 1, 0];

/// Visiting order of the match-win sweep.
pub const MATCH_SWEEP: [CellIndex; 9] = [0, 1, 2, 5, 4, 3, 6, 7, 8];

const WIN_BLINK_CYCLES: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speed {
    Slow,
    Fast,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepAction {
    Light {
        cell: CellIndex,
        color: LightColor,
        level: Level,
    },
    Pause,
}

/// One output command followed by a delay. A `guarded` step only runs while
/// the switch is still engaged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub action: StepAction,
    pub delay_ms: u32,
    pub guarded: bool,
}

impl Step {
    fn guard(mut self) -> Self {
        self.guarded = true;
        self
    }
}

pub fn total_duration_ms(steps: &[Step]) -> u32 {
    steps.iter().map(|step| step.delay_ms).sum()
}

/// Builds the animations as plain step lists; playing them is up to a
/// [`SequencePlayer`](super::SequencePlayer).
#[derive(Debug, Clone)]
pub struct LightSequencer {
    timing: TimingConfig,
}

impl LightSequencer {
    pub fn new(timing: TimingConfig) -> Self {
        Self { timing }
    }

    pub fn light_on(&self, cell: CellIndex, color: LightColor, speed: Speed) -> Step {
        let delay_ms = match speed {
            Speed::Slow => self.timing.lock_input_ms,
            Speed::Fast => self.timing.snake_ms,
        };
        Self::light(cell, color, Level::On, delay_ms)
    }

    pub fn light_off(&self, cell: CellIndex, color: LightColor, speed: Speed) -> Step {
        let delay_ms = match speed {
            Speed::Slow => self.timing.snake_ms,
            Speed::Fast => self.timing.fast_off_ms(),
        };
        Self::light(cell, color, Level::Off, delay_ms)
    }

    fn light(cell: CellIndex, color: LightColor, level: Level, delay_ms: u32) -> Step {
        Step {
            action: StepAction::Light { cell, color, level },
            delay_ms,
            guarded: false,
        }
    }

    fn pause(delay_ms: u32) -> Step {
        Step {
            action: StepAction::Pause,
            delay_ms,
            guarded: false,
        }
    }

    /// Dark flash on the winning line, then two on/off blink cycles.
    pub fn win(&self, line: [CellIndex; 3], color: LightColor) -> Vec<Step> {
        let mut steps: Vec<Step> = line
            .iter()
            .map(|&cell| self.light_off(cell, color, Speed::Slow))
            .collect();
        steps.push(Self::pause(self.timing.lock_input_ms));

        for _ in 0..WIN_BLINK_CYCLES {
            for &cell in &line {
                steps.push(self.light_on(cell, color, Speed::Fast).guard());
            }
            for &cell in &line {
                steps.push(self.light_off(cell, color, Speed::Slow).guard());
            }
            steps.push(Self::pause(self.timing.lock_input_ms));
        }
        steps
    }

    pub fn draw(&self) -> Vec<Step> {
        let mut steps = vec![Self::pause(self.timing.sweep_lead_in_ms)];
        for &cell in &DRAW_SWEEP {
            steps.push(self.light_off(cell, LightColor::Blue, Speed::Fast).guard());
            steps.push(self.light_off(cell, LightColor::Green, Speed::Fast));
        }
        steps
    }

    /// Floods the board with the winner's color, then holds.
    pub fn match_win(&self, color: LightColor) -> Vec<Step> {
        let mut steps = vec![Self::pause(self.timing.sweep_lead_in_ms)];
        for &cell in &MATCH_SWEEP {
            steps.push(self.light_off(cell, color.other(), Speed::Fast).guard());
            steps.push(self.light_on(cell, color, Speed::Fast));
        }
        steps.push(Self::pause(self.timing.celebration_ms));
        steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequencer() -> LightSequencer {
        LightSequencer::new(TimingConfig::default())
    }

    fn lit_cells(steps: &[Step], wanted: Level) -> Vec<CellIndex> {
        steps
            .iter()
            .filter_map(|step| match step.action {
                StepAction::Light { cell, level, .. } if level == wanted => Some(cell),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_speed_delays() {
        let sequencer = sequencer();
        assert_eq!(sequencer.light_on(0, LightColor::Green, Speed::Slow).delay_ms, 100);
        assert_eq!(sequencer.light_on(0, LightColor::Green, Speed::Fast).delay_ms, 50);
        assert_eq!(sequencer.light_off(0, LightColor::Green, Speed::Slow).delay_ms, 50);
        assert_eq!(sequencer.light_off(0, LightColor::Green, Speed::Fast).delay_ms, 25);
    }

    #[test]
    fn test_win_sequence_shape() {
        let steps = sequencer().win([2, 4, 6], LightColor::Blue);
        assert_eq!(steps.len(), 3 + 1 + 2 * 7);
        assert!(steps[..4].iter().all(|step| !step.guarded));
        assert_eq!(lit_cells(&steps, Level::On), vec![2, 4, 6, 2, 4, 6]);
        assert_eq!(lit_cells(&steps, Level::Off), vec![2, 4, 6, 2, 4, 6, 2, 4, 6]);
        assert_eq!(steps.iter().filter(|step| step.guarded).count(), 12);
        assert_eq!(total_duration_ms(&steps), 3 * 50 + 100 + 2 * (3 * 50 + 3 * 50 + 100));
    }

    #[test]
    fn test_draw_sweeps_in_snake_order() {
        let steps = sequencer().draw();
        assert_eq!(steps[0].action, StepAction::Pause);
        let cells = lit_cells(&steps, Level::Off);
        let expected: Vec<CellIndex> = DRAW_SWEEP.iter().flat_map(|&cell| [cell, cell]).collect();
        assert_eq!(cells, expected);
        assert_eq!(steps.iter().filter(|step| step.guarded).count(), 9);
    }

    #[test]
    fn test_match_win_turns_off_losing_color_first() {
        let steps = sequencer().match_win(LightColor::Green);
        assert_eq!(
            steps[1].action,
            StepAction::Light {
                cell: 0,
                color: LightColor::Blue,
                level: Level::Off
            }
        );
        assert_eq!(
            steps[2].action,
            StepAction::Light {
                cell: 0,
                color: LightColor::Green,
                level: Level::On
            }
        );
        assert_eq!(lit_cells(&steps, Level::On), MATCH_SWEEP.to_vec());
        assert_eq!(steps.last().map(|step| step.delay_ms), Some(1000));
    }

    #[test]
    fn test_sweeps_visit_every_cell_once() {
        for sweep in [DRAW_SWEEP, MATCH_SWEEP] {
            let mut sorted = sweep;
            sorted.sort();
            assert_eq!(sorted, [0, 1, 2, 3, 4, 5, 6, 7, 8]);
        }
    }
}
