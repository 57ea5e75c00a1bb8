use std::thread;
use std::time::Duration;

pub trait Clock {
    fn sleep_ms(&mut self, ms: u32);
}

/// Blocks the calling thread.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn sleep_ms(&mut self, ms: u32) {
        if ms > 0 {
            thread::sleep(Duration::from_millis(u64::from(ms)));
        }
    }
}
