//! Frame-count spawn gate with a one-step difficulty ramp.

use std::num::NonZeroU32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZeroInterval;

impl std::fmt::Display for ZeroInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("spawn interval must be at least one frame")
    }
}

impl std::error::Error for ZeroInterval {}

const DEFAULT_INTERVAL: NonZeroU32 = match NonZeroU32::new(28) {
    Some(v) => v,
    None => panic!("default interval is non-zero"),
};

/// Counts frames of the current run and decides which of them spawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpawnClock {
    frame: u64,
    interval: NonZeroU32,
    ramped: bool,
}

impl Default for SpawnClock {
    fn default() -> Self {
        Self {
            frame: 0,
            interval: DEFAULT_INTERVAL,
            ramped: false,
        }
    }
}

impl SpawnClock {
    pub fn new(interval: u32) -> Result<Self, ZeroInterval> {
        let interval = NonZeroU32::new(interval).ok_or(ZeroInterval)?;
        Ok(Self {
            frame: 0,
            interval,
            ramped: false,
        })
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn interval(&self) -> u32 {
        self.interval.get()
    }

    pub fn ramped(&self) -> bool {
        self.ramped
    }

    /// `frame % interval == 0`
    pub fn should_spawn(&self) -> bool {
        self.frame % u64::from(self.interval.get()) == 0
    }

    /// Switch to `fast` once `frame > after`. Returns `true` only on the first crossing.
    /// A zero `fast` interval leaves the clock untouched.
    pub fn ramp(&mut self, after: u64, fast: u32) -> bool {
        if self.ramped || self.frame <= after {
            return false;
        }
        let Some(fast) = NonZeroU32::new(fast) else {
            return false;
        };
        self.interval = fast;
        self.ramped = true;
        true
    }

    pub fn tick(&mut self) {
        self.frame += 1;
    }

    /// Back to frame 0 with `interval`; a zero value keeps the current interval.
    pub fn restart(&mut self, interval: u32) {
        self.frame = 0;
        self.ramped = false;
        if let Some(i) = NonZeroU32::new(interval) {
            self.interval = i;
        }
    }
}
