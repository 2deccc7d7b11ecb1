use serde::{Deserialize, Serialize};

/// Frame clock settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    /// Seconds added to the elapsed time on every frame.
    pub delta: f32,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self { delta: 1.0 / 60.0 }
    }
}

/// Fixed-step clock driving the `time` uniform.
///
/// Time advances by the same delta every frame regardless of wall-clock
/// time, so a given frame number always renders the same uniforms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameClock {
    delta: f32,
    time: f32,
    frame: u64,
}

impl FrameClock {
    pub fn new(config: ClockConfig) -> Self {
        Self {
            delta: config.delta,
            time: 0.0,
            frame: 0,
        }
    }

    /// Advance one frame and return the new elapsed time.
    pub fn tick(&mut self) -> f32 {
        self.time += self.delta;
        self.frame += 1;
        self.time
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn delta(&self) -> f32 {
        self.delta
    }

    /// Frames ticked so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn reset(&mut self) {
        self.time = 0.0;
        self.frame = 0;
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(ClockConfig::default())
    }
}
