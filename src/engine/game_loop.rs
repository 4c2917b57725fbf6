//! Frame timing and control
//!
//! Measures wall-clock time between rendered frames, scales it by the
//! current time scale and accumulates fixed physics steps.

use std::time::{Duration, Instant};

/// Target physics rate (60 steps per second)
pub const FIXED_TIMESTEP: f32 = 1.0 / 60.0;
const FIXED_TIMESTEP_DURATION: Duration = Duration::from_micros(16_667); // ~1/60 second

/// Maximum number of physics steps per frame to prevent spiral of death
const MAX_PHYSICS_STEPS: u32 = 5;

/// Time scale while running
const NORMAL_TIME_SCALE: f32 = 1.0;

/// Timing information for one rendered frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTime {
    /// Scaled seconds since the previous frame (0 while paused)
    pub dt: f32,
    /// Time scale in effect for this frame
    pub time_scale: f32,
    /// Fixed physics steps to run this frame
    pub physics_steps: u32,
}

impl FrameTime {
    /// Whether the simulation is paused for this frame
    pub fn is_paused(&self) -> bool {
        self.time_scale <= 0.0
    }
}

/// Frame clock state
pub struct FrameClock {
    /// Accumulated scaled time for fixed physics steps
    accumulator: Duration,

    /// Time of last frame
    last_frame_time: Instant,

    /// Multiplier applied to elapsed time (0 = paused)
    time_scale: f32,
}

impl FrameClock {
    /// Create a new frame clock running at normal speed
    pub fn new() -> Self {
        Self {
            accumulator: Duration::ZERO,
            last_frame_time: Instant::now(),
            time_scale: NORMAL_TIME_SCALE,
        }
    }

    /// Begin a new frame using wall-clock time since the previous one
    pub fn begin_frame(&mut self) -> FrameTime {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame_time);
        self.last_frame_time = now;
        self.advance(elapsed)
    }

    /// Begin a new frame with an explicit elapsed time
    pub fn advance(&mut self, elapsed: Duration) -> FrameTime {
        let scaled = elapsed.mul_f32(self.time_scale.max(0.0));
        self.accumulator += scaled;

        let mut physics_steps = 0;
        while self.accumulator >= FIXED_TIMESTEP_DURATION && physics_steps < MAX_PHYSICS_STEPS {
            self.accumulator -= FIXED_TIMESTEP_DURATION;
            physics_steps += 1;
        }

        // Drop the backlog we refused to simulate
        if physics_steps == MAX_PHYSICS_STEPS {
            self.accumulator = Duration::ZERO;
        }

        FrameTime {
            dt: scaled.as_secs_f32(),
            time_scale: self.time_scale,
            physics_steps,
        }
    }

    /// Check if the simulation is paused
    pub fn is_paused(&self) -> bool {
        self.time_scale <= 0.0
    }

    /// Pause the simulation
    pub fn pause(&mut self) {
        if !self.is_paused() {
            self.time_scale = 0.0;
            log::info!("Game paused");
        }
    }

    /// Resume the simulation at normal speed
    pub fn resume(&mut self) {
        if self.is_paused() {
            self.time_scale = NORMAL_TIME_SCALE;
            // Reset accumulator to prevent update burst
            self.accumulator = Duration::ZERO;
            log::info!("Game resumed");
        }
    }

    /// Toggle pause state
    pub fn toggle_pause(&mut self) {
        if self.is_paused() {
            self.resume();
        } else {
            self.pause();
        }
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_frame_clock_creation() {
        let clock = FrameClock::new();
        assert!(!clock.is_paused());
    }

    #[test]
    fn test_advance_reports_dt() {
        let mut clock = FrameClock::new();
        let frame = clock.advance(Duration::from_millis(100));

        assert_relative_eq!(frame.dt, 0.1, epsilon = 1e-6);
        assert_eq!(frame.time_scale, 1.0);
        assert!(!frame.is_paused());
    }

    #[test]
    fn test_paused_frame() {
        let mut clock = FrameClock::new();
        clock.pause();
        let frame = clock.advance(Duration::from_millis(100));

        assert_eq!(frame.dt, 0.0);
        assert_eq!(frame.physics_steps, 0);
        assert!(frame.is_paused());
    }

    #[test]
    fn test_toggle_pause() {
        let mut clock = FrameClock::new();

        clock.toggle_pause();
        assert!(clock.is_paused());

        clock.toggle_pause();
        assert!(!clock.is_paused());
        assert_eq!(clock.advance(Duration::from_millis(10)).time_scale, 1.0);
    }

    #[test]
    fn test_resume_drops_accumulated_time() {
        let mut clock = FrameClock::new();
        clock.advance(Duration::from_millis(15));
        clock.pause();
        clock.resume();

        assert_eq!(clock.advance(Duration::from_millis(5)).physics_steps, 0);
    }

    #[test]
    fn test_physics_steps_accumulate() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.advance(Duration::from_millis(10)).physics_steps, 0);
        assert_eq!(clock.advance(Duration::from_millis(10)).physics_steps, 1);
    }

    #[test]
    fn test_max_physics_steps_limit() {
        let mut clock = FrameClock::new();
        let frame = clock.advance(Duration::from_millis(300));
        assert_eq!(frame.physics_steps, MAX_PHYSICS_STEPS);

        // Backlog is dropped rather than carried into the next frame
        let next = clock.advance(Duration::from_millis(1));
        assert_eq!(next.physics_steps, 0);
    }

    #[test]
    fn test_fixed_timestep() {
        assert!((FIXED_TIMESTEP - 1.0 / 60.0).abs() < 0.0001);
    }
}
