//! Frame clock
//!
//! Turns the host's frame timestamps into simulation steps. The first frame
//! only records a timestamp, so a session never starts with a huge step.

use crate::consts::MAX_FRAME_DT;

#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    /// Previous frame timestamp (seconds)
    last: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a frame at `now` seconds; returns the step to simulate, if any
    pub fn tick(&mut self, now: f64) -> Option<f32> {
        let last = self.last.replace(now)?;
        // A clock that runs backwards yields an empty step
        let elapsed = (now - last).max(0.0) as f32;
        Some(elapsed.min(MAX_FRAME_DT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_is_skipped() {
        let mut clock = FrameClock::default();
        assert_eq!(clock.tick(10.0), None);
        let dt = clock.tick(10.016).expect("second frame has a step");
        assert!((dt - 0.016).abs() < 1e-5);
    }

    #[test]
    fn test_long_frame_is_capped() {
        let mut clock = FrameClock::default();
        clock.tick(0.0);
        assert_eq!(clock.tick(2.5), Some(MAX_FRAME_DT));
    }

    #[test]
    fn test_backwards_clock_yields_empty_step() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick(1.0), None);
        let dt = clock.tick(1.02).expect("step");
        assert!((dt - 0.02).abs() < 1e-5);
        assert_eq!(clock.tick(1.0), Some(0.0));
    }
}
