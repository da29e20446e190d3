//! Displayed-number transitions.
//!
//! When a figure changes, the display counts from the old value to the new one
//! in [`TWEEN_STEPS`] equal increments over [`TWEEN_DURATION_MS`]. The last
//! frame is always the exact target, so accumulated float error never shows.

use std::time::Duration;

use dfx_core::constants::{TWEEN_DURATION_MS, TWEEN_STEPS};

/// Iterator over the frames of one transition.
///
/// Yields `steps` values: `from + k * (to - from) / steps` for
/// `k = 1..steps`, then exactly `to`. Transitions to or from a non-finite
/// value jump straight to the target in a single frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    from: f64,
    to: f64,
    steps: u32,
    step: u32,
    duration: Duration,
}

impl Tween {
    /// Transition with the standard duration and frame count.
    pub fn new(from: f64, to: f64) -> Self {
        Self::with_timing(from, to, TWEEN_STEPS, Duration::from_millis(TWEEN_DURATION_MS))
    }

    /// Transition over `steps` frames (at least one) spread across `duration`.
    pub fn with_timing(from: f64, to: f64, steps: u32, duration: Duration) -> Self {
        let steps = if from.is_finite() && to.is_finite() {
            steps.max(1)
        } else {
            1
        };
        Self {
            from,
            to,
            steps,
            step: 0,
            duration,
        }
    }

    /// Delay between consecutive frames.
    pub fn frame_interval(&self) -> Duration {
        self.duration / self.steps
    }

    pub fn target(&self) -> f64 {
        self.to
    }

    pub fn is_finished(&self) -> bool {
        self.step >= self.steps
    }
}

impl Iterator for Tween {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.is_finished() {
            return None;
        }
        self.step += 1;
        if self.step == self.steps {
            return Some(self.to);
        }
        let increment = (self.to - self.from) / self.steps as f64;
        Some(self.from + increment * self.step as f64)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (self.steps - self.step) as usize;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Tween {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_timing() {
        let t = Tween::new(0.0, 1.0);
        assert_eq!(t.len(), 30);
        assert_eq!(t.frame_interval(), Duration::from_millis(500) / 30);
    }

    #[test]
    fn ends_exactly_on_target() {
        let frames: Vec<f64> = Tween::new(0.0, 1_000_000.0 / 3.0).collect();
        assert_eq!(frames.len(), 30);
        assert_eq!(*frames.last().unwrap(), 1_000_000.0 / 3.0);
    }

    #[test]
    fn frames_are_evenly_spaced() {
        let frames: Vec<f64> = Tween::with_timing(0.0, 100.0, 4, Duration::from_millis(40)).collect();
        assert_eq!(frames, vec![25.0, 50.0, 75.0, 100.0]);
    }

    #[test]
    fn counts_down_too() {
        let frames: Vec<f64> = Tween::with_timing(10.0, 0.0, 5, Duration::ZERO).collect();
        assert_eq!(frames, vec![8.0, 6.0, 4.0, 2.0, 0.0]);
    }

    #[test]
    fn stops_after_target() {
        let mut t = Tween::with_timing(1.0, 2.0, 2, Duration::ZERO);
        assert_eq!(t.next(), Some(1.5));
        assert_eq!(t.next(), Some(2.0));
        assert!(t.is_finished());
        assert_eq!(t.next(), None);
        assert_eq!(t.next(), None);
    }

    #[test]
    fn infinite_target_jumps() {
        let frames: Vec<f64> = Tween::new(43.3, f64::INFINITY).collect();
        assert_eq!(frames, vec![f64::INFINITY]);

        let frames: Vec<f64> = Tween::new(f64::INFINITY, 43.3).collect();
        assert_eq!(frames, vec![43.3]);
    }

    #[test]
    fn zero_steps_treated_as_one() {
        let frames: Vec<f64> = Tween::with_timing(0.0, 5.0, 0, Duration::ZERO).collect();
        assert_eq!(frames, vec![5.0]);
    }
}
