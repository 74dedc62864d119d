//! Reusable control primitives
//!
//! `Sweep` is the back-and-forth oscillator behind the aim line and the
//! power meter; `follow` is the exponential approach the keeper uses to
//! close on its intercept point. Both are pure and independently testable.

use serde::{Deserialize, Serialize};

/// A bounded triangle-wave oscillator
///
/// The value walks between `min` and `max` by `step` per tick, reversing
/// direction the tick it reaches either bound. No phase memory beyond the
/// current value and direction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sweep {
    pub value: f32,
    pub min: f32,
    pub max: f32,
    pub step: f32,
    /// +1.0 or -1.0
    pub dir: f32,
}

impl Sweep {
    pub fn new(value: f32, min: f32, max: f32, step: f32) -> Self {
        debug_assert!(min < max);
        debug_assert!(step > 0.0);
        Self {
            value: value.clamp(min, max),
            min,
            max,
            step,
            dir: 1.0,
        }
    }

    /// Advance one tick. The value never leaves `[min, max]`.
    pub fn advance(&mut self) {
        self.value += self.step * self.dir;
        if self.value >= self.max {
            self.value = self.max;
            self.dir = -1.0;
        } else if self.value <= self.min {
            self.value = self.min;
            self.dir = 1.0;
        }
    }

    /// Normalized position within the sweep range (0 at min, 1 at max)
    pub fn fraction(&self) -> f32 {
        (self.value - self.min) / (self.max - self.min)
    }
}

/// Exponential approach: move `current` toward `target` by `rate` of the
/// remaining distance. `rate` is clamped to `[0, 1]` so the follower can
/// never overshoot the target in a single tick.
#[inline]
pub fn follow(current: f32, target: f32, rate: f32) -> f32 {
    current + (target - current) * rate.clamp(0.0, 1.0)
}
