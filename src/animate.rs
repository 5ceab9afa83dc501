//! Easing and the timed transition between placements.

use crate::consts::ANIMATION_DURATION_MS;
use crate::detection::NormalizedRect;

#[cfg(test)]
#[path = "animate_test.rs"]
mod animate_test;

/// Elastic ease-out: overshoots the target early, then rings back down.
///
/// Flat at both endpoints. The first and largest overshoot peaks near
/// `x = 0.2` at 1.125.
#[must_use]
pub fn ease_out_elastic(x: f64) -> f64 {
    const C4: f64 = std::f64::consts::TAU / 3.0;
    if x <= 0.0 {
        0.0
    } else if x >= 1.0 {
        1.0
    } else {
        (2.0_f64).powf(-10.0 * x) * ((x * 10.0 - 0.75) * C4).sin() + 1.0
    }
}

/// Linear interpolation from `start` to `end` at parameter `t`.
///
/// `t` is not clamped; eased parameters above 1 extrapolate past `end`,
/// which is what produces the elastic overshoot.
#[must_use]
pub fn lerp(start: f64, end: f64, t: f64) -> f64 {
    start * (1.0 - t) + end * t
}

/// A timed, eased move of the box between two placements.
///
/// Only the origin animates; the size is taken from the destination.
#[derive(Debug, Clone, Copy)]
pub struct Transition {
    start_ms: f64,
    from: NormalizedRect,
    to: NormalizedRect,
}

impl Transition {
    #[must_use]
    pub fn new(start_ms: f64, from: NormalizedRect, to: NormalizedRect) -> Self {
        Self { start_ms, from, to }
    }

    /// Linear progress through the transition window, capped at 1.
    #[must_use]
    pub fn progress(&self, now_ms: f64) -> f64 {
        ((now_ms - self.start_ms) / ANIMATION_DURATION_MS).min(1.0)
    }

    /// Whether the transition window has elapsed.
    #[must_use]
    pub fn finished(&self, now_ms: f64) -> bool {
        self.progress(now_ms) >= 1.0
    }

    /// The placement to draw at `now_ms`.
    #[must_use]
    pub fn sample(&self, now_ms: f64) -> NormalizedRect {
        let eased = ease_out_elastic(self.progress(now_ms));
        NormalizedRect {
            x: lerp(self.from.x, self.to.x, eased),
            y: lerp(self.from.y, self.to.y, eased),
            ..self.to
        }
    }
}
