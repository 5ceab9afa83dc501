//! Pointer gesture state for the detection box.

use crate::consts::{MOMENTUM_FACTOR, STOP_EPSILON};
use crate::surface::Point;

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

/// Residual pointer speed, in scaled screen pixels per frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Velocity {
    pub dx: f64,
    pub dy: f64,
}

impl Velocity {
    /// True while either component is still above the settle threshold.
    #[must_use]
    pub fn is_moving(&self) -> bool {
        self.dx.abs() > STOP_EPSILON || self.dy.abs() > STOP_EPSILON
    }

    /// One frame of friction applied to both components.
    #[must_use]
    pub fn decayed(&self) -> Self {
        Self { dx: self.dx * MOMENTUM_FACTOR, dy: self.dy * MOMENTUM_FACTOR }
    }
}

/// Where the pointer gesture currently stands.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum DragState {
    /// No gesture in flight.
    #[default]
    Idle,
    /// Pointer held down on the box; the box tracks it directly.
    Dragging {
        /// Offset from the box origin to the grab point, in normalized
        /// space. Drag moves subtract it before placing the box.
        grab_offset: Point,
        /// Last pointer position seen, in screen coordinates.
        last_screen: Point,
        /// Speed sampled from recent pointer moves.
        velocity: Velocity,
    },
    /// Pointer released with speed left over; the box coasts on its own.
    Momentum {
        /// Remaining coast speed, decayed every frame until spent.
        velocity: Velocity,
    },
}
