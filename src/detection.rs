//! Detection model: the normalized box geometry and the per-session record.
//!
//! `NormalizedRect` is the unit of placement everywhere in the crate: the
//! box's position and size expressed as fractions of the displayed surface.
//! `Detection` pairs that live placement with the immutable identity fields
//! supplied by the host (disease label, overlay color, severity).
//!
//! Data flows into this layer from the host's JSON record and out again
//! through [`crate::engine::Action`] payloads, so both types serialize.

#[cfg(test)]
#[path = "detection_test.rs"]
mod detection_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::consts::FALLBACK_COLOR;
use crate::surface::Point;

/// Severity assumed when the host record does not carry one.
const DEFAULT_SEVERITY: u8 = 5;

/// An axis-aligned box in normalized surface coordinates.
///
/// All four fields are fractions of the surface in [0, 1], with
/// `x + width <= 1` and `y + height <= 1` for any committed placement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedRect {
    /// Left edge as a fraction of surface width.
    pub x: f64,
    /// Top edge as a fraction of surface height.
    pub y: f64,
    /// Width as a fraction of surface width.
    pub width: f64,
    /// Height as a fraction of surface height.
    pub height: f64,
}

impl Default for NormalizedRect {
    /// Initial placement used when the host record carries no position.
    fn default() -> Self {
        Self { x: 0.2, y: 0.3, width: 0.3, height: 0.2 }
    }
}

impl NormalizedRect {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Center of the box.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Whether a normalized point falls within the box, edges inclusive.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.x + self.width && p.y >= self.y && p.y <= self.y + self.height
    }

    /// A copy moved so its top-left sits at `(x, y)`, pulled back as needed
    /// to keep the whole box inside the surface.
    #[must_use]
    pub fn placed_at(&self, x: f64, y: f64) -> Self {
        Self {
            x: x.min(1.0 - self.width).max(0.0),
            y: y.min(1.0 - self.height).max(0.0),
            ..*self
        }
    }
}

/// A detection record for one displayed image.
///
/// Identity fields are fixed for the session; `rect` is the live, draggable
/// placement. The `id` correlates update events emitted for this detection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Detection {
    /// Unique id for this session's detection.
    pub id: Uuid,
    /// Disease label shown on the overlay.
    pub disease: String,
    /// Overlay color as a CSS `rgba(...)` string.
    pub color: String,
    /// Severity from 1 (mild) to 10 (critical).
    pub severity: u8,
    /// Current placement of the detection box.
    pub rect: NormalizedRect,
}

impl Detection {
    /// Create a detection with a fresh id. Severity is clamped to 1-10.
    #[must_use]
    pub fn new(disease: String, color: String, severity: u8, rect: NormalizedRect) -> Self {
        Self {
            id: Uuid::new_v4(),
            disease,
            color,
            severity: severity.clamp(1, 10),
            rect,
        }
    }

    /// Build a detection from the host's JSON record.
    ///
    /// Returns `None` when the record is not an object or lacks a string
    /// `disease`. A missing or malformed `position` gets the default
    /// placement, a missing `color` gets the fallback green, and a missing
    /// `severity` defaults to the middle of the range.
    #[must_use]
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        let record = value.as_object()?;
        let disease = record
            .get("disease")
            .and_then(serde_json::Value::as_str)?
            .to_owned();
        let color = record
            .get("color")
            .and_then(serde_json::Value::as_str)
            .unwrap_or(FALLBACK_COLOR)
            .to_owned();
        let severity = record
            .get("severity")
            .and_then(serde_json::Value::as_u64)
            .map_or(DEFAULT_SEVERITY, clamp_severity);
        let rect = record
            .get("position")
            .and_then(rect_from_json)
            .unwrap_or_default();
        Some(Self::new(disease, color, severity, rect))
    }
}

fn clamp_severity(raw: u64) -> u8 {
    u8::try_from(raw.clamp(1, 10)).unwrap_or(DEFAULT_SEVERITY)
}

/// Read a placement from the record's `position` object. Degenerate sizes
/// are rejected and the position is pulled inside the surface, so the rect
/// invariant holds from the start.
fn rect_from_json(value: &serde_json::Value) -> Option<NormalizedRect> {
    let obj = value.as_object()?;
    let x = obj.get("x").and_then(serde_json::Value::as_f64)?;
    let y = obj.get("y").and_then(serde_json::Value::as_f64)?;
    let width = obj.get("width").and_then(serde_json::Value::as_f64)?;
    let height = obj.get("height").and_then(serde_json::Value::as_f64)?;
    if width <= 0.0 || height <= 0.0 || width > 1.0 || height > 1.0 {
        return None;
    }
    Some(NormalizedRect { x: 0.0, y: 0.0, width, height }.placed_at(x, y))
}
