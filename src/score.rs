//! Confidence scoring for detection placement.
//!
//! A placement scores higher the closer its center sits to the middle of
//! the frame and the closer its area lands to the preferred coverage.
//! The two factors are blended and mapped onto a fixed score band.

use crate::consts::{
    CONFIDENCE_MAX, CONFIDENCE_MIN, COVERAGE_WEIGHT, OPTIMAL_COVERAGE, POSITION_WEIGHT,
};
use crate::detection::NormalizedRect;

#[cfg(test)]
#[path = "score_test.rs"]
mod score_test;

/// Scores a placement on the closed `CONFIDENCE_MIN..=CONFIDENCE_MAX` band.
///
/// The position factor falls off linearly with the rectangle center's
/// distance from the frame center, bottoming out at half a frame away.
/// The coverage factor relates the normalized area to the backing pixel
/// area, so it only contributes on unit-sized backings; against a real
/// image the position term dominates.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn confidence(rect: NormalizedRect, backing_w: f64, backing_h: f64) -> u8 {
    let center = rect.center();
    let dist_from_center = (center.x - 0.5).hypot(center.y - 0.5);
    let position_factor = 1.0 - (dist_from_center / 0.5).min(1.0);

    let coverage = (rect.width * rect.height) / (backing_w * backing_h);
    let coverage_factor = 1.0 - (coverage - OPTIMAL_COVERAGE).abs() / OPTIMAL_COVERAGE;

    let weighted = position_factor * POSITION_WEIGHT + coverage_factor * COVERAGE_WEIGHT;
    let span = f64::from(CONFIDENCE_MAX - CONFIDENCE_MIN);
    let raw = (f64::from(CONFIDENCE_MIN) + weighted * span).round();
    raw.clamp(f64::from(CONFIDENCE_MIN), f64::from(CONFIDENCE_MAX)) as u8
}
