//! Shared numeric constants for the overlay crate.

// ── Interaction ─────────────────────────────────────────────────

/// Scale applied to raw pointer deltas when sampling drag velocity.
pub const VELOCITY_SCALE: f64 = 0.15;

/// Per-tick decay applied to the velocity while the box coasts.
pub const MOMENTUM_FACTOR: f64 = 0.92;

/// Velocity component magnitude (screen pixels per tick) below which
/// momentum is considered spent.
pub const STOP_EPSILON: f64 = 0.01;

// ── Animation ───────────────────────────────────────────────────

/// Duration of the eased position transition, in milliseconds.
pub const ANIMATION_DURATION_MS: f64 = 300.0;

/// Angular rate of the glow pulse, in radians per millisecond.
pub const GLOW_RATE: f64 = 0.002;

// ── Scoring ─────────────────────────────────────────────────────

/// Coverage value at which the coverage factor peaks.
pub const OPTIMAL_COVERAGE: f64 = 0.15;

/// Lowest confidence the scorer reports.
pub const CONFIDENCE_MIN: u8 = 61;

/// Highest confidence the scorer reports.
pub const CONFIDENCE_MAX: u8 = 80;

/// Weight of the centering factor in the combined score.
pub const POSITION_WEIGHT: f64 = 0.6;

/// Weight of the coverage factor in the combined score.
pub const COVERAGE_WEIGHT: f64 = 0.4;

// ── Rendering ───────────────────────────────────────────────────

/// Overlay color used when a record's color is missing or unparseable.
pub const FALLBACK_COLOR: &str = "rgba(34, 197, 94, 0.5)";

/// Base glow shadow radius in backing pixels, before severity scaling.
pub const GLOW_SHADOW_BASE: f64 = 10.0;

/// Additional glow shadow radius per severity point.
pub const GLOW_SHADOW_PER_SEVERITY: f64 = 2.0;
