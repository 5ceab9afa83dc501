//! Parsing and reformatting of `rgba(...)` color strings.

use std::str::FromStr;

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

/// An `rgba(...)` color split into channels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    /// Stands in when a detection record carries an unparseable color.
    pub const FALLBACK: Self = Self { r: 34, g: 197, b: 94, a: 0.5 };

    /// Parses an `rgba(r, g, b, a)` string. Returns `None` for anything
    /// that does not match that exact shape.
    #[must_use]
    pub fn parse(css: &str) -> Option<Self> {
        let inner = css.trim().strip_prefix("rgba(")?.strip_suffix(')')?;
        let mut parts = inner.split(',');
        let r = parse_part(parts.next()?)?;
        let g = parse_part(parts.next()?)?;
        let b = parse_part(parts.next()?)?;
        let a = parse_part(parts.next()?)?;
        if parts.next().is_some() {
            return None;
        }
        Some(Self { r, g, b, a })
    }

    /// Renders the color with a caller-chosen alpha, keeping the channels.
    #[must_use]
    pub fn with_alpha(&self, alpha: f64) -> String {
        format!("rgba({}, {}, {}, {alpha})", self.r, self.g, self.b)
    }

    /// Renders the color back to CSS with its own alpha.
    #[must_use]
    pub fn css(&self) -> String {
        self.with_alpha(self.a)
    }
}

fn parse_part<T: FromStr>(part: &str) -> Option<T> {
    match part.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => None,
    }
}
