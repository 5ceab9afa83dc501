#![allow(clippy::float_cmp)]

use super::*;

// --- Parsing ---

#[test]
fn parses_spaced_rgba() {
    let color = Rgba::parse("rgba(220, 38, 38, 0.5)").unwrap();
    assert_eq!(color.r, 220);
    assert_eq!(color.g, 38);
    assert_eq!(color.b, 38);
    assert_eq!(color.a, 0.5);
}

#[test]
fn parses_unspaced_rgba() {
    let color = Rgba::parse("rgba(14,165,233,0.8)").unwrap();
    assert_eq!(color, Rgba { r: 14, g: 165, b: 233, a: 0.8 });
}

#[test]
fn parses_with_surrounding_whitespace() {
    assert!(Rgba::parse("  rgba(34, 197, 94, 0.5)  ").is_some());
}

#[test]
fn rejects_other_color_syntaxes() {
    assert!(Rgba::parse("rgb(220, 38, 38)").is_none());
    assert!(Rgba::parse("#dc2626").is_none());
    assert!(Rgba::parse("red").is_none());
}

#[test]
fn rejects_unbalanced_parens() {
    assert!(Rgba::parse("rgba(220, 38, 38, 0.5").is_none());
}

#[test]
fn rejects_wrong_component_count() {
    assert!(Rgba::parse("rgba(220, 38, 38)").is_none());
    assert!(Rgba::parse("rgba(220, 38, 38, 0.5, 1)").is_none());
}

#[test]
fn rejects_junk_channels() {
    assert!(Rgba::parse("rgba(red, 38, 38, 0.5)").is_none());
    assert!(Rgba::parse("rgba(220, 38, 38, high)").is_none());
}

#[test]
fn rejects_out_of_range_channels() {
    assert!(Rgba::parse("rgba(300, 38, 38, 0.5)").is_none());
    assert!(Rgba::parse("rgba(-1, 38, 38, 0.5)").is_none());
}

// --- Formatting ---

#[test]
fn fallback_is_the_stock_green() {
    assert_eq!(Rgba::FALLBACK, Rgba { r: 34, g: 197, b: 94, a: 0.5 });
}

#[test]
fn with_alpha_swaps_only_the_alpha() {
    let color = Rgba::parse("rgba(220, 38, 38, 0.5)").unwrap();
    assert_eq!(color.with_alpha(0.72), "rgba(220, 38, 38, 0.72)");
}

#[test]
fn with_alpha_formats_whole_alphas_bare() {
    assert_eq!(Rgba::FALLBACK.with_alpha(1.0), "rgba(34, 197, 94, 1)");
}

#[test]
fn css_keeps_the_parsed_alpha() {
    let color = Rgba::parse("rgba(220, 38, 38, 0.5)").unwrap();
    assert_eq!(color.css(), "rgba(220, 38, 38, 0.5)");
}
