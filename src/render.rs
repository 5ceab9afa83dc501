//! Rendering: draws the overlay frame to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives the detection, the placement to display, and the current glow
//! level, and produces pixels; it does not mutate any engine state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::frame`]) handles the result.

use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

use crate::color::Rgba;
use crate::consts::{GLOW_SHADOW_BASE, GLOW_SHADOW_PER_SEVERITY};
use crate::detection::{Detection, NormalizedRect};

/// Shadow dropped behind the text labels.
const LABEL_SHADOW: &str = "rgba(0,0,0,0.5)";

/// Outline stroked under the label fill for contrast on bright scans.
const LABEL_OUTLINE: &str = "rgba(0,0,0,0.8)";

/// Alpha of the box border stroke.
const BORDER_ALPHA: f64 = 0.8;

/// Draw one full frame: the scan image, the glowing detection box, its
/// corner handles, and the text labels.
///
/// `rect` is the placement to display, which trails the committed one
/// mid-animation; `confidence` must be the score for that same placement
/// so the label never disagrees with the box under it.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
#[allow(clippy::similar_names)]
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    image: &HtmlImageElement,
    detection: &Detection,
    rect: NormalizedRect,
    confidence: u8,
    glow: f64,
) -> Result<(), JsValue> {
    let Some(canvas) = ctx.canvas() else {
        return Ok(());
    };
    let canvas_w = f64::from(canvas.width());
    let canvas_h = f64::from(canvas.height());

    ctx.save();
    ctx.clear_rect(0.0, 0.0, canvas_w, canvas_h);
    ctx.draw_image_with_html_image_element_and_dw_and_dh(image, 0.0, 0.0, canvas_w, canvas_h)?;

    let x = canvas_w * rect.x;
    let y = canvas_h * rect.y;
    let w = canvas_w * rect.width;
    let h = canvas_h * rect.height;

    let color = Rgba::parse(&detection.color).unwrap_or(Rgba::FALLBACK);

    // Box body: glow-scaled shadow, gradient fill, solid border.
    let shadow_size = GLOW_SHADOW_BASE + f64::from(detection.severity) * GLOW_SHADOW_PER_SEVERITY;
    ctx.set_shadow_color(&color.css());
    ctx.set_shadow_blur(shadow_size * glow);

    let gradient = ctx.create_linear_gradient(x, y, x + w, y + h);
    gradient.add_color_stop(0.0, &color.with_alpha(0.3 + glow * 0.2))?;
    gradient.add_color_stop(1.0, &color.with_alpha(0.4 + glow * 0.3))?;
    ctx.set_fill_style_canvas_gradient(&gradient);
    ctx.fill_rect(x, y, w, h);

    ctx.set_stroke_style_str(&color.with_alpha(BORDER_ALPHA));
    ctx.set_line_width(2.0 + glow);
    ctx.stroke_rect(x, y, w, h);

    // Corner handles. The glow shadow is still active here, so the
    // handles pulse along with the box.
    let handle_radius = (canvas_w / 100.0).clamp(6.0, 8.0);
    ctx.set_fill_style_str("#ffffff");
    ctx.set_stroke_style_str("#000000");
    ctx.set_line_width(1.0);
    for (hx, hy) in [(x, y), (x + w, y), (x + w, y + h), (x, y + h)] {
        ctx.begin_path();
        ctx.arc(hx, hy, handle_radius, 0.0, TAU)?;
        ctx.fill();
        ctx.stroke();
    }

    // Labels: disease and confidence above the box, severity below it.
    ctx.set_shadow_color(LABEL_SHADOW);
    ctx.set_shadow_blur(4.0);
    ctx.set_fill_style_str("white");
    ctx.set_stroke_style_str(LABEL_OUTLINE);
    ctx.set_line_width(3.0);

    let label_font = (canvas_w / 40.0).clamp(14.0, 24.0);
    ctx.set_font(&format!("bold {label_font}px sans-serif"));
    let label = format!("{} ({confidence}%)", detection.disease);
    ctx.stroke_text(&label, x, y - label_font / 2.0)?;
    ctx.fill_text(&label, x, y - label_font / 2.0)?;

    let severity_font = (canvas_w / 50.0).clamp(12.0, 20.0);
    ctx.set_font(&format!("{severity_font}px sans-serif"));
    // The severity line hangs below the box by the label font size, not its own.
    let severity_label = format!("Severity: {}/10", detection.severity);
    ctx.fill_text(&severity_label, x, y + h + label_font)?;

    ctx.restore();
    Ok(())
}
