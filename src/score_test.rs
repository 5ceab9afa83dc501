use super::*;

fn rect(x: f64, y: f64, width: f64, height: f64) -> NormalizedRect {
    NormalizedRect::new(x, y, width, height)
}

fn score_unit(rect: NormalizedRect) -> u8 {
    confidence(rect, 1.0, 1.0)
}

// --- Worked placements ---

#[test]
fn off_center_small_box_scores_midband() {
    assert_eq!(score_unit(rect(0.3, 0.3, 0.2, 0.2)), 71);
}

#[test]
fn centered_preferred_coverage_maxes_out() {
    assert_eq!(score_unit(rect(0.25, 0.35, 0.5, 0.3)), 80);
}

#[test]
fn far_corner_speck_floors() {
    assert_eq!(score_unit(rect(0.0, 0.0, 0.01, 0.01)), 61);
}

#[test]
fn oversized_centered_box_floors() {
    assert_eq!(score_unit(rect(0.025, 0.025, 0.95, 0.95)), 61);
}

// --- Factor behavior ---

#[test]
fn centering_never_lowers_the_score() {
    let mut previous = 0;
    for step in 0..=10 {
        let offset = f64::from(step) * 0.035;
        let score = score_unit(rect(offset, offset, 0.3, 0.3));
        assert!(score >= previous, "score dropped while centering: {score} < {previous}");
        previous = score;
    }
}

#[test]
fn coverage_peak_sits_at_preferred_area() {
    let at_peak = score_unit(rect(0.25, 0.35, 0.5, 0.3));
    let under = score_unit(rect(0.4, 0.4, 0.2, 0.2));
    let over = score_unit(rect(0.0, 0.25, 1.0, 0.5));
    assert_eq!(at_peak, 80);
    assert_eq!(under, 74);
    assert_eq!(over, 62);
}

#[test]
fn pixel_backings_zero_the_coverage_term() {
    // Same placement as the unit-backing case above, but against an
    // 800x600 image the coverage ratio collapses to ~0 and only the
    // position factor is left standing.
    assert_eq!(confidence(rect(0.3, 0.3, 0.2, 0.2), 800.0, 600.0), 69);
}

// --- Band guarantees ---

#[test]
fn scoring_is_deterministic() {
    let placement = rect(0.12, 0.47, 0.33, 0.21);
    assert_eq!(confidence(placement, 640.0, 480.0), confidence(placement, 640.0, 480.0));
}

#[test]
fn score_stays_on_band_across_grid() {
    let sizes = [0.01, 0.1, 0.3, 0.6, 0.95];
    let origins = [0.0, 0.25, 0.5, 0.7];
    let backings = [(1.0, 1.0), (800.0, 600.0), (4096.0, 4096.0)];
    for &w in &sizes {
        for &h in &sizes {
            for &x in &origins {
                for &y in &origins {
                    for &(bw, bh) in &backings {
                        let score = confidence(rect(x, y, w, h), bw, bh);
                        assert!(
                            (61..=80).contains(&score),
                            "score {score} off band for {w}x{h} at ({x}, {y}) on {bw}x{bh}"
                        );
                    }
                }
            }
        }
    }
}
