use super::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

const CARD: Rect = Rect { left: 100.0, top: 200.0, width: 200.0, height: 100.0 };

// =============================================================
// Tilt
// =============================================================

#[test]
fn relative_offset_is_zero_at_center() {
    let (x, y) = relative_offset(CARD, 200.0, 250.0);
    assert!(approx(x, 0.0) && approx(y, 0.0));
}

#[test]
fn relative_offset_spans_half_unit_at_edges() {
    let (x, y) = relative_offset(CARD, 100.0, 300.0);
    assert!(approx(x, -0.5) && approx(y, 0.5));
}

#[test]
fn relative_offset_of_empty_rect_is_zero() {
    let empty = Rect { left: 0.0, top: 0.0, width: 0.0, height: 0.0 };
    assert_eq!(relative_offset(empty, 5.0, 5.0), (0.0, 0.0));
}

#[test]
fn tilt_transform_format() {
    assert_eq!(
        tilt_transform(0.5, -0.25),
        "perspective(1000px) rotateY(5deg) rotateX(2.5deg) translateZ(10px)"
    );
}

// =============================================================
// Blob
// =============================================================

#[test]
fn blob_offset_range() {
    assert!(approx(blob_offset(0.0), -60.0));
    assert!(approx(blob_offset(0.5), 0.0));
    assert!(approx(blob_offset(1.0), 60.0));
}

#[test]
fn blob_transform_uses_viewport_fraction() {
    assert_eq!(blob_transform(1000.0, 0.0, 1000.0, 800.0), "translate(60px, -60px)");
    assert_eq!(blob_transform(10.0, 10.0, 0.0, 0.0), "translate(0px, 0px)");
}

// =============================================================
// Repulsion
// =============================================================

#[test]
fn far_pointer_does_not_repel() {
    assert_eq!(repel((500.0, 500.0), (900.0, 500.0), (1000.0, 1000.0)), None);
    assert_eq!(repel((500.0, 500.0), (800.0, 500.0), (1000.0, 1000.0)), None);
}

#[test]
fn near_pointer_pushes_away() {
    let (x, y) = repel((500.0, 500.0), (650.0, 500.0), (1000.0, 1000.0)).expect("inside radius");
    assert!(approx(x, 450.0));
    assert!(approx(y, 500.0));
}

#[test]
fn repulsion_is_clamped_to_inset_viewport() {
    let (x, y) = repel((60.0, 60.0), (70.0, 70.0), (1000.0, 1000.0)).expect("inside radius");
    assert!(approx(x, VIEWPORT_INSET));
    assert!(approx(y, VIEWPORT_INSET));
}

#[test]
fn opacity_clamps_between_floor_and_one() {
    assert!(approx(particle_opacity((0.0, 0.0), (0.0, 0.0)), MIN_OPACITY));
    assert!(approx(particle_opacity((0.0, 0.0), (225.0, 0.0)), 0.5));
    assert!(approx(particle_opacity((0.0, 0.0), (900.0, 0.0)), 1.0));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn no_touch_outside_browser() {
    assert!(!is_touch_device());
}
