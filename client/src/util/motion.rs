//! Pointer-driven motion math: card tilt, blob drift, particle repulsion.
//!
//! All functions are pure. Components read pointer and element geometry from
//! DOM events and write the returned values into inline styles.

#[cfg(test)]
#[path = "motion_test.rs"]
mod motion_test;

pub const TILT_DEGREES: f64 = 10.0;
pub const TILT_RESET: &str = "perspective(1000px) rotateY(0deg) rotateX(0deg) translateZ(0px)";

pub const BLOB_RANGE: f64 = 120.0;

pub const REPULSION_RADIUS: f64 = 300.0;
pub const REPULSION_STRENGTH: f64 = 100.0;
pub const VIEWPORT_INSET: f64 = 50.0;
pub const MIN_OPACITY: f64 = 0.2;

/// Axis-aligned element bounds in client coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Pointer position relative to the element center, each axis in `[-0.5, 0.5]`
/// while the pointer is inside. A zero-sized rect yields `(0, 0)`.
#[must_use]
pub fn relative_offset(rect: Rect, client_x: f64, client_y: f64) -> (f64, f64) {
    if rect.width <= 0.0 || rect.height <= 0.0 {
        return (0.0, 0.0);
    }
    (
        (client_x - rect.left) / rect.width - 0.5,
        (client_y - rect.top) / rect.height - 0.5,
    )
}

/// CSS transform for a card tilted toward the pointer.
#[must_use]
pub fn tilt_transform(x: f64, y: f64) -> String {
    format!(
        "perspective(1000px) rotateY({}deg) rotateX({}deg) translateZ(10px)",
        x * TILT_DEGREES,
        -y * TILT_DEGREES
    )
}

/// Blob translation for a pointer at `normalized` (0..1) along one axis.
#[must_use]
pub fn blob_offset(normalized: f64) -> f64 {
    normalized * BLOB_RANGE - BLOB_RANGE / 2.0
}

/// Blob transform for a pointer at `(client_x, client_y)` in a viewport.
#[must_use]
pub fn blob_transform(client_x: f64, client_y: f64, viewport_w: f64, viewport_h: f64) -> String {
    let nx = if viewport_w > 0.0 { client_x / viewport_w } else { 0.5 };
    let ny = if viewport_h > 0.0 { client_y / viewport_h } else { 0.5 };
    format!("translate({}px, {}px)", blob_offset(nx), blob_offset(ny))
}

/// New particle center after the pointer moves to `pointer`, or `None` when
/// the pointer is outside the repulsion radius.
#[must_use]
pub fn repel(
    particle: (f64, f64),
    pointer: (f64, f64),
    viewport: (f64, f64),
) -> Option<(f64, f64)> {
    let dx = pointer.0 - particle.0;
    let dy = pointer.1 - particle.1;
    let distance = dx.hypot(dy);
    if distance >= REPULSION_RADIUS {
        return None;
    }
    let force = (REPULSION_RADIUS - distance) / REPULSION_RADIUS;
    let angle = dy.atan2(dx);
    let x = particle.0 - angle.cos() * force * REPULSION_STRENGTH;
    let y = particle.1 - angle.sin() * force * REPULSION_STRENGTH;
    Some((clamp_inset(x, viewport.0), clamp_inset(y, viewport.1)))
}

/// Particle opacity by distance to the pointer.
#[must_use]
pub fn particle_opacity(particle: (f64, f64), pointer: (f64, f64)) -> f64 {
    let distance = (particle.0 - pointer.0).hypot(particle.1 - pointer.1);
    (distance / (REPULSION_RADIUS * 1.5)).clamp(MIN_OPACITY, 1.0)
}

fn clamp_inset(value: f64, extent: f64) -> f64 {
    let max = (extent - VIEWPORT_INSET).max(VIEWPORT_INSET);
    value.clamp(VIEWPORT_INSET, max)
}

/// Inner width and height of the browser window; zero outside the browser.
pub fn window_viewport() -> (f64, f64) {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().map_or((0.0, 0.0), |w| {
            let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            (width, height)
        })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        (0.0, 0.0)
    }
}

/// Coarse-pointer devices get no tilt.
pub fn is_touch_device() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(pointer: coarse)").ok().flatten())
            .is_some_and(|mql| mql.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}
