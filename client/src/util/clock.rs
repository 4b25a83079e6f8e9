//! Wall-clock and entropy helpers.
//!
//! Browser builds read `js_sys::Date` and `Math.random`; SSR renders as if it
//! were noon with a fixed seed so server output is deterministic.

/// Local hour of day, `0..=23`.
pub fn local_hour() -> u32 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::new_0().get_hours()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        12
    }
}

/// Milliseconds since the Unix epoch.
pub fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Seed for the page's pseudo-random generators.
pub fn random_seed() -> u64 {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let seed = (js_sys::Math::random() * 9_007_199_254_740_992.0) as u64;
        seed ^ js_sys::Date::now().to_bits()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0x5eed
    }
}
