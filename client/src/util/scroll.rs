//! Scroll helpers: reveal-on-view, progress, and smooth scrolling.
//!
//! `.scroll-reveal` elements gain the `visible` class the first time a tenth
//! of them enters the viewport. The CSS owns the actual animation.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

pub const REVEAL_CLASS: &str = "scroll-reveal";
pub const VISIBLE_CLASS: &str = "visible";
pub const REVEAL_THRESHOLD: f64 = 0.1;
/// Header height compensated when scrolling to an anchor.
pub const HEADER_OFFSET: f64 = 100.0;

/// Percent of the scrollable distance covered, `0..=100`.
#[must_use]
pub fn scroll_progress(scroll_top: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if scrollable > 0.0 {
        (scroll_top / scrollable * 100.0).clamp(0.0, 100.0)
    } else {
        0.0
    }
}

#[must_use]
pub fn has_scrolled_past(scroll_y: f64, offset_y: f64) -> bool {
    scroll_y > offset_y
}

pub fn window_scroll_y() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Current page progress, see [`scroll_progress`].
pub fn current_progress() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return 0.0;
        };
        let height = window
            .document()
            .and_then(|d| d.document_element())
            .map_or(0.0, |el| f64::from(el.scroll_height()));
        let viewport = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        scroll_progress(window_scroll_y(), height, viewport)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Smooth-scroll so the element with `id` sits just below the header.
pub fn scroll_to_id(id: &str) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(target) = window
            .document()
            .and_then(|d| d.get_element_by_id(id))
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        else {
            return;
        };
        let options = web_sys::ScrollToOptions::new();
        options.set_top(f64::from(target.offset_top()) - HEADER_OFFSET);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

/// Observes every `.scroll-reveal` element present when created. Dropping
/// it disconnects the observer.
pub struct RevealObserver {
    #[cfg(feature = "hydrate")]
    observer: web_sys::IntersectionObserver,
    #[cfg(feature = "hydrate")]
    _callback: wasm_bindgen::closure::Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>,
}

impl RevealObserver {
    /// `None` when the browser lacks `IntersectionObserver` or there is no
    /// document (SSR).
    pub fn attach() -> Option<Self> {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;
            use wasm_bindgen::closure::Closure;

            let document = web_sys::window()?.document()?;
            let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
                |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                    for entry in entries.iter() {
                        let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                        if entry.is_intersecting() {
                            let target = entry.target();
                            let _ = target.class_list().add_1(VISIBLE_CLASS);
                            observer.unobserve(&target);
                        }
                    }
                },
            );
            let init = web_sys::IntersectionObserverInit::new();
            init.set_threshold(&wasm_bindgen::JsValue::from_f64(REVEAL_THRESHOLD));
            let observer = match web_sys::IntersectionObserver::new_with_options(
                callback.as_ref().unchecked_ref(),
                &init,
            ) {
                Ok(observer) => observer,
                Err(e) => {
                    leptos::logging::warn!("reveal observer unavailable: {e:?}");
                    return None;
                }
            };
            if let Ok(nodes) = document.query_selector_all(&format!(".{REVEAL_CLASS}")) {
                for i in 0..nodes.length() {
                    if let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<web_sys::Element>().ok()) {
                        observer.observe(&el);
                    }
                }
            }
            Some(Self { observer, _callback: callback })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }
}

#[cfg(feature = "hydrate")]
impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Reveal the current page's `.scroll-reveal` elements once it has mounted.
/// The observer is disconnected when the calling component unmounts.
pub fn use_reveal_on_scroll() {
    use leptos::prelude::*;

    let observer = StoredValue::new_local(None::<RevealObserver>);
    Effect::new(move || observer.set_value(RevealObserver::attach()));
    on_cleanup(move || {
        let _ = observer.try_update_value(Option::take);
    });
}
