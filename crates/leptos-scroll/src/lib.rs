//! Leptos Scroll Utilities
//!
//! Scroll-driven UI state for Leptos: a sticky header that hides while
//! scrolling down and a parallax offset for banners.
//! Uses one global `scroll` listener on `window`.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Scroll position (px) above which downward scrolling hides the header
pub const HEADER_HIDE_THRESHOLD_PX: f64 = 100.0;

/// Scroll range mapped onto the parallax offset range
pub const PARALLAX_SCROLL_RANGE: (f64, f64) = (0.0, 300.0);
pub const PARALLAX_OFFSET_RANGE: (f64, f64) = (0.0, 100.0);

/// Scroll state signals
#[derive(Clone, Copy)]
pub struct ScrollSignals {
    /// Last observed `window.scrollY`
    pub scroll_y_read: ReadSignal<f64>,
    pub scroll_y_write: WriteSignal<f64>,
    /// Whether the sticky header should be shown
    pub header_visible_read: ReadSignal<bool>,
    pub header_visible_write: WriteSignal<bool>,
}

pub fn create_scroll_signals() -> ScrollSignals {
    let (scroll_y_read, scroll_y_write) = signal(0.0f64);
    let (header_visible_read, header_visible_write) = signal(true);
    ScrollSignals {
        scroll_y_read,
        scroll_y_write,
        header_visible_read,
        header_visible_write,
    }
}

/// Header is hidden only while moving down past the threshold
pub fn header_visible(previous_y: f64, current_y: f64) -> bool {
    !(current_y > previous_y && current_y > HEADER_HIDE_THRESHOLD_PX)
}

/// Linear map of `value` from `from` onto `to`, clamped to `to`
pub fn map_range(value: f64, from: (f64, f64), to: (f64, f64)) -> f64 {
    let span = from.1 - from.0;
    if span == 0.0 {
        return to.0;
    }
    let t = ((value - from.0) / span).clamp(0.0, 1.0);
    to.0 + t * (to.1 - to.0)
}

/// Banner offset (px) for a scroll position
pub fn parallax_offset(scroll_y: f64) -> f64 {
    map_range(scroll_y, PARALLAX_SCROLL_RANGE, PARALLAX_OFFSET_RANGE)
}

/// Feed a new scroll position into the signals
pub fn apply_scroll(scroll: &ScrollSignals, current_y: f64) {
    let previous_y = scroll.scroll_y_read.get_untracked();
    scroll.header_visible_write.set(header_visible(previous_y, current_y));
    scroll.scroll_y_write.set(current_y);
}

/// Bind global scroll handler on `window`
pub fn bind_window_scroll(scroll: ScrollSignals) {
    use wasm_bindgen::closure::Closure;

    let on_scroll = Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
        if let Some(win) = web_sys::window() {
            if let Ok(y) = win.scroll_y() {
                apply_scroll(&scroll, y);
            }
        }
    });

    if let Some(win) = web_sys::window() {
        let _ = win.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
    }
    on_scroll.forget();
}
