//! Scroll-position derived values: header state, anchor targets, hero parallax.

/// Scroll offset past which the header switches to its compact style
pub const HEADER_SCROLL_THRESHOLD: f64 = 50.0;

/// Hero translation per pixel scrolled
pub const PARALLAX_RATE: f64 = -0.5;

/// Whether the header carries the `scrolled` class at `scroll_y`.
pub fn header_scrolled(scroll_y: f64) -> bool {
    scroll_y > HEADER_SCROLL_THRESHOLD
}

/// Scroll offset that puts an anchor target just below the fixed header.
pub fn anchor_scroll_top(target_offset_top: f64, header_height: f64) -> f64 {
    target_offset_top - header_height
}

/// Parse the fragment of an in-page link (`"#contact"` -> `"contact"`).
///
/// Returns `None` for links that are not in-page or have an empty fragment.
pub fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Vertical hero offset, in pixels, at `scroll_y`.
pub fn hero_offset(scroll_y: f64) -> f64 {
    scroll_y * PARALLAX_RATE
}

/// CSS `transform` for the hero at `scroll_y`.
pub fn hero_transform(scroll_y: f64) -> String {
    format!("translateY({}px)", hero_offset(scroll_y))
}
