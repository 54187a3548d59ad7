//! Scroll-driven presentation for the hero banner and navbar.

use leptos::prelude::*;

/// Scroll offset (px) at which the hero animation is complete.
pub const MAX_SCROLL: f64 = 800.0;

/// Scroll offset (px) past which the navbar switches to its compact style.
pub const SCROLLED_THRESHOLD: f64 = 200.0;

/// Normalized scroll fraction in `[0, 1]`.
pub fn progress(offset: f64, max: f64) -> f64 {
    if !offset.is_finite() || max <= 0.0 {
        return 0.0;
    }
    (offset / max).clamp(0.0, 1.0)
}

pub fn is_scrolled(offset: f64) -> bool {
    offset > SCROLLED_THRESHOLD
}

/// Presentation values for the hero at a given scroll offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroStyle {
    pub image_opacity: f64,
    pub image_scale: f64,
    pub text_opacity: f64,
    pub background_opacity: f64,
    pub indicator_opacity: f64,
}

impl HeroStyle {
    /// Style for a vertical scroll offset in pixels.
    ///
    /// Past [`MAX_SCROLL`] the style settles at image opacity 0, scale 0.7,
    /// text opacity 0.2, background opacity 0.5 and indicator opacity 0. Text
    /// and background never reach their 0 and 0.3 floors.
    pub fn at(offset: f64) -> Self {
        let p = progress(offset, MAX_SCROLL);
        Self {
            image_opacity: (1.0 - 1.2 * p).max(0.0),
            image_scale: (1.0 - 0.3 * p).max(0.7),
            text_opacity: (1.0 - 0.8 * p).max(0.0),
            background_opacity: (1.0 - 0.5 * p).max(0.3),
            indicator_opacity: (1.0 - 3.0 * p).max(0.0),
        }
    }

    pub fn image_css(&self) -> String {
        format!(
            "opacity: {:.3}; transform: scale({:.3});",
            self.image_opacity, self.image_scale
        )
    }

    pub fn text_css(&self) -> String {
        format!("opacity: {:.3};", self.text_opacity)
    }

    pub fn background_css(&self) -> String {
        format!("opacity: {:.3};", self.background_opacity)
    }

    pub fn indicator_css(&self) -> String {
        format!("opacity: {:.3};", self.indicator_opacity)
    }
}

impl Default for HeroStyle {
    fn default() -> Self {
        Self::at(0.0)
    }
}

/// Tracks the window's vertical scroll offset.
///
/// The listener is installed when the calling component mounts in the
/// browser and removed when its owner is cleaned up. During SSR the signal
/// stays at `0.0`.
pub fn use_scroll_offset() -> ReadSignal<f64> {
    let (offset, set_offset) = signal(0.0);

    Effect::new(move |_| {
        let sample = move || window().scroll_y().unwrap_or(0.0);
        set_offset.set(sample());

        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            set_offset.set(sample());
        });
        on_cleanup(move || handle.remove());
    });

    offset
}

/// Scrolls the element with the given DOM id into view.
pub fn scroll_to_section(id: &str) {
    match document().get_element_by_id(id) {
        Some(element) => element.scroll_into_view(),
        None => tracing::warn!(id, "no section to scroll to"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_resting_style() {
        let style = HeroStyle::at(0.0);
        assert!((style.image_opacity - 1.0).abs() < EPS);
        assert!((style.image_scale - 1.0).abs() < EPS);
        assert!((style.text_opacity - 1.0).abs() < EPS);
        assert!((style.background_opacity - 1.0).abs() < EPS);
        assert!((style.indicator_opacity - 1.0).abs() < EPS);
    }

    #[test]
    fn test_settles_past_max_scroll() {
        let settled = HeroStyle::at(MAX_SCROLL);
        assert!(settled.image_opacity.abs() < EPS);
        assert!((settled.image_scale - 0.7).abs() < EPS);
        assert!((settled.text_opacity - 0.2).abs() < EPS);
        assert!((settled.background_opacity - 0.5).abs() < EPS);
        assert!(settled.indicator_opacity.abs() < EPS);

        for offset in [MAX_SCROLL + 1.0, 5_000.0, f64::MAX] {
            assert_eq!(HeroStyle::at(offset), settled, "offset {offset}");
        }
    }

    #[test]
    fn test_floors_hold() {
        for step in 0..=100 {
            let style = HeroStyle::at(f64::from(step) * 20.0);
            assert!(style.image_opacity >= 0.0);
            assert!(style.image_scale >= 0.7);
            assert!(style.text_opacity >= 0.0);
            assert!(style.background_opacity >= 0.3);
            assert!(style.indicator_opacity >= 0.0);
        }
    }

    #[test]
    fn test_monotonic_non_increasing() {
        let mut previous = HeroStyle::at(0.0);
        for step in 1..=200 {
            let style = HeroStyle::at(f64::from(step) * MAX_SCROLL / 200.0);
            assert!(style.image_opacity <= previous.image_opacity);
            assert!(style.image_scale <= previous.image_scale);
            assert!(style.text_opacity <= previous.text_opacity);
            assert!(style.background_opacity <= previous.background_opacity);
            assert!(style.indicator_opacity <= previous.indicator_opacity);
            previous = style;
        }
    }

    #[test]
    fn test_image_fades_before_text() {
        let style = HeroStyle::at(MAX_SCROLL / 2.0);
        assert!((style.image_opacity - 0.4).abs() < EPS);
        assert!((style.text_opacity - 0.6).abs() < EPS);
        assert!((style.image_scale - 0.85).abs() < EPS);
        assert!((style.background_opacity - 0.75).abs() < EPS);
        assert!(style.indicator_opacity.abs() < EPS);
    }

    #[test]
    fn test_overscroll_and_garbage_offsets_rest() {
        assert_eq!(HeroStyle::at(-120.0), HeroStyle::default());
        assert_eq!(HeroStyle::at(f64::NAN), HeroStyle::default());
        assert_eq!(progress(100.0, 0.0), 0.0);
    }

    #[test]
    fn test_scrolled_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(SCROLLED_THRESHOLD));
        assert!(is_scrolled(SCROLLED_THRESHOLD + 0.5));
        assert!(!is_scrolled(-10.0));
    }

    #[test]
    fn test_css_output() {
        let style = HeroStyle::at(MAX_SCROLL);
        assert_eq!(style.image_css(), "opacity: 0.000; transform: scale(0.700);");
        assert_eq!(style.background_css(), "opacity: 0.500;");
        assert_eq!(style.text_css(), "opacity: 0.200;");
    }
}
