use crate::easing::Easing;

/// Tunables for the whole interaction layer. Injected into the controller
/// at construction so nothing relies on ambient globals.
#[derive(Debug, Clone, PartialEq)]
pub struct MotionConfig {
    /// Pixels subtracted from a target's offset to account for the fixed navbar.
    pub nav_offset: f64,
    /// Lookahead added to the scroll offset when deciding the current section.
    pub section_bias: f64,
    /// Default duration for animated scrolls, in milliseconds.
    pub scroll_duration: f64,
    pub easing: Easing,
    /// Vertical movement that arms a swipe gesture.
    pub swipe_arm_px: f64,
    /// Net vertical delta at touch end that fires a section change.
    pub swipe_fire_px: f64,
    /// Scroll offset past which the navbar gets the `scrolled` class.
    pub navbar_scrolled_px: f64,
    /// Scroll offset past which the back-to-top button becomes visible.
    pub back_to_top_px: f64,
    /// Per-child delay for staggered reveals, in milliseconds.
    pub stagger_ms: u32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            nav_offset: 80.0,
            section_bias: 100.0,
            scroll_duration: 800.0,
            easing: Easing::CubicInOut,
            swipe_arm_px: 50.0,
            swipe_fire_px: 100.0,
            navbar_scrolled_px: 50.0,
            back_to_top_px: 300.0,
            stagger_ms: 100,
        }
    }
}
