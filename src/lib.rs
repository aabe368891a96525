//! pagemotion — the interaction layer for a static promotional page.
//!
//! Attaches to existing markup and provides scroll-triggered reveal
//! animations, a scroll-progress indicator with section dots, smooth
//! anchor navigation with pluggable easing, keyboard and swipe section
//! navigation, and a mobile menu. Everything degrades to "do nothing" or
//! "apply the final state immediately" when the page or platform lacks a
//! piece, and the whole layer honors `prefers-reduced-motion`.

use log::{info, Level};
use wasm_bindgen::prelude::*;

pub mod animator;
pub mod config;
pub mod controller;
pub mod dom;
pub mod easing;
pub mod effects;
pub mod gesture;
pub mod indicator;
pub mod menu;
pub mod observe;
pub mod reveal;
pub mod section;

pub use config::MotionConfig;
pub use controller::{MotionController, ScrollOptions};
pub use easing::Easing;

/// Panic hook and console logging, once per session.
fn init_platform() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(Level::Info);
}

/// JS-facing handle over [`MotionController`], for pages that load the
/// crate straight from a `<script type="module">`.
#[wasm_bindgen]
pub struct PageMotion {
    controller: Option<MotionController>,
}

#[wasm_bindgen]
impl PageMotion {
    #[wasm_bindgen(constructor)]
    pub fn new() -> PageMotion {
        init_platform();
        info!("Starting interaction layer");
        PageMotion {
            controller: Some(MotionController::new(MotionConfig::default())),
        }
    }

    /// `scrollTo("#contact", 800, "cubic-in-out")`. Duration and easing are
    /// optional; unknown targets are a silent no-op.
    #[wasm_bindgen(js_name = scrollTo)]
    pub fn scroll_to(&self, target: &str, duration: Option<f64>, easing: Option<String>) {
        if let Some(controller) = &self.controller {
            controller.scroll_to(
                target,
                ScrollOptions {
                    duration,
                    easing: easing.as_deref().and_then(|name| name.parse().ok()),
                    ..ScrollOptions::default()
                },
            );
        }
    }

    #[wasm_bindgen(js_name = getCurrentSection)]
    pub fn current_section(&self) -> Option<String> {
        self.controller.as_ref()?.current_section()
    }

    /// Releases all watchers and listeners and removes injected elements.
    /// The handle is inert afterwards.
    pub fn destroy(&mut self) {
        if let Some(controller) = self.controller.take() {
            controller.destroy();
        }
    }
}

impl Default for PageMotion {
    fn default() -> Self {
        Self::new()
    }
}
