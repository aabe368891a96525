use gloo_timers::callback::Timeout;
use log::info;
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::dom;
use crate::observe::VisibilityWatcher;

/// How one class of marked elements gets revealed.
#[derive(Debug, Clone, Copy)]
pub struct RevealProfile {
    pub selector: &'static str,
    pub threshold: f64,
    pub root_margin: &'static str,
    /// Class applied on reveal; the page's CSS drives the actual transition.
    pub class: &'static str,
}

/// The three reveal flavors, with the thresholds the page's CSS expects.
pub const PROFILES: [RevealProfile; 3] = [
    RevealProfile {
        selector: ".fade-in",
        threshold: 0.1,
        root_margin: "0px 0px -20px 0px",
        class: "visible",
    },
    RevealProfile {
        selector: ".slide-in",
        threshold: 0.15,
        root_margin: "0px 0px -30px 0px",
        class: "slide-in-active",
    },
    RevealProfile {
        selector: ".scale-in",
        threshold: 0.2,
        root_margin: "0px 0px -40px 0px",
        class: "scale-in-active",
    },
];

/// Applies reveal classes when the visibility watchers report an element,
/// honoring per-element `data-delay` and the reduced-motion preference.
pub struct RevealDispatcher {
    reduced_motion: bool,
    stagger_ms: u32,
    watchers: Vec<VisibilityWatcher>,
}

impl RevealDispatcher {
    pub fn new(reduced_motion: bool, stagger_ms: u32) -> Self {
        Self {
            reduced_motion,
            stagger_ms,
            watchers: Vec::new(),
        }
    }

    /// Registers every element matching the reveal profiles. Elements are
    /// watched once and unregistered after their first reveal; when the
    /// platform has no intersection observation at all, everything is
    /// revealed on the spot.
    pub fn attach(&mut self) {
        let reduced = self.reduced_motion;
        let stagger = self.stagger_ms;

        for profile in PROFILES {
            let elements = dom::query_all(profile.selector);
            if elements.is_empty() {
                continue;
            }
            if reduced {
                for element in &elements {
                    reveal_now(element, profile.class, stagger, true);
                }
                continue;
            }

            let watcher = VisibilityWatcher::new(
                profile.threshold,
                profile.root_margin,
                move |element| dispatch(&element, profile.class, stagger, reduced),
            );
            match watcher {
                Some(watcher) => {
                    for element in &elements {
                        watcher.watch(element);
                    }
                    self.watchers.push(watcher);
                }
                None => {
                    info!("IntersectionObserver unavailable, revealing {} immediately", profile.selector);
                    for element in &elements {
                        reveal_now(element, profile.class, stagger, reduced);
                    }
                }
            }
        }
    }

    /// Reveals a single element through the same rules the watchers use.
    pub fn dispatch(&self, element: &Element, class: &'static str) {
        dispatch(element, class, self.stagger_ms, self.reduced_motion);
    }
}

fn dispatch(element: &Element, class: &'static str, stagger_ms: u32, reduced_motion: bool) {
    if reduced_motion {
        reveal_now(element, class, stagger_ms, true);
        return;
    }
    let delay = element
        .get_attribute("data-delay")
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(0);
    if delay == 0 {
        reveal_now(element, class, stagger_ms, false);
    } else {
        let element = element.clone();
        Timeout::new(delay, move || reveal_now(&element, class, stagger_ms, false)).forget();
    }
}

/// Applies the terminal class, then staggers any `.fade-in` children so
/// grouped content cascades in.
fn reveal_now(element: &Element, class: &'static str, stagger_ms: u32, reduced_motion: bool) {
    dom::add_class(element, class);

    let Ok(children) = element.query_selector_all(".fade-in") else {
        return;
    };
    for i in 0..children.length() {
        let Some(child) = children.get(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        if reduced_motion || stagger_ms == 0 {
            dom::add_class(&child, "visible");
        } else {
            Timeout::new(i * stagger_ms, move || dom::add_class(&child, "visible")).forget();
        }
    }
}
