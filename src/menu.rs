use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, Node};

use crate::dom;

/// Hamburger-driven mobile navigation menu.
///
/// Expects `#hamburger` and `#nav-menu` in the markup; when either is
/// missing the whole module is a silent no-op. Body scrolling is locked
/// while the menu is open. The menu closes on outside clicks, on resize
/// back to desktop widths, on Escape, and when an anchor navigation fires.
pub struct MobileMenu {
    hamburger: Option<Element>,
    menu: Option<Element>,
    _listeners: Vec<EventListener>,
}

impl MobileMenu {
    pub fn attach() -> Self {
        let hamburger = dom::by_id("hamburger");
        let menu = dom::by_id("nav-menu");
        let mut listeners = Vec::new();

        if let (Some(hamburger), Some(menu)) = (hamburger.clone(), menu.clone()) {
            {
                let hamburger = hamburger.clone();
                let menu = menu.clone();
                let toggle = EventListener::new(&hamburger.clone(), "click", move |_| {
                    let _ = hamburger.class_list().toggle("active");
                    let _ = menu.class_list().toggle("active");
                    lock_body_scroll(menu.class_list().contains("active"));
                });
                listeners.push(toggle);
            }

            if let Some(document) = dom::document() {
                let hamburger = hamburger.clone();
                let menu = menu.clone();
                let outside = EventListener::new(&document, "click", move |event| {
                    let target = event
                        .target()
                        .and_then(|t| t.dyn_into::<Node>().ok());
                    let inside = target.map_or(false, |node| {
                        hamburger.contains(Some(&node)) || menu.contains(Some(&node))
                    });
                    if !inside {
                        close_menu(&hamburger, &menu);
                    }
                });
                listeners.push(outside);
            }

            if let Some(window) = dom::window() {
                let hamburger = hamburger.clone();
                let menu = menu.clone();
                let resize = EventListener::new(&window.clone(), "resize", move |_| {
                    let width = window.inner_width().ok().and_then(|w| w.as_f64()).unwrap_or(0.0);
                    if width > 1023.0 {
                        close_menu(&hamburger, &menu);
                    }
                });
                listeners.push(resize);
            }
        }

        Self {
            hamburger,
            menu,
            _listeners: listeners,
        }
    }

    pub fn close(&self) {
        if let (Some(hamburger), Some(menu)) = (&self.hamburger, &self.menu) {
            close_menu(hamburger, menu);
        }
    }
}

impl Drop for MobileMenu {
    fn drop(&mut self) {
        self.close();
    }
}

fn close_menu(hamburger: &Element, menu: &Element) {
    dom::set_class(hamburger, "active", false);
    dom::set_class(menu, "active", false);
    lock_body_scroll(false);
}

fn lock_body_scroll(locked: bool) {
    let Some(body) = dom::document().and_then(|d| d.body()) else {
        return;
    };
    let body: HtmlElement = body;
    if locked {
        let _ = body.style().set_property("overflow", "hidden");
    } else {
        let _ = body.style().remove_property("overflow");
    }
}
