//! Decorative, one-shot effects. These are optional plugins layered on top
//! of the core interaction layer; nothing else depends on them.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use gloo_timers::callback::{Interval, Timeout};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, MouseEvent};

use crate::dom;

/// Click ripple on every element matching `selector`. Skipped entirely
/// under reduced motion.
pub struct RippleEffect {
    _listeners: Vec<EventListener>,
}

impl RippleEffect {
    pub fn attach(selector: &str, reduced_motion: bool) -> Self {
        let mut listeners = Vec::new();
        if !reduced_motion {
            for element in dom::query_all(selector) {
                let target = element.clone();
                let listener = EventListener::new(&element, "click", move |event| {
                    if let Some(event) = event.dyn_ref::<MouseEvent>() {
                        spawn_ripple(&target, event);
                    }
                });
                listeners.push(listener);
            }
        }
        Self {
            _listeners: listeners,
        }
    }
}

fn spawn_ripple(element: &Element, event: &MouseEvent) {
    let Some(document) = dom::document() else {
        return;
    };
    let Ok(ripple) = document.create_element("span") else {
        return;
    };

    let rect = element.get_bounding_client_rect();
    let size = rect.width().max(rect.height());
    let x = event.client_x() as f64 - rect.left() - size / 2.0;
    let y = event.client_y() as f64 - rect.top() - size / 2.0;

    let _ = ripple.set_attribute(
        "style",
        &format!(
            "position: absolute; border-radius: 50%; transform: scale(0); \
             animation: ripple 0.6s linear; background-color: rgba(255, 255, 255, 0.7); \
             width: {size}px; height: {size}px; left: {x}px; top: {y}px; pointer-events: none;"
        ),
    );

    if element.append_child(&ripple).is_ok() {
        Timeout::new(600, move || ripple.remove()).forget();
    }
}

/// Types the element's text back out one character at a time, with a
/// blinking-cursor border while running. Under reduced motion the text is
/// simply left in place.
pub fn typewriter(selector: &str, speed_ms: u32, reduced_motion: bool) {
    let Some(element) = dom::query(selector).and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };
    if reduced_motion {
        return;
    }
    let text: Vec<char> = element.text_content().unwrap_or_default().chars().collect();
    if text.is_empty() {
        return;
    }

    element.set_text_content(Some(""));
    let _ = element
        .style()
        .set_property("border-right", "2px solid currentColor");

    let position = Rc::new(RefCell::new(0usize));
    let ticker: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
    let ticker_handle = Rc::clone(&ticker);

    let interval = Interval::new(speed_ms.max(1), move || {
        let mut position = position.borrow_mut();
        if *position < text.len() {
            let shown: String = text[..=*position].iter().collect();
            element.set_text_content(Some(&shown));
            *position += 1;
            return;
        }
        // Done typing: stop the ticker and drop the cursor shortly after.
        ticker_handle.borrow_mut().take();
        let element = element.clone();
        Timeout::new(1_000, move || {
            let _ = element.style().remove_property("border-right");
        })
        .forget();
    });
    *ticker.borrow_mut() = Some(interval);
}
