use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::dom;
use crate::easing::Easing;

/// One animated scroll transition. Owned by the animator for its duration
/// and gone once progress reaches 1.
pub struct ScrollRequest {
    /// Destination scroll offset in pixels.
    pub target: f64,
    /// Duration in milliseconds. Zero completes on the first frame.
    pub duration: f64,
    pub easing: Easing,
    pub on_complete: Option<Box<dyn FnOnce()>>,
}

/// Drives the window's scroll offset frame by frame through an easing curve.
///
/// At most one transition is in flight at a time: a request arriving while
/// one is active is dropped, not queued. The flag is checked-and-set at
/// entry, which also guards re-entrancy from nested event dispatch.
#[derive(Clone, Default)]
pub struct ScrollAnimator {
    in_flight: Rc<Cell<bool>>,
}

impl ScrollAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_animating(&self) -> bool {
        self.in_flight.get()
    }

    pub fn animate(&self, request: ScrollRequest) {
        if self.in_flight.replace(true) {
            debug!("scroll animation already in flight, dropping request");
            return;
        }
        let Some(window) = dom::window() else {
            self.in_flight.set(false);
            return;
        };

        let ScrollRequest {
            target,
            duration,
            easing,
            on_complete,
        } = request;

        let start = dom::scroll_offset();
        let distance = target - start;
        let start_time = dom::now();
        let in_flight = Rc::clone(&self.in_flight);
        let on_complete = Rc::new(RefCell::new(on_complete));

        // Self-rescheduling frame callback. The closure owns itself through
        // the outer Rc and drops out of the cell on the final frame.
        let frame: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
        let frame_handle = Rc::clone(&frame);
        let completion = Rc::clone(&on_complete);

        *frame_handle.borrow_mut() = Some(Closure::wrap(Box::new(move |_timestamp: f64| {
            let progress = if duration <= 0.0 {
                1.0
            } else {
                ((dom::now() - start_time) / duration).clamp(0.0, 1.0)
            };
            window.scroll_to_with_x_and_y(0.0, start + distance * easing.apply(progress));

            if progress < 1.0 {
                if let Some(callback) = frame.borrow().as_ref() {
                    let _ = window.request_animation_frame(callback.as_ref().unchecked_ref());
                }
            } else {
                in_flight.set(false);
                if let Some(callback) = completion.borrow_mut().take() {
                    callback();
                }
                frame.borrow_mut().take();
            }
        }) as Box<dyn FnMut(f64)>));

        let scheduled = frame_handle
            .borrow()
            .as_ref()
            .map(|callback| {
                dom::window()
                    .and_then(|w| w.request_animation_frame(callback.as_ref().unchecked_ref()).ok())
                    .is_some()
            })
            .unwrap_or(false);

        if !scheduled {
            // No frame scheduler: apply the final state directly.
            if let Some(window) = dom::window() {
                window.scroll_to_with_x_and_y(0.0, target);
            }
            self.in_flight.set(false);
            if let Some(callback) = on_complete.borrow_mut().take() {
                callback();
            }
            frame_handle.borrow_mut().take();
        }
    }
}
