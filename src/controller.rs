use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions};
use log::{debug, info};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, KeyboardEvent, TouchEvent};

use crate::animator::{ScrollAnimator, ScrollRequest};
use crate::config::MotionConfig;
use crate::dom;
use crate::easing::Easing;
use crate::gesture::{key_intent, NavIntent, SwipeTracker};
use crate::indicator::IndicatorPanel;
use crate::menu::MobileMenu;
use crate::reveal::RevealDispatcher;
use crate::section::{Section, SectionTracker};

/// Per-call overrides for [`MotionController::scroll_to`]. Unset fields
/// fall back to the controller's [`MotionConfig`].
#[derive(Default)]
pub struct ScrollOptions {
    pub duration: Option<f64>,
    pub easing: Option<Easing>,
    /// Pixels to stop short of the target, e.g. for a fixed navbar.
    pub offset: Option<f64>,
    pub on_complete: Option<Box<dyn FnOnce()>>,
}

struct Shared {
    config: MotionConfig,
    reduced_motion: bool,
    animator: ScrollAnimator,
    tracker: RefCell<SectionTracker>,
    panel: RefCell<Option<IndicatorPanel>>,
    menu: MobileMenu,
    swipe: RefCell<SwipeTracker>,
}

impl Shared {
    /// Recomputes the current section and pushes it to the indicators,
    /// navbar state and back-to-top button.
    fn refresh(&self) {
        let offset = dom::scroll_offset();
        let current = self
            .tracker
            .borrow_mut()
            .update(offset)
            .map(str::to_string);

        if let Some(panel) = self.panel.borrow().as_ref() {
            panel.update(offset, dom::scrollable_height(), current.as_deref());
        }
        if let Some(navbar) = dom::by_id("navbar") {
            dom::set_class(&navbar, "scrolled", offset > self.config.navbar_scrolled_px);
        }
        if let Some(button) = dom::by_id("back-to-top") {
            dom::set_class(&button, "visible", offset > self.config.back_to_top_px);
        }
    }

    fn scroll_to(self: &Rc<Self>, selector: &str, options: ScrollOptions) {
        if selector.is_empty() || selector == "#" {
            return;
        }
        let Some(target) = dom::query(selector).and_then(|el| el.dyn_into::<HtmlElement>().ok())
        else {
            debug!("scroll target {selector} not found");
            return;
        };
        let offset = options.offset.unwrap_or(self.config.nav_offset);
        let position = target.offset_top() as f64 - offset;
        self.scroll_to_position(position, options);
    }

    fn scroll_to_position(self: &Rc<Self>, position: f64, options: ScrollOptions) {
        let ScrollOptions {
            duration,
            easing,
            on_complete,
            ..
        } = options;

        // Reduced motion degrades every transition to an instant jump.
        let duration = if self.reduced_motion {
            0.0
        } else {
            duration.unwrap_or(self.config.scroll_duration)
        };

        let shared = Rc::clone(self);
        let mut user_complete = on_complete;
        self.animator.animate(ScrollRequest {
            target: position,
            duration,
            easing: easing.unwrap_or(self.config.easing),
            on_complete: Some(Box::new(move || {
                if let Some(callback) = user_complete.take() {
                    callback();
                }
                shared.refresh();
            })),
        });
    }

    fn navigate(self: &Rc<Self>, intent: NavIntent) {
        let target_id = {
            let tracker = self.tracker.borrow();
            let index = match intent {
                NavIntent::NextSection => tracker.next_index(),
                NavIntent::PreviousSection => tracker.previous_index(),
                NavIntent::FirstSection => {
                    if tracker.is_empty() {
                        None
                    } else {
                        Some(0)
                    }
                }
                NavIntent::DocumentEnd => None,
            };
            index.and_then(|i| tracker.section(i)).map(|s| s.id.clone())
        };

        match intent {
            NavIntent::DocumentEnd => {
                self.scroll_to_position(dom::scrollable_height(), ScrollOptions::default());
            }
            NavIntent::FirstSection if target_id.is_none() => {
                self.scroll_to_position(0.0, ScrollOptions::default());
            }
            _ => {
                if let Some(id) = target_id {
                    self.scroll_to(&format!("#{id}"), ScrollOptions::default());
                }
            }
        }
    }

    fn remeasure(&self) {
        self.tracker.borrow_mut().set_sections(measure_sections());
    }
}

/// The single active instance of the interaction layer for a page.
///
/// Construction measures the sections, injects the indicators, registers
/// the reveal watchers and subscribes to every input event; `destroy`
/// releases all of it again. No ambient globals are involved, so the
/// hosting entry point decides how many instances exist (one, in practice).
pub struct MotionController {
    shared: Rc<Shared>,
    _reveals: RevealDispatcher,
    _listeners: Vec<EventListener>,
}

impl MotionController {
    pub fn new(config: MotionConfig) -> Self {
        let reduced_motion = dom::prefers_reduced_motion();
        info!(
            "pagemotion starting ({} sections, reduced motion: {reduced_motion})",
            dom::query_all("section[id]").len()
        );

        let mut tracker = SectionTracker::new(config.section_bias);
        tracker.set_sections(measure_sections());

        let shared = Rc::new(Shared {
            reduced_motion,
            animator: ScrollAnimator::new(),
            tracker: RefCell::new(tracker),
            panel: RefCell::new(None),
            menu: MobileMenu::attach(),
            swipe: RefCell::new(SwipeTracker::new(config.swipe_arm_px, config.swipe_fire_px)),
            config,
        });

        let panel = {
            // Weak: the panel lives inside `shared`, so a strong handle here
            // would keep the whole controller alive past drop.
            let weak = Rc::downgrade(&shared);
            let on_select: Rc<dyn Fn(&str)> = Rc::new(move |target| {
                if let Some(shared) = weak.upgrade() {
                    shared.scroll_to(target, ScrollOptions::default());
                }
            });
            IndicatorPanel::new(shared.tracker.borrow().sections(), on_select)
        };
        *shared.panel.borrow_mut() = Some(panel);

        let mut reveals = RevealDispatcher::new(reduced_motion, shared.config.stagger_ms);
        reveals.attach();

        let listeners = Self::subscribe(&shared);
        shared.refresh();

        Self {
            shared,
            _reveals: reveals,
            _listeners: listeners,
        }
    }

    fn subscribe(shared: &Rc<Shared>) -> Vec<EventListener> {
        let mut listeners = Vec::new();
        let Some(window) = dom::window() else {
            return listeners;
        };
        let Some(document) = window.document() else {
            return listeners;
        };

        // Scroll and resize work is deferred to the next animation frame so
        // a burst of events costs one update.
        {
            let ticking = Rc::new(Cell::new(false));
            let frame = {
                let shared = Rc::clone(shared);
                let ticking = Rc::clone(&ticking);
                Closure::wrap(Box::new(move |_: f64| {
                    shared.refresh();
                    ticking.set(false);
                }) as Box<dyn FnMut(f64)>)
            };
            let window_for_frame = window.clone();
            listeners.push(EventListener::new(&window, "scroll", move |_| {
                if !ticking.replace(true) {
                    let _ = window_for_frame
                        .request_animation_frame(frame.as_ref().unchecked_ref());
                }
            }));
        }

        {
            let shared = Rc::clone(shared);
            listeners.push(EventListener::new(&window, "resize", move |_| {
                shared.remeasure();
                shared.refresh();
            }));
        }

        // Anchor links, delegated from the document.
        {
            let shared = Rc::clone(shared);
            listeners.push(EventListener::new_with_options(
                &document,
                "click",
                EventListenerOptions::enable_prevent_default(),
                move |event| {
                    let Some(link) = event
                        .target()
                        .and_then(|t| t.dyn_into::<Element>().ok())
                        .and_then(|el| el.closest("a[href^='#']").ok().flatten())
                    else {
                        return;
                    };
                    let Some(href) = link.get_attribute("href") else {
                        return;
                    };
                    if href == "#" || href.is_empty() || link.class_list().contains("no-smooth-scroll")
                    {
                        return;
                    }
                    event.prevent_default();
                    shared.menu.close();
                    shared.scroll_to(&href, ScrollOptions::default());
                },
            ));
        }

        {
            let shared = Rc::clone(shared);
            listeners.push(EventListener::new_with_options(
                &document,
                "keydown",
                EventListenerOptions::enable_prevent_default(),
                move |event| {
                    let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                        return;
                    };
                    let key = event.key();
                    if key == "Escape" {
                        shared.menu.close();
                        return;
                    }
                    let in_text_field = dom::is_text_field(event.target().as_ref());
                    if let Some(intent) = key_intent(&key, event.ctrl_key(), in_text_field) {
                        event.prevent_default();
                        shared.navigate(intent);
                    }
                },
            ));
        }

        // Touch swipes. All three listeners stay passive; gestures never
        // block native scrolling.
        {
            let shared = Rc::clone(shared);
            listeners.push(EventListener::new(&document, "touchstart", move |event| {
                if let Some(y) = touch_y(event) {
                    shared.swipe.borrow_mut().touch_start(y);
                }
            }));
        }
        {
            let shared = Rc::clone(shared);
            listeners.push(EventListener::new(&document, "touchmove", move |event| {
                if let Some(y) = touch_y(event) {
                    shared.swipe.borrow_mut().touch_move(y);
                }
            }));
        }
        {
            let shared = Rc::clone(shared);
            listeners.push(EventListener::new(&document, "touchend", move |event| {
                let Some(y) = touch_y(event) else {
                    return;
                };
                let intent = shared.swipe.borrow_mut().touch_end(y);
                if let Some(intent) = intent {
                    shared.navigate(intent);
                }
            }));
        }

        if let Some(button) = dom::by_id("back-to-top") {
            let shared = Rc::clone(shared);
            listeners.push(EventListener::new(&button, "click", move |_| {
                shared.scroll_to_position(0.0, ScrollOptions::default());
            }));
        }

        listeners
    }

    /// Animates the window to the element matching `selector`. Unknown
    /// selectors and requests during an in-flight animation are no-ops.
    pub fn scroll_to(&self, selector: &str, options: ScrollOptions) {
        self.shared.scroll_to(selector, options);
    }

    /// Id of the section currently under the (biased) scroll offset.
    pub fn current_section(&self) -> Option<String> {
        let offset = dom::scroll_offset();
        self.shared
            .tracker
            .borrow_mut()
            .update(offset)
            .map(str::to_string)
    }

    pub fn is_scrolling(&self) -> bool {
        self.shared.animator.is_animating()
    }

    /// Unsubscribes every listener, disconnects the visibility watchers and
    /// removes the injected indicator elements.
    pub fn destroy(self) {
        info!("pagemotion destroyed");
        // The Drop impl does the actual teardown.
    }
}

impl Drop for MotionController {
    fn drop(&mut self) {
        if let Some(mut panel) = self.shared.panel.borrow_mut().take() {
            panel.destroy();
        }
        // Listeners, watchers and the menu unhook as their handles drop.
    }
}

fn measure_sections() -> Vec<Section> {
    dom::query_all("section[id]")
        .into_iter()
        .filter_map(|element| {
            let html: &HtmlElement = element.dyn_ref()?;
            Some(Section {
                id: element.id(),
                top: html.offset_top() as f64,
                height: html.offset_height() as f64,
            })
        })
        .collect()
}

fn touch_y(event: &web_sys::Event) -> Option<f64> {
    let event = event.dyn_ref::<TouchEvent>()?;
    let touch = event.changed_touches().get(0)?;
    Some(touch.screen_y() as f64)
}
