//! Browser-side integration tests. Run with `wasm-pack test --headless --chrome`.

#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

use pagemotion::controller::{MotionController, ScrollOptions};
use pagemotion::reveal::RevealDispatcher;
use pagemotion::{dom, effects, MotionConfig};

wasm_bindgen_test_configure!(run_in_browser);

/// Rebuilds the page with a 2000px spacer, two sections and a nav.
fn build_page() {
    let document = dom::document().unwrap();
    let body = document.body().unwrap();
    body.set_inner_html(
        r##"
        <nav id="navbar" style="position: fixed; top: 0;">
            <a class="nav-link" href="#features">Features</a>
            <a class="nav-link" href="#contact">Contact</a>
        </nav>
        <section id="features" style="height: 2000px; margin: 0;"></section>
        <section id="contact" style="height: 1000px; margin: 0;"></section>
        "##,
    );
    let _ = body.style().set_property("margin", "0");
    dom::window().unwrap().scroll_to_with_x_and_y(0.0, 0.0);
}

#[wasm_bindgen_test]
async fn zero_duration_scroll_applies_navbar_offset_and_completes_once() {
    build_page();
    let controller = MotionController::new(MotionConfig::default());

    let completions = Rc::new(Cell::new(0u32));
    let counter = Rc::clone(&completions);
    controller.scroll_to(
        "#contact",
        ScrollOptions {
            duration: Some(0.0),
            on_complete: Some(Box::new(move || counter.set(counter.get() + 1))),
            ..ScrollOptions::default()
        },
    );

    // Completion lands on the first animation frame.
    TimeoutFuture::new(100).await;
    assert_eq!(completions.get(), 1);
    // #contact sits at 2000; the default navbar offset is 80.
    assert!((dom::scroll_offset() - 1920.0).abs() < 1.0);

    controller.destroy();
}

#[wasm_bindgen_test]
async fn second_request_while_in_flight_is_dropped() {
    build_page();
    let controller = MotionController::new(MotionConfig::default());

    let first_done = Rc::new(Cell::new(false));
    let second_done = Rc::new(Cell::new(false));

    let flag = Rc::clone(&first_done);
    controller.scroll_to(
        "#contact",
        ScrollOptions {
            duration: Some(200.0),
            on_complete: Some(Box::new(move || flag.set(true))),
            ..ScrollOptions::default()
        },
    );
    assert!(controller.is_scrolling());

    let flag = Rc::clone(&second_done);
    controller.scroll_to(
        "#features",
        ScrollOptions {
            duration: Some(0.0),
            on_complete: Some(Box::new(move || flag.set(true))),
            ..ScrollOptions::default()
        },
    );

    TimeoutFuture::new(400).await;
    assert!(first_done.get(), "first request runs to completion");
    assert!(!second_done.get(), "second request is dropped, not queued");
    // The final position belongs to the first request's target.
    assert!((dom::scroll_offset() - 1920.0).abs() < 1.0);

    controller.destroy();
}

#[wasm_bindgen_test]
async fn unknown_target_is_a_silent_noop() {
    build_page();
    let controller = MotionController::new(MotionConfig::default());

    controller.scroll_to("#does-not-exist", ScrollOptions::default());
    assert!(!controller.is_scrolling());
    TimeoutFuture::new(50).await;
    assert!(dom::scroll_offset().abs() < 1.0);

    controller.destroy();
}

#[wasm_bindgen_test]
async fn indicators_mark_exactly_one_section_active() {
    build_page();
    let controller = MotionController::new(MotionConfig::default());

    dom::window().unwrap().scroll_to_with_x_and_y(0.0, 2100.0);
    // Let the throttled scroll handler take a frame.
    TimeoutFuture::new(100).await;
    assert_eq!(controller.current_section().as_deref(), Some("contact"));

    let active_links: Vec<_> = dom::query_all(".nav-link.active")
        .into_iter()
        .filter_map(|el| el.get_attribute("href"))
        .collect();
    assert_eq!(active_links, vec!["#contact".to_string()]);
    assert_eq!(dom::query_all(".section-indicators .indicator.active").len(), 1);

    controller.destroy();
}

#[wasm_bindgen_test]
fn destroy_removes_injected_elements() {
    build_page();
    let controller = MotionController::new(MotionConfig::default());

    assert!(dom::by_id("scroll-progress").is_some());
    assert_eq!(dom::query_all(".section-indicators").len(), 1);

    controller.destroy();

    assert!(dom::by_id("scroll-progress").is_none());
    assert!(dom::query_all(".section-indicators").is_empty());
}

#[wasm_bindgen_test]
fn reduced_motion_reveals_synchronously_despite_delay() {
    build_page();
    let document = dom::document().unwrap();
    let element = document.create_element("div").unwrap();
    element.set_attribute("class", "fade-in").unwrap();
    element.set_attribute("data-delay", "500").unwrap();
    document.body().unwrap().append_child(&element).unwrap();

    let dispatcher = RevealDispatcher::new(true, 100);
    dispatcher.dispatch(&element, "visible");
    // No timer involved: the terminal state is there before we yield.
    assert!(element.class_list().contains("visible"));
}

#[wasm_bindgen_test]
async fn typewriter_restores_the_full_text() {
    build_page();
    let document = dom::document().unwrap();
    let title = document.create_element("h1").unwrap();
    title.set_id("hero-title");
    title.set_text_content(Some("Hello"));
    document.body().unwrap().append_child(&title).unwrap();

    effects::typewriter("#hero-title", 5, false);
    // The element is cleared synchronously and typed back out.
    assert_eq!(title.text_content().unwrap(), "");
    TimeoutFuture::new(300).await;
    assert_eq!(title.text_content().unwrap(), "Hello");
}

#[wasm_bindgen_test]
fn typewriter_leaves_text_alone_under_reduced_motion() {
    build_page();
    let document = dom::document().unwrap();
    let title = document.create_element("h1").unwrap();
    title.set_id("hero-title");
    title.set_text_content(Some("Hello"));
    document.body().unwrap().append_child(&title).unwrap();

    effects::typewriter("#hero-title", 5, true);
    assert_eq!(title.text_content().unwrap(), "Hello");
}

#[wasm_bindgen_test]
async fn ripple_spawns_and_cleans_up_a_span() {
    build_page();
    let document = dom::document().unwrap();
    let button = document.create_element("button").unwrap();
    button.set_attribute("class", "cta-button").unwrap();
    document.body().unwrap().append_child(&button).unwrap();

    let _ripple = effects::RippleEffect::attach(".cta-button", false);
    button.dyn_ref::<web_sys::HtmlElement>().unwrap().click();
    assert_eq!(button.query_selector_all("span").unwrap().length(), 1);

    TimeoutFuture::new(700).await;
    assert_eq!(button.query_selector_all("span").unwrap().length(), 0);
}

#[wasm_bindgen_test]
async fn configured_delay_is_honored_without_reduced_motion() {
    build_page();
    let document = dom::document().unwrap();
    let element = document.create_element("div").unwrap();
    element.set_attribute("class", "fade-in").unwrap();
    element.set_attribute("data-delay", "80").unwrap();
    document.body().unwrap().append_child(&element).unwrap();

    let dispatcher = RevealDispatcher::new(false, 100);
    dispatcher.dispatch(&element, "visible");
    assert!(!element.class_list().contains("visible"));

    TimeoutFuture::new(150).await;
    assert!(element.class_list().contains("visible"));
}
