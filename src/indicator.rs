use std::rc::Rc;

use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use crate::dom;
use crate::section::{progress_percent, Section};

/// The visual state driven by the section tracker: the progress bar, the
/// dot indicators, and the `active` class on nav links.
///
/// Elements this panel creates are removed again on `destroy`; a progress
/// bar already present in the markup is reused and left in place.
pub struct IndicatorPanel {
    progress: Option<Element>,
    progress_injected: bool,
    container: Option<Element>,
    _dot_click: Option<EventListener>,
}

impl IndicatorPanel {
    pub fn new(sections: &[Section], on_select: Rc<dyn Fn(&str)>) -> Self {
        let (progress, progress_injected) = match dom::by_id("scroll-progress") {
            Some(existing) => (Some(existing), false),
            None => (inject_progress_bar(), true),
        };

        let (container, dot_click) = if sections.is_empty() {
            (None, None)
        } else {
            match inject_dots(sections) {
                Some(container) => {
                    let listener = EventListener::new(&container, "click", move |event| {
                        let Some(indicator) = event
                            .target()
                            .and_then(|t| t.dyn_into::<Element>().ok())
                            .and_then(|el| el.closest(".indicator").ok().flatten())
                        else {
                            return;
                        };
                        if let Some(target) = indicator.get_attribute("data-target") {
                            on_select(&target);
                        }
                    });
                    (Some(container), Some(listener))
                }
                None => (None, None),
            }
        };

        Self {
            progress,
            progress_injected,
            container,
            _dot_click: dot_click,
        }
    }

    /// Applies tracker output: progress width plus exactly one active dot
    /// and nav link matching the current section.
    pub fn update(&self, offset: f64, scrollable_height: f64, current: Option<&str>) {
        if let Some(bar) = self.progress.as_ref().and_then(|el| el.dyn_ref::<HtmlElement>()) {
            let percent = progress_percent(offset, scrollable_height);
            let _ = bar.style().set_property("width", &format!("{percent}%"));
        }

        let Some(current) = current else {
            return;
        };
        let target = format!("#{current}");

        if let Some(container) = &self.container {
            if let Ok(dots) = container.query_selector_all(".indicator") {
                for i in 0..dots.length() {
                    if let Some(dot) = dots.get(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                        let active = dot.get_attribute("data-target").as_deref() == Some(target.as_str());
                        dom::set_class(&dot, "active", active);
                    }
                }
            }
        }

        for link in dom::query_all(".nav-link") {
            let active = link.get_attribute("href").as_deref() == Some(&target);
            dom::set_class(&link, "active", active);
        }
    }

    /// Removes everything this panel injected into the page.
    pub fn destroy(&mut self) {
        if let Some(container) = self.container.take() {
            container.remove();
        }
        self._dot_click = None;
        if self.progress_injected {
            if let Some(bar) = self.progress.take() {
                bar.remove();
            }
        }
    }
}

fn inject_progress_bar() -> Option<Element> {
    let document = dom::document()?;
    let bar = document.create_element("div").ok()?;
    bar.set_id("scroll-progress");
    let _ = bar.set_attribute("class", "scroll-progress");
    document.body()?.append_child(&bar).ok()?;
    Some(bar)
}

fn inject_dots(sections: &[Section]) -> Option<Element> {
    let document = dom::document()?;
    let container = document.create_element("div").ok()?;
    let _ = container.set_attribute("class", "section-indicators");
    let wrapper = document.create_element("div").ok()?;
    let _ = wrapper.set_attribute("class", "indicators-wrapper");

    for section in sections {
        let Ok(indicator) = document.create_element("div") else {
            continue;
        };
        let _ = indicator.set_attribute("class", "indicator");
        let _ = indicator.set_attribute("data-target", &format!("#{}", section.id));
        let _ = indicator.set_attribute("title", &section_title(&section.id));
        if let Ok(dot) = document.create_element("span") {
            let _ = dot.set_attribute("class", "indicator-dot");
            let _ = indicator.append_child(&dot);
        }
        let _ = wrapper.append_child(&indicator);
    }

    container.append_child(&wrapper).ok()?;
    document.body()?.append_child(&container).ok()?;
    Some(container)
}

/// Tooltip text for a dot: the section's first heading, or its id.
fn section_title(id: &str) -> String {
    dom::query(&format!("#{id} h1, #{id} h2, #{id} h3"))
        .and_then(|heading| heading.text_content())
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| id.to_string())
}
