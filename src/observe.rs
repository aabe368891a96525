use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Watches a set of elements and fires a one-shot callback the first time
/// each one enters the viewport.
///
/// Every watcher wraps its own `IntersectionObserver` configured with a
/// threshold and root margin; watchers share no state. An element is
/// unobserved before its callback runs, so it can never fire twice.
pub struct VisibilityWatcher {
    observer: IntersectionObserver,
    // Kept alive for as long as the observer can call back into it.
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl VisibilityWatcher {
    /// Returns `None` when the platform has no `IntersectionObserver`; the
    /// caller is expected to fall back to revealing elements immediately.
    pub fn new<F>(threshold: f64, root_margin: &str, mut on_visible: F) -> Option<Self>
    where
        F: FnMut(Element) + 'static,
    {
        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if entry.is_intersecting() {
                        let target = entry.target();
                        observer.unobserve(&target);
                        on_visible(target);
                    }
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        options.set_root_margin(root_margin);

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .ok()?;

        Some(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn watch(&self, element: &Element) {
        self.observer.observe(element);
    }
}

impl Drop for VisibilityWatcher {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
