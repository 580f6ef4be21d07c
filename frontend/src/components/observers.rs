use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::Callback;

const REVEAL_SELECTOR: &str = ".content-section, .hero-content";
const REVEAL_THRESHOLD: f64 = 0.08;
const REVEAL_ROOT_MARGIN: &str = "0px 0px -40px 0px";
const ACTIVE_SECTION_THRESHOLD: f64 = 0.4;

type EntriesCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Owns an observer and its JS callback; disconnects on drop.
pub struct ObserverHandle {
    observer: IntersectionObserver,
    _callback: EntriesCallback,
}

impl Drop for ObserverHandle {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn intersecting_targets(entries: &Array) -> Vec<Element> {
    entries
        .iter()
        .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
        .filter(|entry| entry.is_intersecting())
        .map(|entry| entry.target())
        .collect()
}

fn build_observer(
    options: &IntersectionObserverInit,
    on_entries: impl FnMut(Array, IntersectionObserver) + 'static,
) -> Option<(IntersectionObserver, EntriesCallback)> {
    let callback: EntriesCallback = Closure::wrap(Box::new(on_entries) as Box<dyn FnMut(Array, IntersectionObserver)>);
    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), options) {
        Ok(observer) => Some((observer, callback)),
        Err(e) => {
            log::error!("IntersectionObserver unavailable: {:?}", e);
            None
        }
    }
}

/// Fades sections in the first time they scroll into view. Each element is
/// unobserved once revealed.
pub fn observe_reveals(document: &Document) -> Option<ObserverHandle> {
    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);

    let (observer, callback) = build_observer(&options, |entries, observer| {
        for target in intersecting_targets(&entries) {
            let _ = target.class_list().add_1("visible");
            observer.unobserve(&target);
        }
    })?;

    let nodes = document.query_selector_all(REVEAL_SELECTOR).ok()?;
    for i in 0..nodes.length() {
        if let Some(element) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
            let _ = element.class_list().add_1("section-animate");
            observer.observe(&element);
        }
    }

    Some(ObserverHandle {
        observer,
        _callback: callback,
    })
}

/// Reports the id of whichever tracked section crosses 40% visibility.
pub fn track_sections(
    document: &Document,
    section_ids: &[&str],
    on_active: Callback<String>,
) -> Option<ObserverHandle> {
    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(ACTIVE_SECTION_THRESHOLD));

    let (observer, callback) = build_observer(&options, move |entries, _| {
        for target in intersecting_targets(&entries) {
            on_active.emit(target.id());
        }
    })?;

    for id in section_ids {
        if let Some(section) = document.get_element_by_id(id) {
            observer.observe(&section);
        }
    }

    Some(ObserverHandle {
        observer,
        _callback: callback,
    })
}
