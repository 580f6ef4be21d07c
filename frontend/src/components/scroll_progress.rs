use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, Window};
use yew::prelude::*;

use crate::components::listener::EventListener;

/// Share of the hero height after which the scroll hint disappears.
const INDICATOR_HIDE_RATIO: f64 = 0.1;

pub fn scroll_percent(scroll_top: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_top / scrollable * 100.0).clamp(0.0, 100.0)
}

pub fn format_percent(pct: f64) -> String {
    format!("{:.2}%", pct)
}

pub fn indicator_hidden(scroll_top: f64, hero_height: f64) -> bool {
    scroll_top > hero_height * INDICATOR_HIDE_RATIO
}

fn html_element_by_selector(window: &Window, selector: &str) -> Option<HtmlElement> {
    window
        .document()?
        .query_selector(selector)
        .ok()
        .flatten()?
        .dyn_into::<HtmlElement>()
        .ok()
}

fn sync_scroll_state(window: &Window) {
    let Some(root) = window
        .document()
        .and_then(|d| d.document_element())
        .and_then(|e| e.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };

    let scroll_top = window.scroll_y().unwrap_or(0.0);
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    let pct = scroll_percent(scroll_top, root.scroll_height() as f64, viewport_height);
    let _ = root.style().set_property("--scroll-pct", &format_percent(pct));

    if let (Some(indicator), Some(hero)) = (
        html_element_by_selector(window, ".scroll-indicator"),
        html_element_by_selector(window, "#hero"),
    ) {
        let style = indicator.style();
        if indicator_hidden(scroll_top, hero.offset_height() as f64) {
            let _ = style.set_property("opacity", "0");
            let _ = style.set_property("pointer-events", "none");
        } else {
            let _ = style.remove_property("opacity");
            let _ = style.remove_property("pointer-events");
        }
    }
}

#[function_component(ScrollProgress)]
pub fn scroll_progress() -> Html {
    use_effect_with_deps(
        move |_| {
            let listener = web_sys::window().and_then(|window| {
                sync_scroll_state(&window);
                let target = window.clone();
                EventListener::passive(&target, "scroll", move |_| sync_scroll_state(&window))
            });
            move || drop(listener)
        },
        (),
    );

    html! {
        <div id="scroll-progress" class="scroll-progress" aria-hidden="true">
            <style>
                {r#"
                    .scroll-progress {
                        position: fixed;
                        top: 0;
                        left: 0;
                        height: 2px;
                        width: var(--scroll-pct, 0%);
                        background: linear-gradient(90deg, #00ffaa, #00b3ff);
                        z-index: 1000;
                        pointer-events: none;
                    }
                "#}
            </style>
        </div>
    }
}
