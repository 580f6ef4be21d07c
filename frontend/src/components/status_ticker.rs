use gloo_timers::callback::{Interval, Timeout};
use web_sys::js_sys::Math;
use yew::prelude::*;

use crate::config;

pub const STATUS_WORDS: [&str; 5] = ["ACTIVE", "SCANNING", "SECURE", "MONITORING", "NOMINAL"];

/// Maps a uniform sample in [0, 1) onto a status word.
pub fn pick_status(sample: f64) -> &'static str {
    let idx = (sample * STATUS_WORDS.len() as f64) as usize;
    STATUS_WORDS[idx.min(STATUS_WORDS.len() - 1)]
}

#[function_component(StatusTicker)]
pub fn status_ticker() -> Html {
    let word = use_state(|| STATUS_WORDS[0]);
    let faded = use_state(|| false);

    {
        let word = word.clone();
        let faded = faded.clone();
        use_effect_with_deps(
            move |_| {
                let interval = Interval::new(config::STATUS_TICK_MS, move || {
                    faded.set(true);
                    let word = word.clone();
                    let faded = faded.clone();
                    Timeout::new(config::STATUS_FADE_MS, move || {
                        word.set(pick_status(Math::random()));
                        faded.set(false);
                    })
                    .forget();
                });
                move || drop(interval)
            },
            (),
        );
    }

    let style = format!(
        "opacity: {}; transition: opacity {}ms ease;",
        if *faded { 0 } else { 1 },
        config::STATUS_FADE_MS
    );

    html! {
        <div class="system-status" role="status">
            <span class="status-dot"></span>
            {"SYSTEM STATUS: "}
            <span class="active" {style}>{ *word }</span>
        </div>
    }
}
