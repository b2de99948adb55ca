//! Relative Time Component
//!
//! "3 hours ago" with the absolute time as tooltip. Refreshes every 30 seconds.

use gloo_timers::callback::Interval;
use leptos::prelude::*;

use crate::time_format::{format_absolute, time_ago};

const REFRESH_MS: u32 = 30_000;

fn now_ms() -> i64 {
    js_sys::Date::now() as i64
}

#[component]
pub fn RelativeTime(#[prop(into)] timestamp: Signal<i64>) -> impl IntoView {
    let (now, set_now) = signal(now_ms());

    let ticker = StoredValue::new_local(Some(Interval::new(REFRESH_MS, move || {
        set_now.try_set(now_ms());
    })));
    on_cleanup(move || {
        ticker.update_value(|interval| {
            if let Some(interval) = interval.take() {
                interval.cancel();
            }
        });
    });

    view! {
        <span class="relative-time" title=move || format_absolute(timestamp.get())>
            {move || time_ago(timestamp.get(), now.get())}
        </span>
    }
}
