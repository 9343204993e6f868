use std::time::Duration;

use chrono::Local;
use dioxus::prelude::*;
use form::{clock_text, ClockFormat};

use crate::config::use_config;
use crate::timer::sleep;

/// Wall-clock time, refreshed every `clock.tick_millis`.
///
/// The refresh loop belongs to this component's scope and stops when it unmounts.
#[component]
pub fn Clock() -> Element {
    let config = use_config();
    let tick = Duration::from_millis(config.clock.tick_millis.max(1));
    let format = use_hook(move || {
        ClockFormat::parse(&config.clock.format).unwrap_or_else(|e| {
            tracing::warn!("{}; using the default clock format", e);
            ClockFormat::default()
        })
    });

    let mut time = use_signal({
        let format = format.clone();
        move || clock_text(&Local::now(), &format)
    });

    use_future(move || {
        let format = format.clone();
        async move {
            loop {
                sleep(tick).await;
                time.set(clock_text(&Local::now(), &format));
            }
        }
    });

    rsx! {
        span { class: "clock", "{time}" }
    }
}
