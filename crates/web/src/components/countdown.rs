// =============================================================================
// FitHub Web - Countdown Components
// =============================================================================
// Table of Contents:
// 1. Countdown Clock
// 2. Nav Delay (trial offer banner)
// =============================================================================

use fithub_common::{format_clock, Countdown, TimerSnapshot, TimerVisual};
use leptos::prelude::*;

use crate::state::{start_countdown, use_blink, AppState};

// -----------------------------------------------------------------------------
// 1. Countdown Clock
// -----------------------------------------------------------------------------

/// `MM:SS` clock between two stars; blinks red/amber while urgent.
#[component]
pub fn CountdownClock(
    countdown: Signal<TimerSnapshot>,
    urgency_threshold: u32,
    blink_interval_ms: u32,
) -> impl IntoView {
    let remaining = Signal::derive(move || countdown.get().remaining);
    let blink = use_blink(remaining, urgency_threshold, blink_interval_ms);
    let visual = move || TimerVisual::for_state(remaining.get(), urgency_threshold, blink.get());

    view! {
        <div class="wrapper">
            <div class=move || format!("timer {}", visual().class())>
                <img src=move || visual().star_icon() alt="star" class="timer-star" />
                <span class="timer-digits">{move || format_clock(remaining.get())}</span>
                <img src=move || visual().star_icon() alt="star" class="timer-star" />
            </div>
        </div>
    }
}

// -----------------------------------------------------------------------------
// 2. Nav Delay
// -----------------------------------------------------------------------------

/// Header banner with its own short trial countdown.
#[component]
pub fn NavDelay() -> impl IntoView {
    let config = expect_context::<AppState>().config;
    let countdown = start_countdown(config.trial_seconds, "trial");
    let snapshot = Signal::derive(move || countdown.with(Countdown::snapshot));

    view! {
        <div class="nav-delay">
            <p class="text">"Успейте открыть пробную неделю"</p>
            <div class="nav-delay-clock">
                <CountdownClock
                    countdown=snapshot
                    urgency_threshold=config.urgency_threshold_secs
                    blink_interval_ms=config.blink_interval_ms
                />
            </div>
        </div>
    }
}
