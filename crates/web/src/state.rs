// =============================================================================
// FitHub Web - Application State
// =============================================================================
// Table of Contents:
// 1. Imports
// 2. App State
// 3. Load State
// 4. Component Lifetime
// 5. Countdowns
// =============================================================================

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use fithub_common::{
    is_urgent, BlinkAction, Blinker, Countdown, LandingConfig, TickOutcome, TimerSnapshot,
};
use leptos::prelude::*;

// -----------------------------------------------------------------------------
// 2. App State
// -----------------------------------------------------------------------------

/// Global application state provided via Leptos context.
#[derive(Clone, Debug)]
pub struct AppState {
    pub config: LandingConfig,
}

/// Page settings compiled into the bundle.
const LANDING_TOML: &str = include_str!("../landing.toml");

impl AppState {
    /// Create a new app state from `landing.toml` and the build environment.
    pub fn new() -> Self {
        let config = LandingConfig::resolve(LANDING_TOML);
        log::debug!("Landing config: {:?}", config);
        Self { config }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

// -----------------------------------------------------------------------------
// 3. Load State
// -----------------------------------------------------------------------------

/// Progress of a one-shot remote load.
#[derive(Clone, Debug, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Ready(T),
    Failed(String),
}

// -----------------------------------------------------------------------------
// 4. Component Lifetime
// -----------------------------------------------------------------------------

/// Flag cleared when the owning component is torn down.
///
/// Async work spawned from a component checks it before writing signals.
#[derive(Clone, Debug)]
pub struct Lifetime(Arc<AtomicBool>);

impl Lifetime {
    /// Must be called inside a reactive owner (component body).
    pub fn new() -> Self {
        let alive = Arc::new(AtomicBool::new(true));
        let flag = alive.clone();
        on_cleanup(move || flag.store(false, Ordering::Relaxed));
        Self(alive)
    }

    pub fn is_alive(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

// -----------------------------------------------------------------------------
// 5. Countdowns
// -----------------------------------------------------------------------------

/// Read-only handle to the page-wide offer countdown.
#[derive(Clone, Copy)]
pub struct CountdownContext {
    snapshot: Signal<TimerSnapshot>,
}

impl CountdownContext {
    pub fn snapshot(&self) -> TimerSnapshot {
        self.snapshot.get()
    }

    pub fn remaining(&self) -> u32 {
        self.snapshot.get().remaining
    }

    pub fn is_expired(&self) -> bool {
        self.snapshot.get().expired
    }

    pub fn signal(&self) -> Signal<TimerSnapshot> {
        self.snapshot
    }
}

/// Start the offer countdown for the current page and share it via context.
pub fn provide_offer_countdown(seconds: u32) -> CountdownContext {
    let countdown = start_countdown(seconds, "offer");
    let context = CountdownContext {
        snapshot: Signal::derive(move || countdown.with(Countdown::snapshot)),
    };
    provide_context(context);
    context
}

/// Offer countdown provided by the enclosing page.
pub fn use_offer_countdown() -> CountdownContext {
    expect_context::<CountdownContext>()
}

/// Countdown ticking once per second until it expires or its owner unmounts.
pub fn start_countdown(seconds: u32, label: &'static str) -> ReadSignal<Countdown> {
    let (countdown, set_countdown) = signal(Countdown::new(seconds));
    if seconds == 0 {
        return countdown;
    }

    let tick = move || {
        let mut outcome = TickOutcome::Idle;
        set_countdown.update(|c| outcome = c.tick());
        if outcome == TickOutcome::Expired {
            log::info!("{} countdown expired", label);
        }
    };

    match set_interval_with_handle(tick, Duration::from_secs(1)) {
        Ok(handle) => {
            Effect::new(move |_| {
                if countdown.with(Countdown::is_expired) {
                    handle.clear();
                }
            });
            on_cleanup(move || handle.clear());
        }
        Err(e) => log::error!("Failed to start {} countdown: {:?}", label, e),
    }

    countdown
}

/// Blink phase for a clock. The interval only exists while `remaining` is urgent.
pub fn use_blink(remaining: Signal<u32>, threshold: u32, interval_ms: u32) -> Signal<bool> {
    let (blinker, set_blinker) = signal(Blinker::default());
    let urgent = Memo::new(move |_| is_urgent(remaining.get(), threshold));
    let interval = StoredValue::new(None::<IntervalHandle>);

    let stop = move || {
        if let Some(handle) = interval.try_update_value(Option::take).flatten() {
            handle.clear();
        }
    };

    Effect::new(move |_| {
        let running = interval.with_value(Option::is_some);
        match BlinkAction::for_state(running, urgent.get()) {
            BlinkAction::Start => {
                let step = move || {
                    set_blinker.update(|b| {
                        b.advance(true);
                    })
                };
                match set_interval_with_handle(step, Duration::from_millis(u64::from(interval_ms))) {
                    Ok(handle) => interval.set_value(Some(handle)),
                    Err(e) => log::error!("Failed to start blink interval: {:?}", e),
                }
            }
            BlinkAction::Stop => {
                stop();
                set_blinker.set(Blinker::default());
            }
            BlinkAction::Keep => {}
        }
    });
    on_cleanup(stop);

    Signal::derive(move || blinker.get().is_on())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifetime_cleared_on_cleanup() {
        let owner = Owner::new();
        let lifetime = owner.with(Lifetime::new);
        let task_copy = lifetime.clone();
        assert!(lifetime.is_alive());

        owner.cleanup();
        assert!(!lifetime.is_alive());
        assert!(!task_copy.is_alive());
    }

    #[test]
    fn test_lifetime_without_owner_stays_alive() {
        // No reactive owner means no cleanup hook to run.
        let lifetime = Lifetime::new();
        assert!(lifetime.is_alive());
    }
}
