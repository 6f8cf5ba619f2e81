// =============================================================================
// FitHub Web - Landing Page
// =============================================================================
// Trial banner, tariff picker and guarantee, all under one offer countdown.
// =============================================================================

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::{NavDelay, ReturnGuarantee, Tariffs};
use crate::state::{provide_offer_countdown, AppState};
use crate::utils;

/// Pricing landing page.
#[component]
pub fn LandingPage() -> impl IntoView {
    let config = expect_context::<AppState>().config;

    // Lives exactly as long as this page; prices read it through context.
    provide_offer_countdown(config.offer_seconds);

    Effect::new(move |_| utils::scroll_to_top());

    view! {
        <Title text="Выбери свой тариф" />
        <header class="nav">
            <NavDelay />
        </header>
        <main class="wrapper">
            <h1 class="h1">
                "Выбери подходящий для себя "
                <span class="warning">"тариф"</span>
            </h1>

            <Tariffs />
            <ReturnGuarantee />
        </main>
    }
}
