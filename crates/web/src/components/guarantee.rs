// =============================================================================
// FitHub Web - Return Guarantee
// =============================================================================

use leptos::prelude::*;

/// 30-day money-back guarantee block.
#[component]
pub fn ReturnGuarantee() -> impl IntoView {
    view! {
        <div class="guarantee">
            <div class="guarantee-tag">"гарантия возврата 30 дней"</div>
            <p class="guarantee-text">
                "Мы уверены, что наш план сработает для тебя и ты увидишь видимые результаты уже через 4 недели! "
                "Мы даже готовы полностью вернуть твои деньги в течение 30 дней с момента покупки, "
                "если ты не получишь видимых результатов."
            </p>
        </div>
    }
}
