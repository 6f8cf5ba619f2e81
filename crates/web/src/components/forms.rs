// =============================================================================
// FitHub Web - Form Components
// =============================================================================
// Table of Contents:
// 1. Terms Checkbox
// =============================================================================

use leptos::prelude::*;

// -----------------------------------------------------------------------------
// 1. Terms Checkbox
// -----------------------------------------------------------------------------

/// Offer/privacy acceptance checkbox with an inline validation message.
#[component]
pub fn TermsCheckbox(
    checked: Signal<bool>,
    invalid: Signal<bool>,
    #[prop(into)] error_text: String,
    on_toggle: Callback<bool>,
) -> impl IntoView {
    view! {
        <div class="terms-field">
            <input
                type="checkbox"
                id="terms-checkbox"
                class=move || if invalid.get() { "terms-checkbox invalid" } else { "terms-checkbox" }
                prop:checked=move || checked.get()
                on:change=move |e| on_toggle.run(event_target_checked(&e))
            />
            <label
                for="terms-checkbox"
                class=move || if invalid.get() { "tariff-text2 text-error" } else { "tariff-text2" }
            >
                "Я согласен с "
                <span class="underline cursor-pointer">"офертой рекуррентных платежей"</span>
                " и "
                <span class="underline cursor-pointer">"Политикой конфиденциальности"</span>
            </label>

            <Show when=move || invalid.get()>
                <div class="terms-error">{error_text.clone()}</div>
            </Show>
        </div>
    }
}
