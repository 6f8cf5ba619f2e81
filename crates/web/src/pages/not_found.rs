// =============================================================================
// FitHub Web - 404 Not Found Page
// =============================================================================

use leptos::prelude::*;

/// 404 Not Found page.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="page page-not-found">
            <div class="not-found-content">
                <span class="not-found-code">"404"</span>
                <h1>"Страница не найдена"</h1>
                <a href="/" class="tariff-button">
                    "К тарифам"
                </a>
            </div>
        </div>
    }
}
