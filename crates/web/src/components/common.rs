// =============================================================================
// FitHub Web - Common UI Components
// =============================================================================
// Table of Contents:
// 1. Loading Spinner
// 2. Error Display
// =============================================================================

use leptos::prelude::*;

// -----------------------------------------------------------------------------
// 1. Loading Spinner
// -----------------------------------------------------------------------------

/// Loading placeholder with optional message.
#[component]
pub fn LoadingSpinner(#[prop(optional, into)] message: Option<String>) -> impl IntoView {
    view! {
        <div class="loading-container">
            <div class="spinner"></div>
            {message.map(|m| view! { <p class="loading-message">{m}</p> })}
        </div>
    }
}

// -----------------------------------------------------------------------------
// 2. Error Display
// -----------------------------------------------------------------------------

/// Error message display.
#[component]
pub fn ErrorDisplay(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="error-display" role="alert">
            <span class="error-icon">"⚠️"</span>
            <span class="error-message">{message}</span>
        </div>
    }
}
