// =============================================================================
// FitHub Web - Utility Functions
// =============================================================================
// Table of Contents:
// 1. DOM Utilities
// =============================================================================

// -----------------------------------------------------------------------------
// 1. DOM Utilities
// -----------------------------------------------------------------------------

/// Blocking browser alert. No-op outside a window.
pub fn alert(message: &str) {
    if let Some(win) = web_sys::window() {
        if let Err(e) = win.alert_with_message(message) {
            log::warn!("Failed to show alert: {:?}", e);
        }
    }
}

/// Scroll to the top of the page.
pub fn scroll_to_top() {
    if let Some(win) = web_sys::window() {
        win.scroll_to_with_x_and_y(0.0, 0.0);
    }
}
