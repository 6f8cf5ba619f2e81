// =============================================================================
// FitHub Web - UI Components
// =============================================================================
// Table of Contents:
// 1. Common Components
// 2. Form Components
// 3. Landing Sections
// =============================================================================

pub mod common;
pub mod countdown;
pub mod forms;
pub mod guarantee;
pub mod tariff_card;
pub mod tariffs;

pub use common::{ErrorDisplay, LoadingSpinner};
pub use countdown::{CountdownClock, NavDelay};
pub use forms::TermsCheckbox;
pub use guarantee::ReturnGuarantee;
pub use tariff_card::TariffCard;
pub use tariffs::{Tariffs, TariffsPrice};
