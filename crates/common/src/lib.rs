//! # FitHub Common
//!
//! Target-independent logic behind the tariffs landing page.
//!
//! ## Modules
//!
//! - `config`: Landing configuration (endpoint, timer durations, currency)
//! - `error`: Error types shared by the page
//! - `purchase`: Terms/selection gate in front of the buy action
//! - `pricing`: Discount math and price display modes
//! - `selection`: Currently chosen tariff
//! - `tariff`: Wire model, id repair and best-first ordering
//! - `timer`: Countdown state, urgency blink and clock formatting
//!
//! Nothing here touches the DOM; the `fithub-web` crate drives these types
//! from browser timers and renders the enums they return.

pub mod config;
pub mod error;
pub mod pricing;
pub mod purchase;
pub mod selection;
pub mod tariff;
pub mod timer;

pub use config::LandingConfig;
pub use error::{ConfigError, PurchaseError, TariffError};
pub use pricing::{discount_percent, format_price, BadgeState, PriceAnimation, PriceEmphasis, PriceLayout, PriceTransition, PriceView};
pub use purchase::{PurchaseGate, PurchaseIntent};
pub use selection::TariffSelection;
pub use tariff::{normalize, parse_tariffs, Tariff, TariffCatalog};
pub use timer::{format_clock, is_urgent, BlinkAction, Blinker, Countdown, TickOutcome, TimerSnapshot, TimerVisual};
