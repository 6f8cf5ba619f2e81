//! Discount math and price display modes
//!
//! The display side is a pure mapping from offer state to a handful of enums;
//! the web crate only turns those into CSS classes.

/// Discount in whole percent: `round((full_price - price) / full_price * 100)`.
///
/// Halves round up, so `-12.5` becomes `-12`. A non-positive or non-finite
/// `full_price` yields 0.
pub fn discount_percent(price: f64, full_price: f64) -> i64 {
    if !full_price.is_finite() || !price.is_finite() || full_price <= 0.0 {
        return 0;
    }
    let percent = (full_price - price) / full_price * 100.0;
    (percent + 0.5).floor() as i64
}

/// Render an amount with its currency sign, without decimals when whole.
pub fn format_price(amount: f64, currency: &str) -> String {
    if amount.fract() == 0.0 {
        format!("{} {}", amount, currency)
    } else {
        format!("{:.2} {}", amount, currency)
    }
}

// -----------------------------------------------------------------------------
// Display Modes
// -----------------------------------------------------------------------------

/// Which prices a card shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceLayout {
    /// Promotional price with the full price struck through.
    Discounted,
    /// Full price only.
    FullPrice,
}

/// Discount badge state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeState {
    Visible,
    FadingOut,
    Hidden,
}

impl BadgeState {
    pub fn is_shown(&self) -> bool {
        !matches!(self, BadgeState::Hidden)
    }

    pub fn class(&self) -> &'static str {
        match self {
            BadgeState::FadingOut => "badge-fade-out",
            _ => "",
        }
    }
}

/// Animation applied to the price line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceAnimation {
    None,
    SlideIn,
}

impl PriceAnimation {
    pub fn class(&self) -> &'static str {
        match self {
            PriceAnimation::None => "",
            PriceAnimation::SlideIn => "price-slide-in",
        }
    }
}

/// Everything a tariff card needs to render its price block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceView {
    pub layout: PriceLayout,
    pub badge: BadgeState,
    pub animation: PriceAnimation,
}

impl PriceView {
    /// `transitioning` is the short window right after the offer expires.
    pub fn for_state(expired: bool, transitioning: bool) -> Self {
        match (expired, transitioning) {
            (false, _) => Self {
                layout: PriceLayout::Discounted,
                badge: BadgeState::Visible,
                animation: PriceAnimation::None,
            },
            (true, true) => Self {
                layout: PriceLayout::FullPrice,
                badge: BadgeState::FadingOut,
                animation: PriceAnimation::SlideIn,
            },
            (true, false) => Self {
                layout: PriceLayout::FullPrice,
                badge: BadgeState::Hidden,
                animation: PriceAnimation::None,
            },
        }
    }
}

/// Phase of the price block around offer expiry.
///
/// `Offer` moves to `Transitioning` once, when the offer countdown expires;
/// the page then calls [`PriceTransition::settle`] after the fade window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PriceTransition {
    #[default]
    Offer,
    Transitioning,
    Settled,
}

impl PriceTransition {
    /// Enter the fade window. Returns true only on the first call, which is
    /// when the caller should arm its timer.
    pub fn expire(&mut self) -> bool {
        if *self == PriceTransition::Offer {
            *self = PriceTransition::Transitioning;
            true
        } else {
            false
        }
    }

    /// Close the fade window. No effect in any other phase.
    pub fn settle(&mut self) {
        if *self == PriceTransition::Transitioning {
            *self = PriceTransition::Settled;
        }
    }

    pub fn view(&self) -> PriceView {
        match self {
            PriceTransition::Offer => PriceView::for_state(false, false),
            PriceTransition::Transitioning => PriceView::for_state(true, true),
            PriceTransition::Settled => PriceView::for_state(true, false),
        }
    }
}

/// Highlight for the selected card's price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceEmphasis {
    Selected,
    Plain,
}

impl PriceEmphasis {
    pub fn for_selected(selected: bool) -> Self {
        if selected {
            PriceEmphasis::Selected
        } else {
            PriceEmphasis::Plain
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            PriceEmphasis::Selected => "warning",
            PriceEmphasis::Plain => "normal",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discount_example() {
        assert_eq!(discount_percent(2700.0, 4500.0), 40);
        assert_eq!(discount_percent(900.0, 1800.0), 50);
    }

    #[test]
    fn test_discount_rounding() {
        // 1 - 2/3 = 33.33..%
        assert_eq!(discount_percent(2.0, 3.0), 33);
        // 1 - 1/3 = 66.66..%
        assert_eq!(discount_percent(1.0, 3.0), 67);
        // exactly 12.5%
        assert_eq!(discount_percent(7.0, 8.0), 13);
        // price above full price rounds half up as well
        assert_eq!(discount_percent(9.0, 8.0), -12);
    }

    #[test]
    fn test_discount_zero_full_price() {
        assert_eq!(discount_percent(100.0, 0.0), 0);
        assert_eq!(discount_percent(0.0, 0.0), 0);
        assert_eq!(discount_percent(100.0, -5.0), 0);
        assert_eq!(discount_percent(f64::NAN, 100.0), 0);
        assert_eq!(discount_percent(10.0, f64::INFINITY), 0);
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(1990.0, "₽"), "1990 ₽");
        assert_eq!(format_price(99.5, "₽"), "99.50 ₽");
    }

    #[test]
    fn test_price_view_before_expiry() {
        let view = PriceView::for_state(false, false);
        assert_eq!(view.layout, PriceLayout::Discounted);
        assert!(view.badge.is_shown());
        assert_eq!(view.animation.class(), "");
    }

    #[test]
    fn test_price_view_transition() {
        let view = PriceView::for_state(true, true);
        assert_eq!(view.layout, PriceLayout::FullPrice);
        assert_eq!(view.badge, BadgeState::FadingOut);
        assert_eq!(view.badge.class(), "badge-fade-out");
        assert_eq!(view.animation.class(), "price-slide-in");
    }

    #[test]
    fn test_price_view_after_transition() {
        let view = PriceView::for_state(true, false);
        assert_eq!(view.layout, PriceLayout::FullPrice);
        assert!(!view.badge.is_shown());
        assert_eq!(view.animation, PriceAnimation::None);
    }

    #[test]
    fn test_transition_sequence() {
        let mut phase = PriceTransition::default();
        assert_eq!(phase.view(), PriceView::for_state(false, false));

        // Settling before expiry does nothing.
        phase.settle();
        assert_eq!(phase, PriceTransition::Offer);

        assert!(phase.expire());
        assert_eq!(phase.view().badge, BadgeState::FadingOut);
        assert_eq!(phase.view().animation, PriceAnimation::SlideIn);

        phase.settle();
        assert_eq!(phase, PriceTransition::Settled);
        assert_eq!(phase.view().badge, BadgeState::Hidden);
        assert_eq!(phase.view().layout, PriceLayout::FullPrice);
    }

    #[test]
    fn test_transition_timer_armed_once() {
        let mut phase = PriceTransition::default();
        assert!(phase.expire());
        assert!(!phase.expire());
        phase.settle();
        // A late re-run of the expiry effect must not restart the fade.
        assert!(!phase.expire());
        assert_eq!(phase, PriceTransition::Settled);
    }

    #[test]
    fn test_emphasis() {
        assert_eq!(PriceEmphasis::for_selected(true).class(), "warning");
        assert_eq!(PriceEmphasis::for_selected(false).class(), "normal");
    }
}
