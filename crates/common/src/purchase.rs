//! Terms/selection gate in front of the buy action
//!
//! There is no checkout behind the gate; a passed attempt only yields a
//! [`PurchaseIntent`] that the page logs.

use crate::error::PurchaseError;

/// Recorded intent to buy a tariff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseIntent {
    pub tariff_id: String,
}

/// Checkbox and validation state for the buy button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PurchaseGate {
    terms_accepted: bool,
    validation_error: bool,
}

impl PurchaseGate {
    pub fn terms_accepted(&self) -> bool {
        self.terms_accepted
    }

    /// Whether the inline "accept the terms" message is showing.
    pub fn validation_error(&self) -> bool {
        self.validation_error
    }

    /// Any change to the checkbox dismisses the inline message.
    pub fn set_terms_accepted(&mut self, accepted: bool) {
        self.terms_accepted = accepted;
        self.validation_error = false;
    }

    pub fn toggle_terms(&mut self) {
        self.set_terms_accepted(!self.terms_accepted);
    }

    /// Check terms first, then the selection.
    pub fn attempt(&mut self, selection: Option<&str>) -> Result<PurchaseIntent, PurchaseError> {
        if !self.terms_accepted {
            self.validation_error = true;
            return Err(PurchaseError::TermsNotAccepted);
        }

        let tariff_id = selection
            .filter(|id| !id.is_empty())
            .ok_or(PurchaseError::NoTariffSelected)?;

        self.validation_error = false;
        tracing::info!("Purchase initiated for tariff: {}", tariff_id);
        Ok(PurchaseIntent {
            tariff_id: tariff_id.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terms_required_regardless_of_selection() {
        for selection in [None, Some(""), Some("quarter")] {
            let mut gate = PurchaseGate::default();
            assert_eq!(gate.attempt(selection), Err(PurchaseError::TermsNotAccepted));
            assert!(gate.validation_error());
        }
    }

    #[test]
    fn test_validation_error_persists_until_toggle() {
        let mut gate = PurchaseGate::default();
        let _ = gate.attempt(Some("quarter"));
        let _ = gate.attempt(Some("quarter"));
        assert!(gate.validation_error());

        gate.toggle_terms();
        assert!(gate.terms_accepted());
        assert!(!gate.validation_error());
    }

    #[test]
    fn test_missing_selection() {
        let mut gate = PurchaseGate::default();
        gate.set_terms_accepted(true);
        assert_eq!(gate.attempt(None), Err(PurchaseError::NoTariffSelected));
        assert_eq!(gate.attempt(Some("")), Err(PurchaseError::NoTariffSelected));
        assert!(!gate.validation_error());
    }

    #[test]
    fn test_success_records_intent() {
        let mut gate = PurchaseGate::default();
        let _ = gate.attempt(Some("quarter"));
        gate.set_terms_accepted(true);

        let intent = gate.attempt(Some("quarter")).unwrap();
        assert_eq!(intent.tariff_id, "quarter");
        assert!(!gate.validation_error());
    }

    #[test]
    fn test_user_messages() {
        assert_eq!(PurchaseError::TermsNotAccepted.user_message(), "Необходимо принять условия");
        assert_eq!(PurchaseError::NoTariffSelected.user_message(), "Пожалуйста, выберите тариф");
    }
}
