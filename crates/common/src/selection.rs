//! Currently selected tariff

use crate::error::TariffError;
use crate::tariff::TariffCatalog;

/// Which tariff the buy button acts on. Only ids from the loaded catalog are
/// accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TariffSelection {
    selected: Option<String>,
}

impl TariffSelection {
    /// Default selection for a freshly loaded catalog.
    pub fn initial(catalog: &TariffCatalog) -> Self {
        Self {
            selected: catalog.default_selection().map(str::to_string),
        }
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.as_deref() == Some(id)
    }

    /// Switch to `id`; unknown ids leave the current selection untouched.
    pub fn select(&mut self, catalog: &TariffCatalog, id: &str) -> Result<(), TariffError> {
        if !catalog.contains(id) {
            return Err(TariffError::UnknownTariff(id.to_string()));
        }
        self.selected = Some(id.to_string());
        Ok(())
    }

    /// Value mirrored into the hidden `#selected-tariff-value` input.
    pub fn as_field_value(&self) -> &str {
        self.selected.as_deref().unwrap_or("")
    }
}
