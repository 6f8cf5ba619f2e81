//! Tariff model and normalization
//!
//! The tariffs endpoint is not trusted to return unique ids, and it returns
//! the recommended ("best") plan wherever it likes. [`normalize`] repairs both
//! before anything is rendered or selected.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::TariffError;

/// A purchasable subscription plan as returned by the tariffs endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tariff {
    pub id: String,
    /// Human label for the billing period ("1 неделя", "3 месяца", ...).
    pub period: String,
    /// Promotional price.
    pub price: f64,
    /// Undiscounted price, shown struck through and after the offer expires.
    pub full_price: f64,
    #[serde(default)]
    pub is_best: bool,
    #[serde(default)]
    pub text: String,
}

/// Decode the endpoint's JSON array.
pub fn parse_tariffs(json: &str) -> Result<Vec<Tariff>, TariffError> {
    serde_json::from_str(json).map_err(|e| TariffError::Decode(e.to_string()))
}

/// Give every duplicate id a unique suffix, then move best tariffs to the front.
///
/// A repeated id at input position `i` becomes `"{id}-{i}"`; if that is taken
/// too, `-1`, `-2`, ... is appended until it is free. The sort is stable, so
/// best tariffs keep their relative order and so do the rest.
pub fn normalize(raw: Vec<Tariff>) -> Vec<Tariff> {
    let mut seen: HashSet<String> = HashSet::with_capacity(raw.len());
    let mut tariffs: Vec<Tariff> = Vec::with_capacity(raw.len());

    for (index, mut tariff) in raw.into_iter().enumerate() {
        if seen.contains(&tariff.id) {
            let repaired = unique_id(&format!("{}-{}", tariff.id, index), &seen);
            tracing::debug!("Duplicate tariff id {:?} renamed to {:?}", tariff.id, repaired);
            tariff.id = repaired;
        }
        seen.insert(tariff.id.clone());
        tariffs.push(tariff);
    }

    tariffs.sort_by_key(|t| !t.is_best);
    tariffs
}

fn unique_id(base: &str, existing: &HashSet<String>) -> String {
    if !existing.contains(base) {
        return base.to_string();
    }
    let mut counter = 1;
    loop {
        let candidate = format!("{}-{}", base, counter);
        if !existing.contains(&candidate) {
            return candidate;
        }
        counter += 1;
    }
}

/// Normalized, immutable tariff list for one page load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TariffCatalog {
    tariffs: Vec<Tariff>,
}

impl TariffCatalog {
    /// Normalize a freshly fetched list.
    pub fn from_raw(raw: Vec<Tariff>) -> Self {
        Self { tariffs: normalize(raw) }
    }

    pub fn tariffs(&self) -> &[Tariff] {
        &self.tariffs
    }

    pub fn len(&self) -> usize {
        self.tariffs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tariffs.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Tariff> {
        self.tariffs.iter().find(|t| t.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// The first best tariff, if any is flagged.
    pub fn best(&self) -> Option<&Tariff> {
        self.tariffs.iter().find(|t| t.is_best)
    }

    /// The wide "hit" card: the head of the list, but only when it is best.
    pub fn featured(&self) -> Option<&Tariff> {
        self.tariffs.first().filter(|t| t.is_best)
    }

    /// Everything rendered as compact cards: all but the featured tariff.
    pub fn others(&self) -> &[Tariff] {
        match self.featured() {
            Some(_) => &self.tariffs[1..],
            None => &self.tariffs,
        }
    }

    /// Best tariff, else the first one, else nothing.
    pub fn default_selection(&self) -> Option<&str> {
        self.best()
            .or_else(|| self.tariffs.first())
            .map(|t| t.id.as_str())
    }
}
