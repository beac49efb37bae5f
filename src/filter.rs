//! Filter engine - derives the visible country list from search text and region

use std::sync::Arc;

use crate::constants::REGIONS;
use crate::models::Country;

/// Current search text and region selection
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterState {
    pub search: String,
    pub region: Option<String>,
}

impl FilterState {
    /// Region as passed to [`apply`]; empty means "any region"
    pub fn region_str(&self) -> &str {
        self.region.as_deref().unwrap_or("")
    }

    /// Step through the known regions, then back to "any"
    pub fn cycle_region(&mut self) {
        self.region = match self.region.as_deref() {
            None => Some(REGIONS[0].to_string()),
            Some(current) => REGIONS
                .iter()
                .position(|r| *r == current)
                .and_then(|i| REGIONS.get(i + 1))
                .map(|r| r.to_string()),
        };
    }

    pub fn clear_region(&mut self) {
        self.region = None;
    }

    /// Whether the clear-region action should be offered
    pub fn has_region(&self) -> bool {
        self.region.is_some()
    }

    pub fn apply(&self, all: &[Arc<Country>]) -> Vec<Arc<Country>> {
        apply(all, &self.search, self.region_str())
    }
}

/// Countries whose name contains `search_term` (case-insensitive) and whose
/// region equals `region` exactly, or any region when `region` is empty.
/// Input order is preserved.
pub fn apply(all: &[Arc<Country>], search_term: &str, region: &str) -> Vec<Arc<Country>> {
    let needle = search_term.to_lowercase();
    all.iter()
        .filter(|country| {
            let matches_search = country.common_name().to_lowercase().contains(&needle);
            let matches_region = region.is_empty() || country.region.as_deref() == Some(region);
            matches_search && matches_region
        })
        .cloned()
        .collect()
}
