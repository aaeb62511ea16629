//! The two client-side state containers.
//!
//! [`CountryStore`] owns the country collection and the active record;
//! [`FilterStore`] owns only the filter UI state. They never reach into each
//! other: [`select_region`] is the action that touches both.

use crate::models::{Country, Region, RegionFilter};
use log::debug;

#[derive(Debug, Clone, Default)]
pub struct CountryStore {
    all: Vec<Country>,
    visible: Vec<Country>,
    active: Option<Country>,
    region: RegionFilter,
    filter_text: String,
}

impl CountryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole collection. Later duplicates of a code are dropped.
    pub fn set_all(&mut self, records: Vec<Country>) {
        let mut all: Vec<Country> = Vec::with_capacity(records.len());
        for c in records {
            if all.iter().any(|seen| seen.matches_code(&c.cca3)) {
                debug!("store: ignoring duplicate country code {}", c.cca3);
                continue;
            }
            all.push(c);
        }
        self.all = all;
        self.refresh();
    }

    pub fn set_active(&mut self, record: Country) {
        self.active = Some(record);
    }

    /// Swap in a fuller record for the same code, e.g. after a detail fetch.
    pub fn remember(&mut self, record: Country) {
        if let Some(slot) = self.all.iter_mut().find(|c| c.matches_code(&record.cca3)) {
            *slot = record;
            self.refresh();
        }
    }

    pub fn clear_active(&mut self) {
        self.active = None;
    }

    /// Narrow the visible set to `region`; `RegionFilter::All` shows everything.
    pub fn filter_by_region(&mut self, region: RegionFilter) {
        self.region = region;
        self.refresh();
    }

    /// Case-insensitive substring match on the common name, on top of the region.
    pub fn search(&mut self, text: &str) {
        self.filter_text = text.trim().to_string();
        self.refresh();
    }

    pub fn find_by_code(&self, code: &str) -> Option<&Country> {
        self.all.iter().find(|c| c.matches_code(code))
    }

    pub fn all(&self) -> &[Country] {
        &self.all
    }

    pub fn visible(&self) -> &[Country] {
        &self.visible
    }

    pub fn active(&self) -> Option<&Country> {
        self.active.as_ref()
    }

    pub fn region(&self) -> RegionFilter {
        self.region
    }

    pub fn filter_text(&self) -> &str {
        &self.filter_text
    }

    fn refresh(&mut self) {
        let needle = self.filter_text.to_lowercase();
        self.visible = self
            .all
            .iter()
            .filter(|c| self.region.matches(c))
            .filter(|c| needle.is_empty() || c.name.common.to_lowercase().contains(&needle))
            .cloned()
            .collect();
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterStore {
    is_open: bool,
    region: RegionFilter,
}

impl FilterStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_open(&mut self) {
        self.is_open = !self.is_open;
    }

    pub fn set_open(&mut self, open: bool) {
        self.is_open = open;
    }

    pub fn set_region(&mut self, region: RegionFilter) {
        self.region = region;
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn region(&self) -> RegionFilter {
        self.region
    }

    /// Text of the closed selector.
    pub fn header_label(&self) -> String {
        match self.region {
            RegionFilter::All => "Filtered by Region".to_string(),
            RegionFilter::Only(r) => r.to_string(),
        }
    }

    /// Selector options: `all`, then every region.
    pub fn options() -> Vec<RegionFilter> {
        std::iter::once(RegionFilter::All)
            .chain(Region::ALL.into_iter().map(RegionFilter::Only))
            .collect()
    }
}

/// Region change from the selector: narrow the countries, remember the choice, close the selector.
pub fn select_region(filter: &mut FilterStore, countries: &mut CountryStore, region: RegionFilter) {
    countries.filter_by_region(region);
    filter.set_region(region);
    filter.set_open(false);
}
