//! Pure helpers turning raw country fields into display strings.

use crate::models::{Currency, NativeName};
use num_format::{Locale, ToFormattedString};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// Value returned when a mapping is absent or has nothing to show.
pub const EMPTY: &str = "";

/// Format an integer with `en` thousands separators (`1000000` -> `"1,000,000"`).
pub fn number_formatter(n: u64) -> String {
    n.to_formatted_string(&Locale::en)
}

/// Same as [`number_formatter`] but with a locale tag (e.g. `"de"` -> `"1.000.000"`).
pub fn number_formatter_locale(n: u64, locale_tag: &str) -> String {
    n.to_formatted_string(map_locale(locale_tag))
}

/// Map a user-provided locale tag to a `num_format::Locale`.
///
/// Supported tags (case-insensitive): `en`, `us`, `en_US`, `de`, `de_DE`, `german`,
/// `fr`, `es`, `it`, `pt`, `nl`. Defaults to English.
pub fn map_locale(tag: &str) -> &'static Locale {
    match tag.to_lowercase().replace('-', "_").as_str() {
        "de" | "de_de" | "german" => &Locale::de,
        "fr" | "fr_fr" => &Locale::fr,
        "es" | "es_es" => &Locale::es,
        "it" | "it_it" => &Locale::it,
        "pt" | "pt_pt" | "pt_br" => &Locale::pt,
        "nl" | "nl_nl" => &Locale::nl,
        _ => &Locale::en,
    }
}

/// Field projection used by [`parse_obj_values`].
///
/// An empty `field` selects the value's primary text.
pub trait Project {
    fn project(&self, field: &str) -> Option<&str>;
}

impl Project for String {
    fn project(&self, field: &str) -> Option<&str> {
        field.is_empty().then_some(self.as_str())
    }
}

impl Project for Currency {
    fn project(&self, field: &str) -> Option<&str> {
        match field {
            "" | "name" => Some(&self.name),
            "symbol" => self.symbol.as_deref(),
            _ => None,
        }
    }
}

impl Project for NativeName {
    fn project(&self, field: &str) -> Option<&str> {
        match field {
            "" | "common" => Some(&self.common),
            "official" => Some(&self.official),
            _ => None,
        }
    }
}

/// Join the `field` projection of every entry in `collection` with `", "`.
///
/// Entries are visited in key order. Blank projections are skipped, and at most
/// `limit` values are joined when a limit is given. Returns [`EMPTY`] for an
/// absent or empty collection.
pub fn parse_obj_values<K, V: Project>(
    collection: Option<&BTreeMap<K, V>>,
    field: &str,
    limit: Option<usize>,
) -> String {
    let Some(map) = collection else {
        return EMPTY.to_string();
    };
    map.values()
        .filter_map(|v| v.project(field))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .take(limit.unwrap_or(usize::MAX))
        .collect::<Vec<_>>()
        .join(", ")
}

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

/// Synthetic, process-unique key for rows that have no natural identity.
///
/// Never use this as an entity identifier; countries are keyed by `cca3`.
pub fn get_id() -> String {
    format!("row-{}", NEXT_ID.fetch_add(1, Ordering::Relaxed))
}
