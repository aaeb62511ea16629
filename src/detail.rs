//! Display models built from a [`Country`]: detail rows, list summaries and
//! the page view derived from the loader state.

use crate::error::FetchError;
use crate::format::{number_formatter_locale, parse_obj_values};
use crate::loader::LoaderState;
use crate::models::Country;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Presentation {
    Lowercase,
}

/// A label/value pair ready to print.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayRow {
    pub label: &'static str,
    pub value: String,
    pub hint: Option<Presentation>,
}

impl DisplayRow {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
            hint: None,
        }
    }

    fn lowercase(mut self) -> Self {
        self.hint = Some(Presentation::Lowercase);
        self
    }

    /// Labels are unique within a view.
    pub fn key(&self) -> &'static str {
        self.label
    }

    /// Value with the presentation hint applied.
    pub fn rendered(&self) -> String {
        match self.hint {
            Some(Presentation::Lowercase) => self.value.to_lowercase(),
            None => self.value.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorderLink {
    pub code: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BorderRow {
    pub label: &'static str,
    pub links: Vec<BorderLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailView {
    pub code: String,
    pub name: String,
    pub flag_url: String,
    pub flag_alt: String,
    pub left: Vec<DisplayRow>,
    pub right: Vec<DisplayRow>,
    pub borders: Option<BorderRow>,
}

/// Build the detail page rows for `country` with `en` number formatting.
pub fn compose(country: &Country) -> DetailView {
    compose_locale(country, "en")
}

pub fn compose_locale(country: &Country, locale_tag: &str) -> DetailView {
    let left = vec![
        DisplayRow::new(
            "native name",
            parse_obj_values(Some(&country.name.native_name), "common", None),
        ),
        DisplayRow::new(
            "population",
            number_formatter_locale(country.population, locale_tag),
        ),
        DisplayRow::new("region", country.region.as_str()),
        DisplayRow::new("sub region", country.subregion.as_str()),
        DisplayRow::new("capital", country.capital.join(", ")),
    ];

    let right = vec![
        DisplayRow::new("top level domain", country.tld.join(", ")).lowercase(),
        DisplayRow::new(
            "currencies",
            parse_obj_values(Some(&country.currencies), "name", None),
        ),
        DisplayRow::new(
            "languages",
            parse_obj_values(Some(&country.languages), "", Some(1)),
        ),
    ];

    let borders = (!country.borders.is_empty()).then(|| BorderRow {
        label: "border countries",
        links: country
            .borders
            .iter()
            .map(|code| BorderLink {
                code: code.clone(),
                href: format!("/{}", code),
            })
            .collect(),
    });

    DetailView {
        code: country.cca3.clone(),
        name: country.name.common.clone(),
        flag_url: country.flags.svg.clone(),
        flag_alt: country
            .flags
            .alt
            .clone()
            .unwrap_or_else(|| format!("{} flag", country.name.common)),
        left,
        right,
        borders,
    }
}

/// One card of the home list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountrySummary {
    pub code: String,
    pub name: String,
    pub population: String,
    pub region: String,
    pub capital: String,
    pub flag_url: String,
}

pub fn summary(country: &Country, locale_tag: &str) -> CountrySummary {
    CountrySummary {
        code: country.cca3.clone(),
        name: country.name.common.clone(),
        population: number_formatter_locale(country.population, locale_tag),
        region: country.region.clone(),
        capital: country.capital.join(", "),
        flag_url: country.flags.png.clone(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Timeout,
    Generic,
}

/// What the country page shows for a given loader state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageView {
    Idle,
    Loading,
    NotFound { subject: &'static str },
    Error { kind: ErrorKind, message: String },
    Detail(Box<DetailView>),
}

pub fn page_view(state: &LoaderState<Country>, locale_tag: &str) -> PageView {
    match state {
        LoaderState::Idle => PageView::Idle,
        LoaderState::Loading { .. } => PageView::Loading,
        LoaderState::Success(country) => {
            PageView::Detail(Box::new(compose_locale(country, locale_tag)))
        }
        LoaderState::Failure(err) => error_view(err),
    }
}

fn error_view(err: &FetchError) -> PageView {
    match err {
        FetchError::Transport { .. } => PageView::Error {
            kind: ErrorKind::Timeout,
            message: err.message().to_string(),
        },
        FetchError::NotFound { .. } => PageView::NotFound { subject: "Country" },
        FetchError::Upstream { .. } => PageView::Error {
            kind: ErrorKind::Generic,
            message: err.message().to_string(),
        },
    }
}
