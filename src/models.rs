use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Localized name pair as served under `name.nativeName.<lang>`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeName {
    #[serde(default)]
    pub official: String,
    #[serde(default)]
    pub common: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryName {
    pub common: String,
    #[serde(default)]
    pub official: String,
    /// Keyed by ISO 639-3 language code. Sorted by key.
    #[serde(rename = "nativeName", default)]
    pub native_name: BTreeMap<String, NativeName>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flags {
    #[serde(default)]
    pub png: String,
    #[serde(default)]
    pub svg: String,
    #[serde(default)]
    pub alt: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub symbol: Option<String>,
}

/// One country as returned by the REST Countries v3.1 API.
///
/// Optional keys are normalized to empty collections / strings at decode
/// time, so callers can treat every field as present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    /// ISO 3166-1 alpha-3 code; compare with [`Country::matches_code`].
    pub cca3: String,
    pub name: CountryName,
    #[serde(default)]
    pub capital: Vec<String>,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub subregion: String,
    #[serde(default)]
    pub population: u64,
    #[serde(default)]
    pub flags: Flags,
    #[serde(default)]
    pub borders: Vec<String>,
    #[serde(default)]
    pub currencies: BTreeMap<String, Currency>,
    #[serde(default)]
    pub languages: BTreeMap<String, String>,
    #[serde(default)]
    pub tld: Vec<String>,
    /// Set on records that came from the `all` endpoint, which omits `tld`.
    #[serde(skip)]
    pub list_only: bool,
}

impl Country {
    /// Case-insensitive code comparison (`"usa"` matches `"USA"`).
    pub fn matches_code(&self, code: &str) -> bool {
        self.cca3.eq_ignore_ascii_case(code.trim())
    }

    /// Mark as a list record: good for cards, not for the detail page.
    pub fn into_list_record(mut self) -> Self {
        self.list_only = true;
        self
    }

    /// Whether this record carries every field the detail page shows.
    pub fn is_detail_complete(&self) -> bool {
        !self.list_only
    }

    pub fn in_region(&self, region: Region) -> bool {
        self.region.eq_ignore_ascii_case(region.as_str())
    }
}

/// Coarse geographic grouping used as the only filter dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Region {
    Africa,
    Americas,
    Antarctic,
    Asia,
    Europe,
    Oceania,
}

impl Region {
    pub const ALL: [Region; 6] = [
        Region::Africa,
        Region::Americas,
        Region::Antarctic,
        Region::Asia,
        Region::Europe,
        Region::Oceania,
    ];

    /// Spelling used by the API's `region` field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Africa => "Africa",
            Region::Americas => "Americas",
            Region::Antarctic => "Antarctic",
            Region::Asia => "Asia",
            Region::Europe => "Europe",
            Region::Oceania => "Oceania",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseRegionError(pub String);

impl fmt::Display for ParseRegionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown region '{}'", self.0)
    }
}

impl std::error::Error for ParseRegionError {}

impl FromStr for Region {
    type Err = ParseRegionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Region::ALL
            .into_iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseRegionError(s.to_string()))
    }
}

/// Selected value of the region filter: everything, or a single region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RegionFilter {
    #[default]
    All,
    Only(Region),
}

impl RegionFilter {
    pub fn matches(&self, country: &Country) -> bool {
        match self {
            RegionFilter::All => true,
            RegionFilter::Only(r) => country.in_region(*r),
        }
    }
}

impl fmt::Display for RegionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegionFilter::All => f.write_str("all"),
            RegionFilter::Only(r) => r.fmt(f),
        }
    }
}

impl FromStr for RegionFilter {
    type Err = ParseRegionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(RegionFilter::All);
        }
        s.parse().map(RegionFilter::Only)
    }
}

impl From<Region> for RegionFilter {
    fn from(r: Region) -> Self {
        RegionFilter::Only(r)
    }
}
