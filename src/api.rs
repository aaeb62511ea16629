//! Synchronous client for the **REST Countries API (v3.1)**.
//!
//! Two endpoints are used: `all` for the home list and `alpha/{code}` for a
//! single country. Failures come back already classified as [`FetchError`].
//!
//! ### Notes
//! - `all` requires an explicit `fields` list and accepts at most 10 fields, so
//!   `tld` is left out there and its records are marked as list records; the
//!   detail page gets the full record from `alpha/{code}`.
//! - `alpha/{code}` answers with an **array** holding one country.
//! - The API answers `400` for malformed codes, which is what the
//!   "not found" view keys on.
//!
//! Typical usage:
//! ```no_run
//! # use country_explorer::{Client, CountrySource};
//! let client = Client::default();
//! let germany = client.fetch_country_by_code("deu")?;
//! println!("{}", germany.name.common);
//! # Ok::<(), country_explorer::FetchError>(())
//! ```

use crate::error::FetchError;
use crate::models::Country;
use log::debug;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};
use reqwest::blocking::Client as HttpClient;
use reqwest::redirect::Policy;
use serde::de::DeserializeOwned;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://restcountries.com/v3.1";

/// Fields requested from the `all` endpoint.
pub const LIST_FIELDS: [&str; 10] = [
    "cca3",
    "name",
    "capital",
    "region",
    "subregion",
    "population",
    "flags",
    "borders",
    "currencies",
    "languages",
];

/// The read-only data source the loader pulls countries from.
///
/// [`Client`] talks HTTP; tests plug in in-memory fakes.
pub trait CountrySource {
    fn fetch_all_countries(&self) -> Result<Vec<Country>, FetchError>;
    fn fetch_country_by_code(&self, code: &str) -> Result<Country, FetchError>;
}

#[derive(Debug, Clone)]
pub struct Client {
    pub base_url: String,
    http: HttpClient,
}

impl Default for Client {
    fn default() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }
}

// Country codes are plain ASCII letters; keep '-' and '_' so odd input stays readable in errors.
const SAFE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_');

fn enc(part: &str) -> String {
    percent_encoding::utf8_percent_encode(part.trim(), SAFE).to_string()
}

impl Client {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(30)) // total request timeout
            .connect_timeout(Duration::from_secs(10)) // connect timeout
            .redirect(Policy::limited(5)) // cap redirects
            .user_agent(concat!("country_explorer/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("reqwest client build");
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        }
    }

    pub fn all_url(&self) -> String {
        format!("{}/all?fields={}", self.base_url, LIST_FIELDS.join(","))
    }

    pub fn alpha_url(&self, code: &str) -> String {
        format!("{}/alpha/{}", self.base_url, enc(code))
    }

    fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        debug!("GET {}", url);
        let resp = self.http.get(url).send()?;
        let status = resp.status();
        if !status.is_success() {
            debug!("GET {} -> HTTP {}", url, status.as_u16());
            return Err(FetchError::from_status(status.as_u16(), url));
        }
        let body = resp.text()?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl CountrySource for Client {
    fn fetch_all_countries(&self) -> Result<Vec<Country>, FetchError> {
        let countries: Vec<Country> = self.get_json(&self.all_url())?;
        debug!("fetched {} countries", countries.len());
        Ok(countries.into_iter().map(Country::into_list_record).collect())
    }

    fn fetch_country_by_code(&self, code: &str) -> Result<Country, FetchError> {
        let url = self.alpha_url(code);
        let found: Vec<Country> = self.get_json(&url)?;
        found.into_iter().next().ok_or_else(|| FetchError::NotFound {
            message: format!("no country with code '{}': HTTP 400", code.trim()),
        })
    }
}
