#![allow(dead_code)]

use country_explorer::{Country, CountrySource, FetchError};
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

pub const SAMPLE: &str = r#"
[
  {
    "cca3": "DEU",
    "name": {
      "common": "Germany",
      "official": "Federal Republic of Germany",
      "nativeName": {"deu": {"official": "Bundesrepublik Deutschland", "common": "Deutschland"}}
    },
    "tld": [".DE"],
    "currencies": {"EUR": {"name": "Euro", "symbol": "€"}},
    "capital": ["Berlin"],
    "region": "Europe",
    "subregion": "Western Europe",
    "languages": {"deu": "German"},
    "borders": ["AUT", "BEL", "CZE", "DNK", "FRA", "LUX", "NLD", "POL", "CHE"],
    "population": 83240525,
    "flags": {"png": "https://flagcdn.com/w320/de.png", "svg": "https://flagcdn.com/de.svg"}
  },
  {
    "cca3": "USA",
    "name": {
      "common": "United States",
      "official": "United States of America",
      "nativeName": {"eng": {"official": "United States of America", "common": "United States"}}
    },
    "tld": [".us"],
    "currencies": {"USD": {"name": "United States dollar", "symbol": "$"}},
    "capital": ["Washington, D.C."],
    "region": "Americas",
    "subregion": "North America",
    "languages": {"eng": "English"},
    "borders": ["CAN", "MEX"],
    "population": 329484123,
    "flags": {"png": "https://flagcdn.com/w320/us.png", "svg": "https://flagcdn.com/us.svg"}
  },
  {
    "cca3": "CAN",
    "name": {
      "common": "Canada",
      "official": "Canada",
      "nativeName": {
        "eng": {"official": "Canada", "common": "Canada"},
        "fra": {"official": "Canada", "common": "Canada"}
      }
    },
    "tld": [".ca"],
    "currencies": {"CAD": {"name": "Canadian dollar", "symbol": "$"}},
    "capital": ["Ottawa"],
    "region": "Americas",
    "subregion": "North America",
    "languages": {"eng": "English", "fra": "French"},
    "borders": ["USA"],
    "population": 38005238,
    "flags": {"png": "https://flagcdn.com/w320/ca.png", "svg": "https://flagcdn.com/ca.svg"}
  },
  {
    "cca3": "ISL",
    "name": {
      "common": "Iceland",
      "official": "Iceland",
      "nativeName": {"isl": {"official": "Ísland", "common": "Ísland"}}
    },
    "tld": [".is"],
    "currencies": {"ISK": {"name": "Icelandic króna", "symbol": "kr"}},
    "capital": ["Reykjavik"],
    "region": "Europe",
    "subregion": "Northern Europe",
    "languages": {"isl": "Icelandic"},
    "borders": [],
    "population": 366425,
    "flags": {"png": "https://flagcdn.com/w320/is.png", "svg": "https://flagcdn.com/is.svg"}
  },
  {
    "cca3": "ATA",
    "name": {"common": "Antarctica", "official": "Antarctica"},
    "region": "Antarctic",
    "population": 1000,
    "flags": {"png": "https://flagcdn.com/w320/aq.png", "svg": "https://flagcdn.com/aq.svg"}
  }
]
"#;

pub fn sample() -> Vec<Country> {
    serde_json::from_str(SAMPLE).unwrap()
}

pub fn country(code: &str) -> Country {
    sample().into_iter().find(|c| c.matches_code(code)).unwrap()
}

/// In-memory stand-in for the HTTP client.
#[derive(Default)]
pub struct FakeSource {
    pub countries: Vec<Country>,
    /// Per-code failures (upper-case code).
    pub failures: HashMap<String, FetchError>,
    /// Per-code artificial latency (upper-case code).
    pub delays: HashMap<String, Duration>,
    pub all_calls: AtomicUsize,
    pub code_calls: Mutex<Vec<String>>,
}

impl FakeSource {
    pub fn new() -> Self {
        Self {
            countries: sample(),
            ..Default::default()
        }
    }

    pub fn failing(mut self, code: &str, err: FetchError) -> Self {
        self.failures.insert(code.to_uppercase(), err);
        self
    }

    pub fn slow(mut self, code: &str, delay: Duration) -> Self {
        self.delays.insert(code.to_uppercase(), delay);
        self
    }

    pub fn code_calls(&self) -> Vec<String> {
        self.code_calls.lock().unwrap().clone()
    }
}

impl CountrySource for FakeSource {
    /// Like the live `all` endpoint, list records come without `tld`.
    fn fetch_all_countries(&self) -> Result<Vec<Country>, FetchError> {
        self.all_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .countries
            .iter()
            .cloned()
            .map(|mut c| {
                c.tld.clear();
                c
            })
            .collect())
    }

    fn fetch_country_by_code(&self, code: &str) -> Result<Country, FetchError> {
        let key = code.to_uppercase();
        self.code_calls.lock().unwrap().push(key.clone());
        if let Some(d) = self.delays.get(&key) {
            std::thread::sleep(*d);
        }
        if let Some(err) = self.failures.get(&key) {
            return Err(err.clone());
        }
        self.countries
            .iter()
            .find(|c| c.matches_code(code))
            .cloned()
            .ok_or_else(|| FetchError::from_status(400, code))
    }
}
