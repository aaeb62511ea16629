//! country_explorer
//!
//! A small Rust library for browsing country data from the public
//! [REST Countries](https://restcountries.com) API. Pairs with the `countries` CLI.
//!
//! ### Features
//! - Fetch every country, or one country by its alpha-3 code
//! - Loader state machine that ignores stale responses
//! - Region filter and name search over the loaded collection
//! - Detail page rows (native name, population, currencies, borders…)
//! - Export the visible list as CSV or JSON
//!
//! ### Example
//! ```no_run
//! use country_explorer::{Client, Explorer, RegionFilter, Region};
//!
//! let mut app = Explorer::new(Client::default());
//! app.load_all();
//! app.select_region(RegionFilter::Only(Region::Europe));
//! for card in app.summaries() {
//!     println!("{} ({})", card.name, card.population);
//! }
//! app.open_country("deu");
//! println!("{:#?}", app.page());
//! ```

pub mod api;
pub mod detail;
pub mod error;
pub mod explorer;
pub mod format;
pub mod loader;
pub mod models;
pub mod storage;
pub mod store;

pub use api::{Client, CountrySource};
pub use error::FetchError;
pub use explorer::Explorer;
pub use loader::{Loader, LoaderState};
pub use models::{Country, Region, RegionFilter};
