//! Page-level glue: wires a [`CountrySource`] to the loaders and stores the
//! way the home and detail pages use them.
//!
//! All state lives on the caller's thread. Background fetches
//! ([`Explorer::spawn_country`]) run on worker threads and hand their result
//! back through a channel; nothing is applied until [`Explorer::poll`] or
//! [`Explorer::wait`] runs, so updates land one at a time in dispatch order.

use crate::api::CountrySource;
use crate::detail::{self, CountrySummary, PageView};
use crate::error::FetchError;
use crate::loader::{Loader, LoaderState, Ticket};
use crate::models::{Country, RegionFilter};
use crate::store::{self, CountryStore, FilterStore};
use log::{debug, warn};
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

type Completion = (Ticket, Result<Country, FetchError>);

const ALL_KEY: &str = "all";

pub struct Explorer<S> {
    source: Arc<S>,
    locale: String,
    countries: CountryStore,
    filter: FilterStore,
    list: Loader<Vec<Country>>,
    detail: Loader<Country>,
    history: Vec<String>,
    tx: Sender<Completion>,
    rx: Receiver<Completion>,
    in_flight: usize,
}

impl<S: CountrySource + Send + Sync + 'static> Explorer<S> {
    pub fn new(source: S) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            source: Arc::new(source),
            locale: "en".to_string(),
            countries: CountryStore::new(),
            filter: FilterStore::new(),
            list: Loader::new(),
            detail: Loader::new(),
            history: Vec::new(),
            tx,
            rx,
            in_flight: 0,
        }
    }

    /// Locale tag used for number formatting in views.
    pub fn with_locale(mut self, locale_tag: impl Into<String>) -> Self {
        self.locale = locale_tag.into();
        self
    }

    /// Home page: load every country once; later calls reuse the store.
    pub fn load_all(&mut self) -> &LoaderState<Vec<Country>> {
        let cached = (!self.countries.all().is_empty()).then(|| self.countries.all().to_vec());
        let source = Arc::clone(&self.source);
        self.list
            .load(ALL_KEY, cached.as_ref(), |_| source.fetch_all_countries());
        if cached.is_none()
            && let Some(all) = self.list.state().value()
        {
            // The list endpoint never carries every detail field.
            let records = all.iter().cloned().map(Country::into_list_record).collect();
            self.countries.set_all(records);
        }
        self.list.state()
    }

    /// Detail page: load `code`, answering from the store when it already holds
    /// the full record. List records always go to the source.
    pub fn open_country(&mut self, code: &str) -> &LoaderState<Country> {
        self.history.push(code.trim().to_string());
        let cached = self.countries.find_by_code(code).cloned();
        let source = Arc::clone(&self.source);
        self.detail
            .load(code.trim(), cached.as_ref(), |c| source.fetch_country_by_code(c));
        if let Some(country) = self.detail.state().value() {
            let country = country.clone();
            self.activate(country);
        }
        self.detail.state()
    }

    /// Like [`open_country`](Self::open_country) but the request runs on a worker thread.
    ///
    /// Returns `true` if a request was issued, `false` on a cache hit.
    pub fn spawn_country(&mut self, code: &str) -> bool {
        self.history.push(code.trim().to_string());
        let cached = self.countries.find_by_code(code).cloned();
        let Some(ticket) = self.detail.begin(code.trim(), cached.as_ref()) else {
            if let Some(country) = cached {
                self.countries.set_active(country);
            }
            return false;
        };
        let source = Arc::clone(&self.source);
        let code = ticket.identifier().to_string();
        let report = Report {
            ticket: Some(ticket),
            tx: self.tx.clone(),
        };
        self.in_flight += 1;
        thread::spawn(move || {
            let result = source.fetch_country_by_code(&code);
            report.send(result);
        });
        true
    }

    /// Apply finished background requests without blocking. Returns how many were received.
    pub fn poll(&mut self) -> usize {
        let mut received = 0;
        while let Ok((ticket, result)) = self.rx.try_recv() {
            self.settle(ticket, result);
            received += 1;
        }
        received
    }

    /// Block until every background request has reported back.
    pub fn wait(&mut self) {
        // Every worker reports exactly once (see `Report`), so this terminates.
        while self.in_flight > 0 {
            let Ok((ticket, result)) = self.rx.recv() else {
                break;
            };
            self.settle(ticket, result);
        }
    }

    fn settle(&mut self, ticket: Ticket, result: Result<Country, FetchError>) {
        self.in_flight = self.in_flight.saturating_sub(1);
        if self.detail.complete(ticket, result)
            && let Some(country) = self.detail.state().value()
        {
            let country = country.clone();
            self.activate(country);
        }
    }

    fn activate(&mut self, country: Country) {
        self.countries.remember(country.clone());
        self.countries.set_active(country);
    }

    /// Go back to the previously opened country, or to no detail page at all.
    pub fn back(&mut self) -> Option<&LoaderState<Country>> {
        self.history.pop();
        match self.history.pop() {
            Some(prev) => {
                debug!("explorer: back to {}", prev);
                Some(self.open_country(&prev))
            }
            None => {
                self.detail.reset();
                self.countries.clear_active();
                None
            }
        }
    }

    pub fn select_region(&mut self, region: RegionFilter) {
        store::select_region(&mut self.filter, &mut self.countries, region);
    }

    pub fn search(&mut self, text: &str) {
        self.countries.search(text);
    }

    pub fn toggle_filter(&mut self) {
        self.filter.toggle_open();
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn countries(&self) -> &CountryStore {
        &self.countries
    }

    pub fn filter(&self) -> &FilterStore {
        &self.filter
    }

    pub fn list_state(&self) -> &LoaderState<Vec<Country>> {
        self.list.state()
    }

    pub fn detail_state(&self) -> &LoaderState<Country> {
        self.detail.state()
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Cards for the currently visible countries.
    pub fn summaries(&self) -> Vec<CountrySummary> {
        self.countries
            .visible()
            .iter()
            .map(|c| detail::summary(c, &self.locale))
            .collect()
    }

    pub fn page(&self) -> PageView {
        detail::page_view(self.detail.state(), &self.locale)
    }
}

/// Delivers a worker's completion, or a transport failure if the worker
/// unwinds before reporting.
struct Report {
    ticket: Option<Ticket>,
    tx: Sender<Completion>,
}

impl Report {
    fn send(mut self, result: Result<Country, FetchError>) {
        if let Some(ticket) = self.ticket.take() {
            // The explorer may be gone already; nothing to report to then.
            let _ = self.tx.send((ticket, result));
        }
    }
}

impl Drop for Report {
    fn drop(&mut self) {
        if let Some(ticket) = self.ticket.take() {
            warn!("explorer: fetch for '{}' panicked", ticket.identifier());
            let err = FetchError::transport(format!(
                "background fetch for '{}' panicked",
                ticket.identifier()
            ));
            let _ = self.tx.send((ticket, Err(err)));
        }
    }
}
