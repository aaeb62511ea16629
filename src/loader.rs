//! Request/result/error state machine around a single fetch.
//!
//! `Idle -> Loading -> Success | Failure`, restartable from any state. Each
//! request gets a [`Ticket`] with a monotonically increasing sequence number;
//! only the latest ticket may settle the state, so a slow response for an
//! older identifier can never overwrite a newer one.

use crate::error::FetchError;
use crate::models::Country;
use log::{debug, warn};

/// Payloads that know which identifier they answer.
pub trait Keyed {
    fn matches_key(&self, identifier: &str) -> bool;
}

/// A list record never answers a detail request.
impl Keyed for Country {
    fn matches_key(&self, identifier: &str) -> bool {
        self.matches_code(identifier) && self.is_detail_complete()
    }
}

/// The list loader only ever runs under the single `"all"` key, so any
/// non-empty collection answers it.
impl Keyed for Vec<Country> {
    fn matches_key(&self, _identifier: &str) -> bool {
        !self.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoaderState<T> {
    Idle,
    Loading { identifier: String },
    Success(T),
    Failure(FetchError),
}

impl<T> LoaderState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoaderState::Loading { .. })
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            LoaderState::Success(v) => Some(v),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&FetchError> {
        match self {
            LoaderState::Failure(e) => Some(e),
            _ => None,
        }
    }
}

/// Proof that a request was started; hand it back to [`Loader::complete`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    seq: u64,
    identifier: String,
}

impl Ticket {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }
}

#[derive(Debug)]
pub struct Loader<T> {
    state: LoaderState<T>,
    seq: u64,
}

impl<T> Default for Loader<T> {
    fn default() -> Self {
        Self {
            state: LoaderState::Idle,
            seq: 0,
        }
    }
}

impl<T: Keyed + Clone> Loader<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &LoaderState<T> {
        &self.state
    }

    /// Start loading `identifier`.
    ///
    /// When `cached` already answers `identifier` the state goes straight to
    /// `Success` and `None` is returned: no request must be issued. Otherwise
    /// the state becomes `Loading` and the returned ticket supersedes every
    /// ticket issued before it.
    pub fn begin(&mut self, identifier: &str, cached: Option<&T>) -> Option<Ticket> {
        // A cache hit still invalidates whatever was in flight.
        self.seq += 1;
        if let Some(hit) = cached.filter(|c| c.matches_key(identifier)) {
            debug!("loader #{}: cache hit for '{}'", self.seq, identifier);
            self.state = LoaderState::Success(hit.clone());
            return None;
        }
        debug!("loader #{}: loading '{}'", self.seq, identifier);
        self.state = LoaderState::Loading {
            identifier: identifier.to_string(),
        };
        Some(Ticket {
            seq: self.seq,
            identifier: identifier.to_string(),
        })
    }

    /// Settle the request behind `ticket`. Returns `false` if the ticket is stale.
    pub fn complete(&mut self, ticket: Ticket, result: Result<T, FetchError>) -> bool {
        if ticket.seq != self.seq || !self.state.is_loading() {
            warn!(
                "loader: dropping stale result #{} for '{}' (current #{})",
                ticket.seq, ticket.identifier, self.seq
            );
            return false;
        }
        self.state = match result {
            Ok(value) => {
                debug!("loader #{}: '{}' loaded", ticket.seq, ticket.identifier);
                LoaderState::Success(value)
            }
            Err(err) => {
                warn!(
                    "loader #{}: '{}' failed ({}): {}",
                    ticket.seq,
                    ticket.identifier,
                    err.code(),
                    err
                );
                LoaderState::Failure(err)
            }
        };
        true
    }

    /// [`begin`](Self::begin), run `fetch` inline unless the cache answered,
    /// then [`complete`](Self::complete).
    pub fn load<F>(&mut self, identifier: &str, cached: Option<&T>, fetch: F) -> &LoaderState<T>
    where
        F: FnOnce(&str) -> Result<T, FetchError>,
    {
        if let Some(ticket) = self.begin(identifier, cached) {
            let result = fetch(identifier);
            self.complete(ticket, result);
        }
        &self.state
    }

    /// Back to `Idle`; outstanding tickets become stale.
    pub fn reset(&mut self) {
        self.seq += 1;
        self.state = LoaderState::Idle;
    }
}
