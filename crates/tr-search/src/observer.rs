//! Search observer trait: where search progress and results go.

use tr_core::{Cell, SearchId, Tick};

use crate::DirectionReport;

/// Callbacks invoked by [`SearchRunner`][crate::SearchRunner].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
pub trait SearchObserver {
    /// A search was started from `origin`.
    fn on_search_started(&mut self, _id: SearchId, _origin: Cell, _tick: Tick) {}

    /// One slice of `id` ran, processing `cells` rail cells.
    fn on_slice(&mut self, _id: SearchId, _tick: Tick, _cells: usize) {}

    /// A direction's walk found destinations.
    fn on_report(&mut self, _id: SearchId, _report: &DirectionReport) {}

    /// Every direction of `id` has been walked.
    fn on_search_complete(&mut self, _id: SearchId, _tick: Tick) {}
}

/// A [`SearchObserver`] that does nothing.
pub struct NoopObserver;

impl SearchObserver for NoopObserver {}

/// Collects the text a requester would be shown, per search.
#[derive(Default, Debug)]
pub struct MessageLog {
    pub messages: Vec<(SearchId, String)>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages for one search, in order.
    pub fn for_search(&self, id: SearchId) -> impl Iterator<Item = &str> + '_ {
        self.messages
            .iter()
            .filter(move |(search, _)| *search == id)
            .map(|(_, text)| text.as_str())
    }
}

impl SearchObserver for MessageLog {
    fn on_search_started(&mut self, id: SearchId, _origin: Cell, _tick: Tick) {
        self.messages.push((id, "Junction search started".to_owned()));
    }

    fn on_report(&mut self, id: SearchId, report: &DirectionReport) {
        self.messages.push((id, report.to_string()));
    }

    fn on_search_complete(&mut self, id: SearchId, _tick: Tick) {
        self.messages.push((id, "Search complete".to_owned()));
    }
}
