//! The `SearchRunner`: drives rail searches from the host's tick loop.

use log::{debug, info, trace};
use rustc_hash::FxHashMap;

use tr_core::{Cell, RouterConfig, SearchId, Tick};
use tr_world::WorldView;

use crate::{RailSearch, SearchObserver, SearchStatus, WakeQueue};

/// Owns every in-flight search and resumes each one `slice_delay_ticks`
/// after its previous slice.
///
/// The host calls [`run_tick`](Self::run_tick) once per tick.  Searches
/// never run concurrently; each slice runs to its budget and returns.
///
/// # Example
///
/// ```
/// use tr_core::{Cell, Direction, RouterConfig};
/// use tr_search::{MessageLog, SearchRunner};
/// use tr_world::GridWorldBuilder;
///
/// let world = GridWorldBuilder::new()
///     .ground(0)
///     .rail_line(Cell::new(0, 0, -1), Direction::North, 5)
///     .build();
/// let mut runner = SearchRunner::new(RouterConfig::default());
/// let mut log = MessageLog::new();
/// let id = runner.start(&world, Cell::new(0, 0, 0), &mut log);
/// runner.run_until_idle(&world, &mut log);
/// assert_eq!(log.for_search(id).last(), Some("Search complete"));
/// ```
pub struct SearchRunner {
    config:   RouterConfig,
    searches: FxHashMap<SearchId, RailSearch>,
    queue:    WakeQueue,
    now:      Tick,
    next_id:  u32,
}

impl SearchRunner {
    pub fn new(config: RouterConfig) -> Self {
        Self {
            config,
            searches: FxHashMap::default(),
            queue:    WakeQueue::new(),
            now:      Tick::ZERO,
            next_id:  0,
        }
    }

    /// The tick the next [`run_tick`](Self::run_tick) call will process.
    pub fn now(&self) -> Tick {
        self.now
    }

    /// Number of searches that still have slices to run.
    pub fn active(&self) -> usize {
        self.searches.len()
    }

    pub fn is_idle(&self) -> bool {
        self.searches.is_empty()
    }

    /// Start a search from `origin` and run its first slice immediately.
    pub fn start<W: WorldView, O: SearchObserver>(
        &mut self,
        world:    &W,
        origin:   Cell,
        observer: &mut O,
    ) -> SearchId {
        let id = self.issue_id();
        debug!("{id}: search started at {origin}");
        observer.on_search_started(id, origin, self.now);
        self.run_slice(id, RailSearch::new(origin, &self.config), world, observer);
        id
    }

    /// Stop resuming `id` and drop its queued slice.  Returns `false` if it
    /// was not running.
    pub fn abandon(&mut self, id: SearchId) -> bool {
        let removed = self.searches.remove(&id).is_some();
        if removed {
            let wake = self.queue.remove(id);
            debug!("{id}: abandoned, was due at {wake:?}");
        }
        removed
    }

    /// Number of searches waiting in the wake queue.
    pub fn queued(&self) -> usize {
        self.queue.len()
    }

    /// Run every slice due at the current tick, then advance the clock.
    ///
    /// Returns the number of slices run.
    pub fn run_tick<W: WorldView, O: SearchObserver>(&mut self, world: &W, observer: &mut O) -> usize {
        let mut ran = 0;
        if let Some(due) = self.queue.drain_tick(self.now) {
            for id in due {
                let Some(search) = self.searches.remove(&id) else {
                    debug_assert!(false, "{id} queued without a search");
                    continue;
                };
                self.run_slice(id, search, world, observer);
                ran += 1;
            }
        }
        self.now = self.now.next();
        ran
    }

    /// Jump from one scheduled tick to the next until no search is left.
    ///
    /// Returns the tick after the last slice.
    pub fn run_until_idle<W: WorldView, O: SearchObserver>(&mut self, world: &W, observer: &mut O) -> Tick {
        while let Some(tick) = self.queue.next_tick() {
            self.now = tick;
            self.run_tick(world, observer);
        }
        self.now
    }

    /// Next free id.  Wraps past [`SearchId::INVALID`] and skips ids still
    /// in flight.
    fn issue_id(&mut self) -> SearchId {
        loop {
            let id = SearchId(self.next_id);
            self.next_id = match self.next_id.checked_add(1) {
                Some(next) if next != SearchId::INVALID.0 => next,
                _ => 0,
            };
            if id.is_valid() && !self.searches.contains_key(&id) {
                return id;
            }
        }
    }

    /// Start issuing ids at `first`.
    #[cfg(test)]
    pub(crate) fn with_next_id(mut self, first: u32) -> Self {
        self.next_id = first;
        self
    }

    fn run_slice<W: WorldView, O: SearchObserver>(
        &mut self,
        id:         SearchId,
        mut search: RailSearch,
        world:      &W,
        observer:   &mut O,
    ) {
        let slice = search.step(world);
        trace!("{id}: slice at {} walked {} cells", self.now, slice.cells);
        observer.on_slice(id, self.now, slice.cells);

        if let Some(report) = &slice.report {
            observer.on_report(id, report);
        }

        match slice.status {
            SearchStatus::Suspended => {
                // A zero delay would schedule into the tick being drained.
                let resume = self.now + self.config.slice_delay_ticks.max(1);
                self.queue.push(resume, id);
                self.searches.insert(id, search);
            }
            SearchStatus::Done => {
                info!("{id}: search from {} complete at {}", search.origin(), self.now);
                observer.on_search_complete(id, self.now);
            }
        }
    }
}
