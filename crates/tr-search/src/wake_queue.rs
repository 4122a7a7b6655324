//! `WakeQueue`: searches waiting for their next slice, keyed by tick.
//!
//! A suspended search registers the tick at which it wants to run again.
//! Each tick the runner drains only the searches due at that tick.  A search
//! holds at most one slot: scheduling it again moves it, and
//! [`WakeQueue::remove`] takes it out entirely so a cancelled search never
//! pulls the clock forward.

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;

use tr_core::{SearchId, Tick};

/// Maps host ticks to the searches that resume at that tick.
#[derive(Default, Debug)]
pub struct WakeQueue {
    by_tick: BTreeMap<Tick, Vec<SearchId>>,
    /// The tick each queued search is waiting for.
    slot:    FxHashMap<SearchId, Tick>,
}

impl WakeQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `search` to resume at `tick`, replacing any earlier slot.
    pub fn push(&mut self, tick: Tick, search: SearchId) {
        if let Some(old) = self.slot.insert(search, tick) {
            self.unlink(old, search);
        }
        self.by_tick.entry(tick).or_default().push(search);
    }

    /// Take `search` out of the queue.  Returns the tick it was waiting for.
    pub fn remove(&mut self, search: SearchId) -> Option<Tick> {
        let tick = self.slot.remove(&search)?;
        self.unlink(tick, search);
        Some(tick)
    }

    /// Remove and return all searches scheduled for exactly `tick`, in the
    /// order they were pushed.
    pub fn drain_tick(&mut self, tick: Tick) -> Option<Vec<SearchId>> {
        let searches = self.by_tick.remove(&tick)?;
        for id in &searches {
            self.slot.remove(id);
        }
        Some(searches)
    }

    /// The earliest tick with at least one queued search.
    pub fn next_tick(&self) -> Option<Tick> {
        self.by_tick.keys().next().copied()
    }

    /// The tick `search` is waiting for, if queued.
    pub fn scheduled(&self, search: SearchId) -> Option<Tick> {
        self.slot.get(&search).copied()
    }

    /// Number of queued searches.
    pub fn len(&self) -> usize {
        self.slot.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slot.is_empty()
    }

    /// Number of distinct ticks with at least one queued search.
    pub fn tick_count(&self) -> usize {
        self.by_tick.len()
    }

    fn unlink(&mut self, tick: Tick, search: SearchId) {
        if let Some(ids) = self.by_tick.get_mut(&tick) {
            ids.retain(|&id| id != search);
            if ids.is_empty() {
                self.by_tick.remove(&tick);
            }
        }
    }
}
