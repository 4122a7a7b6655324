//! `RailSearch`: a resumable walk along the track from an origin cell.
//!
//! # States
//!
//! ```text
//!          ┌──────────── pending direction ───────────┐
//!          ▼                                          │
//!   Idle ──pop──► Traversing ──walk ends──► Reporting ┘
//!    │                │  ▲
//!    │ none left      └──┘ budget spent: suspend, keep cursor
//!    ▼
//!   Done
//! ```
//!
//! One call to [`RailSearch::step`] is one scheduling slice.  A slice ends
//! when the cell budget is spent or when the current direction's walk ends,
//! so at most one direction is reported per slice.
//!
//! # Walking
//!
//! The cursor first drops through air to whatever lies below.  The walk
//! ends on anything that is not a rail, or on a (cell, direction) pair it
//! has already visited, so closed loops terminate.  Junctions add every
//! label a vehicle could be sent off toward without reversing, and the
//! walk itself follows the `default` rule.  Other rails turn by
//! [`check_turn`].  Leaving a slope uphill also steps up one cell.

use std::collections::{BTreeSet, VecDeque};
use std::fmt;

use rustc_hash::FxHashSet;

use tr_core::{Cell, Direction, Material, RouterConfig, DEFAULT_LABEL};
use tr_junction::JunctionModel;
use tr_routing::{check_turn, resolve_direction};
use tr_world::WorldView;

// ── Reports ───────────────────────────────────────────────────────────────────

/// Destinations reachable by leaving the origin in one direction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirectionReport {
    /// Direction the walk left the origin in.
    pub direction: Direction,
    /// Discovered labels, sorted.
    pub labels: Vec<String>,
}

impl fmt::Display for DirectionReport {
    /// `"<compass name>: label; label; "`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.direction.compass_name())?;
        for label in &self.labels {
            write!(f, "{label}; ")?;
        }
        Ok(())
    }
}

/// Whether a search has more slices to run.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum SearchStatus {
    /// Call [`RailSearch::step`] again after the slice delay.
    Suspended,
    /// Every direction has been walked.
    Done,
}

/// Result of one [`RailSearch::step`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Slice {
    /// Rail cells processed in this slice.
    pub cells: usize,
    /// Set when a direction's walk ended with at least one label found.
    pub report: Option<DirectionReport>,
    pub status: SearchStatus,
}

// ── Walk ──────────────────────────────────────────────────────────────────────

/// The in-progress walk for one initial direction.
#[derive(Clone, Debug)]
struct Walk {
    first:     Direction,
    cursor:    Cell,
    direction: Direction,
    visited:   FxHashSet<(Cell, Direction)>,
    found:     BTreeSet<String>,
}

impl Walk {
    fn new(origin: Cell, first: Direction) -> Self {
        Self {
            first,
            cursor:    origin.relative(first),
            direction: first,
            visited:   FxHashSet::default(),
            found:     BTreeSet::new(),
        }
    }

    /// Process the cell under the cursor and move on.  `false` when the walk
    /// has ended.
    fn advance<W: WorldView>(&mut self, world: &W, model: &JunctionModel) -> bool {
        let mut cell = self.cursor;
        while world.material_at(cell) == Material::Air {
            cell = cell.down();
        }
        self.cursor = cell;

        if !self.visited.insert((cell, self.direction)) {
            return false;
        }
        let Some(orientation) = world.orientation_at(cell) else {
            return false;
        };

        self.direction = match model.classify(world, cell) {
            Some(junction) => {
                let reverse = self.direction.opposite();
                self.found.extend(
                    junction
                        .rules()
                        .iter()
                        .filter(|rule| Some(rule.direction) != reverse && !rule.is_default())
                        .map(|rule| rule.label.clone()),
                );
                resolve_direction(DEFAULT_LABEL, junction.rules(), self.direction)
            }
            None => check_turn(self.direction, orientation),
        };

        let mut next = cell.relative(self.direction);
        if orientation.is_slope() && orientation.facing() == self.direction {
            next = next.up();
        }
        self.cursor = next;
        true
    }

    fn into_report(self) -> Option<DirectionReport> {
        if self.found.is_empty() {
            return None;
        }
        Some(DirectionReport {
            direction: self.first,
            labels:    self.found.into_iter().collect(),
        })
    }
}

// ── RailSearch ────────────────────────────────────────────────────────────────

/// Resumable search for the destinations reachable from `origin`.
///
/// Owns all of its state; two searches never share containers.
#[derive(Clone, Debug)]
pub struct RailSearch {
    origin:          Cell,
    pending:         VecDeque<Direction>,
    walk:            Option<Walk>,
    model:           JunctionModel,
    cells_per_slice: usize,
}

impl RailSearch {
    pub fn new(origin: Cell, config: &RouterConfig) -> Self {
        Self {
            origin,
            pending:         Direction::CARDINALS.into_iter().collect(),
            walk:            None,
            model:           JunctionModel::new(config),
            cells_per_slice: config.cells_per_slice.max(1),
        }
    }

    pub fn origin(&self) -> Cell {
        self.origin
    }

    /// The initial direction currently being walked, if a walk is in
    /// progress.
    pub fn current_direction(&self) -> Option<Direction> {
        self.walk.as_ref().map(|w| w.first)
    }

    pub fn is_done(&self) -> bool {
        self.walk.is_none() && self.pending.is_empty()
    }

    /// Run one slice.
    pub fn step<W: WorldView>(&mut self, world: &W) -> Slice {
        let mut walk = match self.walk.take() {
            Some(walk) => walk,
            None => match self.pending.pop_front() {
                Some(first) => Walk::new(self.origin, first),
                None => {
                    return Slice { cells: 0, report: None, status: SearchStatus::Done };
                }
            },
        };

        let mut cells = 0;
        loop {
            if cells == self.cells_per_slice {
                self.walk = Some(walk);
                return Slice { cells, report: None, status: SearchStatus::Suspended };
            }
            if !walk.advance(world, &self.model) {
                break;
            }
            cells += 1;
        }

        let status = if self.pending.is_empty() {
            SearchStatus::Done
        } else {
            SearchStatus::Suspended
        };
        Slice { cells, report: walk.into_report(), status }
    }
}
