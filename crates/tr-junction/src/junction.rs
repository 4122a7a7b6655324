//! Junction classification.
//!
//! # Where rules come from
//!
//! ```text
//! 1. open side (3-way only)     stack read upward from the open neighbour
//! 2. two cells below the rail   stack read downward; overrides (1)
//! 3. corners + above            four diagonal neighbours and the cell above,
//!                               each read upward; used only when (1) and (2)
//!                               found nothing, and only if exactly one of the
//!                               five locations carries rules
//! ```
//!
//! A location "carries rules" when its stack opens with the junction header
//! and at least one line parses as a [`RuleLine`].

use log::trace;

use tr_core::{Cell, Direction, Material, RouterConfig};
use tr_world::WorldView;

use crate::{RuleLine, SignStack, StackDirection};

/// Offsets (besides the open side) that may hold a junction's sign stack.
const SIGN_LOCATIONS: [Direction; 5] = [
    Direction::NorthEast,
    Direction::SouthEast,
    Direction::NorthWest,
    Direction::SouthWest,
    Direction::Up,
];

/// Depth below the rail of the overriding downward stack.
const UNDER_SIGN_DEPTH: i32 = 2;

// ── Junction ──────────────────────────────────────────────────────────────────

/// A rail cell the router is allowed to reorient, with its rules.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Junction {
    cell:      Cell,
    rules:     Vec<RuleLine>,
    open_side: Option<Direction>,
}

impl Junction {
    /// Returns `None` when `rules` is empty: a junction without rules is not
    /// a routed junction.
    pub fn new(cell: Cell, rules: Vec<RuleLine>, open_side: Option<Direction>) -> Option<Junction> {
        if rules.is_empty() {
            return None;
        }
        Some(Junction { cell, rules, open_side })
    }

    #[inline]
    pub fn cell(&self) -> Cell {
        self.cell
    }

    /// Rules in reading order.
    #[inline]
    pub fn rules(&self) -> &[RuleLine] {
        &self.rules
    }

    /// The unconnected side of a 3-way junction; `None` for a 4-way one.
    #[inline]
    pub fn open_side(&self) -> Option<Direction> {
        self.open_side
    }
}

// ── Rule extraction ───────────────────────────────────────────────────────────

/// Read the sign stack at `anchor` and return its rules if it opens with
/// `header` and yields at least one rule.
pub fn collect_rules<W: WorldView>(
    world:  &W,
    anchor: Cell,
    dir:    StackDirection,
    header: &str,
) -> Option<Vec<RuleLine>> {
    SignStack::read(world, anchor, dir)?
        .rules(header)
        .filter(|rules| !rules.is_empty())
}

// ── JunctionModel ─────────────────────────────────────────────────────────────

/// Classifies rail cells as routed junctions.
///
/// Stateless apart from the header token; every call re-reads the world.
#[derive(Clone, Debug)]
pub struct JunctionModel {
    header: String,
}

impl JunctionModel {
    pub fn new(config: &RouterConfig) -> Self {
        Self::with_header(config.junction_header.clone())
    }

    pub fn with_header(header: impl Into<String>) -> Self {
        Self { header: header.into() }
    }

    /// Classify `cell`.  `None` if it is not a rail, has more than one open
    /// side, or has no unambiguous rule stack.
    pub fn classify<W: WorldView>(&self, world: &W, cell: Cell) -> Option<Junction> {
        self.classify_in_order(world, cell, Direction::CARDINALS)
    }

    /// [`classify`](Self::classify) with an explicit neighbour scan order.
    /// The result does not depend on the order.
    pub(crate) fn classify_in_order<W: WorldView>(
        &self,
        world: &W,
        cell:  Cell,
        order: [Direction; 4],
    ) -> Option<Junction> {
        if !world.is_rail(cell) {
            return None;
        }

        let mut open_side = None;
        let mut rules = None;

        for dir in order {
            let neighbor = cell.relative(dir);
            if joins(world, neighbor, dir) {
                continue;
            }
            if open_side.is_some() {
                return None;
            }
            open_side = Some(dir);
            rules = collect_rules(world, neighbor, StackDirection::Up, &self.header);
        }

        let under = cell.relative_n(Direction::Down, UNDER_SIGN_DEPTH);
        if let Some(under_rules) = collect_rules(world, under, StackDirection::Down, &self.header) {
            rules = Some(under_rules);
        }

        let rules = match rules {
            Some(r) => r,
            None => self.unique_nearby_rules(world, cell)?,
        };

        Junction::new(cell, rules, open_side)
    }

    fn unique_nearby_rules<W: WorldView>(&self, world: &W, cell: Cell) -> Option<Vec<RuleLine>> {
        let mut found = None;
        for dir in SIGN_LOCATIONS {
            let Some(rules) = collect_rules(world, cell.relative(dir), StackDirection::Up, &self.header)
            else {
                continue;
            };
            if found.is_some() {
                trace!("junction at {cell}: ambiguous rule signs, ignoring");
                return None;
            }
            found = Some(rules);
        }
        found
    }
}

/// Whether the neighbour of a rail in direction `dir` continues the track:
/// a rail facing along or 45° off `dir`, or an air gap above a slope that
/// climbs back toward the rail.
fn joins<W: WorldView>(world: &W, neighbor: Cell, dir: Direction) -> bool {
    if world
        .orientation_at(neighbor)
        .is_some_and(|o| o.facing().is_connected(dir))
    {
        return true;
    }
    world.material_at(neighbor) == Material::Air
        && world
            .orientation_at(neighbor.down())
            .is_some_and(|o| o.is_slope() && Some(o.facing()) == dir.opposite())
}
