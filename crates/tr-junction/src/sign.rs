//! Vertical stacks of signs.
//!
//! Rule text may overflow one sign, so signs are stacked vertically and
//! read as one document, top sign first, each sign's lines in order.  The
//! first line of that document must be the junction header.

use tr_core::text::matches_header;
use tr_core::{Cell, Direction, RouterConfig};
use tr_world::WorldView;

use crate::RuleLine;

/// Which way to walk from the anchor cell when gathering a stack.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum StackDirection {
    /// Anchor is the bottom sign; walk upward.
    Up,
    /// Anchor is the top sign; walk downward.
    Down,
}

impl StackDirection {
    fn step(self) -> Direction {
        match self {
            StackDirection::Up => Direction::Up,
            StackDirection::Down => Direction::Down,
        }
    }
}

/// Signs gathered from one contiguous vertical run, in reading order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignStack {
    signs: Vec<[String; 4]>,
}

impl SignStack {
    /// Gather the run of signs starting at `anchor`.
    ///
    /// Returns `None` if `anchor` is not a sign.
    pub fn read<W: WorldView>(world: &W, anchor: Cell, dir: StackDirection) -> Option<SignStack> {
        let mut signs = Vec::new();
        let mut cell = anchor;
        while let Some(lines) = world.sign_lines_at(cell) {
            signs.push(lines);
            cell = cell.relative(dir.step());
        }
        if signs.is_empty() {
            return None;
        }
        if dir == StackDirection::Up {
            signs.reverse();
        }
        Some(SignStack { signs })
    }

    /// Number of signs in the stack.
    pub fn len(&self) -> usize {
        self.signs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signs.is_empty()
    }

    /// Every line of the stack in reading order.
    pub fn lines(&self) -> impl Iterator<Item = &str> + '_ {
        self.signs.iter().flat_map(|s| s.iter().map(String::as_str))
    }

    /// Parsed rules, if the stack opens with `header`.
    ///
    /// The header line itself is never a rule; malformed lines are skipped
    /// without affecting the rest.
    pub fn rules(&self, header: &str) -> Option<Vec<RuleLine>> {
        let mut lines = self.lines();
        if !matches_header(lines.next()?, header) {
            return None;
        }
        Some(lines.filter_map(RuleLine::parse).collect())
    }
}

/// The kinds of sign the router recognises by their first line.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum SignHeader {
    Junction,
    Destination,
}

impl SignHeader {
    /// Classify a sign by its first line.
    pub fn of(first_line: &str, config: &RouterConfig) -> Option<SignHeader> {
        if matches_header(first_line, &config.junction_header) {
            Some(SignHeader::Junction)
        } else if matches_header(first_line, &config.destination_header) {
            Some(SignHeader::Destination)
        } else {
            None
        }
    }
}
