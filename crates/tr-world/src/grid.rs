//! Sparse in-memory world and builder.
//!
//! # Data layout
//!
//! Only non-air cells are stored, in an `FxHashMap<Cell, Block>`.  Cells that
//! were never set resolve by height:
//!
//! ```text
//! y <  min_y               → Void  (outside loaded data)
//! y <  ground_y (if set)   → Solid (bulk terrain)
//! otherwise                → Air
//! ```
//!
//! Tests describe a layout with [`GridWorldBuilder`]; the router then reads
//! and writes it through the [`WorldView`]/[`World`] traits.

use rustc_hash::FxHashMap;

use tr_core::{Cell, Direction, Material, TrackOrientation};

use crate::{World, WorldError, WorldResult, WorldView};

/// Four lines of sign text.
pub type SignText = [String; 4];

/// Contents of one stored cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Block {
    Rail(TrackOrientation),
    Sign(Box<SignText>),
    Solid,
    Air,
}

impl Block {
    fn material(&self) -> Material {
        match self {
            Block::Rail(_) => Material::Rail,
            Block::Sign(_) => Material::Sign,
            Block::Solid   => Material::Solid,
            Block::Air     => Material::Air,
        }
    }
}

// ── GridWorld ─────────────────────────────────────────────────────────────────

/// A sparse voxel world.  Construct with [`GridWorldBuilder`].
#[derive(Clone, Debug)]
pub struct GridWorld {
    cells:    FxHashMap<Cell, Block>,
    ground_y: Option<i32>,
    min_y:    i32,
    /// Number of successful orientation writes since construction.
    pub writes: usize,
}

impl GridWorld {
    /// An empty world with no ground: everything is air down to `min_y`.
    pub fn empty() -> Self {
        GridWorldBuilder::new().build()
    }

    /// Number of explicitly stored cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    fn is_loaded(&self, cell: Cell) -> bool {
        cell.y >= self.min_y
    }
}

impl WorldView for GridWorld {
    fn material_at(&self, cell: Cell) -> Material {
        if !self.is_loaded(cell) {
            return Material::Void;
        }
        match self.cells.get(&cell) {
            Some(block) => block.material(),
            None => match self.ground_y {
                Some(ground) if cell.y < ground => Material::Solid,
                _ => Material::Air,
            },
        }
    }

    fn orientation_at(&self, cell: Cell) -> Option<TrackOrientation> {
        match self.cells.get(&cell)? {
            Block::Rail(o) => Some(*o),
            _ => None,
        }
    }

    fn sign_lines_at(&self, cell: Cell) -> Option<[String; 4]> {
        match self.cells.get(&cell)? {
            Block::Sign(text) => Some((**text).clone()),
            _ => None,
        }
    }
}

impl World for GridWorld {
    fn set_orientation_at(&mut self, cell: Cell, orientation: TrackOrientation) -> WorldResult<()> {
        if !self.is_loaded(cell) {
            return Err(WorldError::Unloaded(cell));
        }
        match self.cells.get_mut(&cell) {
            Some(Block::Rail(o)) => {
                *o = orientation;
                self.writes += 1;
                Ok(())
            }
            _ => Err(WorldError::NotTrack(cell)),
        }
    }
}

// ── GridWorldBuilder ──────────────────────────────────────────────────────────

/// Construct a [`GridWorld`] incrementally, then call [`build`](Self::build).
///
/// # Example
///
/// ```
/// use tr_core::{Cell, Direction, TrackOrientation};
/// use tr_world::{GridWorldBuilder, WorldView};
///
/// let world = GridWorldBuilder::new()
///     .ground(0)
///     .rail_line(Cell::new(0, 0, 0), Direction::North, 5)
///     .sign(Cell::new(1, 0, -2), &["[junction]", "home:N"])
///     .build();
/// assert_eq!(world.orientation_at(Cell::new(0, 0, -4)), Some(TrackOrientation::NORTH_SOUTH));
/// ```
pub struct GridWorldBuilder {
    cells:    FxHashMap<Cell, Block>,
    ground_y: Option<i32>,
    min_y:    i32,
}

impl GridWorldBuilder {
    /// Lowest loaded layer when [`min_y`](Self::min_y) is not called.
    pub const DEFAULT_MIN_Y: i32 = -64;

    pub fn new() -> Self {
        Self {
            cells:    FxHashMap::default(),
            ground_y: None,
            min_y:    Self::DEFAULT_MIN_Y,
        }
    }

    /// Fill every unset cell below `y` with solid terrain.
    pub fn ground(mut self, y: i32) -> Self {
        self.ground_y = Some(y);
        self
    }

    /// Cells below `y` are outside loaded data.
    pub fn min_y(mut self, y: i32) -> Self {
        self.min_y = y;
        self
    }

    /// Place a rail with the given orientation.
    pub fn rail(mut self, cell: Cell, orientation: TrackOrientation) -> Self {
        self.cells.insert(cell, Block::Rail(orientation));
        self
    }

    /// Place `len` straight rails starting at `start` and heading `dir`.
    ///
    /// Non-cardinal directions place nothing.
    pub fn rail_line(mut self, start: Cell, dir: Direction, len: i32) -> Self {
        if let Some(orientation) = TrackOrientation::straight(dir) {
            for i in 0..len {
                self.cells.insert(start.relative_n(dir, i), Block::Rail(orientation));
            }
        }
        self
    }

    /// Place a sign.  Missing lines are blank; lines past the fourth are
    /// dropped.
    pub fn sign(mut self, cell: Cell, lines: &[&str]) -> Self {
        let mut text: SignText = Default::default();
        for (slot, line) in text.iter_mut().zip(lines) {
            *slot = (*line).to_owned();
        }
        self.cells.insert(cell, Block::Sign(Box::new(text)));
        self
    }

    pub fn solid(mut self, cell: Cell) -> Self {
        self.cells.insert(cell, Block::Solid);
        self
    }

    /// Force a cell to air, even below ground.
    pub fn air(mut self, cell: Cell) -> Self {
        self.cells.insert(cell, Block::Air);
        self
    }

    pub fn build(self) -> GridWorld {
        GridWorld {
            cells:    self.cells,
            ground_y: self.ground_y,
            min_y:    self.min_y,
            writes:   0,
        }
    }
}

impl Default for GridWorldBuilder {
    fn default() -> Self {
        Self::new()
    }
}
