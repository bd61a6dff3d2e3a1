//! A parsed Lazor puzzle: the starting board, the emitters that fire into
//! it, the points a solution must light up, and the blocks available to
//! place.

use rustc_hash::FxHashSet;

use crate::block::BlockKind;
use crate::coord::Coord;
use crate::lattice::BlockLattice;
use crate::laser::Laser;

/// How many of each movable block kind the solver may place.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Budget {
    pub reflect: u32,
    pub opaque: u32,
    pub refract: u32,
}

impl Budget {
    pub const fn total(&self) -> u32 {
        self.reflect + self.opaque + self.refract
    }

    /// The number of distinct block kinds with a non-zero count.
    pub fn distinct_kinds(&self) -> u32 {
        [self.reflect, self.opaque, self.refract]
            .iter()
            .filter(|&&n| n > 0)
            .count() as u32
    }

    /// The budget expressed as a flat multiset of kinds, REFLECT first, then
    /// OPAQUE, then REFRACT — the fixed ordering the enumerator's
    /// permutations are built from.
    pub fn as_kinds(&self) -> Vec<BlockKind> {
        let mut kinds = Vec::with_capacity(self.total() as usize);
        kinds.extend(std::iter::repeat(BlockKind::Reflect).take(self.reflect as usize));
        kinds.extend(std::iter::repeat(BlockKind::Opaque).take(self.opaque as usize));
        kinds.extend(std::iter::repeat(BlockKind::Refract).take(self.refract as usize));
        kinds
    }
}

/// A fully parsed puzzle, ready for the solver.
#[derive(Clone, Debug)]
pub struct Puzzle {
    /// The board before any movable block is placed.
    pub lattice: BlockLattice,
    pub emitters: Vec<Laser>,
    pub targets: FxHashSet<Coord>,
    pub budget: Budget,
}

impl Puzzle {
    pub fn new(
        lattice: BlockLattice,
        emitters: Vec<Laser>,
        targets: FxHashSet<Coord>,
        budget: Budget,
    ) -> Self {
        Self {
            lattice,
            emitters,
            targets,
            budget,
        }
    }
}
