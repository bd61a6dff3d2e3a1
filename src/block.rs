//! Block types occupying a single lattice cell.
//!
//! A `Block` is a closed variant: dispatch on its kind is a dense match,
//! never a trait object (see `DESIGN.md` for the grounding).

/// The kind of a block, independent of whether it is movable.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum BlockKind {
    /// Available for placement.
    Empty,
    /// Forbidden / interstitial padding cell; never interacts with a laser.
    None,
    Reflect,
    Opaque,
    Refract,
    /// Produced only by the simulator, for rendering a laser's path.
    LaserTrace,
}

impl BlockKind {
    /// Whether a laser stepping past this kind interacts with it at all.
    #[inline]
    pub fn is_interactive(self) -> bool {
        matches!(self, Self::Reflect | Self::Opaque | Self::Refract)
    }
}

/// A single cell of a `BlockLattice`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct Block {
    pub kind: BlockKind,
    pub fixed: bool,
}

impl Block {
    pub const EMPTY: Self = Self {
        kind: BlockKind::Empty,
        fixed: false,
    };

    pub const NONE: Self = Self {
        kind: BlockKind::None,
        fixed: true,
    };

    pub const LASER_TRACE: Self = Self {
        kind: BlockKind::LaserTrace,
        fixed: true,
    };

    #[inline]
    pub const fn reflect(fixed: bool) -> Self {
        Self {
            kind: BlockKind::Reflect,
            fixed,
        }
    }

    #[inline]
    pub const fn opaque(fixed: bool) -> Self {
        Self {
            kind: BlockKind::Opaque,
            fixed,
        }
    }

    #[inline]
    pub const fn refract(fixed: bool) -> Self {
        Self {
            kind: BlockKind::Refract,
            fixed,
        }
    }

    #[inline]
    pub const fn movable(kind: BlockKind) -> Self {
        Self { kind, fixed: false }
    }

    /// Whether this cell is free for the enumerator to place a block on.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.kind == BlockKind::Empty && !self.fixed
    }
}
