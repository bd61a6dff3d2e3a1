//! The padded board: a rectangular matrix of `Block`, indexed `(x, y)`.
//!
//! Cells live in a single `Vec` addressed by a row-major linear index,
//! rather than a `Vec<Vec<_>>`, to keep cloning and indexing cheap.

use crate::block::{Block, BlockKind};
use crate::coord::{in_bounds, Coord};
use crate::error::SolveError;

/// A padded Lazor board.
///
/// Invariant: `width` and `height` are both odd. A source cell at row `r`,
/// column `c` lands at lattice position `(2c+1, 2r+1)` — block slots are
/// always `(odd, odd)`. Every other cell, including entire even-indexed
/// rows and columns, is interstitial padding (`NONE`, fixed).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlockLattice {
    width: usize,
    height: usize,
    cells: Vec<Block>,
}

impl BlockLattice {
    /// Builds a lattice from already-padded rows (row-major, one `Vec<Block>` per row).
    ///
    /// Panics if `rows` is empty or ragged — this is a constructor invariant,
    /// not a runtime condition a caller can hit past the parser.
    pub fn from_rows(rows: Vec<Vec<Block>>) -> Self {
        let height = rows.len();
        assert!(height > 0, "lattice must have at least one row");
        let width = rows[0].len();
        assert!(width > 0, "lattice rows must be non-empty");
        assert!(
            rows.iter().all(|row| row.len() == width),
            "lattice rows must share a common width"
        );

        let mut cells = Vec::with_capacity(width * height);
        for row in rows {
            cells.extend(row);
        }

        Self {
            width,
            height,
            cells,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> usize {
        y as usize * self.width + x as usize
    }

    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        in_bounds(x, y, self.width, self.height)
    }

    /// Reads the block at `(x, y)`.
    ///
    /// # Panics
    /// Panics if `(x, y)` is out of bounds — callers are expected to check
    /// `in_bounds` first, as the simulator does before every lookup.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Block {
        assert!(self.in_bounds(x, y), "get({x}, {y}) out of bounds");
        self.cells[self.index(x, y)]
    }

    /// Places `block` at `(x, y)`, provided the target cell is empty and unfixed.
    pub fn set(&mut self, x: i32, y: i32, block: Block) -> Result<(), SolveError> {
        if !self.in_bounds(x, y) {
            return Err(SolveError::OutOfBounds { x, y });
        }
        let idx = self.index(x, y);
        if !self.cells[idx].is_empty() {
            return Err(SolveError::NotEmpty { x, y });
        }
        self.cells[idx] = block;
        Ok(())
    }

    /// All positions currently holding an unfixed `Empty` block, in row-major order.
    pub fn empty_positions(&self) -> Vec<Coord> {
        let mut positions = Vec::new();
        for y in 0..self.height {
            for x in 0..self.width {
                if self.cells[y * self.width + x].is_empty() {
                    positions.push((x as i32, y as i32));
                }
            }
        }
        positions
    }

    /// Restores this lattice to match `snapshot`, cell for cell, without reallocating.
    pub fn reset_from(&mut self, snapshot: &BlockLattice) {
        debug_assert_eq!(self.width, snapshot.width);
        debug_assert_eq!(self.height, snapshot.height);
        self.cells.copy_from_slice(&snapshot.cells);
    }

    /// Renders the board as one character per logical (unpadded) cell.
    ///
    /// `.` empty, `x` forbidden, `A`/`B`/`C` for REFLECT/OPAQUE/REFRACT.
    /// Used by `render::board_to_string`; kept here because it only needs
    /// the lattice's own addressing.
    pub fn format_logical(&self) -> String {
        let logical_rows = (self.height - 1) / 2;
        let logical_cols = (self.width - 1) / 2;
        let mut out = String::with_capacity(logical_rows * (logical_cols + 1));

        for r in 0..logical_rows {
            for c in 0..logical_cols {
                let block = self.get((2 * c + 1) as i32, (2 * r + 1) as i32);
                let ch = match block.kind {
                    BlockKind::Empty => '.',
                    BlockKind::None => 'x',
                    BlockKind::Reflect => 'A',
                    BlockKind::Opaque => 'B',
                    BlockKind::Refract => 'C',
                    BlockKind::LaserTrace => '*',
                };
                out.push(ch);
            }
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny() -> BlockLattice {
        // 1x1 logical "o" padded to 3x3
        let n = Block::NONE;
        BlockLattice::from_rows(vec![
            vec![n, n, n],
            vec![n, Block::EMPTY, n],
            vec![n, n, n],
        ])
    }

    #[test]
    fn empty_positions_row_major() {
        let lattice = tiny();
        assert_eq!(lattice.empty_positions(), vec![(1, 1)]);
    }

    #[test]
    fn set_rejects_fixed_cells() {
        let mut lattice = tiny();
        let err = lattice.set(0, 0, Block::reflect(false)).unwrap_err();
        assert_eq!(err, SolveError::NotEmpty { x: 0, y: 0 });
    }

    #[test]
    fn set_then_reset_restores_snapshot() {
        let snapshot = tiny();
        let mut scratch = snapshot.clone();
        scratch.set(1, 1, Block::reflect(false)).unwrap();
        assert_ne!(scratch, snapshot);
        scratch.reset_from(&snapshot);
        assert_eq!(scratch, snapshot);
    }

    #[test]
    fn out_of_bounds_rejected() {
        let mut lattice = tiny();
        let err = lattice.set(5, 5, Block::reflect(false)).unwrap_err();
        assert_eq!(err, SolveError::OutOfBounds { x: 5, y: 5 });
    }
}
