//! Renders a solved (or attempted) board as plain text: one character per
//! logical cell, plus an optional report with a human readable summary
//! written next to whatever other artifact the caller also produces.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::block::BlockKind;
use crate::coord::Coord;
use crate::solver::Solution;

/// Renders the board alone, one character per logical cell.
pub fn board_to_string(solution: &Solution) -> String {
    solution.lattice.format_logical()
}

/// Renders the board with every visited point overlaid as `*`, except where
/// a placed block already has its own glyph.
pub fn board_with_trace_to_string(solution: &Solution) -> String {
    let lattice = &solution.lattice;
    let logical_rows = (lattice.height() - 1) / 2;
    let logical_cols = (lattice.width() - 1) / 2;
    let mut out = String::with_capacity(logical_rows * (logical_cols + 1));

    for r in 0..logical_rows {
        for c in 0..logical_cols {
            let x = (2 * c + 1) as i32;
            let y = (2 * r + 1) as i32;
            let block = lattice.get(x, y);
            let ch = match block.kind {
                BlockKind::Empty if solution.visited.contains(&(x, y)) => '*',
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

/// Writes a human-readable solution report to `path`: the board, the
/// visited-point count, and the per-laser trace lengths.
pub fn write_report(path: &Path, solution: &Solution, targets: &[Coord]) -> io::Result<()> {
    let mut file = File::create(path)?;
    writeln!(file, "Solution found.\n")?;
    write!(file, "{}", board_with_trace_to_string(solution))?;
    writeln!(file, "\n{} points visited, {} targets", solution.visited.len(), targets.len())?;
    for (i, path) in solution.trace.iter().enumerate() {
        writeln!(file, "laser {}: {} steps", i, path.len())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::Block;
    use crate::lattice::BlockLattice;
    use rustc_hash::FxHashSet;

    fn solved_1x1() -> Solution {
        let n = Block::NONE;
        let lattice = BlockLattice::from_rows(vec![
            vec![n, n, n],
            vec![n, Block::EMPTY, n],
            vec![n, n, n],
        ]);
        let visited: FxHashSet<Coord> = [(1, 1)].into_iter().collect();
        Solution {
            lattice,
            visited,
            trace: vec![vec![(1, 1)]],
        }
    }

    #[test]
    fn board_to_string_has_one_line_per_logical_row() {
        let rendered = board_to_string(&solved_1x1());
        assert_eq!(rendered, ".\n");
    }

    #[test]
    fn trace_overlay_marks_visited_empty_cells() {
        let rendered = board_with_trace_to_string(&solved_1x1());
        assert_eq!(rendered, "*\n");
    }

    #[test]
    fn board_with_trace_snapshot_for_a_placed_reflector() {
        let n = Block::NONE;
        let lattice = BlockLattice::from_rows(vec![
            vec![n, n, n, n, n],
            vec![n, Block::reflect(false), n, Block::EMPTY, n],
            vec![n, n, n, n, n],
            vec![n, Block::EMPTY, n, Block::EMPTY, n],
            vec![n, n, n, n, n],
        ]);
        let visited: FxHashSet<Coord> = [(3, 0), (2, 1), (3, 2), (4, 3)].into_iter().collect();
        let solution = Solution {
            lattice,
            visited,
            trace: vec![vec![(3, 0), (2, 1), (3, 2), (4, 3)]],
        };
        insta::assert_snapshot!(board_with_trace_to_string(&solution), @r###"
        A.
        ..
        "###);
    }
}
