//! Top-level search: try every placement the budget allows until one lights
//! up every target, or the candidates are exhausted.

use tracing::{debug, info};

use crate::block::Block;
use crate::enumerator::PlacementEnumerator;
use crate::lattice::BlockLattice;
use crate::puzzle::Puzzle;
use crate::simulator::{self, SimResult};

/// A placement that satisfies every target point, together with the
/// simulation that proves it.
#[derive(Clone, Debug)]
pub struct Solution {
    pub lattice: BlockLattice,
    pub visited: rustc_hash::FxHashSet<crate::coord::Coord>,
    pub trace: Vec<Vec<crate::coord::Coord>>,
}

impl From<(BlockLattice, SimResult)> for Solution {
    fn from((lattice, result): (BlockLattice, SimResult)) -> Self {
        Self {
            lattice,
            visited: result.visited,
            trace: result.trace,
        }
    }
}

pub struct Solver;

impl Solver {
    /// Returns the first placement (in the enumerator's order) whose
    /// simulation visits every target. `None` means the puzzle is
    /// infeasible with the given budget, not an error.
    pub fn solve(puzzle: &Puzzle) -> Option<Solution> {
        let positions = puzzle.lattice.empty_positions();
        let enumerator = PlacementEnumerator::new(positions, puzzle.budget);

        let mut scratch = puzzle.lattice.clone();
        let mut tried = 0u64;

        for placement in enumerator {
            scratch.reset_from(&puzzle.lattice);
            for (pos, kind) in &placement {
                scratch
                    .set(pos.0, pos.1, Block::movable(*kind))
                    .expect("enumerator only yields positions the lattice reported empty");
            }

            tried += 1;
            let result = simulator::simulate(&scratch, &puzzle.emitters);

            if puzzle.targets.is_subset(&result.visited) {
                info!(tried, "found a solution");
                return Some(Solution::from((scratch.clone(), result)));
            }
        }

        debug!(tried, "exhausted every placement without a solution");
        None
    }
}
