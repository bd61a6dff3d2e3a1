//! Laser propagation: reflection, absorption, and refraction splits.
//!
//! Traces every emitter (and every laser spawned by refraction) across a
//! `BlockLattice`, producing the complete set of visited points and a
//! per-laser path trace for rendering.

use rustc_hash::FxHashSet;
use std::collections::VecDeque;

use crate::block::BlockKind;
use crate::coord::{in_bounds, x_neighbor, y_neighbor, Coord};
use crate::error::SolveError;
use crate::lattice::BlockLattice;
use crate::laser::Laser;

/// Hard guard against pathological reflector cycles. Not an error condition:
/// hitting it simply ends that one laser's trace.
const MAX_STEPS: u32 = 500;

/// Ceiling on the total number of lasers (emitters + refraction spawns)
/// processed in one simulation, to bound the exponential blow-up a chain of
/// refractors can otherwise produce. Overflow silently stops further spawns.
const MAX_LASERS: usize = 4096;

/// The result of simulating every emitter (and its descendants) across a lattice.
#[derive(Clone, Debug, Default)]
pub struct SimResult {
    /// Every in-bounds point visited by any laser.
    pub visited: FxHashSet<Coord>,
    /// `trace[i]` is the ordered path of the i-th processed laser (FIFO order:
    /// emitters first, then refraction spawns in the order they were produced).
    pub trace: Vec<Vec<Coord>>,
}

/// Runs every emitter (and lasers it spawns via refraction) to completion.
pub fn simulate(lattice: &BlockLattice, emitters: &[Laser]) -> SimResult {
    let mut visited = FxHashSet::default();
    let mut trace = Vec::new();

    let mut queue: VecDeque<Laser> = emitters.iter().copied().collect();
    let mut total_lasers = queue.len();

    while let Some(mut laser) = queue.pop_front() {
        let mut path = Vec::new();
        let mut seen_states: FxHashSet<(i32, i32, i32, i32)> = FxHashSet::default();

        path.push(laser.position());
        seen_states.insert(laser.state());
        if lattice.in_bounds(laser.x, laser.y) {
            visited.insert(laser.position());
        }

        for _ in 0..MAX_STEPS {
            let (xn_x, xn_y) = x_neighbor(laser.x, laser.y, laser.vx);
            let (yn_x, yn_y) = y_neighbor(laser.x, laser.y, laser.vy);

            if !in_bounds(xn_x, xn_y, lattice.width(), lattice.height())
                || !in_bounds(yn_x, yn_y, lattice.width(), lattice.height())
            {
                break;
            }

            let bx = lattice.get(xn_x, xn_y);
            let by = lattice.get(yn_x, yn_y);
            assert_parity(laser.x, laser.y, bx.kind, by.kind);

            if bx.kind == BlockKind::Reflect {
                laser.reflect_x();
                path.push(laser.step());
            } else if by.kind == BlockKind::Reflect {
                laser.reflect_y();
                path.push(laser.step());
            } else if bx.kind == BlockKind::Opaque || by.kind == BlockKind::Opaque {
                laser.absorb();
                break;
            } else if bx.kind == BlockKind::Refract {
                let spawned = laser.refract_x();
                if total_lasers < MAX_LASERS {
                    queue.push_back(spawned);
                    total_lasers += 1;
                }
                path.push(laser.step());
            } else if by.kind == BlockKind::Refract {
                let spawned = laser.refract_y();
                if total_lasers < MAX_LASERS {
                    queue.push_back(spawned);
                    total_lasers += 1;
                }
                path.push(laser.step());
            } else {
                // both neighbours are EMPTY and/or NONE: pass straight through
                path.push(laser.step());
            }

            if lattice.in_bounds(laser.x, laser.y) {
                visited.insert(laser.position());
            }

            if laser.is_absorbed() {
                break;
            }

            // a repeated (x, y, vx, vy) state means this laser has entered a
            // cycle it can never escape deterministically; stop early rather
            // than spinning until MAX_STEPS.
            if !seen_states.insert(laser.state()) {
                break;
            }
        }

        trace.push(path);
    }

    SimResult { visited, trace }
}

/// Asserts the parity invariant: at
/// most one of a laser's two inspected neighbours can ever be an interactive
/// block, because the padded lattice alternates block slots with `NONE`
/// interstitial cells along both axes. A violation means the lattice was
/// built incorrectly, not that the puzzle is unsolvable — abort with
/// diagnostic context rather than silently picking a rule.
fn assert_parity(x: i32, y: i32, bx: BlockKind, by: BlockKind) {
    if bx.is_interactive() && by.is_interactive() {
        let err = SolveError::ParityViolation { x, y };
        panic!("{err}");
    }
}
