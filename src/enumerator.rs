//! Enumerates candidate block placements over a lattice's empty cells.
//!
//! Lazily walks a combinatorial space one candidate at a time rather than
//! materializing it, branching on whether the budget mixes block kinds:
//! a single-kind budget only needs combinations over positions, while a
//! mixed budget needs permutations since which position gets which kind
//! changes the outcome.

use itertools::Itertools;

use crate::block::BlockKind;
use crate::coord::Coord;
use crate::puzzle::Budget;

/// One concrete placement: each entry assigns a block kind to a lattice position.
pub type Placement = Vec<(Coord, BlockKind)>;

/// Lazily walks every placement of `budget`'s blocks over `positions`.
///
/// When the budget names only one distinct kind (or none at all), the
/// positions are interchangeable within that kind, so plain combinations
/// suffice and avoid the `k!` blow-up permutations would otherwise cost.
/// Once two or more kinds are in play, which position gets which kind
/// matters, so permutations are enumerated instead.
pub struct PlacementEnumerator {
    inner: Box<dyn Iterator<Item = Placement>>,
}

impl PlacementEnumerator {
    pub fn new(positions: Vec<Coord>, budget: Budget) -> Self {
        let k = budget.total() as usize;

        let inner: Box<dyn Iterator<Item = Placement>> = if budget.distinct_kinds() <= 1 {
            let kind = budget
                .as_kinds()
                .first()
                .copied()
                .unwrap_or(BlockKind::Reflect);
            Box::new(
                positions
                    .into_iter()
                    .combinations(k)
                    .map(move |combo| combo.into_iter().map(|pos| (pos, kind)).collect()),
            )
        } else {
            let kinds = budget.as_kinds();
            Box::new(positions.into_iter().permutations(k).map(move |perm| {
                perm.into_iter()
                    .zip(kinds.iter().copied())
                    .collect::<Placement>()
            }))
        };

        Self { inner }
    }
}

impl Iterator for PlacementEnumerator {
    type Item = Placement;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_budget_yields_one_empty_placement() {
        let positions = vec![(1, 1), (3, 1)];
        let mut enumerator = PlacementEnumerator::new(positions, Budget::default());
        assert_eq!(enumerator.next(), Some(Vec::new()));
        assert_eq!(enumerator.next(), None);
    }

    #[test]
    fn single_kind_uses_combinations_not_permutations() {
        let positions = vec![(1, 1), (3, 1), (5, 1)];
        let budget = Budget {
            reflect: 2,
            opaque: 0,
            refract: 0,
        };
        let placements: Vec<_> = PlacementEnumerator::new(positions, budget).collect();
        // C(3, 2) = 3, not P(3, 2) = 6: order within a single kind is irrelevant.
        assert_eq!(placements.len(), 3);
        for placement in &placements {
            assert_eq!(placement.len(), 2);
            assert!(placement.iter().all(|(_, k)| *k == BlockKind::Reflect));
        }
    }

    #[test]
    fn mixed_kinds_uses_permutations() {
        let positions = vec![(1, 1), (3, 1)];
        let budget = Budget {
            reflect: 1,
            opaque: 1,
            refract: 0,
        };
        let placements: Vec<_> = PlacementEnumerator::new(positions, budget).collect();
        // P(2, 2) = 2: which position gets REFLECT vs OPAQUE matters.
        assert_eq!(placements.len(), 2);
        for placement in &placements {
            let kinds: Vec<_> = placement.iter().map(|(_, k)| *k).collect();
            assert!(kinds.contains(&BlockKind::Reflect));
            assert!(kinds.contains(&BlockKind::Opaque));
        }
    }

    #[test]
    fn more_blocks_than_positions_yields_nothing() {
        let positions = vec![(1, 1)];
        let budget = Budget {
            reflect: 2,
            opaque: 0,
            refract: 0,
        };
        let mut enumerator = PlacementEnumerator::new(positions, budget);
        assert_eq!(enumerator.next(), None);
    }
}
