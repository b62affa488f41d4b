//! Pack Optimizer: covers an order with the fewest items shipped, then the fewest packs.
//!
//! # Search bound
//! No optimal total ever exceeds `order + min_pack - 1`: a reachable total above that
//! still covers the order after dropping one smallest pack. The DP therefore only
//! tabulates sums in `[0, bound]`.
//!
//! Cost is O(bound × distinct packs) time and O(bound) space. Callers facing
//! untrusted input cap `bound` before calling in (see `packing::validation`).

use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

// ────────────────────────────────────────────────────────────────────────────
// Types
// ────────────────────────────────────────────────────────────────────────────

/// No combination of the catalog covers the order within the search bound.
/// Only reachable with an empty catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Cannot form a valid pack combination")]
pub struct Unsatisfiable;

/// Pack size → number of packs used. Serializes as a flat JSON object
/// with string keys, e.g. `{"250": 1, "500": 1}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PackSolution(BTreeMap<usize, u32>);

impl PackSolution {
    /// Items shipped: Σ pack × count.
    pub fn total_items(&self) -> usize {
        self.0
            .iter()
            .map(|(&pack, &count)| pack * count as usize)
            .sum()
    }

    pub fn total_packs(&self) -> u32 {
        self.0.values().sum()
    }

    fn add_pack(&mut self, pack: usize) {
        *self.0.entry(pack).or_insert(0) += 1;
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core functions
// ────────────────────────────────────────────────────────────────────────────

/// Largest total the search considers for `order` given the smallest pack.
pub fn search_bound(min_pack: usize, order: usize) -> usize {
    order.saturating_add(min_pack.saturating_sub(1))
}

/// Finds the pack multiset whose total is the smallest achievable value `>= order`,
/// using as few packs as possible for that total.
///
/// Pack sizes are deduplicated and processed in ascending order. When two packs
/// give the same count for a sum, the smaller one is kept, so the result is
/// fully deterministic.
///
/// Expects positive pack sizes and a positive order; the HTTP boundary enforces
/// both. An empty catalog yields `Unsatisfiable`.
pub fn solve(catalog: &[usize], order: usize) -> Result<PackSolution, Unsatisfiable> {
    let mut packs = catalog.to_vec();
    packs.sort_unstable();
    packs.dedup();

    let Some(&min_pack) = packs.first() else {
        return Err(Unsatisfiable);
    };
    let bound = search_bound(min_pack, order);
    debug!(
        order,
        min_pack,
        bound,
        distinct_packs = packs.len(),
        "Filling sum table"
    );

    let table = SumTable::fill(&packs, bound);
    let best_sum = table.first_reachable(order).ok_or(Unsatisfiable)?;
    Ok(table.reconstruct(best_sum))
}

// ────────────────────────────────────────────────────────────────────────────
// Sum table
// ────────────────────────────────────────────────────────────────────────────

/// Minimum pack count for every sum in `[0, bound]`, and the pack that achieved it.
struct SumTable {
    /// `None` = unreachable.
    min_packs: Vec<Option<u32>>,
    /// Only used to walk back from a chosen total.
    last_pack: Vec<Option<usize>>,
}

impl SumTable {
    /// `packs` must be sorted ascending and non-empty.
    fn fill(packs: &[usize], bound: usize) -> Self {
        let mut min_packs = vec![None; bound + 1];
        let mut last_pack = vec![None; bound + 1];
        min_packs[0] = Some(0);

        for sum in 1..=bound {
            for &pack in packs {
                if pack > sum {
                    break;
                }
                let Some(rest) = min_packs[sum - pack] else {
                    continue;
                };
                let candidate = rest + 1;
                // Strict improvement only: ties keep the smaller pack.
                let improves = match min_packs[sum] {
                    Some(best) => candidate < best,
                    None => true,
                };
                if improves {
                    min_packs[sum] = Some(candidate);
                    last_pack[sum] = Some(pack);
                }
            }
        }

        Self {
            min_packs,
            last_pack,
        }
    }

    fn first_reachable(&self, order: usize) -> Option<usize> {
        (order..self.min_packs.len()).find(|&sum| self.min_packs[sum].is_some())
    }

    fn reconstruct(&self, total: usize) -> PackSolution {
        let mut solution = PackSolution::default();
        let mut remaining = total;
        while remaining > 0 {
            let Some(pack) = self.last_pack[remaining] else {
                break;
            };
            solution.add_pack(pack);
            remaining -= pack;
        }
        solution
    }
}
