//! Generation engine for the sparse, unbounded plane.
//!
//! Both strategies read only the borrowed snapshot of the current generation
//! and build the next one from scratch, so no cell born or killed during a
//! scan can influence another count in the same advance.

use rustc_hash::{FxHashMap, FxHashSet};

use super::{Cell, Coordinate, LiveSet};

/// Count how many of the eight Moore neighbors of `at` are live in `live`.
#[inline]
pub fn count_live_neighbors(live: &LiveSet, at: Coordinate) -> u8 {
    at.neighbors().filter(|&n| live.contains(n)).count() as u8
}

/// Next generation by candidate recount.
///
/// Live cells are checked for survival; their dead neighbors are gathered
/// into a deduplicated candidate set and each candidate is recounted once
/// against the same snapshot for the birth check. Dead cells with no live
/// neighbor are never visited.
pub fn advance(live: &LiveSet) -> LiveSet {
    let mut next = LiveSet::with_capacity(live.len());
    let mut candidates: FxHashSet<Coordinate> = FxHashSet::default();

    for c in live.iter() {
        if Cell::Alive.evolve(count_live_neighbors(live, c)).is_alive() {
            next.insert(c);
        }
        candidates.extend(c.neighbors().filter(|&n| !live.contains(n)));
    }

    next.extend(
        candidates
            .into_iter()
            .filter(|&c| Cell::Dead.evolve(count_live_neighbors(live, c)).is_alive()),
    );
    next
}

/// Next generation by neighbor tally.
///
/// Each live cell adds one to the count of each of its neighbors, then the
/// rule is applied to every tallied coordinate. Live cells that received no
/// tally have zero neighbors and die, so they need no separate pass.
pub fn advance_tallied(live: &LiveSet) -> LiveSet {
    let mut tally: FxHashMap<Coordinate, u8> = FxHashMap::default();
    tally.reserve(live.len() * 8);

    for c in live.iter() {
        for n in c.neighbors() {
            *tally.entry(n).or_insert(0) += 1;
        }
    }

    tally
        .into_iter()
        .filter(|&(c, count)| Cell::from(live.contains(c)).evolve(count).is_alive())
        .map(|(c, _)| c)
        .collect()
}
