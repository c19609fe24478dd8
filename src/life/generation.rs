//! Generation advance (B3/S23 on the bounded board)
//!
//! Only live cells and their neighbors can change, so the rule is evaluated on
//! that candidate set instead of all 2500 cells.

use super::board::LiveSet;
use super::point::{Point, neighbors};

/// Live cells plus their in-bounds neighbors, deduplicated
pub fn candidates(live: &LiveSet) -> LiveSet {
    let mut set = LiveSet::with_capacity(live.len() * 9);
    for &point in live {
        set.insert(point);
        set.extend(neighbors(point));
    }
    set
}

/// Number of `point`'s in-bounds neighbors that are alive
pub fn live_neighbor_count(live: &LiveSet, point: Point) -> usize {
    neighbors(point).filter(|p| live.contains(p)).count()
}

/// Survival/birth rule: a live cell survives with 2 or 3 neighbors, a dead one is born with 3
#[inline]
pub fn next_cell_state(alive: bool, live_neighbors: usize) -> bool {
    match (alive, live_neighbors) {
        (true, 2) | (true, 3) => true, // survive
        (false, 3) => true,            // birth
        _ => false,                    // die / stay dead
    }
}

/// Compute the next generation. Pure: `live` is not modified.
pub fn next_generation(live: &LiveSet) -> LiveSet {
    candidates(live)
        .into_iter()
        .filter(|&p| next_cell_state(live.contains(&p), live_neighbor_count(live, p)))
        .collect()
}
