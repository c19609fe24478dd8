//! Sparse and dense board representations
//!
//! The running simulation works on a sparse `LiveSet`; the paused board is a
//! `DenseBoard` so dead cells can be shown and toggled. The two convert into
//! each other without loss.

use std::collections::HashSet;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::point::Point;
use crate::consts::{BOARD_CELLS, RANDOM_FILL_ONE_IN};

/// Every live cell on the board. Iteration order carries no meaning.
pub type LiveSet = HashSet<Point>;

/// An alive flag for every cell of the board, row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenseBoard {
    cells: Box<[bool]>,
}

impl Default for DenseBoard {
    fn default() -> Self {
        Self::empty()
    }
}

impl DenseBoard {
    /// A board with every cell dead
    pub fn empty() -> Self {
        Self {
            cells: vec![false; BOARD_CELLS].into_boxed_slice(),
        }
    }

    /// Fill roughly one in `RANDOM_FILL_ONE_IN` cells, reproducibly for a given seed
    pub fn random(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut board = Self::empty();
        for cell in board.cells.iter_mut() {
            *cell = rng.random_ratio(1, RANDOM_FILL_ONE_IN);
        }
        board
    }

    /// Alive flag at `point`; off-board points are dead
    pub fn get(&self, point: Point) -> bool {
        point.in_bounds() && self.cells[point.index()]
    }

    /// Set the flag at `point`. Off-board points are ignored.
    pub fn set(&mut self, point: Point, alive: bool) {
        if point.in_bounds() {
            self.cells[point.index()] = alive;
        }
    }

    /// Flip the flag at `point`. Returns false (and changes nothing) when off-board.
    pub fn toggle(&mut self, point: Point) -> bool {
        if !point.in_bounds() {
            return false;
        }
        let cell = &mut self.cells[point.index()];
        *cell = !*cell;
        true
    }

    /// Every board point with its flag, row-major
    pub fn cells(&self) -> impl Iterator<Item = (Point, bool)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &alive)| (Point::from_index(i), alive))
    }

    /// Points whose flag is set
    pub fn live_points(&self) -> impl Iterator<Item = Point> + '_ {
        self.cells().filter_map(|(p, alive)| alive.then_some(p))
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }
}

/// Dense → sparse: keep only the points flagged alive
pub fn live_set_of(board: &DenseBoard) -> LiveSet {
    board.live_points().collect()
}

/// Sparse → dense: flag each board point by membership. Off-board members are dropped.
pub fn dense_of(live: &LiveSet) -> DenseBoard {
    let mut board = DenseBoard::empty();
    for &point in live {
        board.set(point, true);
    }
    board
}

impl From<&LiveSet> for DenseBoard {
    fn from(live: &LiveSet) -> Self {
        dense_of(live)
    }
}

impl From<&DenseBoard> for LiveSet {
    fn from(board: &DenseBoard) -> Self {
        live_set_of(board)
    }
}
