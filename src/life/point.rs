//! Board coordinates and Moore-neighborhood enumeration

use crate::consts::BOARD_SIZE;

/// A cell coordinate. Only points with `0 <= x, y < BOARD_SIZE` exist on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Whether the point lies on the board
    #[inline]
    pub fn in_bounds(self) -> bool {
        (0..BOARD_SIZE).contains(&self.x) && (0..BOARD_SIZE).contains(&self.y)
    }

    /// Row-major index into a dense board (caller checks bounds)
    #[inline]
    pub(crate) fn index(self) -> usize {
        (self.y * BOARD_SIZE + self.x) as usize
    }

    /// Inverse of `index`
    #[inline]
    pub(crate) fn from_index(index: usize) -> Self {
        let index = index as i32;
        Self::new(index % BOARD_SIZE, index / BOARD_SIZE)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Offsets of the 8 Moore neighbors, row by row
const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// In-bounds Moore neighbors of `point`.
///
/// Off-board offsets are dropped rather than wrapped, so edge cells have 5
/// neighbors and corner cells 3.
pub fn neighbors(point: Point) -> impl Iterator<Item = Point> {
    NEIGHBOR_OFFSETS
        .into_iter()
        .map(move |(dx, dy)| Point::new(point.x + dx, point.y + dy))
        .filter(|p| p.in_bounds())
}
