use crate::life::{DenseBoard, Point};

/// Starting pattern for initial load and Reset
pub const SEED: [Point; 5] = [
    Point::new(30, 30),
    Point::new(31, 30),
    Point::new(32, 30),
    Point::new(30, 29),
    Point::new(31, 32),
];

#[derive(Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [Point],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Seed",
        cells: &SEED,
    },
    Pattern {
        name: "Glider",
        cells: &[
            Point::new(7, 6),
            Point::new(8, 7),
            Point::new(6, 8),
            Point::new(7, 8),
            Point::new(8, 8),
        ],
    },
    Pattern {
        name: "Blinker",
        cells: &[Point::new(24, 25), Point::new(25, 25), Point::new(26, 25)],
    },
    Pattern {
        name: "Toad",
        cells: &[
            Point::new(25, 24),
            Point::new(26, 24),
            Point::new(27, 24),
            Point::new(24, 25),
            Point::new(25, 25),
            Point::new(26, 25),
        ],
    },
    Pattern {
        name: "Beacon",
        cells: &[
            Point::new(10, 10),
            Point::new(11, 10),
            Point::new(10, 11),
            Point::new(11, 11),
            Point::new(12, 12),
            Point::new(13, 12),
            Point::new(12, 13),
            Point::new(13, 13),
        ],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[
            Point::new(25, 24),
            Point::new(26, 24),
            Point::new(24, 25),
            Point::new(25, 25),
            Point::new(25, 26),
        ],
    },
];

impl Pattern {
    /// Case-insensitive lookup by name
    pub fn find(name: &str) -> Option<&'static Pattern> {
        PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Paused board holding only this pattern
    pub fn board(&self) -> DenseBoard {
        let mut board = DenseBoard::empty();
        for &point in self.cells {
            board.set(point, true);
        }
        board
    }
}

/// Dense board holding the seed pattern
pub fn seed_board() -> DenseBoard {
    PATTERNS[0].board()
}
