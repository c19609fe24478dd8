//! Shape generation for board cells

use crate::consts::{BOARD_CELLS, CELL_PITCH, CELL_SIZE, DEAD_MARKER_RADIUS};
use crate::life::{Point, SimState};

/// One drawable primitive, tagged with the board point it stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Filled square for a live cell
    Cell { point: Point, x: i32, y: i32, size: i32 },
    /// Transparent square covering a dead cell so the whole cell takes clicks (paused only)
    Hit { point: Point, x: i32, y: i32, size: i32 },
    /// Small dot centred in a dead cell (paused only)
    DeadMarker { point: Point, cx: i32, cy: i32, r: i32 },
}

impl Shape {
    pub fn live(point: Point) -> Self {
        Shape::Cell {
            point,
            x: point.x * CELL_PITCH,
            y: point.y * CELL_PITCH,
            size: CELL_SIZE,
        }
    }

    pub fn hit(point: Point) -> Self {
        Shape::Hit {
            point,
            x: point.x * CELL_PITCH,
            y: point.y * CELL_PITCH,
            size: CELL_SIZE,
        }
    }

    pub fn dead(point: Point) -> Self {
        Shape::DeadMarker {
            point,
            cx: point.x * CELL_PITCH + CELL_SIZE / 2,
            cy: point.y * CELL_PITCH + CELL_SIZE / 2,
            r: DEAD_MARKER_RADIUS,
        }
    }

    pub fn point(&self) -> Point {
        match *self {
            Shape::Cell { point, .. } | Shape::Hit { point, .. } | Shape::DeadMarker { point, .. } => point,
        }
    }
}

/// Shapes for the current board, row-major.
///
/// While paused every dead cell gets a hit square, then its marker if enabled,
/// so any cell can be clicked; while running only live cells are drawn.
pub fn board_shapes(sim: &SimState, dead_markers: bool) -> Vec<Shape> {
    match sim {
        SimState::Paused(board) => {
            let mut shapes = Vec::with_capacity(BOARD_CELLS * 2);
            for (p, alive) in board.cells() {
                if alive {
                    shapes.push(Shape::live(p));
                    continue;
                }
                shapes.push(Shape::hit(p));
                if dead_markers {
                    shapes.push(Shape::dead(p));
                }
            }
            shapes
        }
        SimState::Running(live) => {
            let mut points: Vec<Point> = live.iter().copied().collect();
            points.sort_by_key(|p| (p.y, p.x));
            points.into_iter().map(Shape::live).collect()
        }
    }
}
