//! SVG Life - Conway's Game of Life on a bounded board
//!
//! Core modules:
//! - `life`: Deterministic simulation (generation engine, board types, state reducer)
//! - `patterns`: Seed pattern and preset catalogue
//! - `renderer`: SVG shape generation and markup
//! - `settings`: Page configuration
//! - `shell`: Event dispatch and tick scheduling around the reducer

pub mod life;
pub mod patterns;
pub mod renderer;
pub mod settings;
pub mod shell;

pub use life::{DenseBoard, Event, LiveSet, Model, Point, SimState};
pub use settings::{Settings, SettingsError};
pub use shell::{Shell, Ticker};

/// Board and control constants
pub mod consts {
    /// Board width and height in cells
    pub const BOARD_SIZE: i32 = 50;
    /// Total number of cells on the board
    pub const BOARD_CELLS: usize = (BOARD_SIZE * BOARD_SIZE) as usize;

    /// Side length of a rendered cell (SVG units)
    pub const CELL_SIZE: i32 = 10;
    /// Distance between cell origins; leaves a 2-unit gap
    pub const CELL_PITCH: i32 = 12;
    /// SVG canvas side length
    pub const CANVAS_SIZE: i32 = 600;
    /// Radius of the dead-cell marker shown while paused
    pub const DEAD_MARKER_RADIUS: i32 = 1;

    /// Speed slider range. Larger input means a shorter interval.
    pub const SPEED_INPUT_MIN: u32 = 600;
    pub const SPEED_INPUT_MAX: u32 = 1000;
    pub const SPEED_INPUT_STEP: u32 = 50;
    /// Slider value used on load and whenever input can't be parsed
    pub const DEFAULT_SPEED_INPUT: u32 = 900;

    /// Fraction of cells alive after Randomize (1 in N)
    pub const RANDOM_FILL_ONE_IN: u32 = 3;
}

/// Convert a speed slider value to a tick interval in milliseconds
#[inline]
pub fn interval_for_input(input: u32) -> u32 {
    consts::SPEED_INPUT_MAX - input.clamp(consts::SPEED_INPUT_MIN, consts::SPEED_INPUT_MAX)
}
