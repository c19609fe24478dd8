//! Deterministic simulation module
//!
//! All Game of Life logic lives here. This module must be pure and deterministic:
//! - Fixed 50x50 board, no wraparound
//! - Seeded RNG only
//! - Models are replaced wholesale, never shared mutably
//! - No rendering or platform dependencies

pub mod board;
pub mod generation;
pub mod point;
pub mod state;

pub use board::{DenseBoard, LiveSet, dense_of, live_set_of};
pub use generation::{candidates, live_neighbor_count, next_cell_state, next_generation};
pub use point::{Point, neighbors};
pub use state::{Event, Model, SimState, TimerEffect, parse_speed, parse_speed_input, reduce, timer_effect};
