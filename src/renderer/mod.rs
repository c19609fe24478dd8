//! SVG rendering module
//!
//! Turns a simulation state into shapes, then into markup the page can drop
//! into the board container.

pub mod shapes;
pub mod svg;

pub use shapes::{Shape, board_shapes};
pub use svg::{DATA_X, DATA_Y, board_svg};
