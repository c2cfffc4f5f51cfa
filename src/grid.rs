//! Grid maze model: cells, coordinates, actions and the parsed maze

pub mod cell;
pub mod coord;
pub mod maze;

pub use cell::{Cell, Endpoint};
pub use coord::{Action, Coord};
pub use maze::Grid;
