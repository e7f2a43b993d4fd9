pub use dir::Dir;
pub use grid_point::{BoardDim, GridPoint, GRID_STEP};
pub use point::Point;

mod dir;
mod grid_point;
mod point;
