use crate::basic::Point;
use rand::Rng;
use std::fmt::{Debug, Formatter};
use std::ops::Neg;

/// Pixel length of one grid cell, the distance the snake moves each tick
pub const GRID_STEP: i32 = 20;

/// A position on the playfield in pixel units, `x` grows right
/// and `y` grows down. Positions produced by the game are always
/// multiples of [`GRID_STEP`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Add, AddAssign, Sub, SubAssign)]
pub struct GridPoint {
    pub x: i32,
    pub y: i32,
}

impl Neg for GridPoint {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self { x: -self.x, y: -self.y }
    }
}

impl Debug for GridPoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "<{}, {}>", self.x, self.y)
    }
}

impl From<GridPoint> for Point {
    fn from(GridPoint { x, y }: GridPoint) -> Self {
        Self { x: x as f32, y: y as f32 }
    }
}

impl GridPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[cfg(test)]
    pub fn is_grid_aligned(self) -> bool {
        self.x % GRID_STEP == 0 && self.y % GRID_STEP == 0
    }

    /// Both coordinates closer than one grid step
    pub fn overlaps(self, other: Self) -> bool {
        (self.x - other.x).abs() < GRID_STEP && (self.y - other.y).abs() < GRID_STEP
    }

    /// Manhattan distance in pixels
    pub fn manhattan_distance(self, other: Self) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

/// Size of the playfield in pixels
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct BoardDim {
    pub width: i32,
    pub height: i32,
}

impl BoardDim {
    pub const DEFAULT: Self = Self { width: 800, height: 480 };

    /// Whether `pos` is inside `[0, width) x [0, height)`
    pub fn contains(self, pos: GridPoint) -> bool {
        (0..self.width).contains(&pos.x) && (0..self.height).contains(&pos.y)
    }

    /// Number of cells along each axis
    pub fn cells(self) -> (i32, i32) {
        (cells_along(self.width), cells_along(self.height))
    }

    /// A grid-aligned point chosen uniformly among all cells whose
    /// top-left corner is inside the board
    pub fn random_cell<R: Rng + ?Sized>(self, rng: &mut R) -> GridPoint {
        let (h, v) = self.cells();
        GridPoint {
            x: rng.gen_range(0..h) * GRID_STEP,
            y: rng.gen_range(0..v) * GRID_STEP,
        }
    }

    pub fn to_point(self) -> Point {
        Point {
            x: self.width as f32,
            y: self.height as f32,
        }
    }
}

// same count as iterating 0, GRID_STEP, 2 * GRID_STEP, .. < len
fn cells_along(len: i32) -> i32 {
    (len + GRID_STEP - 1) / GRID_STEP
}

#[test]
fn test_board_contains() {
    let board = BoardDim::DEFAULT;
    assert!(board.contains(GridPoint::new(0, 0)));
    assert!(board.contains(GridPoint::new(780, 460)));
    assert!(!board.contains(GridPoint::new(800, 0)));
    assert!(!board.contains(GridPoint::new(0, 480)));
    assert!(!board.contains(GridPoint::new(-20, 100)));
    assert!(!board.contains(GridPoint::new(100, -20)));
}

#[test]
fn test_cells_along() {
    assert_eq!(BoardDim::DEFAULT.cells(), (40, 24));
    // a partial cell still gets a spawn position
    assert_eq!(BoardDim { width: 810, height: 15 }.cells(), (41, 1));
}

#[test]
fn test_overlaps() {
    let a = GridPoint::new(100, 100);
    assert!(a.overlaps(GridPoint::new(100, 100)));
    assert!(a.overlaps(GridPoint::new(119, 81)));
    assert!(!a.overlaps(GridPoint::new(120, 100)));
    assert!(!a.overlaps(GridPoint::new(100, 80)));
}
