use crate::basic::grid_point::{GridPoint, GRID_STEP};
use std::ops::Neg;
use Dir::*;

/// Screen directions, `D` points towards larger `y`
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Dir {
    U,
    R,
    D,
    L,
}

impl Neg for Dir {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            U => D,
            R => L,
            D => U,
            L => R,
        }
    }
}

impl Dir {
    pub const ALL: [Dir; 4] = [U, R, D, L];

    /// Offset of one grid step in this direction
    pub const fn delta(self) -> GridPoint {
        match self {
            U => GridPoint::new(0, -GRID_STEP),
            R => GridPoint::new(GRID_STEP, 0),
            D => GridPoint::new(0, GRID_STEP),
            L => GridPoint::new(-GRID_STEP, 0),
        }
    }
}

impl GridPoint {
    #[must_use]
    pub fn translate(self, dir: Dir) -> Self {
        self + dir.delta()
    }
}

#[test]
fn test_dir_math() {
    for dir in Dir::ALL {
        assert_eq!(-(-dir), dir);
        assert_eq!(dir.delta() + (-dir).delta(), GridPoint::new(0, 0));
        assert_eq!(dir.delta().manhattan_distance(GridPoint::new(0, 0)), GRID_STEP);
    }

    let start = GridPoint::new(100, 100);
    assert_eq!(start.translate(R), GridPoint::new(120, 100));
    assert_eq!(start.translate(D), GridPoint::new(100, 120));
}
