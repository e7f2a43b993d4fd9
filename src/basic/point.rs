use ggez::mint::Point2;
use std::ops::Div;

/// A more convenient version of mint::Point2<f32>
#[derive(Copy, Clone, Debug, PartialEq, Add, AddAssign, Sub, SubAssign)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl From<Point> for Point2<f32> {
    fn from(Point { x, y }: Point) -> Self {
        Point2 { x, y }
    }
}

impl From<Point2<f32>> for Point {
    fn from(Point2 { x, y }: Point2<f32>) -> Self {
        Self { x, y }
    }
}

impl Div<f32> for Point {
    type Output = Self;

    fn div(self, rhs: f32) -> Self::Output {
        Self { x: self.x / rhs, y: self.y / rhs }
    }
}

impl Point {
    #[cfg(test)]
    pub const fn zero() -> Self {
        Self { x: 0., y: 0. }
    }

    /// Equal x and y
    pub const fn square(side: f32) -> Self {
        Self { x: side, y: side }
    }
}

#[test]
fn test_point_math() {
    let a = Point { x: 3., y: 4. };
    assert_eq!(a + a, Point { x: 6., y: 8. });
    assert_eq!((a + a) / 2., a);
    assert_eq!(a - a, Point::zero());
}
