use crate::basic::Point;
use ggez::graphics::Rect;

/// Top-left corners of `n` items of equal `size` stacked vertically,
/// horizontally centered in `container`, starting at `top`
pub fn centered_column(container: Point, size: Point, n: usize, top: f32, spacing: f32) -> Vec<Point> {
    let x = (container.x - size.x) / 2.;
    (0..n)
        .map(|i| Point { x, y: top + i as f32 * (size.y + spacing) })
        .collect()
}

/// Top-left corners of `n` items of equal `size` in a row, the row is
/// aligned to the right edge `right` at height `y`
pub fn right_aligned_row(size: Point, n: usize, right: f32, y: f32, spacing: f32) -> Vec<Point> {
    let total = n as f32 * size.x + n.saturating_sub(1) as f32 * spacing;
    let left = right - total;
    (0..n)
        .map(|i| Point { x: left + i as f32 * (size.x + spacing), y })
        .collect()
}

/// Rectangle of `size` centered in `container`
pub fn centered_rect(container: Point, size: Point) -> Rect {
    let top_left = (container - size) / 2.;
    Rect::new(top_left.x, top_left.y, size.x, size.y)
}

#[test]
fn test_centered_column() {
    let window = Point { x: 800., y: 480. };
    let size = Point { x: 200., y: 50. };
    let column = centered_column(window, size, 3, 100., 20.);
    assert_eq!(
        column,
        vec![
            Point { x: 300., y: 100. },
            Point { x: 300., y: 170. },
            Point { x: 300., y: 240. },
        ]
    );
}

#[test]
fn test_right_aligned_row() {
    let size = Point { x: 100., y: 40. };
    let row = right_aligned_row(size, 2, 500., 10., 8.);
    assert_eq!(row, vec![Point { x: 292., y: 10. }, Point { x: 400., y: 10. }]);
    assert!(right_aligned_row(size, 0, 500., 10., 8.).is_empty());
}

#[test]
fn test_centered_rect() {
    let rect = centered_rect(Point { x: 800., y: 480. }, Point { x: 400., y: 200. });
    assert_eq!(rect, Rect::new(200., 140., 400., 200.));
}
