use crate::basic::{Dir, Point};
use ggez::input::keyboard::KeyCode;

/// Map a swipe (drag) delta to a direction using its dominant axis,
/// ties go to the vertical axis. A zero delta carries no direction.
/// `y` grows downwards, as on screen.
pub fn classify_swipe(delta: Point) -> Option<Dir> {
    let Point { x: dx, y: dy } = delta;
    if dx == 0. && dy == 0. || dx.is_nan() || dy.is_nan() {
        return None;
    }

    Some(if dx.abs() > dy.abs() {
        if dx > 0. {
            Dir::R
        } else {
            Dir::L
        }
    } else if dy > 0. {
        Dir::D
    } else {
        Dir::U
    })
}

/// Arrow keys and WASD
pub fn key_dir(key: KeyCode) -> Option<Dir> {
    use KeyCode::*;
    match key {
        Up | W => Some(Dir::U),
        Right | D => Some(Dir::R),
        Down | S => Some(Dir::D),
        Left | A => Some(Dir::L),
        _ => None,
    }
}

/// Tracks an ongoing touch so that consecutive positions can be
/// turned into swipe deltas
#[derive(Default)]
pub struct SwipeTracker {
    last: Option<Point>,
}

impl SwipeTracker {
    pub fn start(&mut self, pos: Point) {
        self.last = Some(pos);
    }

    /// Delta since the previous position, `None` if no touch is active
    pub fn moved(&mut self, pos: Point) -> Option<Point> {
        let last = self.last.replace(pos)?;
        Some(pos - last)
    }

    pub fn end(&mut self) {
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn swipe(x: f32, y: f32) -> Option<Dir> {
        classify_swipe(Point { x, y })
    }

    #[test]
    fn dominant_axis_wins() {
        assert_eq!(swipe(5., 1.), Some(Dir::R));
        assert_eq!(swipe(-5., 4.), Some(Dir::L));
        assert_eq!(swipe(1., 5.), Some(Dir::D));
        assert_eq!(swipe(-4., -5.), Some(Dir::U));
    }

    #[test]
    fn ties_are_vertical() {
        assert_eq!(swipe(3., 3.), Some(Dir::D));
        assert_eq!(swipe(3., -3.), Some(Dir::U));
        assert_eq!(swipe(0., -0.5), Some(Dir::U));
    }

    #[test]
    fn no_motion_no_direction() {
        assert_eq!(swipe(0., 0.), None);
        assert_eq!(swipe(f32::NAN, 1.), None);
    }

    #[test]
    fn magnitude_does_not_matter() {
        assert_eq!(swipe(0.01, 0.), Some(Dir::R));
        assert_eq!(swipe(1000., 999.), Some(Dir::R));
    }

    #[test]
    fn keys() {
        assert_eq!(key_dir(KeyCode::Up), Some(Dir::U));
        assert_eq!(key_dir(KeyCode::A), Some(Dir::L));
        assert_eq!(key_dir(KeyCode::Space), None);
    }

    #[test]
    fn tracker_reports_deltas_only_while_touching() {
        let mut tracker = SwipeTracker::default();
        assert_eq!(tracker.moved(Point { x: 1., y: 1. }), None);

        tracker.start(Point { x: 10., y: 10. });
        assert_eq!(tracker.moved(Point { x: 15., y: 9. }), Some(Point { x: 5., y: -1. }));
        assert_eq!(tracker.moved(Point { x: 15., y: 19. }), Some(Point { x: 0., y: 10. }));

        tracker.end();
        assert_eq!(tracker.moved(Point { x: 0., y: 0. }), None);
    }
}
