use std::collections::VecDeque;

use itertools::Itertools;

pub use builder::{Builder, BuilderError};

use crate::basic::{Dir, GridPoint, GRID_STEP};

mod builder;

pub struct Body {
    /// Cells occupied by the snake, head first
    pub cells: VecDeque<GridPoint>,
    /// Direction the snake is currently going
    pub dir: Dir,
}

pub struct Snake {
    pub body: Body,
}

impl Snake {
    pub fn head(&self) -> GridPoint {
        self.body.cells[0]
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.body.cells.len()
    }

    pub fn dir(&self) -> Dir {
        self.body.dir
    }

    pub fn cells(&self) -> impl Iterator<Item = GridPoint> + '_ {
        self.body.cells.iter().copied()
    }

    /// Reversing is allowed, the snake simply turns into itself
    pub fn set_dir(&mut self, dir: Dir) {
        self.body.dir = dir;
    }

    /// Where the head will be after the next step
    pub fn next_head(&self) -> GridPoint {
        self.head().translate(self.body.dir)
    }

    /// Move one step, `grow` keeps the tail in place
    pub fn advance(&mut self, grow: bool) {
        let new_head = self.next_head();
        self.body.cells.push_front(new_head);
        if !grow {
            self.body.cells.pop_back();
        }
        debug_assert!(self.is_contiguous(), "snake broke apart: {:?}", self.body.cells);
    }

    /// Every pair of consecutive cells is exactly one grid step apart
    pub fn is_contiguous(&self) -> bool {
        self.body
            .cells
            .iter()
            .tuple_windows()
            .all(|(a, b)| a.manhattan_distance(*b) == GRID_STEP)
    }
}

#[test]
fn test_advance() {
    let mut snake = Builder::default()
        .pos(GridPoint::new(100, 100))
        .dir(Dir::R)
        .len(3)
        .build()
        .unwrap();

    snake.advance(false);
    assert_eq!(snake.len(), 3);
    assert_eq!(
        snake.cells().collect::<Vec<_>>(),
        vec![
            GridPoint::new(120, 100),
            GridPoint::new(100, 100),
            GridPoint::new(80, 100)
        ]
    );

    snake.set_dir(Dir::D);
    snake.advance(true);
    assert_eq!(snake.len(), 4);
    assert_eq!(snake.head(), GridPoint::new(120, 120));
    assert!(snake.is_contiguous());
}

#[test]
fn test_reverse_into_self() {
    let mut snake = Builder::default()
        .pos(GridPoint::new(100, 100))
        .dir(Dir::R)
        .len(3)
        .build()
        .unwrap();

    // no reversal prevention and no self-collision
    snake.set_dir(Dir::L);
    snake.advance(false);
    assert_eq!(snake.head(), GridPoint::new(80, 100));
    assert_eq!(snake.len(), 3);
    assert!(snake.is_contiguous());
}
