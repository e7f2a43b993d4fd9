use super::*;
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
#[must_use]
pub struct BuilderError(pub Box<Builder>, pub &'static str);

impl Display for BuilderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "snake builder error: {}", self.1)?;
        write!(f, "builder: {:?}", self.0)
    }
}

impl Error for BuilderError {}

#[derive(Default, Clone, Debug)]
pub struct Builder {
    pub pos: Option<GridPoint>,
    pub dir: Option<Dir>,
    pub len: Option<usize>,
}

impl Builder {
    /// Position of the head
    #[must_use]
    pub fn pos(mut self, value: GridPoint) -> Self {
        self.pos = Some(value);
        self
    }

    #[must_use]
    pub fn dir(mut self, value: Dir) -> Self {
        self.dir = Some(value);
        self
    }

    #[must_use]
    pub fn len(mut self, value: usize) -> Self {
        self.len = Some(value);
        self
    }

    /// The body trails behind the head, opposite to the direction
    pub fn build(&self) -> Result<Snake, BuilderError> {
        let pos = self
            .pos
            .ok_or_else(|| BuilderError(Box::new(self.clone()), "missing field `pos`"))?;
        let dir = self
            .dir
            .ok_or_else(|| BuilderError(Box::new(self.clone()), "missing field `dir`"))?;
        let len = self
            .len
            .ok_or_else(|| BuilderError(Box::new(self.clone()), "missing field `len`"))?;
        if len == 0 {
            return Err(BuilderError(Box::new(self.clone()), "`len` must be at least 1"));
        }

        let cells = itertools::iterate(pos, |cell| cell.translate(-dir))
            .take(len)
            .collect();

        Ok(Snake {
            body: Body { cells, dir },
        })
    }
}

#[test]
fn test_builder() {
    let snake = Builder::default()
        .pos(GridPoint::new(100, 100))
        .dir(Dir::R)
        .len(3)
        .build()
        .unwrap();
    assert_eq!(
        snake.cells().collect::<Vec<_>>(),
        vec![
            GridPoint::new(100, 100),
            GridPoint::new(80, 100),
            GridPoint::new(60, 100)
        ]
    );
    assert_eq!(snake.dir(), Dir::R);

    assert!(Builder::default().pos(GridPoint::new(0, 0)).len(3).build().is_err());
    assert!(Builder::default()
        .pos(GridPoint::new(0, 0))
        .dir(Dir::U)
        .len(0)
        .build()
        .is_err());
}
