use crate::basic::GridPoint;

pub mod spawn;

/// The single piece of food on the board
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Apple {
    pub pos: GridPoint,
}
