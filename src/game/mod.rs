use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::apple::spawn::{spawn_apple, SpawnPolicy};
use crate::apple::Apple;
use crate::basic::{BoardDim, Dir, GridPoint};
use crate::error::Result;
use crate::snake::{self, Snake};

#[cfg(test)]
mod tests;

pub type Score = u32;

/// What happened during a single tick
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Tick {
    Moved,
    Ate,
    /// The head would have left the board, nothing moved
    GameOver { score: Score },
}

/// All of the state of a single round of snake, independent of
/// any windowing or timing
pub struct GameState {
    board_dim: BoardDim,
    snake: Snake,
    apple: Apple,
    score: Score,
    over: bool,

    spawn_policy: SpawnPolicy,
    rng: StdRng,
}

impl GameState {
    pub const START_POS: GridPoint = GridPoint::new(100, 100);
    pub const START_DIR: Dir = Dir::R;
    pub const START_LEN: usize = 3;

    /// A fresh game, the rng is seeded from entropy unless a seed is given
    pub fn new(board_dim: BoardDim, seed: Option<u64>) -> Result<Self> {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_spawn_policy(board_dim, SpawnPolicy::Random, rng)
    }

    pub fn with_spawn_policy(
        board_dim: BoardDim,
        mut spawn_policy: SpawnPolicy,
        mut rng: StdRng,
    ) -> Result<Self> {
        let snake = snake::Builder::default()
            .pos(Self::START_POS)
            .dir(Self::START_DIR)
            .len(Self::START_LEN)
            .build()?;
        let apple = spawn_apple(&mut spawn_policy, board_dim, &mut rng);

        Ok(Self {
            board_dim,
            snake,
            apple,
            score: 0,
            over: false,
            spawn_policy,
            rng,
        })
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn apple(&self) -> Apple {
        self.apple
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    pub fn set_dir(&mut self, dir: Dir) {
        if self.snake.dir() != dir {
            log::trace!("direction {:?} -> {:?}", self.snake.dir(), dir);
        }
        self.snake.set_dir(dir);
    }

    /// Advance the game by one grid step
    pub fn tick(&mut self) -> Tick {
        if self.over {
            return Tick::GameOver { score: self.score };
        }

        let new_head = self.snake.next_head();
        if !self.board_dim.contains(new_head) {
            self.over = true;
            log::debug!("head left the board at {new_head:?}");
            return Tick::GameOver { score: self.score };
        }

        let ate = new_head.overlaps(self.apple.pos);
        self.snake.advance(ate);
        if ate {
            self.score += 1;
            log::debug!("ate apple at {:?}, score {}", self.apple.pos, self.score);
            self.apple = spawn_apple(&mut self.spawn_policy, self.board_dim, &mut self.rng);
            Tick::Ate
        } else {
            Tick::Moved
        }
    }
}
