use crate::basic::{BoardDim, GRID_STEP};
use crate::difficulty::Difficulty;
use crate::error::{Error, Result};
use std::time::Duration;

pub struct Prefs {
    /// Playfield size in pixels, also the window size
    pub board_dim: BoardDim,
    pub difficulty: Difficulty,
    /// Fixed seed for food placement, random if `None`
    pub seed: Option<u64>,

    pub display_rates: bool,
    pub message_duration: Duration,
}

impl Default for Prefs {
    fn default() -> Self {
        Self {
            board_dim: BoardDim::DEFAULT,
            difficulty: Difficulty::default(),
            seed: None,

            display_rates: false,
            message_duration: Duration::from_secs(2),
        }
    }
}

// builder
impl Prefs {
    pub fn board_dim(mut self, board_dim: BoardDim) -> Self {
        self.board_dim = board_dim;
        self
    }

    pub fn difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn display_rates(mut self, display_rates: bool) -> Self {
        self.display_rates = display_rates;
        self
    }

    /// The board has to be made of whole cells
    pub fn validate(self) -> Result<Self> {
        let BoardDim { width, height } = self.board_dim;
        for (name, value) in [("width", width), ("height", height)] {
            if value <= 0 || value % GRID_STEP != 0 {
                return Err(Error::config(format!(
                    "{name} must be a positive multiple of {GRID_STEP}, got {value}"
                )));
            }
        }
        // the snake starts at (100, 100) and needs room to its right
        if width <= 140 || height <= 100 {
            return Err(Error::config(format!(
                "board {width}x{height} is too small for the starting snake"
            )));
        }
        Ok(self)
    }
}

#[test]
fn test_validate() {
    assert!(Prefs::default().validate().is_ok());

    let with = |width, height| Prefs::default().board_dim(BoardDim { width, height });
    assert!(with(1000, 600).validate().is_ok());
    assert!(with(810, 480).validate().is_err());
    assert!(with(800, 0).validate().is_err());
    assert!(with(-800, 480).validate().is_err());
    assert!(with(120, 480).validate().is_err());
    assert!(with(800, 100).validate().is_err());
}
