use clap::Parser;

use crate::basic::BoardDim;
use crate::difficulty::Difficulty;
use crate::error::{ErrorConversion, Result};
use crate::prefs::Prefs;

#[derive(Parser, Debug)]
#[command(author, version, about = "A simple snake game", long_about = None)]
pub struct Args {
    /// Initial difficulty, can be changed from the menu
    #[arg(short, long, value_enum, default_value_t = Difficulty::Medium)]
    pub difficulty: Difficulty,

    /// Window width in pixels, a multiple of 20
    #[arg(long, default_value_t = BoardDim::DEFAULT.width)]
    pub width: i32,

    /// Window height in pixels, a multiple of 20
    #[arg(long, default_value_t = BoardDim::DEFAULT.height)]
    pub height: i32,

    /// Seed for food placement
    #[arg(long)]
    pub seed: Option<u64>,

    /// Show the measured tick and draw rates
    #[arg(long)]
    pub rates: bool,
}

impl Args {
    pub fn into_prefs(self) -> Result<Prefs> {
        Prefs::default()
            .board_dim(BoardDim { width: self.width, height: self.height })
            .difficulty(self.difficulty)
            .seed(self.seed)
            .display_rates(self.rates)
            .validate()
            .with_trace_step("Args::into_prefs")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let prefs = Args::parse_from(["swipe_snake"]).into_prefs().unwrap();
        assert_eq!(prefs.board_dim, BoardDim::DEFAULT);
        assert_eq!(prefs.difficulty, Difficulty::Medium);
        assert_eq!(prefs.seed, None);
        assert!(!prefs.display_rates);
    }

    #[test]
    fn all_options() {
        let args = Args::parse_from([
            "swipe_snake",
            "--difficulty",
            "hard",
            "--width",
            "1000",
            "--height",
            "600",
            "--seed",
            "42",
            "--rates",
        ]);
        let prefs = args.into_prefs().unwrap();
        assert_eq!(prefs.difficulty, Difficulty::Hard);
        assert_eq!(prefs.board_dim, BoardDim { width: 1000, height: 600 });
        assert_eq!(prefs.seed, Some(42));
        assert!(prefs.display_rates);
    }

    #[test]
    fn rejects_partial_cells() {
        let args = Args::parse_from(["swipe_snake", "--width", "805"]);
        assert!(args.into_prefs().is_err());
    }

    #[test]
    fn rejects_unknown_difficulty() {
        assert!(Args::try_parse_from(["swipe_snake", "-d", "insane"]).is_err());
    }
}
