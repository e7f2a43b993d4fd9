use std::fmt::{Display, Formatter};
use std::time::Duration;

/// How fast the snake moves
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default, clap::ValueEnum)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Time between two ticks
    pub fn tick_duration(self) -> Duration {
        match self {
            Difficulty::Easy => Duration::from_millis(300),
            Difficulty::Medium => Duration::from_millis(200),
            Difficulty::Hard => Duration::from_millis(100),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// Cycles Easy -> Medium -> Hard -> Easy
    #[must_use]
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|d| *d == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[test]
fn test_difficulty() {
    assert_eq!(Difficulty::default(), Difficulty::Medium);
    assert_eq!(Difficulty::Easy.next(), Difficulty::Medium);
    assert_eq!(Difficulty::Hard.next(), Difficulty::Easy);
    assert!(Difficulty::Hard.tick_duration() < Difficulty::Medium.tick_duration());
    assert!(Difficulty::Medium.tick_duration() < Difficulty::Easy.tick_duration());
    for (i, d) in Difficulty::ALL.into_iter().enumerate() {
        assert_eq!(d.index(), i);
    }
    assert_eq!(format!("Difficulty: {}", Difficulty::Hard), "Difficulty: Hard");
}
