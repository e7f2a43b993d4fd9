use crate::apple::Apple;
use crate::basic::BoardDim;
#[cfg(test)]
use crate::basic::GridPoint;
use rand::Rng;

pub enum SpawnPolicy {
    /// Uniformly random grid-aligned cell, the snake's body is not avoided
    Random,
    /// Cycles through a fixed list of positions, positions outside the
    /// board are skipped
    #[cfg(test)]
    Scheduled {
        schedule: Vec<GridPoint>,
        next_index: usize,
    },
}

#[cfg(test)]
impl SpawnPolicy {
    pub fn scheduled(schedule: Vec<GridPoint>) -> Self {
        Self::Scheduled { schedule, next_index: 0 }
    }

    pub fn reset(&mut self) {
        match self {
            SpawnPolicy::Random => {}
            SpawnPolicy::Scheduled { next_index, .. } => *next_index = 0,
        }
    }
}

pub fn spawn_apple<R: Rng + ?Sized>(
    policy: &mut SpawnPolicy,
    board_dim: BoardDim,
    rng: &mut R,
) -> Apple {
    let pos = match policy {
        SpawnPolicy::Random => board_dim.random_cell(rng),
        #[cfg(test)]
        SpawnPolicy::Scheduled { schedule, next_index } => {
            let len = schedule.len();
            let scheduled = (0..len)
                .map(|i| schedule[(*next_index + i) % len])
                .position(|pos| board_dim.contains(pos) && pos.is_grid_aligned());
            match scheduled {
                Some(offset) => {
                    let pos = schedule[(*next_index + offset) % len];
                    *next_index = (*next_index + offset + 1) % len;
                    pos
                }
                None => {
                    log::warn!("no usable scheduled apple position, spawning randomly");
                    board_dim.random_cell(rng)
                }
            }
        }
    };
    log::trace!("apple spawned at {pos:?}");
    Apple { pos }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn random_apples_are_on_the_board() {
        let board = BoardDim::DEFAULT;
        let mut rng = StdRng::seed_from_u64(7);
        let mut policy = SpawnPolicy::Random;
        for _ in 0..1000 {
            let Apple { pos } = spawn_apple(&mut policy, board, &mut rng);
            assert!(board.contains(pos), "{pos:?}");
            assert!(pos.is_grid_aligned(), "{pos:?}");
        }
    }

    #[test]
    fn random_apples_reach_the_edges() {
        let board = BoardDim { width: 60, height: 40 };
        let mut rng = StdRng::seed_from_u64(1);
        let mut policy = SpawnPolicy::Random;
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(spawn_apple(&mut policy, board, &mut rng).pos);
        }
        assert_eq!(seen.len(), 6);
        assert!(seen.contains(&GridPoint::new(40, 20)));
    }

    #[test]
    fn scheduled_apples_cycle_and_skip_invalid() {
        let board = BoardDim::DEFAULT;
        let mut rng = StdRng::seed_from_u64(0);
        let mut policy = SpawnPolicy::scheduled(vec![
            GridPoint::new(20, 20),
            GridPoint::new(2000, 20),
            GridPoint::new(40, 40),
        ]);
        let spawned: Vec<_> = (0..4)
            .map(|_| spawn_apple(&mut policy, board, &mut rng).pos)
            .collect();
        assert_eq!(
            spawned,
            vec![
                GridPoint::new(20, 20),
                GridPoint::new(40, 40),
                GridPoint::new(20, 20),
                GridPoint::new(40, 40),
            ]
        );

        policy.reset();
        assert_eq!(spawn_apple(&mut policy, board, &mut rng).pos, GridPoint::new(20, 20));
    }
}
