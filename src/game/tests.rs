use super::*;
use crate::basic::GRID_STEP;
use proptest::prelude::*;

fn scheduled_game(schedule: Vec<GridPoint>) -> GameState {
    GameState::with_spawn_policy(
        BoardDim::DEFAULT,
        SpawnPolicy::scheduled(schedule),
        StdRng::seed_from_u64(0),
    )
    .unwrap()
}

#[test]
fn starts_like_a_fresh_round() {
    let game = GameState::new(BoardDim::DEFAULT, Some(3)).unwrap();
    assert_eq!(game.score(), 0);
    assert!(!game.is_over());
    assert_eq!(
        game.snake().cells().collect::<Vec<_>>(),
        vec![
            GridPoint::new(100, 100),
            GridPoint::new(80, 100),
            GridPoint::new(60, 100)
        ]
    );
    assert_eq!(game.snake().dir(), Dir::R);
    assert!(BoardDim::DEFAULT.contains(game.apple().pos));
}

#[test]
fn eating_grows_and_scores() {
    let mut game = scheduled_game(vec![GridPoint::new(140, 100), GridPoint::new(500, 300)]);

    assert_eq!(game.tick(), Tick::Moved);
    assert_eq!(game.snake().len(), 3);

    assert_eq!(game.tick(), Tick::Ate);
    assert_eq!(game.score(), 1);
    assert_eq!(game.snake().len(), 4);
    assert_eq!(game.snake().head(), GridPoint::new(140, 100));
    assert_eq!(game.apple().pos, GridPoint::new(500, 300));

    // the tail stays put on the tick the apple is eaten, then
    // the snake keeps its new length
    assert_eq!(game.tick(), Tick::Moved);
    assert_eq!(game.snake().len(), 4);
    assert!(game.snake().is_contiguous());
}

#[test]
fn apple_on_the_snake_is_eaten_only_by_the_head() {
    // the first apple lands on the body, the head never reaches it
    let mut game = scheduled_game(vec![GridPoint::new(80, 100)]);
    for _ in 0..10 {
        assert_eq!(game.tick(), Tick::Moved);
    }
    assert_eq!(game.score(), 0);
}

#[test]
fn leaving_the_board_ends_the_game() {
    let mut game = scheduled_game(vec![GridPoint::new(0, 400)]);
    game.set_dir(Dir::U);

    // head at y = 100, five steps reach y = 0
    for _ in 0..5 {
        assert_eq!(game.tick(), Tick::Moved);
    }
    assert_eq!(game.snake().head(), GridPoint::new(100, 0));

    let cells: Vec<_> = game.snake().cells().collect();
    assert_eq!(game.tick(), Tick::GameOver { score: 0 });
    assert!(game.is_over());
    // nothing moves once the round is over
    assert_eq!(game.tick(), Tick::GameOver { score: 0 });
    assert_eq!(game.snake().cells().collect::<Vec<_>>(), cells);
}

#[test]
fn right_edge_is_exclusive() {
    let mut game = scheduled_game(vec![GridPoint::new(0, 400)]);
    // head at x = 100, the last valid column is x = 780
    let steps = (780 - 100) / GRID_STEP;
    for _ in 0..steps {
        assert_eq!(game.tick(), Tick::Moved);
    }
    assert_eq!(game.snake().head(), GridPoint::new(780, 100));
    assert_eq!(game.tick(), Tick::GameOver { score: 0 });
}

#[test]
fn reversing_is_not_prevented() {
    let mut game = scheduled_game(vec![GridPoint::new(0, 400)]);
    game.set_dir(Dir::L);
    assert_eq!(game.tick(), Tick::Moved);
    assert_eq!(game.snake().head(), GridPoint::new(80, 100));
    assert!(!game.is_over());
}

fn dir_strategy() -> impl Strategy<Value = Dir> {
    prop::sample::select(Dir::ALL.to_vec())
}

proptest! {
    #[test]
    fn tick_properties(
        seed in any::<u64>(),
        turns in prop::collection::vec(prop::option::of(dir_strategy()), 1..200),
    ) {
        let board = BoardDim::DEFAULT;
        let mut game = GameState::new(board, Some(seed)).unwrap();

        for turn in turns {
            if let Some(dir) = turn {
                game.set_dir(dir);
            }
            let len_before = game.snake().len();
            let score_before = game.score();
            let next_head = game.snake().next_head();

            let tick = game.tick();

            prop_assert!(game.snake().len() >= len_before);
            prop_assert!(board.contains(game.apple().pos));
            prop_assert!(game.apple().pos.is_grid_aligned());
            prop_assert!(game.snake().is_contiguous());

            match tick {
                Tick::Ate => {
                    prop_assert_eq!(game.score(), score_before + 1);
                    prop_assert_eq!(game.snake().len(), len_before + 1);
                }
                Tick::Moved => {
                    prop_assert_eq!(game.score(), score_before);
                    prop_assert_eq!(game.snake().len(), len_before);
                }
                Tick::GameOver { score } => {
                    prop_assert!(!board.contains(next_head));
                    prop_assert_eq!(score, score_before);
                    break;
                }
            }
            // the game only ends when the head leaves the board
            prop_assert!(board.contains(game.snake().head()));
        }
    }
}
