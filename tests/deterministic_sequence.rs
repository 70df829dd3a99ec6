use grid_snake::apple::Apple;
use grid_snake::field::GridPoint;
use grid_snake::game::{EndReason, GameState, GameStatus};
use grid_snake::input::{Direction, GameInput};

#[test]
fn stepwise_apple_collection_and_wall_collision() {
    let mut state = GameState::new_with_seed(42);
    state.apple = Apple::at(GridPoint { x: 2, y: 0 });

    state.tick();
    assert_eq!(state.status, GameStatus::Running);
    assert_eq!(state.snake.head_location(), GridPoint { x: 1, y: 0 });

    state.tick();
    assert_eq!(state.score, 1);
    assert_eq!(state.snake.len(), 2);
    assert_eq!(state.snake.head_location(), GridPoint { x: 2, y: 0 });
    assert!(!state.snake.occupies(state.apple.location()));

    state.apply_input(GameInput::Direction(Direction::Up));
    state.tick();

    assert_eq!(state.status, GameStatus::Ended);
    assert_eq!(state.end_reason(), Some(EndReason::WallCrash));
    assert_eq!(state.score, 1);
}

#[test]
fn identical_seeds_and_inputs_replay_identically() {
    let inputs = [
        GameInput::Direction(Direction::Down),
        GameInput::Direction(Direction::Right),
        GameInput::Direction(Direction::Down),
    ];

    let mut a = GameState::new_with_seed(7);
    let mut b = GameState::new_with_seed(7);

    for input in inputs {
        a.apply_input(input);
        b.apply_input(input);
        for _ in 0..3 {
            a.tick();
            b.tick();
        }
    }

    assert_eq!(a.status, b.status);
    assert_eq!(a.score, b.score);
    assert_eq!(a.snake.head_location(), b.snake.head_location());
    assert_eq!(a.apple.location(), b.apple.location());
}

#[test]
fn pause_holds_the_simulation_in_place() {
    let mut state = GameState::new_with_seed(11);
    state.apple = Apple::at(GridPoint { x: 20, y: 20 });

    state.tick();
    let head = state.snake.head_location();

    state.apply_input(GameInput::PauseToggle);
    for _ in 0..10 {
        state.tick();
    }
    assert_eq!(state.snake.head_location(), head);

    state.apply_input(GameInput::PauseToggle);
    state.tick();
    assert_ne!(state.snake.head_location(), head);
}
