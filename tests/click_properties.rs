//! Property tests: arbitrary clicks never corrupt the game

use egui::Pos2;
use proptest::prelude::*;
use proptest::strategy::ValueTree;
use proptest::test_runner::TestRunner;
use tictactoe::board::{Cell, Player};
use tictactoe::game::{GameController, GameEvent, Layout, Phase, Transition, WINDOW_SIZE};
use tictactoe::rules::{self, GameOutcome};

fn layout() -> Layout {
    Layout::from_size(WINDOW_SIZE.x, WINDOW_SIZE.y)
}

/// Anywhere on or around the screen
fn any_point() -> impl Strategy<Value = Pos2> {
    (-200.0f32..2200.0, -200.0f32..1300.0).prop_map(|(x, y)| Pos2::new(x, y))
}

/// Somewhere inside one of the nine cells
fn cell_point() -> impl Strategy<Value = Pos2> {
    (0..9usize, 1.0f32..49.0, 1.0f32..49.0)
        .prop_map(|(index, dx, dy)| layout().cell_rect(index).min + egui::vec2(dx, dy))
}

/// Center of the "Yes" or "No" button
fn button_point() -> impl Strategy<Value = Pos2> {
    any::<bool>().prop_map(|yes| {
        let layout = layout();
        if yes {
            layout.yes_button().center()
        } else {
            layout.no_button().center()
        }
    })
}

/// Clicks weighted toward the regions the game reacts to
fn click_stream() -> impl Strategy<Value = Vec<Pos2>> {
    prop::collection::vec(
        prop_oneof![
            6 => cell_point(),
            2 => button_point(),
            1 => any_point(),
        ],
        0..200,
    )
}

/// Plays a stream and checks invariants after every click.
/// Returns whether the stream ended a game and whether it restarted one.
fn play_stream(clicks: Vec<Pos2>) -> Result<(bool, bool), TestCaseError> {
    let layout = layout();
    let mut game = GameController::new();
    let mut ended = false;
    let mut restarted = false;

    for point in clicks {
        let before = game.board().mark_count();
        let transition = game.handle_event(GameEvent::PointerDown(point), &layout);
        let after = game.board().mark_count();

        match transition {
            Transition::Placed { .. } => prop_assert_eq!(after, before + 1),
            Transition::Restarted => {
                prop_assert_eq!(after, 0);
                prop_assert_eq!(game.current_player(), Player::X);
                restarted = true;
            }
            Transition::Ignored | Transition::Quit => prop_assert_eq!(after, before),
        }

        // Marks alternate: X has placed as many as O, or one more.
        let x = game
            .board()
            .cells()
            .iter()
            .filter(|c| c.player() == Some(Player::X))
            .count();
        let o = after - x;
        prop_assert!(x == o || x == o + 1);

        // The cached outcome agrees with the board.
        prop_assert_eq!(game.outcome(), rules::outcome(game.board()));
        match game.outcome() {
            GameOutcome::InProgress => prop_assert_eq!(game.phase(), Phase::Playing),
            _ => {
                prop_assert!(matches!(game.phase(), Phase::Ended(_)));
                ended = true;
            }
        }
    }

    Ok((ended, restarted))
}

proptest! {
    #[test]
    fn clicks_off_grid_never_mutate(point in any_point()) {
        let layout = layout();
        prop_assume!(layout.cell_at(point).is_none());

        let mut game = GameController::new();
        prop_assert_eq!(game.handle_event(GameEvent::PointerDown(point), &layout), Transition::Ignored);
        prop_assert!(game.board().cells().iter().all(|&c| c == Cell::Empty));
        prop_assert_eq!(game.phase(), Phase::Playing);
    }

    #[test]
    fn cell_index_is_always_on_board(point in any_point()) {
        if let Some(index) = layout().cell_at(point) {
            prop_assert!(index < 9);
            prop_assert!(layout().cell_rect(index).contains(point));
        }
    }

    #[test]
    fn random_play_keeps_invariants(clicks in click_stream()) {
        play_stream(clicks)?;
    }
}

#[test]
fn generated_streams_finish_and_restart_games() {
    let mut runner = TestRunner::deterministic();
    let strategy = click_stream();
    let mut ended = 0;
    let mut restarted = 0;

    for _ in 0..256 {
        let clicks = strategy.new_tree(&mut runner).unwrap().current();
        let (game_ended, game_restarted) = play_stream(clicks).unwrap();
        ended += usize::from(game_ended);
        restarted += usize::from(game_restarted);
    }

    assert!(ended > 0, "no generated stream ended a game");
    assert!(restarted > 0, "no generated stream restarted a game");
}
