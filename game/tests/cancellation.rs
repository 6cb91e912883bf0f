mod support;

use std::time::Duration;

use common::{constants::PHASE_FRAMES, map::Field};
use game::presentation::KeyboardInput;
use support::{seeded_config, start};

#[tokio::test(start_paused = true)]
async fn pursuers_move_while_the_session_runs() {
    let (game, recorder) = start(seeded_config(4));
    let before = game.pursuer_positions();

    tokio::time::sleep(Duration::from_secs(1)).await;

    let after = game.pursuer_positions();
    assert_ne!(before, after[..before.len()]);
    for pursuer in game.pursuers() {
        assert!(pursuer.frame() < PHASE_FRAMES);
    }
    let first = game.pursuers()[0].id;
    assert!(recorder.bounds_count(first) > 1, "ticks should sync sprite bounds");

    game.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn nothing_moves_or_spawns_after_cancellation() {
    let (game, _) = start(seeded_config(5));
    tokio::time::sleep(Duration::from_millis(2_500)).await;

    game.cancel();
    let positions = game.pursuer_positions();
    let count = game.pursuer_count();

    tokio::time::sleep(Duration::from_secs(3)).await;
    assert_eq!(game.pursuer_positions(), positions);
    assert_eq!(game.pursuer_count(), count);

    game.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn explicit_reset_rebuilds_initial_state() {
    let (mut game, _) = start(seeded_config(6));
    tokio::time::sleep(Duration::from_millis(3_500)).await;
    assert_eq!(game.pursuer_count(), 13);

    game.reset().await;
    assert_eq!(game.generation(), 1);
    assert_eq!(game.pursuer_count(), 10);
    assert!(!game.player().is_dead());

    // Fresh pursuers have not ticked yet, so they still sit on the spawn border
    let field = Field::default();
    assert!(game.pursuer_positions().iter().all(|pos| !field.contains(*pos)));

    // The new session is live again
    tokio::time::sleep(Duration::from_millis(1_500)).await;
    assert_eq!(game.pursuer_count(), 11);
    game.update(&KeyboardInput::default()).await;

    game.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn shutdown_joins_every_task() {
    let (game, _) = start(seeded_config(8));
    tokio::time::sleep(Duration::from_millis(1_200)).await;

    tokio::time::timeout(Duration::from_millis(100), game.shutdown())
        .await
        .expect("shutdown should not wait on timers");
}
