//! End-to-end runtime tests driving the hunt through the public API.
use tokio::time::{Duration, timeout};

use wolfhunt_core::{
    Direction, GameConfig, GameState, Outcome, Position, RngOracle, VolleyReport,
};
use wolfhunt_runtime::{Event, Runtime, RuntimeConfig};

const TEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Pursuit timer long enough that only the immediate first tick ever fires
/// within a test.
const PARKED_TICK: Duration = Duration::from_secs(600);

/// Scripted oracle: every shot trial misses.
struct NeverHit;

impl RngOracle for NeverHit {
    fn next_u32(&self, _seed: u64) -> u32 {
        0
    }

    fn coin_flip(&self, _seed: u64) -> bool {
        false
    }
}

fn scenario(hunter: (i32, i32), wolf: (i32, i32), safe: (i32, i32)) -> GameState {
    GameState::from_positions(
        &GameConfig::default(),
        0,
        Position::new(hunter.0, hunter.1),
        Position::new(wolf.0, wolf.1),
        Position::new(safe.0, safe.1),
    )
    .expect("scenario placement is valid")
}

#[tokio::test]
async fn wolf_catches_an_idle_hunter_and_ticks_stop() {
    let runtime = Runtime::builder()
        .initial_state(scenario((0, 0), (0, 3), (9, 9)))
        .tick_interval(Duration::from_millis(10))
        .build();
    let handle = runtime.handle();
    let mut events = runtime.subscribe_events();

    let final_state = timeout(TEST_TIMEOUT, async {
        loop {
            if let Event::ActionExecuted { state, .. } = events.recv().await.expect("event stream")
            {
                if state.is_over() {
                    return *state;
                }
            }
        }
    })
    .await
    .expect("wolf should catch the hunter well within the timeout");

    assert_eq!(final_state.outcome, Outcome::WolfCaughtHunter);
    assert_eq!(final_state.wolf_pos, final_state.hunter_pos);

    // Input after the terminal outcome is rejected and mutates nothing.
    let err = handle
        .move_hunter(Direction::Down)
        .await
        .expect_err("terminal state must reject moves");
    assert!(err.is_game_finished());

    let frozen = handle.query_state().await.expect("query");
    assert_eq!(frozen.outcome, Outcome::WolfCaughtHunter);
    assert_eq!(frozen.hunter_pos, final_state.hunter_pos);

    drop(events);
    drop(handle);
    timeout(TEST_TIMEOUT, runtime.shutdown())
        .await
        .expect("shutdown should not hang after the hunt finished")
        .expect("workers join cleanly");
}

#[tokio::test]
async fn hunter_wins_by_reaching_the_safe_zone() {
    let runtime = Runtime::builder()
        .initial_state(scenario((4, 5), (9, 0), (5, 5)))
        .tick_interval(PARKED_TICK)
        .build();
    let handle = runtime.handle();

    let outcome = handle
        .move_hunter(Direction::Right)
        .await
        .expect("move onto the safe zone is legal");
    assert_eq!(outcome.outcome, Outcome::HunterReachedSafety);

    let err = handle
        .shoot()
        .await
        .expect_err("won game must reject further input");
    assert!(err.is_game_finished());

    drop(handle);
    timeout(TEST_TIMEOUT, runtime.shutdown())
        .await
        .expect("pursuit worker must stop once the hunt is decided")
        .expect("workers join cleanly");
}

#[tokio::test]
async fn bullets_deplete_and_empty_gun_shots_are_rejected() {
    let runtime = Runtime::builder()
        .initial_state(scenario((0, 0), (9, 9), (5, 5)))
        .tick_interval(PARKED_TICK)
        .rng(NeverHit)
        .build();
    let handle = runtime.handle();
    let mut events = runtime.subscribe_events();

    let mut last_report: Option<VolleyReport> = None;
    for _ in 0..GameConfig::DEFAULT_STARTING_BULLETS {
        let outcome = handle.shoot().await.expect("shot with ammo is legal");
        match outcome.result {
            wolfhunt_core::ActionResult::Volley(report) => last_report = Some(report),
            other => panic!("expected volley result, got {other:?}"),
        }
    }

    let report = last_report.expect("at least one volley fired");
    assert_eq!(report.bullets_remaining, 0);
    assert!(report.impacts.is_empty(), "NeverHit volleys leave no marks");

    let err = handle
        .shoot()
        .await
        .expect_err("empty gun must reject the shot");
    assert!(!err.is_game_finished());

    let state = handle.query_state().await.expect("query");
    assert_eq!(state.bullets, 0);
    assert_eq!(state.outcome, Outcome::Ongoing);

    // The rejection is also visible on the event stream for observers.
    let saw_rejection = timeout(TEST_TIMEOUT, async {
        loop {
            match events.recv().await {
                Ok(Event::ActionRejected { error, .. }) => return error,
                Ok(_) => continue,
                Err(err) => panic!("event stream closed early: {err}"),
            }
        }
    })
    .await
    .expect("rejection event should arrive");
    assert!(saw_rejection.contains("out of ammunition"));

    drop(events);
    drop(handle);
    timeout(TEST_TIMEOUT, runtime.shutdown())
        .await
        .expect("shutdown should interrupt a parked pursuit timer")
        .expect("workers join cleanly");
}

#[tokio::test]
async fn shutdown_interrupts_a_running_hunt() {
    let runtime = Runtime::builder()
        .initial_state(scenario((0, 0), (9, 9), (5, 5)))
        .tick_interval(Duration::from_millis(50))
        .build();

    timeout(TEST_TIMEOUT, runtime.shutdown())
        .await
        .expect("shutdown must not wait for the hunt to finish")
        .expect("workers join cleanly");
}
