use arrayvec::ArrayVec;

use crate::action::{ActionResult, ActionTransition};
use crate::env::{GameEnv, compute_seed};
use crate::state::{Entity, GameState, Outcome, Position};

/// Trials fired per volley.
pub const VOLLEY_TRIALS: usize = 5;

// RNG contexts per trial: hit roll, x scatter, y scatter.
const ROLLS_PER_TRIAL: u32 = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ShootError {
    #[error("out of ammunition")]
    OutOfAmmo,
}

/// Hunter fires one volley of scattered shots.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShootAction;

/// Where the volley landed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VolleyReport {
    /// In-bounds impact points, in trial order.
    pub impacts: ArrayVec<Position, VOLLEY_TRIALS>,
    /// True when any impact landed on the wolf.
    pub wolf_hit: bool,
    /// Bullets left after this volley.
    pub bullets_remaining: u8,
}

impl ActionTransition for ShootAction {
    type Error = ShootError;

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        if state.bullets == 0 {
            return Err(ShootError::OutOfAmmo);
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<ActionResult, Self::Error> {
        state.bullets -= 1;

        let mut report = VolleyReport {
            bullets_remaining: state.bullets,
            ..VolleyReport::default()
        };

        let game_seed = state.game_seed;
        let nonce = state.nonce;
        let rng = env.rng();

        // The scatter target compounds across trials: each hit perturbs the
        // previous trial's target, not the hunter's position. Observable rule,
        // not an accident; changing it shifts the hit probability.
        let mut target = state.hunter_pos;
        for trial in 0..VOLLEY_TRIALS as u32 {
            let roll = |context: u32| {
                compute_seed(
                    game_seed,
                    nonce,
                    Entity::Hunter.id(),
                    trial * ROLLS_PER_TRIAL + context,
                )
            };

            if !rng.coin_flip(roll(0)) {
                continue;
            }

            target = target.offset(rng.offset(roll(1)), rng.offset(roll(2)));

            // Off-board trials leave no mark but the drift still accumulates.
            if state.board.in_bounds(target) {
                report.impacts.push(target);
                if target == state.wolf_pos {
                    report.wolf_hit = true;
                    state.outcome = Outcome::HunterShotWolf;
                }
            }
        }

        Ok(ActionResult::Volley(report))
    }

    fn post_validate(&self, _state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Action;
    use crate::config::GameConfig;
    use crate::engine::{ExecuteError, ExecutionOutcome, GameEngine};
    use crate::env::{PcgRng, RngOracle};

    /// Every trial hits and drifts one cell down-right.
    struct DriftRng;

    impl RngOracle for DriftRng {
        fn next_u32(&self, _seed: u64) -> u32 {
            0
        }

        fn coin_flip(&self, _seed: u64) -> bool {
            true
        }

        fn offset(&self, _seed: u64) -> i32 {
            1
        }
    }

    /// Every trial misses.
    struct NeverHit;

    impl RngOracle for NeverHit {
        fn next_u32(&self, _seed: u64) -> u32 {
            0
        }

        fn coin_flip(&self, _seed: u64) -> bool {
            false
        }
    }

    fn state(hunter: (i32, i32), wolf: (i32, i32)) -> GameState {
        GameState::from_positions(
            &GameConfig::default(),
            0,
            Position::new(hunter.0, hunter.1),
            Position::new(wolf.0, wolf.1),
            Position::new(9, 9),
        )
        .unwrap()
    }

    fn shoot(state: &mut GameState, rng: &dyn RngOracle) -> Result<ExecutionOutcome, ExecuteError> {
        let env = GameEnv::new(rng);
        GameEngine::new(state).execute(&env, &Action::Shoot(ShootAction))
    }

    fn volley(outcome: ExecutionOutcome) -> VolleyReport {
        match outcome.result {
            ActionResult::Volley(report) => report,
            other => panic!("expected volley result, got {other:?}"),
        }
    }

    #[test]
    fn scatter_compounds_across_trials() {
        // Hunter at (2,2), wolf three cells down the diagonal. A constant
        // (+1,+1) drift reaches it on the third trial only because each trial
        // perturbs the previous target.
        let mut state = state((2, 2), (5, 5));
        let report = volley(shoot(&mut state, &DriftRng).unwrap());

        let expected: Vec<Position> = [(3, 3), (4, 4), (5, 5), (6, 6), (7, 7)]
            .into_iter()
            .map(|(x, y)| Position::new(x, y))
            .collect();
        assert_eq!(report.impacts.as_slice(), expected.as_slice());
        assert!(report.wolf_hit);
        assert_eq!(state.outcome, Outcome::HunterShotWolf);
    }

    #[test]
    fn drift_off_the_board_leaves_no_marks() {
        let mut state = state((8, 8), (0, 0));
        let report = volley(shoot(&mut state, &DriftRng).unwrap());

        // (9,9) is the last in-bounds point on the drift path.
        assert_eq!(report.impacts.as_slice(), &[Position::new(9, 9)]);
        assert!(!report.wolf_hit);
        assert_eq!(state.outcome, Outcome::Ongoing);
    }

    #[test]
    fn missed_volley_still_consumes_a_bullet() {
        let mut state = state((2, 2), (5, 5));
        let report = volley(shoot(&mut state, &NeverHit).unwrap());

        assert!(report.impacts.is_empty());
        assert!(!report.wolf_hit);
        assert_eq!(state.bullets, GameConfig::DEFAULT_STARTING_BULLETS - 1);
    }

    #[test]
    fn bullets_run_out_and_further_shots_are_rejected() {
        let mut state = state((2, 2), (5, 5));
        state.bullets = 1;

        let report = volley(shoot(&mut state, &NeverHit).unwrap());
        assert_eq!(report.bullets_remaining, 0);
        assert_eq!(state.bullets, 0);

        let before = state.clone();
        let err = shoot(&mut state, &NeverHit);
        assert!(matches!(err, Err(ExecuteError::Shoot(_))));
        assert_eq!(state, before);
    }

    #[test]
    fn impacts_stay_in_bounds_for_arbitrary_seeds() {
        for game_seed in 0..32 {
            let mut state = state((0, 0), (9, 0));
            state.game_seed = game_seed;
            let report = volley(shoot(&mut state, &PcgRng).unwrap());
            for impact in &report.impacts {
                assert!(state.board.in_bounds(*impact), "seed {game_seed}");
            }
        }
    }
}
