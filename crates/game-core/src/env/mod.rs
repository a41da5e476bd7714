//! Execution environment handed to the engine.
//!
//! The environment bundles the oracles an action may consult while it runs.
//! For this game that is a single [`RngOracle`]; keeping it behind a struct
//! mirrors how the rest of the crate receives read-only collaborators.
pub mod rng;

pub use rng::{PcgRng, RngOracle, compute_seed};

/// Read-only collaborators for a single action execution.
#[derive(Clone, Copy)]
pub struct GameEnv<'a> {
    rng: &'a dyn RngOracle,
}

impl<'a> GameEnv<'a> {
    pub fn new(rng: &'a dyn RngOracle) -> Self {
        Self { rng }
    }

    pub fn rng(&self) -> &'a dyn RngOracle {
        self.rng
    }
}
