//! High-level runtime orchestrator.
//!
//! The runtime owns the background workers, wires up command/event channels,
//! and exposes a builder-based API for clients to drive the hunt.
use tokio::sync::{broadcast, mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::Duration;
use tracing::info;

use wolfhunt_core::{GameConfig, GameState, PcgRng, RngOracle};

use crate::error::{Result, RuntimeError};
use crate::events::Event;
use crate::handle::RuntimeHandle;
use crate::workers::{Command, PursuitWorker, SimulationWorker};

/// Runtime configuration shared across the orchestrator and workers.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub game: GameConfig,
    /// Fixed game seed; a random one is drawn when absent.
    pub seed: Option<u64>,
    /// Period of the wolf's pursuit timer.
    pub tick_interval: Duration,
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
}

impl RuntimeConfig {
    pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(1);
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            seed: None,
            tick_interval: Self::DEFAULT_TICK_INTERVAL,
            event_buffer_size: 100,
            command_buffer_size: 32,
        }
    }
}

/// Main runtime that orchestrates the hunt.
///
/// Owns the workers and coordinates shutdown; [`RuntimeHandle`] provides a
/// cloneable façade for clients.
pub struct Runtime {
    handle: RuntimeHandle,
    shutdown_tx: watch::Sender<bool>,
    sim_worker_handle: JoinHandle<()>,
    pursuit_worker_handle: JoinHandle<()>,
}

impl Runtime {
    /// Create a new runtime builder.
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime.
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    /// Subscribe to game events.
    pub fn subscribe_events(&self) -> broadcast::Receiver<Event> {
        self.handle.subscribe_events()
    }

    /// Shut down the runtime gracefully.
    ///
    /// Callers must drop any cloned handles first, otherwise the simulation
    /// worker keeps serving their command channel and the join blocks.
    pub async fn shutdown(self) -> Result<()> {
        let _ = self.shutdown_tx.send(true);
        drop(self.handle);

        self.pursuit_worker_handle
            .await
            .map_err(RuntimeError::WorkerJoin)?;
        self.sim_worker_handle
            .await
            .map_err(RuntimeError::WorkerJoin)?;

        Ok(())
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    state: Option<GameState>,
    rng: Option<Box<dyn RngOracle>>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            state: None,
            rng: None,
        }
    }

    /// Override runtime configuration.
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Override the pursuit timer period.
    pub fn tick_interval(mut self, tick_interval: Duration) -> Self {
        self.config.tick_interval = tick_interval;
        self
    }

    /// Provide an explicit initial state instead of randomized placement.
    pub fn initial_state(mut self, state: GameState) -> Self {
        self.state = Some(state);
        self
    }

    /// Substitute the RNG oracle (tests inject scripted oracles here).
    pub fn rng(mut self, rng: impl RngOracle + 'static) -> Self {
        self.rng = Some(Box::new(rng));
        self
    }

    /// Build the runtime and spawn its workers.
    pub fn build(self) -> Runtime {
        let rng: Box<dyn RngOracle> = self.rng.unwrap_or_else(|| Box::new(PcgRng));
        let game_seed = self.config.seed.unwrap_or_else(rand::random);

        let initial_state = self
            .state
            .unwrap_or_else(|| GameState::generate(&self.config.game, game_seed, rng.as_ref()));

        info!(
            game_seed = initial_state.game_seed,
            grid_size = initial_state.grid_size(),
            bullets = initial_state.bullets,
            "starting hunt"
        );

        let (command_tx, command_rx) = mpsc::channel::<Command>(self.config.command_buffer_size);
        let (event_tx, _event_rx) = broadcast::channel::<Event>(self.config.event_buffer_size);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        let handle = RuntimeHandle::new(command_tx.clone(), event_tx.clone());

        let sim_worker = SimulationWorker::new(initial_state, rng, command_rx, event_tx);
        let sim_worker_handle = tokio::spawn(sim_worker.run());

        let pursuit_worker =
            PursuitWorker::new(command_tx, shutdown_rx, self.config.tick_interval);
        let pursuit_worker_handle = tokio::spawn(pursuit_worker.run());

        Runtime {
            handle,
            shutdown_tx,
            sim_worker_handle,
            pursuit_worker_handle,
        }
    }
}
