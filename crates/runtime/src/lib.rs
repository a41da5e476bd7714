//! Async orchestration for the hunt.
//!
//! The runtime owns two background workers: a simulation worker holding the
//! authoritative [`wolfhunt_core::GameState`] and a pursuit worker driving
//! the wolf on a fixed timer. Hunter input and wolf ticks both funnel through
//! the simulation worker's command channel, so every mutation is serialized
//! without any lock. Clients observe the game through broadcast [`Event`]s
//! and a cloneable [`RuntimeHandle`].
mod error;
mod events;
mod handle;
mod runtime;
pub mod workers;

pub use error::{Result, RuntimeError};
pub use events::Event;
pub use handle::RuntimeHandle;
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
