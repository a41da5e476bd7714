//! Background workers owned by the runtime.
mod pursuit;
mod simulation;

pub use pursuit::PursuitWorker;
pub use simulation::{Command, SimulationWorker};
