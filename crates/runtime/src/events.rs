//! Events published by the simulation worker.
//!
//! The presentation layer subscribes to these instead of polling state: every
//! accepted action carries a full post-action snapshot, which is cheap at this
//! board size and keeps renderers stateless.
use serde::{Deserialize, Serialize};

use wolfhunt_core::{Action, ActionResult, GameState};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    /// An action was executed; carries the result and the snapshot after it.
    ActionExecuted {
        action: Action,
        result: ActionResult,
        state: Box<GameState>,
    },

    /// An action failed validation and left the state untouched. Illegal
    /// moves and empty-gun shots land here; the UI ignores them silently.
    ActionRejected { action: Action, error: String },
}
