//! Application-side view of the hunt, fed by runtime events.
use wolfhunt_core::{ActionResult, GameState, Outcome, Position};
use wolfhunt_runtime::Event;

use crate::message::MessageLog;

const MESSAGE_CAPACITY: usize = 32;

/// Presentation state: the latest snapshot plus transient decorations.
pub struct AppState {
    pub snapshot: GameState,
    /// Impact marks of the latest volley; cleared by the next state change.
    pub impacts: Vec<Position>,
    pub messages: MessageLog,
}

impl AppState {
    pub fn new(initial: GameState) -> Self {
        let mut messages = MessageLog::new(MESSAGE_CAPACITY);
        messages.info("Reach the safe zone before the wolf reaches you.");

        Self {
            snapshot: initial,
            impacts: Vec::new(),
            messages,
        }
    }

    /// Folds a runtime event into the view. Returns true when the screen
    /// needs a redraw.
    pub fn apply_event(&mut self, event: &Event) -> bool {
        match event {
            Event::ActionExecuted { result, state, .. } => {
                let was_over = self.snapshot.is_over();

                self.snapshot = (**state).clone();
                self.impacts = match result {
                    ActionResult::Volley(report) => report.impacts.to_vec(),
                    _ => Vec::new(),
                };

                if let ActionResult::Volley(report) = result {
                    if report.bullets_remaining == 0 {
                        self.messages.alert("You are out of ammunition!");
                    }
                }

                if !was_over && self.snapshot.is_over() {
                    if let Some(text) = outcome_message(self.snapshot.outcome) {
                        self.messages.alert(text);
                    }
                }

                true
            }
            // Illegal inputs are silent no-ops at the UI.
            Event::ActionRejected { .. } => false,
        }
    }
}

fn outcome_message(outcome: Outcome) -> Option<&'static str> {
    match outcome {
        Outcome::Ongoing => None,
        Outcome::WolfCaughtHunter => Some("The wolf caught the hunter! Game over."),
        Outcome::HunterReachedSafety => Some("The hunter reached the safe zone! You win!"),
        Outcome::HunterShotWolf => Some("The hunter shot the wolf! You win!"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wolfhunt_core::{Action, GameConfig, MoveAction, ShootAction, VolleyReport};
    use wolfhunt_core::{Direction, GameState};

    fn snapshot() -> GameState {
        GameState::from_positions(
            &GameConfig::default(),
            0,
            Position::new(0, 0),
            Position::new(9, 9),
            Position::new(5, 5),
        )
        .unwrap()
    }

    #[test]
    fn rejected_actions_do_not_redraw() {
        let mut app = AppState::new(snapshot());
        let redraw = app.apply_event(&Event::ActionRejected {
            action: Action::Move(MoveAction::new(Direction::Up)),
            error: "out of bounds".into(),
        });
        assert!(!redraw);
    }

    #[test]
    fn empty_gun_volley_raises_the_ammo_alert() {
        let mut app = AppState::new(snapshot());
        let mut state = snapshot();
        state.bullets = 0;

        let report = VolleyReport {
            bullets_remaining: 0,
            ..VolleyReport::default()
        };
        let redraw = app.apply_event(&Event::ActionExecuted {
            action: Action::Shoot(ShootAction),
            result: ActionResult::Volley(report),
            state: Box::new(state),
        });

        assert!(redraw);
        assert!(
            app.messages
                .recent(1)
                .any(|entry| entry.text.contains("ammunition"))
        );
    }

    #[test]
    fn terminal_outcome_is_announced_once() {
        let mut app = AppState::new(snapshot());
        let mut state = snapshot();
        state.outcome = Outcome::HunterReachedSafety;

        let event = Event::ActionExecuted {
            action: Action::Move(MoveAction::new(Direction::Right)),
            result: ActionResult::Moved {
                from: Position::new(4, 5),
                to: Position::new(5, 5),
            },
            state: Box::new(state),
        };

        app.apply_event(&event);
        app.apply_event(&event);

        let announcements = app
            .messages
            .recent(MESSAGE_CAPACITY)
            .filter(|entry| entry.text.contains("safe zone!"))
            .count();
        assert_eq!(announcements, 1);
    }
}
