//! Application wiring: runtime construction and the main event loop.
//!
//! The loop multiplexes two sources: runtime events (state changes to draw)
//! and a frame tick that polls the keyboard. Gameplay keys become actions
//! submitted to the runtime; rejected actions are logged and otherwise
//! ignored, which is how illegal moves stay silent on screen.
use anyhow::Result;
use crossterm::event::{self as term_event, Event as TermEvent, KeyEventKind};
use tokio::sync::broadcast;
use tokio::time::{self, Duration};
use tracing::{debug, warn};

use wolfhunt_runtime::{Event, Runtime, RuntimeError, RuntimeHandle};

use crate::config::CliConfig;
use crate::input::{InputHandler, KeyAction};
use crate::presentation::{terminal, terminal::Tui, ui};
use crate::state::AppState;

const FRAME_INTERVAL_MS: u64 = 16;

pub struct App {
    config: CliConfig,
}

impl App {
    pub fn new(config: CliConfig) -> Self {
        Self { config }
    }

    pub async fn run(self) -> Result<()> {
        let runtime = Runtime::builder()
            .config(self.config.runtime_config())
            .build();
        let handle = runtime.handle();
        let events = handle.subscribe_events();

        let initial = handle.query_state().await?;
        let mut app_state = AppState::new(initial);

        let mut terminal = terminal::init()?;
        let guard = terminal::TerminalGuard;

        let result = event_loop(&mut terminal, &handle, events, &mut app_state).await;

        // Restore the terminal before joining workers so a hung shutdown
        // never leaves the user in raw mode. The handle must go first, or
        // the simulation worker's command channel stays open.
        drop(guard);
        drop(handle);
        runtime.shutdown().await?;

        result
    }
}

async fn event_loop(
    terminal: &mut Tui,
    handle: &RuntimeHandle,
    mut events: broadcast::Receiver<Event>,
    app_state: &mut AppState,
) -> Result<()> {
    let input = InputHandler;
    ui::render(terminal, app_state)?;

    let mut frame_tick = time::interval(Duration::from_millis(FRAME_INTERVAL_MS));

    loop {
        tokio::select! {
            result = events.recv() => match result {
                Ok(event) => {
                    if app_state.apply_event(&event) {
                        ui::render(terminal, app_state)?;
                    }
                }
                Err(broadcast::error::RecvError::Closed) => {
                    warn!("event stream closed");
                    break;
                }
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    warn!(skipped, "dropped stale events, resyncing snapshot");
                    app_state.snapshot = handle.query_state().await?;
                    ui::render(terminal, app_state)?;
                }
            },
            _ = frame_tick.tick() => {
                if handle_input_tick(terminal, handle, &input, app_state).await? {
                    break;
                }
            }
        }
    }

    Ok(())
}

/// Polls for keyboard input. Returns true when the user quits.
async fn handle_input_tick(
    terminal: &mut Tui,
    handle: &RuntimeHandle,
    input: &InputHandler,
    app_state: &mut AppState,
) -> Result<bool> {
    if !term_event::poll(Duration::from_millis(0))? {
        return Ok(false);
    }

    match term_event::read()? {
        TermEvent::Key(key) if key.kind == KeyEventKind::Press => match input.handle_key(key) {
            KeyAction::Quit => Ok(true),
            KeyAction::Submit(action) => {
                match handle.execute_action(action).await {
                    Ok(_) => {}
                    // Blocked moves, empty-gun shots, and post-game input.
                    Err(err @ RuntimeError::Action(_)) => debug!(%err, "input ignored"),
                    Err(err) => return Err(err.into()),
                }
                Ok(false)
            }
            KeyAction::None => Ok(false),
        },
        TermEvent::Resize(_, _) => {
            ui::render(terminal, app_state)?;
            Ok(false)
        }
        _ => Ok(false),
    }
}
