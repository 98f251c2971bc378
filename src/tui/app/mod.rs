//! Application state and main event loop for the TUI.
//!
//! Manages terminal setup/teardown, panic hooks, and the core render loop.

use crate::config::schema::{Config, DisplayConfig};
use crate::controller::{Controller, DisplaySnapshot, EngineSettings};
use crate::engine::{SystemClock, Transition, View};
use crate::error::EngineError;
use crate::tui::event::{handle_key_event, Action, Event, EventHandler};
use crate::tui::ui::render;
use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, EventStream, MouseButton, MouseEvent,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Position, Rect},
    Terminal,
};
use std::io::{self, stdout};
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;

/// Errors that end the interactive session.
#[derive(Error, Debug)]
pub enum AppError {
    /// Terminal setup, drawing or input failed.
    #[error("terminal error: {0}")]
    Io(#[from] io::Error),

    /// The engine could not start its sources.
    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Main application state for the TUI.
#[derive(Debug)]
pub struct App {
    /// Whether the application should exit.
    pub should_quit: bool,
    /// Number of redraw ticks seen, for diagnostics.
    pub tick_count: u64,
    /// Owner of the view state and time-driven sources.
    pub controller: Controller,
    /// Last snapshot taken from the controller; what gets rendered.
    pub snapshot: DisplaySnapshot,
    /// Greeting, labels and completion message.
    pub texts: DisplayConfig,
    /// Screen area of the wake-up button, set by the home renderer.
    pub wake_button_area: Option<Rect>,
    tick_rate: Duration,
    reveal_delay: Duration,
    reveal_at: Option<Instant>,
}

impl App {
    /// Creates an app around an existing controller.
    pub fn new(controller: Controller, texts: DisplayConfig, tick_rate: Duration) -> Self {
        let snapshot = controller.snapshot();
        let reveal_delay = texts.reveal_delay();
        Self {
            should_quit: false,
            tick_count: 0,
            controller,
            snapshot,
            texts,
            wake_button_area: None,
            tick_rate,
            reveal_delay,
            reveal_at: None,
        }
    }

    /// Creates an app reading the system clock with settings from `config`.
    pub fn from_config(config: &Config) -> Self {
        let controller = Controller::new(
            EngineSettings::from_config(config),
            Arc::new(SystemClock),
        );
        Self::new(controller, config.display.clone(), config.tui.tick_rate())
    }

    /// Render tick rate.
    pub fn tick_rate(&self) -> Duration {
        self.tick_rate
    }

    /// Starts the controller's sources and takes the first snapshot.
    pub fn start(&mut self) -> Result<(), EngineError> {
        self.controller.activate()?;
        self.refresh();
        Ok(())
    }

    /// Applies queued source updates and re-reads the snapshot.
    pub fn refresh(&mut self) {
        let applied = self.controller.pump();
        if applied > 0 {
            tracing::trace!(applied, "applied source updates");
        }
        self.snapshot = self.controller.snapshot();
    }

    /// Forwards the wake-up intent and schedules the dashboard reveal.
    pub fn wake_up(&mut self) -> Result<(), EngineError> {
        if self.controller.wake_up()? == Transition::Woke {
            self.reveal_at = Some(Instant::now() + self.reveal_delay);
            self.wake_button_area = None;
        }
        self.refresh();
        Ok(())
    }

    /// Whether the dashboard is drawn at full intensity.
    ///
    /// Always true before waking; afterwards true once `reveal_delay` has passed.
    pub fn is_revealed(&self) -> bool {
        self.reveal_at.map_or(true, |at| Instant::now() >= at)
    }

    /// Applies an action produced by input handling.
    pub fn apply(&mut self, action: Action) -> Result<(), EngineError> {
        match action {
            Action::None => {}
            Action::Quit => self.should_quit = true,
            Action::WakeUp => self.wake_up()?,
        }
        Ok(())
    }

    /// Maps any terminal event to an action, counting redraw ticks.
    pub fn handle_event(&mut self, event: Event) -> Action {
        match event {
            Event::Key(key) => handle_key_event(self, key),
            Event::Mouse(mouse) => self.handle_mouse_event(mouse),
            Event::Resize(width, height) => {
                tracing::debug!(width, height, "terminal resized");
                Action::None
            }
            Event::Tick => {
                self.tick_count += 1;
                Action::None
            }
        }
    }

    /// Maps a mouse event to an action.
    ///
    /// A left click inside the wake-up button while on the home view wakes up.
    pub fn handle_mouse_event(&self, mouse: MouseEvent) -> Action {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Action::None;
        }
        if self.snapshot.view != View::Home {
            return Action::None;
        }
        match self.wake_button_area {
            Some(area) if area.contains(Position::new(mouse.column, mouse.row)) => Action::WakeUp,
            _ => Action::None,
        }
    }

    /// Runs the TUI application: starts the engine, sets up the terminal,
    /// enters the event loop and restores the terminal on exit.
    pub async fn run(&mut self) -> Result<(), AppError> {
        // Start before touching the terminal so startup errors print normally
        self.start()?;

        // Install panic hook that restores terminal before printing panic info
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = restore_terminal();
            original_hook(panic_info);
        }));

        setup_terminal()?;

        let result = self.event_loop().await;

        restore_terminal()?;
        result
    }

    /// Main event loop: renders the latest snapshot and processes events.
    async fn event_loop(&mut self) -> Result<(), AppError> {
        let backend = CrosstermBackend::new(stdout());
        let mut terminal = Terminal::new(backend)?;
        let event_handler = EventHandler::new(self.tick_rate);
        let mut reader = EventStream::new();

        loop {
            // Drain source updates before rendering
            self.refresh();
            terminal.draw(|frame| render(frame, self))?;

            let event = event_handler.next(&mut reader).await?;
            let action = self.handle_event(event);
            self.apply(action)?;

            if self.should_quit {
                tracing::info!(view = %self.snapshot.view, "quit requested");
                tracing::trace!(ticks = self.tick_count, "redraw ticks this session");
                return Ok(());
            }
        }
    }
}

/// Enables raw mode, enters alternate screen, and enables mouse capture.
fn setup_terminal() -> io::Result<()> {
    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen, EnableMouseCapture)?;
    Ok(())
}

/// Disables raw mode, leaves alternate screen, and disables mouse capture.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(())
}

#[cfg(test)]
mod tests;
