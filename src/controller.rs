//! Orchestration of the time-driven sources.
//!
//! [`Controller`] is the only place that starts or stops sources. The view
//! state decides which ones run: the clock and date while `Home`, the
//! countdown once `Dashboard`. The rendering layer reads a
//! [`DisplaySnapshot`] after calling [`Controller::pump`].

use crate::config::schema::Config;
use crate::engine::{
    ClockSource, CountdownDisplay, CountdownEngine, DateSource, DateStyle, TimeSource,
    Transition, View, ViewController,
};
use crate::error::EngineError;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

/// Everything the rendering layer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplaySnapshot {
    /// Which panel to render.
    pub view: View,
    /// Current time, only while `Home`.
    pub time: Option<String>,
    /// Today's date, only while `Home`.
    pub date: Option<String>,
    /// Countdown state, only while `Dashboard`.
    pub countdown: Option<CountdownDisplay>,
}

/// Engine settings extracted from [`Config`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineSettings {
    /// Countdown starting point in seconds.
    pub initial_seconds: i64,
    /// Clock refresh period.
    pub clock_interval: Duration,
    /// Date rendering style.
    pub date_style: DateStyle,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl EngineSettings {
    /// Reads the engine-relevant values from a loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        Self {
            initial_seconds: config.countdown.initial_seconds,
            clock_interval: config.clock.refresh_interval(),
            date_style: config.display.date_style,
        }
    }
}

/// Owner of the view state and every time-driven source.
#[derive(Debug)]
pub struct Controller {
    settings: EngineSettings,
    time: Arc<dyn TimeSource>,
    view: ViewController,
    clock: ClockSource,
    date: Option<DateSource>,
    countdown: CountdownEngine,
}

impl Controller {
    /// Creates a controller in `Home` with nothing running yet.
    pub fn new(settings: EngineSettings, time: Arc<dyn TimeSource>) -> Self {
        let clock = ClockSource::with_interval(Arc::clone(&time), settings.clock_interval);
        Self {
            settings,
            time,
            view: ViewController::new(),
            clock,
            date: None,
            countdown: CountdownEngine::new(),
        }
    }

    /// Starts the sources owned by the current view.
    ///
    /// Fails with `EnvironmentUnavailable` when called outside a tokio runtime.
    pub fn activate(&mut self) -> Result<(), EngineError> {
        match self.view.view() {
            View::Home => self.activate_home(),
            View::Dashboard => {
                if self.countdown.state().is_none() {
                    self.countdown.start(self.settings.initial_seconds)?;
                }
                Ok(())
            }
        }
    }

    fn activate_home(&mut self) -> Result<(), EngineError> {
        self.clock.start()?;
        self.date = Some(DateSource::activate(
            self.time.as_ref(),
            self.settings.date_style,
        ));
        tracing::info!(view = %View::Home, "home sources active");
        Ok(())
    }

    /// Handles the wake-up intent.
    ///
    /// The first call starts a fresh countdown and then tears down the clock
    /// and date; later calls change nothing. When the countdown cannot start
    /// the controller stays on `Home` with its sources untouched.
    pub fn wake_up(&mut self) -> Result<Transition, EngineError> {
        if self.view.view() == View::Dashboard {
            tracing::debug!("wake-up ignored, already on the dashboard");
            return Ok(Transition::AlreadyAwake);
        }

        self.countdown.start(self.settings.initial_seconds)?;
        let transition = self.view.wake_up();
        self.clock.stop();
        self.date = None;
        tracing::info!(
            initial_seconds = self.settings.initial_seconds,
            "woke up, countdown started"
        );
        Ok(transition)
    }

    /// Applies queued updates from the active sources. Returns how many were applied.
    pub fn pump(&mut self) -> usize {
        self.clock.poll() + self.countdown.poll()
    }

    /// Current display state.
    pub fn snapshot(&self) -> DisplaySnapshot {
        match self.view.view() {
            View::Home => DisplaySnapshot {
                view: View::Home,
                time: self.clock.current().map(str::to_string),
                date: self.date.as_ref().map(|d| d.snapshot().to_string()),
                countdown: None,
            },
            View::Dashboard => DisplaySnapshot {
                view: View::Dashboard,
                time: None,
                date: None,
                countdown: self.countdown.state().map(|c| c.display()),
            },
        }
    }

    /// Current view.
    pub fn view(&self) -> View {
        self.view.view()
    }

    /// Whether the clock is producing updates.
    pub fn clock_running(&self) -> bool {
        self.clock.is_running()
    }

    /// Whether a date snapshot is held.
    pub fn date_active(&self) -> bool {
        self.date.is_some()
    }

    /// The countdown engine, for inspection.
    pub fn countdown(&self) -> &CountdownEngine {
        &self.countdown
    }

    /// Engine settings in use.
    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }
}
