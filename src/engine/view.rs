//! One-way view state machine.

use serde::Serialize;
use std::fmt;

/// Which panel owns the display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    /// Greeting, date and running clock.
    #[default]
    Home,
    /// Countdown. Terminal: there is no way back to `Home`.
    Dashboard,
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            View::Home => "home",
            View::Dashboard => "dashboard",
        };
        write!(f, "{}", s)
    }
}

/// Outcome of a wake-up request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The view moved from `Home` to `Dashboard`.
    Woke,
    /// Already on the dashboard; nothing changed.
    AlreadyAwake,
}

/// Holds the current [`View`] and enforces `Home -> Dashboard` only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewController {
    view: View,
}

impl ViewController {
    /// Starts in `Home`.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current view.
    pub fn view(&self) -> View {
        self.view
    }

    /// Moves to `Dashboard`. Repeated calls are no-ops.
    pub fn wake_up(&mut self) -> Transition {
        match self.view {
            View::Home => {
                self.view = View::Dashboard;
                Transition::Woke
            }
            View::Dashboard => Transition::AlreadyAwake,
        }
    }
}
