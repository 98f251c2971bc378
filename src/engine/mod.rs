//! Time-driven state engine: clock, date, countdown and view state.
//!
//! Each periodic source owns a single spawned task and an update queue.
//! Owners apply queued updates with `poll()` on their own thread, so display
//! state is only ever mutated in one place.

pub mod clock;
pub mod countdown;
pub mod date;
pub mod time_source;
pub mod view;

mod ticker;

pub use clock::{format_time, ClockSource};
pub use countdown::{format_hms, Countdown, CountdownDisplay, CountdownEngine};
pub use date::{format_date, DateSource, DateStyle};
pub use time_source::{FixedClock, SystemClock, TimeSource};
pub use view::{Transition, View, ViewController};
