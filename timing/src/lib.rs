//! Rate limiting for high-frequency UI events.
//!
//! [`debounce`] waits for a quiet period and then runs the action once with the
//! arguments of the last call. [`throttle`] runs the action immediately and then
//! ignores calls until its suppression window elapses.
//!
//! Both run on a [`Timer`]. [`BrowserTimer`] is for wasm builds and [`TokioTimer`]
//! is for native hosts.

mod debounce;
#[cfg(test)]
mod testing;
mod throttle;
mod timer;

use std::time::Duration;

pub use debounce::{debounce, try_debounce, Debounced};
pub use throttle::{throttle, Throttled};
pub use timer::{BrowserTimer, Timer};

#[cfg(not(target_arch = "wasm32"))]
pub use timer::TokioTimer;

pub const DEFAULT_WAIT: Duration = Duration::from_millis(250);
pub const DEFAULT_LIMIT: Duration = Duration::from_millis(250);
