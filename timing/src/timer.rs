use std::time::Duration;

use gloo_timers::callback::Timeout;

/// One-shot timer facility.
///
/// A scheduled task runs at most once. Cancelling a handle whose task has
/// already run has no effect.
pub trait Timer: Clone + 'static {
    type Handle: 'static;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Self::Handle;

    fn cancel(&self, handle: Self::Handle);
}

/// Timer backed by the browser's `setTimeout`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BrowserTimer;

impl Timer for BrowserTimer {
    type Handle = Timeout;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Timeout {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        Timeout::new(millis, task)
    }

    fn cancel(&self, handle: Timeout) {
        drop(handle.cancel());
    }
}

/// Timer running tasks on the current tokio `LocalSet`.
///
/// Scheduling outside of a `LocalSet` panics.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TokioTimer;

#[cfg(not(target_arch = "wasm32"))]
impl Timer for TokioTimer {
    type Handle = tokio::task::JoinHandle<()>;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Self::Handle {
        let deadline = tokio::time::Instant::now() + delay;
        tokio::task::spawn_local(async move {
            tokio::time::sleep_until(deadline).await;
            task();
        })
    }

    fn cancel(&self, handle: Self::Handle) {
        handle.abort();
    }
}
