use std::{cell::RefCell, rc::Rc, time::Duration};

use crate::Timer;

struct DebounceState<A, T: Timer> {
    timer: T,
    wait: Duration,
    action: Rc<dyn Fn(A)>,
    pending: RefCell<Option<T::Handle>>,
}

impl<A, T: Timer> Drop for DebounceState<A, T> {
    fn drop(&mut self) {
        if let Some(pending) = self.pending.get_mut().take() {
            self.timer.cancel(pending);
        }
    }
}

/// Action wrapped by [`debounce`].
///
/// Clones share one pending invocation. Dropping the last clone cancels it.
pub struct Debounced<A, T: Timer> {
    state: Rc<DebounceState<A, T>>,
}

impl<A: 'static, T: Timer> Debounced<A, T> {
    /// Replaces any pending invocation with one carrying `args`, due after the
    /// wait period.
    pub fn call(&self, args: A) {
        let previous = self.state.pending.borrow_mut().take();
        if let Some(previous) = previous {
            self.state.timer.cancel(previous);
        }

        let action = Rc::clone(&self.state.action);
        let pending = self
            .state
            .timer
            .schedule(self.state.wait, Box::new(move || action(args)));
        *self.state.pending.borrow_mut() = Some(pending);
    }
}

impl<A, T: Timer> Clone for Debounced<A, T> {
    fn clone(&self) -> Self {
        Self {
            state: Rc::clone(&self.state),
        }
    }
}

/// Delays `action` until `wait` has passed without another call, then runs it
/// with the arguments of the latest call.
pub fn debounce<A, T, F>(timer: T, wait: Duration, action: F) -> Debounced<A, T>
where
    A: 'static,
    T: Timer,
    F: Fn(A) + 'static,
{
    Debounced {
        state: Rc::new(DebounceState {
            timer,
            wait,
            action: Rc::new(action),
            pending: RefCell::new(None),
        }),
    }
}

/// Like [`debounce`] for fallible actions. Failures of the delayed execution
/// are handed to `on_error`, the caller never sees them.
pub fn try_debounce<A, T, E, F, H>(timer: T, wait: Duration, action: F, on_error: H) -> Debounced<A, T>
where
    A: 'static,
    T: Timer,
    F: Fn(A) -> Result<(), E> + 'static,
    H: Fn(E) + 'static,
{
    debounce(timer, wait, move |args| {
        if let Err(e) = action(args) {
            on_error(e);
        }
    })
}
