use std::{
    cell::RefCell,
    rc::{Rc, Weak},
    time::Duration,
};

use crate::Timer;

struct Window<H> {
    open: bool,
    reset: Option<H>,
}

struct ThrottleState<A, R, T: Timer> {
    timer: T,
    limit: Duration,
    action: Box<dyn Fn(A) -> R>,
    window: RefCell<Window<T::Handle>>,
}

impl<A, R, T: Timer> Drop for ThrottleState<A, R, T> {
    fn drop(&mut self) {
        if let Some(reset) = self.window.get_mut().reset.take() {
            self.timer.cancel(reset);
        }
    }
}

/// Action wrapped by [`throttle`].
pub struct Throttled<A, R, T: Timer> {
    state: Rc<ThrottleState<A, R, T>>,
}

impl<A: 'static, R: 'static, T: Timer> Throttled<A, R, T> {
    /// Runs the action unless a suppression window is open.
    ///
    /// Returns `None` when the call was dropped. Dropped calls are not retried
    /// once the window closes.
    pub fn call(&self, args: A) -> Option<R> {
        {
            let mut window = self.state.window.borrow_mut();
            if window.open {
                return None;
            }
            window.open = true;
        }

        let state: Weak<ThrottleState<A, R, T>> = Rc::downgrade(&self.state);
        let reset = self.state.timer.schedule(
            self.state.limit,
            Box::new(move || {
                if let Some(state) = state.upgrade() {
                    state.window.borrow_mut().open = false;
                }
            }),
        );
        let stale = self.state.window.borrow_mut().reset.replace(reset);
        if let Some(stale) = stale {
            self.state.timer.cancel(stale);
        }

        Some((self.state.action)(args))
    }

    pub fn limit(&self) -> Duration {
        self.state.limit
    }
}

impl<A, R, T: Timer> Clone for Throttled<A, R, T> {
    fn clone(&self) -> Self {
        Self {
            state: Rc::clone(&self.state),
        }
    }
}

/// Runs `action` at most once per `limit`, executing the first call of every
/// window immediately and dropping the rest.
pub fn throttle<A, R, T, F>(timer: T, limit: Duration, action: F) -> Throttled<A, R, T>
where
    T: Timer,
    F: Fn(A) -> R + 'static,
{
    Throttled {
        state: Rc::new(ThrottleState {
            timer,
            limit,
            action: Box::new(action),
            window: RefCell::new(Window {
                open: false,
                reset: None,
            }),
        }),
    }
}
