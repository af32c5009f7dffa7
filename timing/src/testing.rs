use std::{cell::RefCell, rc::Rc, time::Duration};

use tokio::time::Instant;

/// Calls recorded as (milliseconds since start, argument).
pub type CallLog<A> = Rc<RefCell<Vec<(u64, A)>>>;

pub fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

pub fn recorder<A: 'static>(start: Instant) -> (CallLog<A>, impl Fn(A) + 'static) {
    let log: CallLog<A> = Default::default();
    let sink = Rc::clone(&log);
    let record = move |arg| {
        let elapsed = start.elapsed().as_millis() as u64;
        sink.borrow_mut().push((elapsed, arg));
    };
    (log, record)
}

pub async fn sleep_until(start: Instant, millis: u64) {
    tokio::time::sleep_until(start + ms(millis)).await;
}

/// Asserts the recorded calls, allowing one tick of timer rounding.
pub fn assert_calls<A: PartialEq + std::fmt::Debug + Clone>(log: &CallLog<A>, expected: &[(u64, A)]) {
    let log = log.borrow();
    assert_eq!(
        log.iter().map(|(_, arg)| arg.clone()).collect::<Vec<_>>(),
        expected.iter().map(|(_, arg)| arg.clone()).collect::<Vec<_>>(),
        "arguments of executed calls"
    );
    for ((at, _), (expected_at, _)) in log.iter().zip(expected) {
        assert!(
            (*expected_at..=expected_at + 1).contains(at),
            "call expected at {}ms, happened at {}ms",
            expected_at,
            at
        );
    }
}
