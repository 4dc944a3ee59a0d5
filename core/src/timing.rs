use core::future::Future;
use core::time::Duration;

/// Scheduling capability behind the cascade's timed suspensions.
///
/// The engine only ever yields inside [`Clock::sleep`]; hosts map it onto real
/// timers while tests substitute virtual or zero time and run every cascade
/// deterministically.
pub trait Clock {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()>;
}

/// Clock whose sleeps complete immediately.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct NoDelay;

impl Clock for NoDelay {
    fn sleep(&self, _duration: Duration) -> impl Future<Output = ()> {
        core::future::ready(())
    }
}
