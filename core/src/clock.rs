use core::time::Duration;

/// Monotonic point in time, measured from an arbitrary per-clock origin.
pub type Timestamp = Duration;

/// Source of monotonic time used for elapsed-time tracking.
pub trait Clock {
    fn now(&self) -> Timestamp;
}

/// Wall clock backed by [`web_time::Instant`], so it also works in the browser.
#[derive(Copy, Clone, Debug)]
pub struct SystemClock {
    origin: web_time::Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: web_time::Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        self.origin.elapsed()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Timestamp {
        (**self).now()
    }
}

/// Clock that only moves when told to.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now: core::cell::Cell<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        self.now.get()
    }
}
