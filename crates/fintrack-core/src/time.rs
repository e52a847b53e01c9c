use chrono::{Local, NaiveDate};

/// Clock abstracts access to the current date so derivations remain
/// deterministic in tests.
pub trait Clock: Send + Sync {
    /// Returns today's date in the host's local timezone. Month bucketing
    /// and deadline math both key off this value.
    fn today(&self) -> NaiveDate;
}

/// Clock backed by the system's local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a fixed date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
