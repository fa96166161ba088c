use chrono::{Local, NaiveDateTime};

/// Source of "now" for the past-pickup check, injected so tests can pin it.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Local wall-clock time, matching what the rider sees on the form.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}
