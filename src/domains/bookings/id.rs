//! Booking id generation.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;

/// Issues `BK<unix-millis>` ids that never repeat within a process.
///
/// When two ids are requested within the same millisecond (or the clock goes
/// backwards) the counter is bumped past the last issued value.
#[derive(Debug, Default)]
pub struct BookingIdGenerator {
    last: AtomicI64,
}

impl BookingIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Produce the next booking id.
    pub fn next_id(&self) -> String {
        let now = Utc::now().timestamp_millis();
        let mut prev = self.last.load(Ordering::Acquire);
        loop {
            let candidate = if now > prev { now } else { prev + 1 };
            match self
                .last
                .compare_exchange_weak(prev, candidate, Ordering::AcqRel, Ordering::Acquire)
            {
                Ok(_) => return format!("BK{}", candidate),
                Err(actual) => prev = actual,
            }
        }
    }
}
