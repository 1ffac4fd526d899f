//! Injectable time source.
//!
//! Task ids and creation timestamps both derive from "now", and overdue
//! checks compare against "today", so the clock sits behind a trait to keep
//! those paths deterministic under test.

use chrono::{DateTime, Utc};

/// Supplies the current instant for id generation and `created_at` stamps.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;

    /// Today's calendar date, for overdue comparisons.
    fn today(&self) -> chrono::NaiveDate {
        self.now().date_naive()
    }
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
