//! Modification time helpers. Contains [ModTime], the latest modification time
//! seen across archived files.

use std::time::{SystemTime, UNIX_EPOCH};

/// Go zero `time.Time` (0001-01-01 00:00:00 UTC) as unix seconds.
pub const ZERO_UNIX_SECONDS: i64 = -62_135_596_800;

/// Latest modification time observed so far.
///
/// Starts as zero timestamp (nothing observed) and only moves forward.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct ModTime {
    latest: Option<SystemTime>,
}
impl ModTime {
    /// Creates zero timestamp.
    pub fn zero() -> Self {
        Self { latest: None }
    }

    /// Replaces current value with `modified`, if it is strictly later.
    pub fn observe(
        &mut self,
        modified: SystemTime,
    ) {
        if self.latest.is_none_or(|latest| modified > latest) {
            self.latest = Some(modified);
        }
    }

    /// Latest observed time, [None] for zero timestamp.
    pub fn latest(&self) -> Option<SystemTime> {
        self.latest
    }

    /// Seconds since unix epoch, rounded down. Zero timestamp is reported as
    /// [ZERO_UNIX_SECONDS], so it round trips to Go zero `time.Time`.
    pub fn unix_seconds(&self) -> i64 {
        match self.latest {
            Some(latest) => unix_seconds(latest),
            None => ZERO_UNIX_SECONDS,
        }
    }
}

fn unix_seconds(time: SystemTime) -> i64 {
    match time.duration_since(UNIX_EPOCH) {
        Ok(after) => i64::try_from(after.as_secs()).unwrap_or(i64::MAX),
        Err(error) => {
            // before epoch, round towards negative infinity
            let before = error.duration();
            let seconds = i64::try_from(before.as_secs()).unwrap_or(i64::MAX);
            if before.subsec_nanos() > 0 {
                -seconds - 1
            } else {
                -seconds
            }
        }
    }
}
