use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;

/// Millisecond timestamp shared by the user and assistant messages of one turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TurnId(u64);

impl TurnId {
    pub fn from_millis(millis: u64) -> Self {
        Self(millis)
    }

    pub fn as_millis(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for TurnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Hands out strictly increasing turn ids based on the wall clock.
///
/// When several turns start within the same millisecond the generator runs
/// ahead of the clock by one millisecond per turn, so ids never collide and
/// never precede the moment they were requested.
#[derive(Debug, Default)]
pub struct TurnIdGenerator {
    last: AtomicU64,
}

impl TurnIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&self) -> TurnId {
        let now = current_millis();
        let previous = self
            .last
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |last| {
                Some(now.max(last + 1))
            })
            .unwrap_or(now);
        TurnId(now.max(previous + 1))
    }
}

fn current_millis() -> u64 {
    u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0)
}
