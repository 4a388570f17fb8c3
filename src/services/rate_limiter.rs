use chrono::{DateTime, Days, Local, LocalResult, NaiveDate, NaiveTime, TimeZone};
use std::collections::HashMap;
use std::sync::Mutex;

pub const DAILY_LIMIT: u32 = 40;

/// Outcome of one consume attempt. `reset_epoch_seconds` is always the next
/// local midnight, regardless of when the caller's window began.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RateDecision {
    pub allowed: bool,
    pub limit: u32,
    pub remaining: u32,
    pub reset_epoch_seconds: i64,
}

#[derive(Debug)]
struct RateRecord {
    date: NaiveDate,
    count: u32,
}

/// Per-caller daily request counter. In-memory only; counts are lost on
/// restart, which is accepted. The map is mutex-guarded because actix runs
/// handlers on multiple worker threads, and the check-and-increment must not
/// interleave between two requests from the same caller.
pub struct RateLimiter {
    limit: u32,
    counts: Mutex<HashMap<String, RateRecord>>,
}

impl RateLimiter {
    pub fn new(limit: u32) -> Self {
        Self {
            limit,
            counts: Mutex::new(HashMap::new()),
        }
    }

    /// Count-then-check: an accepted call increments the counter, and a call
    /// arriving once the stored count has reached the limit is rejected
    /// without incrementing further.
    pub fn check_and_consume(&self, caller_key: &str) -> RateDecision {
        self.check_and_consume_at(caller_key, Local::now())
    }

    fn check_and_consume_at(&self, caller_key: &str, now: DateTime<Local>) -> RateDecision {
        let today = now.date_naive();
        let reset_epoch_seconds = next_midnight_epoch(now);

        let mut counts = self.counts.lock().unwrap_or_else(|e| e.into_inner());
        let record = counts.entry(caller_key.to_string()).or_insert(RateRecord {
            date: today,
            count: 0,
        });

        if record.date != today {
            record.date = today;
            record.count = 0;
        }

        if record.count >= self.limit {
            return RateDecision {
                allowed: false,
                limit: self.limit,
                remaining: 0,
                reset_epoch_seconds,
            };
        }

        record.count += 1;
        RateDecision {
            allowed: true,
            limit: self.limit,
            remaining: self.limit - record.count,
            reset_epoch_seconds,
        }
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(DAILY_LIMIT)
    }
}

fn next_midnight_epoch(now: DateTime<Local>) -> i64 {
    let midnight = (now.date_naive() + Days::new(1)).and_time(NaiveTime::MIN);
    match Local.from_local_datetime(&midnight) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => dt.timestamp(),
        // A DST gap exactly at midnight; fall back to 24h from now.
        LocalResult::None => now.timestamp() + 86_400,
    }
}
