use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};

use crate::clock::{Clock, SystemClock};

/// Client key used when no forwarded address is present.
pub const LOOPBACK_KEY: &str = "127.0.0.1";

/// First entry of an `x-forwarded-for` value, trimmed.
pub fn client_key(forwarded_for: Option<&str>) -> String {
  forwarded_for
    .and_then(|v| v.split(',').next())
    .map(str::trim)
    .filter(|v| !v.is_empty())
    .unwrap_or(LOOPBACK_KEY)
    .to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
  pub window: Duration,
  pub max_requests: u32,
}

impl Default for RateLimitConfig {
  fn default() -> Self {
    Self { window: Duration::from_secs(60), max_requests: 5 }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateDecision {
  Allowed { remaining: u32 },
  Limited { retry_after: Duration },
}

impl RateDecision {
  pub fn is_allowed(&self) -> bool {
    matches!(self, Self::Allowed { .. })
  }
}

/// Admission control keyed by client. `check_and_consume` must be atomic per key.
pub trait RateLimiter: Send + Sync {
  fn check_and_consume(&self, key: &str) -> RateDecision;

  /// Drop state that can no longer affect a decision. Returns how many keys were removed.
  fn sweep(&self) -> usize {
    0
  }
}

#[derive(Debug, Clone, Copy)]
struct WindowRecord {
  count: u32,
  reset_at: Instant,
}

/// Fixed-window counter per key held behind a single mutex.
pub struct FixedWindowLimiter {
  config: RateLimitConfig,
  clock: Arc<dyn Clock>,
  records: Mutex<HashMap<String, WindowRecord>>,
}

impl FixedWindowLimiter {
  pub fn new(config: RateLimitConfig) -> Self {
    Self::with_clock(config, Arc::new(SystemClock))
  }

  pub fn with_clock(config: RateLimitConfig, clock: Arc<dyn Clock>) -> Self {
    Self { config, clock, records: Mutex::new(HashMap::new()) }
  }

  /// Requests counted for `key` in its current window.
  pub fn count(&self, key: &str) -> Option<u32> {
    self.lock().get(key).map(|r| r.count)
  }

  pub fn len(&self) -> usize {
    self.lock().len()
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  fn lock(&self) -> MutexGuard<'_, HashMap<String, WindowRecord>> {
    // counters stay consistent even if a holder panicked
    self.records.lock().unwrap_or_else(|e| e.into_inner())
  }
}

impl RateLimiter for FixedWindowLimiter {
  fn check_and_consume(&self, key: &str) -> RateDecision {
    let now = self.clock.now();
    let max = self.config.max_requests;
    let mut records = self.lock();

    if let Some(record) = records.get_mut(key).filter(|r| now <= r.reset_at) {
      if record.count >= max {
        return RateDecision::Limited { retry_after: record.reset_at - now };
      }
      record.count += 1;
      return RateDecision::Allowed { remaining: max - record.count };
    }

    if max == 0 {
      return RateDecision::Limited { retry_after: self.config.window };
    }
    records.insert(key.to_string(), WindowRecord { count: 1, reset_at: now + self.config.window });
    RateDecision::Allowed { remaining: max - 1 }
  }

  fn sweep(&self) -> usize {
    let now = self.clock.now();
    let mut records = self.lock();
    let before = records.len();
    records.retain(|_, r| now <= r.reset_at);
    before - records.len()
  }
}
