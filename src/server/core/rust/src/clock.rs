use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Monotonic time source, injectable so window arithmetic can be tested.
pub trait Clock: Send + Sync {
  fn now(&self) -> Instant;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
  fn now(&self) -> Instant {
    Instant::now()
  }
}

/// Clock that only moves when told to.
#[derive(Debug)]
pub struct ManualClock {
  base: Instant,
  offset: Mutex<Duration>,
}

impl ManualClock {
  pub fn new() -> Self {
    Self { base: Instant::now(), offset: Mutex::new(Duration::ZERO) }
  }

  pub fn advance(&self, by: Duration) {
    let mut offset = self.offset.lock().unwrap_or_else(|e| e.into_inner());
    *offset += by;
  }
}

impl Default for ManualClock {
  fn default() -> Self {
    Self::new()
  }
}

impl Clock for ManualClock {
  fn now(&self) -> Instant {
    self.base + *self.offset.lock().unwrap_or_else(|e| e.into_inner())
  }
}
