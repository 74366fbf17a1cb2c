use std::time::Duration;

/// Delay schedule between retries: `base * 2^attempt` capped at `ceiling`, plus uniform jitter
/// in `[0, jitter)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Backoff {
    pub base_ms: u64,
    pub jitter_ms: u64,
    pub ceiling_ms: u64,
}

impl Backoff {
    pub fn delay(&self, attempt: u32) -> Duration {
        let jitter = fastrange_rs::fastrange_64(rand::random(), self.jitter_ms);
        self.base_delay(attempt) + Duration::from_millis(jitter)
    }

    fn base_delay(&self, attempt: u32) -> Duration {
        let factor = 1u64.checked_shl(attempt).unwrap_or(u64::MAX);
        Duration::from_millis(self.base_ms.saturating_mul(factor).min(self.ceiling_ms))
    }
}
