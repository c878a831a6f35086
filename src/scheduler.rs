//! Rebuild coalescing
//!
//! Any number of discoveries between two frames schedule a single rebuild.

#[derive(Debug, Clone, Default)]
pub struct RebuildScheduler {
    pending: bool,
    fired: u64,
}

impl RebuildScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a rebuild. Returns false when one is already pending.
    pub fn schedule(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Drop the pending rebuild without running it.
    pub fn cancel(&mut self) {
        self.pending = false;
    }

    /// Claim the pending rebuild. True at most once per `schedule`.
    pub fn take(&mut self) -> bool {
        if !self.pending {
            return false;
        }
        self.pending = false;
        self.fired += 1;
        true
    }

    /// Rebuilds claimed so far.
    pub fn fired_count(&self) -> u64 {
        self.fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_burst_coalesces_into_one_rebuild() {
        let mut scheduler = RebuildScheduler::new();
        assert!(scheduler.schedule());
        assert!(!scheduler.schedule());
        assert!(!scheduler.schedule());
        assert!(scheduler.take());
        assert!(!scheduler.take());
        assert_eq!(scheduler.fired_count(), 1);
    }

    #[test]
    fn test_cancel_drops_pending_rebuild() {
        let mut scheduler = RebuildScheduler::new();
        scheduler.schedule();
        scheduler.cancel();
        assert!(!scheduler.is_pending());
        assert!(!scheduler.take());
        assert_eq!(scheduler.fired_count(), 0);
        assert!(scheduler.schedule());
    }
}
