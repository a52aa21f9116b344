/// Fixed-window throttle driven by caller-supplied timestamps.
///
/// The first event of a window fires immediately. Events arriving inside the window are
/// coalesced into a single trailing fire, which [`Throttle::flush`] releases once the window
/// has elapsed. The throttle never reads a clock itself.
#[derive(Clone, Copy, Debug)]
pub struct Throttle {
    interval_ms: u64,
    last_fire_ms: Option<u64>,
    pending: bool,
}

impl Throttle {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            last_fire_ms: None,
            pending: false,
        }
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Registers an event at `now_ms`. Returns `true` if the caller should handle it now.
    pub fn hit(&mut self, now_ms: u64) -> bool {
        if self.ready(now_ms) {
            self.fire(now_ms);
            return true;
        }
        self.pending = true;
        false
    }

    /// Releases a coalesced trailing event once the window has elapsed.
    pub fn flush(&mut self, now_ms: u64) -> bool {
        if !self.pending || !self.ready(now_ms) {
            return false;
        }
        self.fire(now_ms);
        true
    }

    pub fn reset(&mut self) {
        self.last_fire_ms = None;
        self.pending = false;
    }

    fn ready(&self, now_ms: u64) -> bool {
        match self.last_fire_ms {
            None => true,
            Some(last) => now_ms.saturating_sub(last) >= self.interval_ms,
        }
    }

    fn fire(&mut self, now_ms: u64) {
        self.last_fire_ms = Some(now_ms);
        self.pending = false;
    }
}
