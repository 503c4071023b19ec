/// Coalesces repeated wake-ups into a single pending run.
///
/// The section floater defers its geometry checks to the host's next
/// event-loop turn so it observes post-layout positions. A burst of scroll
/// events therefore collapses to one pending recheck; last-scheduled-wins is
/// safe because checks read live state, not event payloads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Coalescer {
    pending: bool,
}

impl Coalescer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a run as pending. Returns true if this call newly scheduled it.
    pub fn schedule(&mut self) -> bool {
        let newly = !self.pending;
        self.pending = true;
        newly
    }

    /// Clear the pending flag, reporting whether a run was due.
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}
