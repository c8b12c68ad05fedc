#[derive(Clone, Debug, Default)]
pub(super) struct ResizeDebouncer {
    quiet: f64,
    pending: Option<(f32, f64)>,
    last: Option<f32>,
}

impl ResizeDebouncer {
    pub(super) fn new(quiet: f64) -> Self {
        Self {
            quiet: quiet.max(0.0),
            pending: None,
            last: None,
        }
    }

    pub(super) fn settle(&mut self, width: f32) {
        self.last = Some(width);
        self.pending = None;
    }

    pub(super) fn observe(&mut self, width: f32, now: f64) {
        let latest = self.pending.map(|(width, _)| width).or(self.last);
        if latest == Some(width) {
            return;
        }
        if self.last == Some(width) {
            // Bounced back to the applied width before the deadline.
            self.pending = None;
            return;
        }

        self.pending = Some((width, now + self.quiet));
    }

    pub(super) fn poll(&mut self, now: f64) -> Option<f32> {
        let (width, deadline) = self.pending?;
        if now < deadline {
            return None;
        }

        self.settle(width);
        Some(width)
    }

    pub(super) fn next_deadline(&self) -> Option<f64> {
        self.pending.map(|(_, deadline)| deadline)
    }
}
