use gloo_timers::callback::Timeout;

/// A cancellable quiet-window delay. Scheduling while a timer is pending
/// drops the pending `Timeout` (which clears it browser-side), so only the
/// last call of a burst ever fires. Used for both the short scroll window
/// and the long hash-sync window.
pub struct Debounce {
    window_ms: u32,
    pending: Option<Timeout>,
}

impl Debounce {
    pub fn new(window_ms: u32) -> Self {
        Self { window_ms, pending: None }
    }

    pub fn schedule<F>(&mut self, callback: F)
    where
        F: FnOnce() + 'static,
    {
        self.pending = Some(Timeout::new(self.window_ms, callback));
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
