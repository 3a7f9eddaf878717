//! Celebration side effect
//!
//! The celebration collaborator is a sub-widget with an active signal. It is
//! not created at startup: the host mounts it on first use, and the toggle
//! is deferred to the next tick so the target exists by then.
//!
//! Flow for one [`Effect::Celebrate`](crate::Effect::Celebrate):
//! 1. [`LazyCelebration::request`] marks a celebration pending
//! 2. the host mounts the target via [`LazyCelebration::mount_with`]
//! 3. on the next tick [`LazyCelebration::flush`] turns the signal off and
//!    back on, restarting an animation that may still be running

use tracing::debug;

/// A sub-widget that plays a one-shot animation while active.
pub trait Celebration {
    /// Set the active signal. Going from inactive to active starts the
    /// animation from the beginning.
    fn set_active(&mut self, active: bool);

    /// Current state of the active signal
    fn is_active(&self) -> bool;
}

/// Lazily mounted celebration target with a pending-request latch.
#[derive(Debug)]
pub struct LazyCelebration<C> {
    target: Option<C>,
    pending: bool,
    played: u64,
}

impl<C> Default for LazyCelebration<C> {
    fn default() -> Self {
        Self {
            target: None,
            pending: false,
            played: 0,
        }
    }
}

impl<C: Celebration> LazyCelebration<C> {
    /// Create an empty slot; nothing is mounted
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a celebration pending. Returns false if one already was, in
    /// which case both requests are served by a single toggle.
    pub fn request(&mut self) -> bool {
        let fresh = !self.pending;
        self.pending = true;
        fresh
    }

    /// True when a request is waiting for the next flush
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// True once the target has been created
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.target.is_some()
    }

    /// Number of celebrations actually played
    #[must_use]
    pub fn played(&self) -> u64 {
        self.played
    }

    /// Get the target, creating it with `factory` on first use
    pub fn mount_with(&mut self, factory: impl FnOnce() -> C) -> &mut C {
        self.target.get_or_insert_with(|| {
            debug!("mounting celebration target");
            factory()
        })
    }

    #[must_use]
    pub fn target(&self) -> Option<&C> {
        self.target.as_ref()
    }

    pub fn target_mut(&mut self) -> Option<&mut C> {
        self.target.as_mut()
    }

    /// Serve a pending request by toggling the target's signal off then on.
    ///
    /// Returns true if an animation was (re)started. A missing target skips
    /// the effect and clears the request.
    pub fn flush(&mut self) -> bool {
        if !std::mem::take(&mut self.pending) {
            return false;
        }

        let Some(target) = self.target.as_mut() else {
            debug!("celebration target not mounted, skipping");
            return false;
        };

        target.set_active(false);
        target.set_active(true);
        self.played += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records every signal write
    #[derive(Debug, Default)]
    struct Recorder {
        active: bool,
        writes: Vec<bool>,
    }

    impl Celebration for Recorder {
        fn set_active(&mut self, active: bool) {
            self.active = active;
            self.writes.push(active);
        }

        fn is_active(&self) -> bool {
            self.active
        }
    }

    #[test]
    fn test_nothing_mounted_at_startup() {
        let slot: LazyCelebration<Recorder> = LazyCelebration::new();
        assert!(!slot.is_mounted());
        assert!(!slot.is_pending());
    }

    #[test]
    fn test_flush_toggles_off_then_on() {
        let mut slot = LazyCelebration::new();
        slot.request();
        slot.mount_with(Recorder::default);

        assert!(slot.flush());
        let target = slot.target().unwrap();
        assert_eq!(target.writes, vec![false, true]);
        assert!(target.is_active());
        assert_eq!(slot.played(), 1);
    }

    #[test]
    fn test_retrigger_while_active() {
        let mut slot = LazyCelebration::new();
        slot.mount_with(Recorder::default);

        slot.request();
        slot.flush();
        slot.request();
        slot.flush();

        assert_eq!(slot.target().unwrap().writes, vec![false, true, false, true]);
        assert_eq!(slot.played(), 2);
    }

    #[test]
    fn test_missing_target_is_skipped() {
        let mut slot: LazyCelebration<Recorder> = LazyCelebration::new();
        slot.request();
        assert!(!slot.flush());
        assert!(!slot.is_pending());
        assert_eq!(slot.played(), 0);
    }

    #[test]
    fn test_requests_collapse() {
        let mut slot = LazyCelebration::new();
        assert!(slot.request());
        assert!(!slot.request());
        slot.mount_with(Recorder::default);

        assert!(slot.flush());
        assert!(!slot.flush());
        assert_eq!(slot.played(), 1);
    }

    #[test]
    fn test_mount_is_idempotent() {
        let mut slot = LazyCelebration::new();
        slot.mount_with(Recorder::default).set_active(true);
        let target = slot.mount_with(|| panic!("factory must not run twice"));
        assert!(target.is_active());
    }
}
