use tracing::debug;

use crate::host::ScrollHost;

// background scroll lock
//
// a single flag guarding the host's suppress/restore calls.  acquire is idempotent
// and release is always safe: the host sees exactly one suppress per held period
// and exactly one restore when it ends, no matter how the calls are interleaved
#[derive(Debug)]
pub struct ScrollLock<H: ScrollHost> {
    host: H,
    held: bool,
}

impl<H: ScrollHost> ScrollLock<H> {
    pub fn new(host: H) -> Self {
        ScrollLock { host, held: false }
    }

    // returns true if this call engaged the lock
    pub fn acquire(&mut self) -> bool {
        if self.held {
            return false;
        }

        debug!("suppressing page scroll");
        self.host.suppress_scroll();
        self.held = true;
        true
    }

    // returns true if this call released the lock
    pub fn release(&mut self) -> bool {
        if !self.held {
            return false;
        }

        debug!("restoring page scroll");
        self.host.restore_scroll();
        self.held = false;
        true
    }

    pub fn is_held(&self) -> bool {
        self.held
    }

    pub fn host(&self) -> &H {
        &self.host
    }
}

impl<H: ScrollHost> Drop for ScrollLock<H> {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::{cell::RefCell, rc::Rc};

    // records every host call; shared so it can be inspected after the lock is dropped
    #[derive(Clone, Debug, Default)]
    pub(crate) struct RecordingScroll {
        pub(crate) calls: Rc<RefCell<Vec<&'static str>>>,
    }

    impl ScrollHost for RecordingScroll {
        fn suppress_scroll(&mut self) {
            self.calls.borrow_mut().push("suppress");
        }

        fn restore_scroll(&mut self) {
            self.calls.borrow_mut().push("restore");
        }
    }

    #[test]
    fn acquire_is_idempotent() {
        let host = RecordingScroll::default();
        let mut lock = ScrollLock::new(host.clone());

        assert!(lock.acquire());
        assert!(!lock.acquire());
        assert!(!lock.acquire());
        assert!(lock.is_held());

        assert!(lock.release());
        assert!(!lock.release());
        assert!(!lock.is_held());

        assert_eq!(*host.calls.borrow(), vec!["suppress", "restore"]);
    }

    #[test]
    fn release_without_acquire_is_a_no_op() {
        let host = RecordingScroll::default();
        let mut lock = ScrollLock::new(host.clone());

        assert!(!lock.release());
        assert!(host.calls.borrow().is_empty());
    }

    #[test]
    fn drop_releases_a_held_lock() {
        let host = RecordingScroll::default();
        {
            let mut lock = ScrollLock::new(host.clone());
            lock.acquire();
        }
        assert_eq!(*host.calls.borrow(), vec!["suppress", "restore"]);
    }
}
