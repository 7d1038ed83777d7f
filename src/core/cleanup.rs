use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Released on every exit from the scope that holds it, unwinding included.
///
/// The body is a placeholder: it records that it ran and logs, nothing more.
/// No resource is known to need releasing here. Flushing the console is not
/// part of it; the simulator flushes its output as ordinary end-of-run
/// hygiene before the scope ends.
#[must_use = "the scope ends as soon as the guard is dropped"]
pub struct CleanupScope {
    label: &'static str,
    released: Arc<AtomicUsize>,
}

impl CleanupScope {
    pub fn enter(label: &'static str, released: Arc<AtomicUsize>) -> Self {
        tracing::trace!(scope = label, "entering cleanup scope");
        Self { label, released }
    }
}

impl Drop for CleanupScope {
    fn drop(&mut self) {
        self.released.fetch_add(1, Ordering::SeqCst);
        tracing::debug!(scope = self.label, "cleanup scope released");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_released_on_normal_exit() {
        let released = Arc::new(AtomicUsize::new(0));
        {
            let _scope = CleanupScope::enter("test", Arc::clone(&released));
            assert_eq!(released.load(Ordering::SeqCst), 0);
        }
        assert_eq!(released.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_released_on_unwind() {
        let released = Arc::new(AtomicUsize::new(0));
        let inner = Arc::clone(&released);
        let result = std::panic::catch_unwind(move || {
            let _scope = CleanupScope::enter("test", inner);
            panic!("boom");
        });
        assert!(result.is_err());
        assert_eq!(released.load(Ordering::SeqCst), 1);
    }
}
