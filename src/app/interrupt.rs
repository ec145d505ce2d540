use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Debug, Default)]
struct State {
    armed: AtomicBool,
    triggered: AtomicBool,
}

/// Cancellation token shared between a long-running loop and a signal handler.
///
/// A trigger only sticks while the token is armed, so a stray interrupt
/// between loops does not cancel the next one.
#[derive(Clone, Debug, Default)]
pub struct Interrupt {
    state: Arc<State>,
}

impl Interrupt {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms the token until the returned guard is dropped.
    pub fn arm(&self) -> ArmGuard<'_> {
        self.state.triggered.store(false, Ordering::SeqCst);
        self.state.armed.store(true, Ordering::SeqCst);
        ArmGuard { interrupt: self }
    }

    /// Returns false when nothing is armed to receive the interrupt.
    pub fn trigger(&self) -> bool {
        if !self.state.armed.load(Ordering::SeqCst) {
            return false;
        }
        self.state.triggered.store(true, Ordering::SeqCst);
        true
    }

    pub fn is_armed(&self) -> bool {
        self.state.armed.load(Ordering::SeqCst)
    }

    pub fn is_triggered(&self) -> bool {
        self.state.triggered.load(Ordering::SeqCst)
    }
}

pub struct ArmGuard<'a> {
    interrupt: &'a Interrupt,
}

impl Drop for ArmGuard<'_> {
    fn drop(&mut self) {
        self.interrupt.state.armed.store(false, Ordering::SeqCst);
        self.interrupt.state.triggered.store(false, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trigger_requires_armed_token() {
        let interrupt = Interrupt::new();
        assert!(!interrupt.trigger());
        assert!(!interrupt.is_triggered());

        let guard = interrupt.arm();
        assert!(interrupt.is_armed());
        assert!(interrupt.clone().trigger());
        assert!(interrupt.is_triggered());

        drop(guard);
        assert!(!interrupt.is_armed());
        assert!(!interrupt.is_triggered());
    }

    #[test]
    fn rearming_clears_previous_trigger() {
        let interrupt = Interrupt::new();
        {
            let _guard = interrupt.arm();
            interrupt.trigger();
        }
        let _guard = interrupt.arm();
        assert!(!interrupt.is_triggered());
    }
}
