//! Process lifecycle state shared between the runner and the signal watcher.

use std::sync::atomic::{AtomicU8, Ordering};

const RUNNING: u8 = 0;
const SHUTTING_DOWN: u8 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    Running,
    ShuttingDown,
}

/// Owns the shutdown state. Only the first [`Lifecycle::begin_shutdown`] call wins, so repeated
/// signals never start a second shutdown sequence.
#[derive(Debug)]
pub struct Lifecycle {
    state: AtomicU8,
}

impl Lifecycle {
    pub fn new() -> Self {
        Self {
            state: AtomicU8::new(RUNNING),
        }
    }

    /// Moves Running → ShuttingDown. Returns true only for the caller that made the transition.
    pub fn begin_shutdown(&self) -> bool {
        self.state
            .compare_exchange(RUNNING, SHUTTING_DOWN, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    pub fn state(&self) -> LifecycleState {
        match self.state.load(Ordering::Acquire) {
            RUNNING => LifecycleState::Running,
            _ => LifecycleState::ShuttingDown,
        }
    }

    pub fn is_shutting_down(&self) -> bool {
        self.state() == LifecycleState::ShuttingDown
    }
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self::new()
    }
}
