use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CyclePhase {
    Idle,
    Busy,
}

/// Idle/Busy state of the translate pipeline.
///
/// Only one cycle may run at a time: [`CycleGate::try_begin`] performs the
/// Idle -> Busy transition atomically and hands out a [`BusyGuard`]; dropping
/// the guard is the only way back to Idle, so every exit path of a cycle
/// (success, error or panic) releases the gate.
#[derive(Debug, Clone, Default)]
pub struct CycleGate {
    busy: Arc<AtomicBool>,
}

impl CycleGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `None` while another cycle is in flight
    pub fn try_begin(&self) -> Option<BusyGuard> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| BusyGuard {
                busy: self.busy.clone(),
            })
    }

    pub fn phase(&self) -> CyclePhase {
        if self.busy.load(Ordering::Acquire) {
            CyclePhase::Busy
        } else {
            CyclePhase::Idle
        }
    }

    pub fn is_busy(&self) -> bool {
        self.phase() == CyclePhase::Busy
    }
}

#[derive(Debug)]
pub struct BusyGuard {
    busy: Arc<AtomicBool>,
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::Release);
    }
}
