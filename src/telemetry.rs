//! Process-wide telemetry service.
//!
//! Replaces a module-level "already initialized" flag with an explicit
//! singleton: `initialize` is idempotent, and the counters make otherwise
//! silent data-quality drops (orphan punch-outs) observable to callers that
//! want a metric.

use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

static TELEMETRY: OnceLock<Telemetry> = OnceLock::new();

#[derive(Debug, Default)]
pub struct Telemetry {
    initialized: AtomicBool,
    orphan_punch_outs: AtomicU64,
}

impl Telemetry {
    /// Shared instance, created on first access.
    pub fn global() -> &'static Telemetry {
        TELEMETRY.get_or_init(Telemetry::default)
    }

    /// One-time setup hook. Returns `true` only on the call that performed
    /// the initialization; every later call is a no-op.
    pub fn initialize(&self) -> bool {
        !self.initialized.swap(true, Ordering::SeqCst)
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::SeqCst)
    }

    /// Count a punch-out that was dropped because no punch-in was open.
    pub fn record_orphan_punch_out(&self) {
        self.orphan_punch_outs.fetch_add(1, Ordering::Relaxed);
    }

    pub fn orphan_punch_outs(&self) -> u64 {
        self.orphan_punch_outs.load(Ordering::Relaxed)
    }

    /// Reset counters (test support; initialization state is kept).
    pub fn reset(&self) {
        self.orphan_punch_outs.store(0, Ordering::Relaxed);
    }
}
