//! Interruption handler.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/interruption_test.rs"]
mod interruption_test;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};
use tsp_core::utils::{Float, Quota, TimeQuota};

static SHOULD_INTERRUPT: OnceLock<Option<Arc<AtomicBool>>> = OnceLock::new();

/// Creates interruption quota which is reached on Ctrl-C or when optional time limit is exceeded.
pub fn create_interruption_quota(max_time: Option<Float>) -> Arc<dyn Quota + Send + Sync> {
    let inner = max_time.map::<Arc<dyn Quota + Send + Sync>, _>(|time| Arc::new(TimeQuota::new(time)));

    // the handler can be installed only once per process
    let should_interrupt = SHOULD_INTERRUPT
        .get_or_init(|| {
            let should_interrupt = Arc::new(AtomicBool::new(false));
            ctrlc::set_handler({
                let should_interrupt = should_interrupt.clone();
                move || should_interrupt.store(true, Ordering::Relaxed)
            })
            .ok()
            .map(|_| should_interrupt)
        })
        .clone();

    Arc::new(InterruptionQuota { inner, should_interrupt })
}

struct InterruptionQuota {
    inner: Option<Arc<dyn Quota + Send + Sync>>,
    should_interrupt: Option<Arc<AtomicBool>>,
}

impl Quota for InterruptionQuota {
    fn is_reached(&self) -> bool {
        self.inner.as_ref().is_some_and(|inner| inner.is_reached())
            || self.should_interrupt.as_ref().is_some_and(|flag| flag.load(Ordering::Relaxed))
    }
}
