//! Simple profiling counters for understanding hot paths.

use std::sync::atomic::{AtomicU64, Ordering};

pub static MEDIAN_SEARCHES: AtomicU64 = AtomicU64::new(0);
pub static PARTITION_PROBES: AtomicU64 = AtomicU64::new(0);
pub static REJECTED_INPUTS: AtomicU64 = AtomicU64::new(0);

#[inline]
pub fn median_search() {
    MEDIAN_SEARCHES.fetch_add(1, Ordering::Relaxed);
}

#[inline]
pub fn partition_probe() {
    PARTITION_PROBES.fetch_add(1, Ordering::Relaxed);
}

#[inline]
pub fn rejected() {
    REJECTED_INPUTS.fetch_add(1, Ordering::Relaxed);
}

pub fn reset() {
    MEDIAN_SEARCHES.store(0, Ordering::Relaxed);
    PARTITION_PROBES.store(0, Ordering::Relaxed);
    REJECTED_INPUTS.store(0, Ordering::Relaxed);
}

pub fn report() -> String {
    let searches = MEDIAN_SEARCHES.load(Ordering::Relaxed);
    let probes = PARTITION_PROBES.load(Ordering::Relaxed);
    let rejected = REJECTED_INPUTS.load(Ordering::Relaxed);
    let per_search = if searches > 0 { probes as f64 / searches as f64 } else { 0.0 };

    format!(
        "Median: {} searches, {} probes ({:.1} per search), Rejected: {}",
        searches, probes, per_search, rejected
    )
}
