use std::cmp::Ordering;

use super::ProcessSample;

/// Busiest first; equal CPU falls back to ascending pid so output is stable.
pub fn sort_by_cpu_desc(samples: &mut [ProcessSample]) {
    samples.sort_by(|a, b| {
        b.cpu
            .partial_cmp(&a.cpu)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.pid.cmp(&b.pid))
    });
}
