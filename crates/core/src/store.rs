use crate::sample::{Sample, Window};
use chrono::{Duration, Utc};
use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Bounded, thread-safe holder of recent samples with FIFO eviction.
///
/// A single mutex guards every mutation and every read.  `snapshot` copies
/// the buffer and releases the lock before callers do any filtering,
/// sorting or statistics, so the polling side never blocks the producer
/// for longer than one memcpy.
///
/// Insertion order reflects arrival order, not necessarily timestamp
/// order — the store makes no sortedness assumption.
#[derive(Debug)]
pub struct SampleStore {
    samples: Mutex<VecDeque<Sample>>,
    capacity: usize,
}

impl SampleStore {
    pub fn new(capacity: usize) -> Self {
        Self {
            samples: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity,
        }
    }

    // A poisoned lock only means a producer panicked while holding it;
    // append is a single push/pop pair, so the buffer itself is still valid.
    fn lock(&self) -> MutexGuard<'_, VecDeque<Sample>> {
        self.samples.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Append at the tail, evicting from the head once over capacity.
    pub fn append(&self, sample: Sample) {
        let mut buf = self.lock();
        buf.push_back(sample);
        while buf.len() > self.capacity {
            buf.pop_front();
        }
    }

    /// Independent copy of the buffered samples, in arrival order.
    /// Later appends are never observed through the copy.
    pub fn snapshot(&self) -> Vec<Sample> {
        self.lock().iter().copied().collect()
    }

    /// Current sample count, consistent with the last completed append.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Samples in `window`, sorted by timestamp ascending.
    ///
    /// Arrival order is the only guarantee the buffer gives, so the copy is
    /// sorted here even though producers normally append chronologically.
    /// The cutoff at `now - window` is exclusive: a sample exactly on the
    /// boundary is dropped.  An empty result is a normal outcome, not an
    /// error.
    pub fn query(&self, window: Window) -> Vec<Sample> {
        let mut samples = self.snapshot();
        if let Window::Minutes(minutes) = window {
            let cutoff = Utc::now() - Duration::minutes(i64::from(minutes));
            samples.retain(|s| s.timestamp > cutoff);
        }
        samples.sort_by_key(|s| s.timestamp);
        samples
    }
}
