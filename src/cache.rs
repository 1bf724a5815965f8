//! Bounded memo of recurrence analyses.
//!
//! Interactive consumers often hold one signal and sweep m, τ or the
//! threshold back and forth. The cache returns the analysis computed earlier
//! for the exact same inputs; results are identical to calling
//! [`analyze`] directly.

use std::collections::hash_map::DefaultHasher;
use std::collections::{HashMap, VecDeque};
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::cache::DEFAULT_CAPACITY;
use crate::pipeline::{analyze, EmbeddingParams, RecurrenceAnalysis};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct CacheKey {
    fingerprint: u64,
    len: usize,
    dimension: usize,
    time_lag: usize,
    threshold_bits: u64,
}

impl CacheKey {
    fn new(signal: &[f64], params: &EmbeddingParams) -> Self {
        Self {
            fingerprint: fingerprint(signal),
            len: signal.len(),
            dimension: params.dimension,
            time_lag: params.time_lag,
            threshold_bits: params.threshold.to_bits(),
        }
    }
}

struct CacheEntry {
    // Kept to rule out fingerprint collisions on lookup
    signal: Vec<f64>,
    analysis: Arc<RecurrenceAnalysis>,
}

/// Hash of the exact bit patterns of every sample
pub fn fingerprint(signal: &[f64]) -> u64 {
    let mut hasher = DefaultHasher::new();
    signal.len().hash(&mut hasher);
    for v in signal {
        v.to_bits().hash(&mut hasher);
    }
    hasher.finish()
}

/// Hit/miss counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub entries: usize,
}

/// Least-recently-used cache keyed by (signal, m, τ, threshold).
///
/// A capacity of 0 disables caching: every call computes afresh.
pub struct RecurrenceCache {
    capacity: usize,
    entries: HashMap<CacheKey, CacheEntry>,
    /// Front = least recently used
    order: VecDeque<CacheKey>,
    stats: CacheStats,
}

impl Default for RecurrenceCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl RecurrenceCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: HashMap::with_capacity(capacity),
            order: VecDeque::with_capacity(capacity),
            stats: CacheStats::default(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.entries.len(),
            ..self.stats
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }

    /// Cached [`analyze`].
    pub fn analyze(&mut self, signal: &[f64], params: &EmbeddingParams) -> Arc<RecurrenceAnalysis> {
        let params = params.sanitized();
        if self.capacity == 0 {
            self.stats.misses += 1;
            return Arc::new(analyze(signal, &params));
        }

        let key = CacheKey::new(signal, &params);

        if let Some(entry) = self.entries.get(&key) {
            if entry.signal.as_slice() == signal {
                let analysis = Arc::clone(&entry.analysis);
                self.stats.hits += 1;
                self.touch(&key);
                debug!(n = analysis.len(), "recurrence cache hit");
                return analysis;
            }
            // Fingerprint collision: replace the resident entry.
            self.remove(&key);
        }

        self.stats.misses += 1;
        let analysis = Arc::new(analyze(signal, &params));

        while self.entries.len() >= self.capacity {
            let Some(oldest) = self.order.pop_front() else {
                break;
            };
            self.entries.remove(&oldest);
            self.stats.evictions += 1;
            debug!(capacity = self.capacity, "recurrence cache eviction");
        }

        self.entries.insert(
            key,
            CacheEntry {
                signal: signal.to_vec(),
                analysis: Arc::clone(&analysis),
            },
        );
        self.order.push_back(key);

        analysis
    }

    fn touch(&mut self, key: &CacheKey) {
        if let Some(pos) = self.order.iter().position(|k| k == key) {
            self.order.remove(pos);
        }
        self.order.push_back(*key);
    }

    fn remove(&mut self, key: &CacheKey) {
        self.entries.remove(key);
        if let Some(pos) = self.order.iter().position(|k| k == key) {
            self.order.remove(pos);
        }
    }
}
