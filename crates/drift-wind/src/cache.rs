//! In-memory TTL cache for resolved wind samples.

use dashmap::DashMap;
use drift_core::WindSample;
use std::time::{Duration, Instant};

/// Stale entries past the cap are swept oldest-first on insert.
const CACHE_MAX_ENTRIES: usize = 4096;

/// Cache key: coordinate rounded to 2 decimal places (~1.1 km grid cell),
/// stored as scaled integers for exact equality and hashing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellKey {
    lat_e2: i32,
    lon_e2: i32,
}

impl CellKey {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self {
            lat_e2: (lat * 100.0).round() as i32,
            lon_e2: (lon * 100.0).round() as i32,
        }
    }
}

#[derive(Debug, Clone)]
struct CachedWind {
    sample: WindSample,
    fetched_at: Instant,
}

/// Concurrent wind cache shared across requests. Writes race with
/// last-writer-wins semantics; entries are small copies so no reader ever
/// observes a torn value.
#[derive(Debug)]
pub struct WindCache {
    entries: DashMap<CellKey, CachedWind>,
    ttl: Duration,
}

impl WindCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            ttl,
        }
    }

    /// Return the stored sample if the entry is younger than the TTL.
    pub fn get_fresh(&self, key: CellKey) -> Option<WindSample> {
        let entry = self.entries.get(&key)?;
        if entry.fetched_at.elapsed() < self.ttl {
            Some(entry.sample)
        } else {
            None
        }
    }

    /// Store a sample with the current timestamp, replacing any prior entry.
    pub fn insert(&self, key: CellKey, sample: WindSample) {
        self.entries.insert(
            key,
            CachedWind {
                sample,
                fetched_at: Instant::now(),
            },
        );
        if self.entries.len() > CACHE_MAX_ENTRIES {
            self.sweep();
        }
    }

    /// Drop entries that can no longer be served (past TTL), then oldest
    /// entries until back under the cap.
    fn sweep(&self) {
        let now = Instant::now();
        let mut ages: Vec<(CellKey, Instant)> = self
            .entries
            .iter()
            .map(|entry| (*entry.key(), entry.value().fetched_at))
            .collect();

        for (key, fetched_at) in &ages {
            if now.duration_since(*fetched_at) >= self.ttl {
                self.entries.remove(key);
            }
        }

        if self.entries.len() <= CACHE_MAX_ENTRIES {
            return;
        }
        ages.sort_by_key(|(_, fetched_at)| *fetched_at);
        for (key, _) in ages {
            if self.entries.len() <= CACHE_MAX_ENTRIES {
                break;
            }
            self.entries.remove(&key);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
