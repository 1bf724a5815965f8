use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::cache::RecurrenceCache;
use crate::constants::cache::DEFAULT_CAPACITY;
use crate::pipeline::{EmbeddingParams, PipelineParams, SignalParams};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheKnobs {
    pub capacity: usize, // 0 disables the recurrence cache
}

impl Default for CacheKnobs {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

/// On-disk configuration. Every section and field is optional; missing
/// values take their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecurplotConfig {
    pub signal: SignalParams,
    pub embedding: EmbeddingParams,
    pub cache: CacheKnobs,
}

impl RecurplotConfig {
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        if !path.as_ref().exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn to_toml(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Pipeline parameters with invalid values already replaced
    pub fn pipeline_params(&self) -> PipelineParams {
        PipelineParams {
            signal: self.signal.clone(),
            embedding: self.embedding,
        }
        .sanitized()
    }

    pub fn build_cache(&self) -> RecurrenceCache {
        RecurrenceCache::new(self.cache.capacity)
    }
}
