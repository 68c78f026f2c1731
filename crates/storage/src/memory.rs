use std::collections::HashMap;

use async_trait::async_trait;
use eyre::{Context as _, Result};
use model::{availability::CoachAvailability, ids::CoachId};
use parking_lot::RwLock;

use crate::AvailabilityRepo;

/// Key-value store of JSON documents, keyed like `coach_{id}_availability`.
#[derive(Default)]
pub struct MemoryRepo {
    records: RwLock<HashMap<String, String>>,
}

impl MemoryRepo {
    pub fn raw(&self, key: &str) -> Option<String> {
        self.records.read().get(key).cloned()
    }

    pub fn insert_raw(&self, key: impl Into<String>, value: impl Into<String>) {
        self.records.write().insert(key.into(), value.into());
    }
}

#[async_trait]
impl AvailabilityRepo for MemoryRepo {
    async fn get(&self, coach_id: &CoachId) -> Result<Option<CoachAvailability>> {
        let key = coach_id.storage_key();
        let Some(raw) = self.raw(&key) else {
            return Ok(None);
        };
        let availability = serde_json::from_str(&raw)
            .with_context(|| format!("Corrupted availability document: {}", key))?;
        Ok(Some(availability))
    }

    async fn put(&self, coach_id: &CoachId, availability: &CoachAvailability) -> Result<()> {
        let raw = serde_json::to_string(availability)?;
        self.insert_raw(coach_id.storage_key(), raw);
        Ok(())
    }
}
