pub mod availability;
pub mod memory;

use std::sync::Arc;

use async_trait::async_trait;
use eyre::Result;
use log::{error, info};
use model::{availability::CoachAvailability, ids::CoachId};

pub use availability::MongoAvailabilityRepo;
pub use memory::MemoryRepo;

/// Raw persistence of the per-coach aggregate.
#[async_trait]
pub trait AvailabilityRepo: Send + Sync {
    async fn get(&self, coach_id: &CoachId) -> Result<Option<CoachAvailability>>;
    async fn put(&self, coach_id: &CoachId, availability: &CoachAvailability) -> Result<()>;
}

/// Never fails: reads fall back to the default template and write errors are only logged.
#[derive(Clone)]
pub struct AvailabilityStore {
    repo: Arc<dyn AvailabilityRepo>,
}

impl AvailabilityStore {
    pub fn new(repo: Arc<dyn AvailabilityRepo>) -> Self {
        AvailabilityStore { repo }
    }

    pub async fn load(&self, coach_id: &CoachId) -> CoachAvailability {
        match self.repo.get(coach_id).await {
            Ok(Some(availability)) => availability,
            Ok(None) => CoachAvailability::default(),
            Err(err) => {
                error!(
                    "Failed to load availability of coach {}, using default: {:#}",
                    coach_id, err
                );
                CoachAvailability::default()
            }
        }
    }

    pub async fn save(&self, coach_id: &CoachId, availability: &CoachAvailability) {
        if let Err(err) = self.repo.put(coach_id, availability).await {
            error!("Failed to save availability of coach {}: {:#}", coach_id, err);
        }
    }
}

#[derive(Clone)]
pub struct Storage {
    pub availability: AvailabilityStore,
}

impl Storage {
    pub async fn new(uri: &str, db_name: &str) -> Result<Self> {
        let repo = MongoAvailabilityRepo::connect(uri, db_name).await?;
        info!("Using mongo availability store: {}", db_name);
        Ok(Storage {
            availability: AvailabilityStore::new(Arc::new(repo)),
        })
    }

    pub fn in_memory() -> Self {
        info!("Using in-memory availability store");
        Storage {
            availability: AvailabilityStore::new(Arc::new(MemoryRepo::default())),
        }
    }
}
