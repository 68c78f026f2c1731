use std::sync::Arc;

use async_trait::async_trait;
use bson::{doc, from_document, to_document, Document};
use eyre::{Context as _, Result};
use log::{info, warn};
use model::{availability::CoachAvailability, ids::CoachId};
use mongodb::{Client, Collection};

use crate::AvailabilityRepo;

const COLLECTION: &str = "coach_availability";

/// One document per coach, `_id` is the coach storage key.
#[derive(Clone)]
pub struct MongoAvailabilityRepo {
    store: Arc<Collection<Document>>,
}

impl MongoAvailabilityRepo {
    /// Fails unless the database answers a ping.
    pub(crate) async fn connect(uri: &str, db_name: &str) -> Result<Self> {
        info!("Connecting to mongo database {}", db_name);
        let client = Client::with_uri_str(uri)
            .await
            .context("Failed to connect to MongoDB")?;
        let db = client.database(db_name);
        db.run_command(doc! { "ping": 1 })
            .await
            .with_context(|| format!("Failed to ping MongoDB database {}", db_name))?;
        Ok(MongoAvailabilityRepo {
            store: Arc::new(db.collection(COLLECTION)),
        })
    }
}

fn to_record(key: &str, availability: &CoachAvailability) -> Result<Document> {
    let mut document = to_document(availability)?;
    document.insert("_id", key);
    Ok(document)
}

fn from_record(key: &str, mut document: Document) -> Result<CoachAvailability> {
    document.remove("_id");
    from_document(document).with_context(|| format!("Corrupted availability document: {}", key))
}

#[async_trait]
impl AvailabilityRepo for MongoAvailabilityRepo {
    async fn get(&self, coach_id: &CoachId) -> Result<Option<CoachAvailability>> {
        let key = coach_id.storage_key();
        let document = self.store.find_one(doc! { "_id": key.as_str() }).await?;
        document.map(|document| from_record(&key, document)).transpose()
    }

    async fn put(&self, coach_id: &CoachId, availability: &CoachAvailability) -> Result<()> {
        let key = coach_id.storage_key();
        let result = self
            .store
            .replace_one(doc! { "_id": key.as_str() }, to_record(&key, availability)?)
            .upsert(true)
            .await?;
        if result.upserted_id.is_some() {
            info!("Created availability record: {}", key);
        } else if result.matched_count == 0 {
            warn!("Availability record was not written: {}", key);
        }
        Ok(())
    }
}
