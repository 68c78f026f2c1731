use service::{availability::Availability, schedule::Schedule};
use storage::Storage;

pub mod service;

#[derive(Clone)]
pub struct Ledger {
    pub availability: Availability,
    pub schedule: Schedule,
}

impl Ledger {
    pub fn new(storage: Storage) -> Self {
        let availability = Availability::new(storage.availability.clone());
        let schedule = Schedule::new(storage.availability);
        Ledger {
            availability,
            schedule,
        }
    }
}
