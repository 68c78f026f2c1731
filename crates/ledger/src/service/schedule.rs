use log::info;
use model::{
    availability::{TimeRange, WeekDay, WeeklyAvailability},
    errors::AvailabilityError,
    ids::CoachId,
    time::LocalTime,
};
use storage::AvailabilityStore;

/// Editing of the recurring weekly template.
#[derive(Clone)]
pub struct Schedule {
    store: AvailabilityStore,
}

impl Schedule {
    pub(crate) fn new(store: AvailabilityStore) -> Self {
        Schedule { store }
    }

    pub async fn weekly_schedule(&self, coach_id: &CoachId) -> WeeklyAvailability {
        self.store.load(coach_id).await.availability
    }

    pub async fn set_day_available(&self, coach_id: &CoachId, day: WeekDay, available: bool) {
        let mut availability = self.store.load(coach_id).await;
        availability.set_day_available(day, available);
        info!("Coach {} set {} available: {}", coach_id, day, available);
        self.store.save(coach_id, &availability).await;
    }

    pub async fn add_time_range(
        &self,
        coach_id: &CoachId,
        day: WeekDay,
        start: LocalTime,
        end: LocalTime,
    ) -> Result<TimeRange, AvailabilityError> {
        let mut availability = self.store.load(coach_id).await;
        let range = availability.add_time_range(day, start, end)?;
        info!(
            "Coach {} added range {} {}-{} on {}",
            coach_id, range.id, start, end, day
        );
        self.store.save(coach_id, &availability).await;
        Ok(range)
    }

    pub async fn update_time_range(
        &self,
        coach_id: &CoachId,
        day: WeekDay,
        id: &str,
        start: LocalTime,
        end: LocalTime,
    ) -> Result<TimeRange, AvailabilityError> {
        let mut availability = self.store.load(coach_id).await;
        let range = availability.update_time_range(day, id, start, end)?;
        info!(
            "Coach {} moved range {} to {}-{} on {}",
            coach_id, id, start, end, day
        );
        self.store.save(coach_id, &availability).await;
        Ok(range)
    }

    pub async fn remove_time_range(
        &self,
        coach_id: &CoachId,
        day: WeekDay,
        id: &str,
    ) -> Result<TimeRange, AvailabilityError> {
        let mut availability = self.store.load(coach_id).await;
        let range = availability.remove_time_range(day, id)?;
        info!("Coach {} removed range {} on {}", coach_id, id, day);
        self.store.save(coach_id, &availability).await;
        Ok(range)
    }
}
