use chrono::{Local, NaiveDate, NaiveDateTime};
use log::info;
use model::{
    availability::BlockedSlot,
    errors::AvailabilityError,
    ids::{day_key, CoachId},
    time::LocalTime,
};
use storage::AvailabilityStore;

#[derive(Clone)]
pub struct Availability {
    store: AvailabilityStore,
}

impl Availability {
    pub(crate) fn new(store: AvailabilityStore) -> Self {
        Availability { store }
    }

    fn now() -> NaiveDateTime {
        Local::now().naive_local()
    }

    /// Commits `duration_min` minutes from `start` on `date`. No overlap check is made.
    /// Durations are minutes, so a two-hour session is `120`.
    pub async fn block_slot(
        &self,
        coach_id: &CoachId,
        date: NaiveDate,
        start: LocalTime,
        duration_min: u32,
        booking_id: Option<String>,
    ) -> Result<BlockedSlot, AvailabilityError> {
        let mut availability = self.store.load(coach_id).await;
        let blocked = availability.block(coach_id, date, start, duration_min, booking_id)?;
        info!(
            "Blocked {}-{} on {} for coach {} (booking: {:?})",
            blocked.start,
            blocked.end,
            day_key(date),
            coach_id,
            blocked.booking_id
        );
        self.store.save(coach_id, &availability).await;
        Ok(blocked)
    }

    /// Manual block set by the coach, not tied to a booking.
    pub async fn block_range(
        &self,
        coach_id: &CoachId,
        date: NaiveDate,
        start: LocalTime,
        end: LocalTime,
    ) -> Result<BlockedSlot, AvailabilityError> {
        let mut availability = self.store.load(coach_id).await;
        let blocked = availability.block_range(coach_id, date, start, end)?;
        info!(
            "Coach {} blocked {}-{} on {}",
            coach_id,
            start,
            end,
            day_key(date)
        );
        self.store.save(coach_id, &availability).await;
        Ok(blocked)
    }

    pub async fn blocked_slots(&self, coach_id: &CoachId, date: NaiveDate) -> Vec<BlockedSlot> {
        self.store.load(coach_id).await.blocks_on(date).to_vec()
    }

    /// `duration_min` is in minutes, as in [`Availability::block_slot`].
    pub async fn is_time_slot_available(
        &self,
        coach_id: &CoachId,
        date: NaiveDate,
        start: LocalTime,
        duration_min: u32,
    ) -> bool {
        self.store
            .load(coach_id)
            .await
            .is_time_slot_available(date, start, duration_min)
    }

    pub async fn available_time_slots(&self, coach_id: &CoachId, date: NaiveDate) -> Vec<LocalTime> {
        self.store
            .load(coach_id)
            .await
            .available_time_slots(date, Self::now())
    }

    pub async fn is_date_available(&self, coach_id: &CoachId, date: NaiveDate) -> bool {
        self.store
            .load(coach_id)
            .await
            .is_date_available(date, Self::now())
    }

    pub async fn next_available_date(&self, coach_id: &CoachId, from: NaiveDate) -> NaiveDate {
        self.store
            .load(coach_id)
            .await
            .next_available_date(from, Self::now())
    }
}
