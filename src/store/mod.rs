//! Data access layer.
//!
//! [`NutritionStore`] is the seam between the dashboard and the hosted
//! database. Rows are converted into zero-defaulted records here, so the
//! aggregation code never sees a missing value.

mod postgres;
mod rows;

use async_trait::async_trait;
use time::{Date, Duration, Month, OffsetDateTime, UtcOffset};
use uuid::Uuid;

use crate::nutrition::{Digest, MealEntry, Profile, WaterEntry};

pub use postgres::PgStore;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[async_trait]
pub trait NutritionStore: Send + Sync {
    /// Meals with `from <= eaten_at < to`, oldest first.
    async fn list_meals_between(
        &self,
        user_id: Uuid,
        from: OffsetDateTime,
        to: OffsetDateTime,
    ) -> Result<Vec<MealEntry>, StoreError>;

    async fn list_water_between(
        &self,
        user_id: Uuid,
        from: OffsetDateTime,
        to: OffsetDateTime,
    ) -> Result<Vec<WaterEntry>, StoreError>;

    async fn get_profile(&self, user_id: Uuid) -> Result<Option<Profile>, StoreError>;

    async fn latest_digest(&self, user_id: Uuid) -> Result<Option<Digest>, StoreError>;

    async fn ping(&self) -> Result<(), StoreError>;
}

/// Local calendar-day boundaries for one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayWindow {
    pub today: Date,
    pub offset: UtcOffset,
}

impl DayWindow {
    pub fn at(now: OffsetDateTime, offset: UtcOffset) -> Self {
        Self {
            today: now.to_offset(offset).date(),
            offset,
        }
    }

    pub fn start_of(&self, day: Date) -> OffsetDateTime {
        day.midnight().assume_offset(self.offset)
    }

    fn end_of_today(&self) -> OffsetDateTime {
        self.start_of(self.today.saturating_add(Duration::days(1)))
    }

    pub fn today(&self) -> (OffsetDateTime, OffsetDateTime) {
        (self.start_of(self.today), self.end_of_today())
    }

    /// The last `days` calendar days including today. At least one day.
    pub fn recent_days(&self, days: i64) -> (OffsetDateTime, OffsetDateTime) {
        let first = self.today.saturating_sub(Duration::days(days.max(1) - 1));
        (self.start_of(first), self.end_of_today())
    }

    /// From the first day of the month `months - 1` months back until the end
    /// of today.
    pub fn recent_months(&self, months: u32) -> (OffsetDateTime, OffsetDateTime) {
        let mut year = self.today.year();
        let mut month = self.today.month();
        for _ in 1..months.max(1) {
            if month == Month::January {
                year -= 1;
            }
            month = month.previous();
        }
        let first = Date::from_calendar_date(year, month, 1).unwrap_or(self.today);
        (self.start_of(first), self.end_of_today())
    }
}

/// One user's records, scoped to a request's [`DayWindow`].
pub struct UserData<'a> {
    store: &'a dyn NutritionStore,
    user_id: Uuid,
    window: DayWindow,
}

impl<'a> UserData<'a> {
    pub fn new(store: &'a dyn NutritionStore, user_id: Uuid, window: DayWindow) -> Self {
        Self {
            store,
            user_id,
            window,
        }
    }

    pub fn window(&self) -> DayWindow {
        self.window
    }

    pub async fn list_today_meals(&self) -> Result<Vec<MealEntry>, StoreError> {
        let (from, to) = self.window.today();
        self.store.list_meals_between(self.user_id, from, to).await
    }

    pub async fn list_recent_meals(&self, days: i64) -> Result<Vec<MealEntry>, StoreError> {
        let (from, to) = self.window.recent_days(days);
        self.store.list_meals_between(self.user_id, from, to).await
    }

    pub async fn list_meals_for_months(&self, months: u32) -> Result<Vec<MealEntry>, StoreError> {
        let (from, to) = self.window.recent_months(months);
        self.store.list_meals_between(self.user_id, from, to).await
    }

    pub async fn list_today_water(&self) -> Result<Vec<WaterEntry>, StoreError> {
        let (from, to) = self.window.today();
        self.store.list_water_between(self.user_id, from, to).await
    }

    pub async fn get_profile(&self) -> Result<Option<Profile>, StoreError> {
        self.store.get_profile(self.user_id).await
    }

    pub async fn latest_digest(&self) -> Result<Option<Digest>, StoreError> {
        self.store.latest_digest(self.user_id).await
    }
}
