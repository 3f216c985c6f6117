//! Nutrition aggregation.
//!
//! Pure reductions from meal and water records to the figures every
//! dashboard view shows. Nothing here performs I/O, keeps state or fails:
//! degenerate input yields zero results.

mod analytics;
mod digest;
mod goals;
mod history;
mod locale;
mod model;
mod totals;
mod water;
mod weekly;

pub use analytics::{compute_monthly_analytics, MonthlyAnalytics, ANALYTICS_MONTHS};
pub use digest::{can_request_analysis, hours_until_next_analysis, Digest};
pub use goals::{bar_width, exceeded_by, percentage_of_goal, remaining, round_half_away};
pub use history::{build_meal_history, MealHistory, HISTORY_DAYS, HISTORY_PREVIEW};
pub use locale::Locale;
pub use model::{
    DailyTotals, MealEntry, MealType, NutritionGoals, Profile, WaterEntry, WeeklyPoint,
};
pub use totals::{compute_daily_totals, daily_totals_for, meals_on};
pub use water::{compute_water_progress, WaterProgress, DEFAULT_WATER_TARGET_LITRES};
pub use weekly::{compute_weekly_series, WeeklySummary, WEEK_DAYS};

#[cfg(test)]
pub(crate) mod fixtures {
    use time::OffsetDateTime;
    use uuid::Uuid;

    use super::{MealEntry, MealType};

    pub fn meal(eaten_at: OffsetDateTime, kcal: f64, protein: f64, fat: f64, carb: f64) -> MealEntry {
        MealEntry {
            id: Uuid::new_v4(),
            dish: "Гречка с курицей".into(),
            meal_type: MealType::Lunch,
            eaten_at,
            kcal,
            protein,
            fat,
            carb,
        }
    }
}

#[cfg(test)]
mod tests {
    use time::macros::{date, datetime, offset};

    use super::fixtures::meal;
    use super::{compute_daily_totals, daily_totals_for, meals_on};

    #[test]
    fn totals_over_a_local_day_agree_with_manual_filtering() {
        let meals = [
            meal(datetime!(2024-03-09 22:30 UTC), 400.0, 20.0, 10.0, 40.0),
            meal(datetime!(2024-03-10 09:00 UTC), 600.0, 35.0, 15.0, 70.0),
            meal(datetime!(2024-03-10 21:30 UTC), 900.0, 1.0, 1.0, 1.0),
        ];
        let day = date!(2024-03-10);
        let todays: Vec<_> = meals_on(&meals, day, offset!(+3)).collect();
        assert_eq!(todays.len(), 2);

        let totals = compute_daily_totals(todays.iter().copied());
        assert_eq!(totals.kcal, 1000.0);
        assert_eq!(totals, daily_totals_for(&meals, day, offset!(+3)));
    }
}
