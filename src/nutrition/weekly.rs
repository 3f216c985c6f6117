use serde::Serialize;
use time::{Date, Duration, UtcOffset};

use super::goals::round_half_away;
use super::locale::Locale;
use super::model::{finite_or_zero, MealEntry, WeeklyPoint};

pub const WEEK_DAYS: usize = 7;

/// Per-day calories for `today - 6 ..= today`, oldest first.
///
/// Days without meals are present with zero calories, so the series always
/// has [`WEEK_DAYS`] points. Meals outside the window are ignored.
pub fn compute_weekly_series(
    meals: &[MealEntry],
    today: Date,
    offset: UtcOffset,
    locale: Locale,
) -> [WeeklyPoint; WEEK_DAYS] {
    let first = today.saturating_sub(Duration::days(WEEK_DAYS as i64 - 1));

    let mut calories = [0.0; WEEK_DAYS];
    for meal in meals {
        let slot = (meal.local_date(offset) - first).whole_days();
        if let Ok(slot) = usize::try_from(slot) {
            if let Some(bucket) = calories.get_mut(slot) {
                *bucket += finite_or_zero(meal.kcal);
            }
        }
    }

    std::array::from_fn(|slot| {
        let date = first.saturating_add(Duration::days(slot as i64));
        WeeklyPoint {
            date,
            day: locale.weekday_short(date.weekday()),
            calories: calories[slot],
        }
    })
}

/// Week figures derived from the series, never recomputed from raw meals.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct WeeklySummary {
    pub total_calories: f64,
    pub average_calories: i64,
}

impl WeeklySummary {
    pub fn from_series(series: &[WeeklyPoint]) -> Self {
        let total_calories: f64 = series.iter().map(|point| point.calories).sum();
        Self {
            total_calories,
            average_calories: round_half_away(total_calories / WEEK_DAYS as f64),
        }
    }
}

#[cfg(test)]
mod tests {
    use time::macros::{date, datetime, offset};

    use super::*;
    use crate::nutrition::fixtures::meal;

    #[test]
    fn empty_input_still_has_seven_zero_points() {
        let series = compute_weekly_series(&[], date!(2024-03-10), offset!(UTC), Locale::Ru);
        assert_eq!(series.len(), 7);
        assert!(series.iter().all(|p| p.calories == 0.0));
        assert_eq!(series[0].date, date!(2024-03-04));
        assert_eq!(series[6].date, date!(2024-03-10));
    }

    #[test]
    fn first_and_last_day_only_leaves_zeros_in_between() {
        let meals = vec![
            meal(datetime!(2024-03-04 09:00 UTC), 1800.0, 0.0, 0.0, 0.0),
            meal(datetime!(2024-03-10 09:00 UTC), 2100.0, 0.0, 0.0, 0.0),
            meal(datetime!(2024-03-10 19:00 UTC), 300.0, 0.0, 0.0, 0.0),
        ];
        let series = compute_weekly_series(&meals, date!(2024-03-10), offset!(UTC), Locale::En);
        let calories: Vec<f64> = series.iter().map(|p| p.calories).collect();
        assert_eq!(calories, vec![1800.0, 0.0, 0.0, 0.0, 0.0, 0.0, 2400.0]);
        assert_eq!(series[0].day, "Mon");
        assert_eq!(series[6].day, "Sun");
    }

    #[test]
    fn meals_outside_window_are_ignored() {
        let meals = vec![
            meal(datetime!(2024-03-03 09:00 UTC), 999.0, 0.0, 0.0, 0.0),
            meal(datetime!(2024-03-11 09:00 UTC), 999.0, 0.0, 0.0, 0.0),
        ];
        let series = compute_weekly_series(&meals, date!(2024-03-10), offset!(UTC), Locale::Ru);
        assert_eq!(series.len(), 7);
        assert!(series.iter().all(|p| p.calories == 0.0));
    }

    #[test]
    fn buckets_by_local_date() {
        // 22:00 UTC on the 9th is the 10th in Moscow.
        let meals = vec![meal(datetime!(2024-03-09 22:00 UTC), 500.0, 0.0, 0.0, 0.0)];
        let series = compute_weekly_series(&meals, date!(2024-03-10), offset!(+3), Locale::Ru);
        assert_eq!(series[6].calories, 500.0);
        assert_eq!(series[5].calories, 0.0);
    }

    #[test]
    fn summary_is_derived_from_series() {
        let meals = vec![
            meal(datetime!(2024-03-05 09:00 UTC), 2000.0, 0.0, 0.0, 0.0),
            meal(datetime!(2024-03-06 09:00 UTC), 1500.0, 0.0, 0.0, 0.0),
        ];
        let series = compute_weekly_series(&meals, date!(2024-03-10), offset!(UTC), Locale::Ru);
        let summary = WeeklySummary::from_series(&series);
        assert_eq!(summary.total_calories, 3500.0);
        assert_eq!(summary.average_calories, 500);
    }
}
