use std::collections::BTreeMap;

use serde::Serialize;
use time::{Date, Month, UtcOffset};

use super::goals::{percentage_of_goal, round_half_away};
use super::locale::Locale;
use super::model::{finite_or_zero, MealEntry};

/// Default length of the analytics window, in calendar months.
pub const ANALYTICS_MONTHS: u32 = 6;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MonthlyPoint {
    pub year: i32,
    pub month: u8,
    pub label: &'static str,
    /// Average daily calories over the days of the month that have data.
    pub calories: i64,
    pub days_with_data: usize,
}

#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq)]
pub struct AnalyticsStats {
    pub total_days: usize,
    pub months_with_data: usize,
    pub avg_calories: i64,
    /// Share of months whose daily average stayed within the calorie goal.
    pub goal_completion: i64,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct MonthlyAnalytics {
    pub months: Vec<MonthlyPoint>,
    pub stats: AnalyticsStats,
}

pub fn compute_monthly_analytics(
    meals: &[MealEntry],
    offset: UtcOffset,
    calorie_goal: f64,
    locale: Locale,
) -> MonthlyAnalytics {
    let mut daily: BTreeMap<Date, f64> = BTreeMap::new();
    for meal in meals {
        *daily.entry(meal.local_date(offset)).or_default() += finite_or_zero(meal.kcal);
    }
    if daily.is_empty() {
        return MonthlyAnalytics::default();
    }

    let mut monthly: BTreeMap<(i32, u8), Vec<f64>> = BTreeMap::new();
    for (date, kcal) in &daily {
        monthly
            .entry((date.year(), u8::from(date.month())))
            .or_default()
            .push(*kcal);
    }

    let mut months_within_goal = 0_usize;
    let months: Vec<MonthlyPoint> = monthly
        .into_iter()
        .map(|((year, month), days)| {
            let average = days.iter().sum::<f64>() / days.len() as f64;
            if average <= calorie_goal {
                months_within_goal += 1;
            }
            MonthlyPoint {
                year,
                month,
                label: Month::try_from(month).map_or("", |m| locale.month_short(m)),
                calories: round_half_away(average),
                days_with_data: days.len(),
            }
        })
        .collect();

    let total_days = daily.len();
    let stats = AnalyticsStats {
        total_days,
        months_with_data: months.len(),
        avg_calories: round_half_away(daily.values().sum::<f64>() / total_days as f64),
        goal_completion: percentage_of_goal(months_within_goal as f64, months.len() as f64),
    };
    MonthlyAnalytics { months, stats }
}

#[cfg(test)]
mod tests {
    use time::macros::{datetime, offset};

    use super::*;
    use crate::nutrition::fixtures::meal;

    #[test]
    fn no_meals_gives_empty_analytics() {
        let analytics = compute_monthly_analytics(&[], offset!(UTC), 2200.0, Locale::Ru);
        assert!(analytics.months.is_empty());
        assert_eq!(analytics.stats, AnalyticsStats::default());
    }

    #[test]
    fn groups_days_into_months() {
        let meals = vec![
            // February: two days averaging 2500 kcal, above goal.
            meal(datetime!(2024-02-10 09:00 UTC), 1000.0, 0.0, 0.0, 0.0),
            meal(datetime!(2024-02-10 19:00 UTC), 1500.0, 0.0, 0.0, 0.0),
            meal(datetime!(2024-02-11 12:00 UTC), 2500.0, 0.0, 0.0, 0.0),
            // March: one day, within goal.
            meal(datetime!(2024-03-01 12:00 UTC), 1800.0, 0.0, 0.0, 0.0),
        ];
        let analytics = compute_monthly_analytics(&meals, offset!(UTC), 2200.0, Locale::Ru);

        assert_eq!(analytics.months.len(), 2);
        assert_eq!(analytics.months[0].label, "фев");
        assert_eq!(analytics.months[0].calories, 2500);
        assert_eq!(analytics.months[0].days_with_data, 2);
        assert_eq!(analytics.months[1].label, "мар");
        assert_eq!(analytics.months[1].calories, 1800);

        assert_eq!(analytics.stats.total_days, 3);
        assert_eq!(analytics.stats.months_with_data, 2);
        // (2500 + 2500 + 1800) / 3 = 2266.67
        assert_eq!(analytics.stats.avg_calories, 2267);
        assert_eq!(analytics.stats.goal_completion, 50);
    }

    #[test]
    fn months_are_split_in_local_time() {
        // 22:30 UTC on Jan 31 is already February at +03:00.
        let meals = vec![meal(datetime!(2024-01-31 22:30 UTC), 700.0, 0.0, 0.0, 0.0)];
        let analytics = compute_monthly_analytics(&meals, offset!(+3), 2200.0, Locale::En);
        assert_eq!(analytics.months[0].month, 2);
        assert_eq!(analytics.months[0].label, "Feb");
        assert_eq!(analytics.stats.goal_completion, 100);
    }
}
