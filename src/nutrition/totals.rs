use time::{Date, UtcOffset};

use super::model::{finite_or_zero, DailyTotals, MealEntry};

/// Sums calories and macros over the given meals.
///
/// The caller decides which meals belong to the day; see [`daily_totals_for`]
/// for the filtering variant. Negative values pass through unchanged.
pub fn compute_daily_totals<'a>(meals: impl IntoIterator<Item = &'a MealEntry>) -> DailyTotals {
    let mut totals = DailyTotals::default();
    for meal in meals {
        totals.kcal += finite_or_zero(meal.kcal);
        totals.protein += finite_or_zero(meal.protein);
        totals.fat += finite_or_zero(meal.fat);
        totals.carb += finite_or_zero(meal.carb);
    }
    totals
}

/// Meals whose local calendar date is `day`.
pub fn meals_on(
    meals: &[MealEntry],
    day: Date,
    offset: UtcOffset,
) -> impl Iterator<Item = &MealEntry> {
    meals
        .iter()
        .filter(move |meal| meal.local_date(offset) == day)
}

pub fn daily_totals_for(meals: &[MealEntry], day: Date, offset: UtcOffset) -> DailyTotals {
    compute_daily_totals(meals_on(meals, day, offset))
}

#[cfg(test)]
mod tests {
    use time::macros::{date, datetime, offset};

    use super::*;
    use crate::nutrition::fixtures::meal;

    #[test]
    fn empty_input_gives_zero_totals() {
        let totals = compute_daily_totals(&Vec::new());
        assert_eq!(totals, DailyTotals::default());
        assert_eq!(totals.kcal, 0.0);
    }

    #[test]
    fn sums_two_meals() {
        let meals = vec![
            meal(datetime!(2024-03-10 08:00 UTC), 500.0, 30.0, 10.0, 50.0),
            meal(datetime!(2024-03-10 13:00 UTC), 700.0, 40.0, 20.0, 60.0),
        ];
        let totals = compute_daily_totals(&meals);
        assert_eq!(
            totals,
            DailyTotals { kcal: 1200.0, protein: 70.0, fat: 30.0, carb: 110.0 }
        );
    }

    #[test]
    fn totals_match_per_field_sums_and_are_idempotent() {
        let meals = vec![
            meal(datetime!(2024-03-10 08:00 UTC), 120.5, 3.25, 1.0, 20.0),
            meal(datetime!(2024-03-10 09:00 UTC), 0.0, 0.0, 0.0, 0.0),
            meal(datetime!(2024-03-10 10:00 UTC), 333.0, 12.0, 9.5, 41.0),
        ];
        let first = compute_daily_totals(&meals);
        let second = compute_daily_totals(&meals);
        assert_eq!(first, second);
        assert_eq!(first.kcal, meals.iter().map(|m| m.kcal).sum::<f64>());
        assert_eq!(first.protein, meals.iter().map(|m| m.protein).sum::<f64>());
        assert_eq!(first.fat, meals.iter().map(|m| m.fat).sum::<f64>());
        assert_eq!(first.carb, meals.iter().map(|m| m.carb).sum::<f64>());
    }

    #[test]
    fn negative_values_pass_through_and_nan_is_zeroed() {
        let meals = vec![
            meal(datetime!(2024-03-10 08:00 UTC), -100.0, 10.0, 0.0, 0.0),
            meal(datetime!(2024-03-10 09:00 UTC), f64::NAN, 5.0, 0.0, 0.0),
        ];
        let totals = compute_daily_totals(&meals);
        assert_eq!(totals.kcal, -100.0);
        assert_eq!(totals.protein, 15.0);
    }

    #[test]
    fn filters_by_local_calendar_date() {
        let meals = vec![
            // 23:30 UTC on the 9th is already the 10th at +03:00.
            meal(datetime!(2024-03-09 23:30 UTC), 400.0, 0.0, 0.0, 0.0),
            meal(datetime!(2024-03-10 12:00 UTC), 600.0, 0.0, 0.0, 0.0),
            // 21:30 UTC on the 10th is the 11th at +03:00.
            meal(datetime!(2024-03-10 21:30 UTC), 900.0, 0.0, 0.0, 0.0),
        ];
        let totals = daily_totals_for(&meals, date!(2024-03-10), offset!(+3));
        assert_eq!(totals.kcal, 1000.0);
    }
}
