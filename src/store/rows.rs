use sqlx::FromRow;
use time::{Date, OffsetDateTime};
use uuid::Uuid;

use crate::nutrition::{Digest, MealEntry, MealType, Profile, WaterEntry};

/// Row from `meals`; every nutrient column is nullable.
#[derive(Debug, FromRow)]
pub struct MealRow {
    pub id: Uuid,
    pub dish: Option<String>,
    pub meal_type: Option<String>,
    pub eaten_at: OffsetDateTime,
    pub kcal: Option<f64>,
    pub prot: Option<f64>,
    pub fat: Option<f64>,
    pub carb: Option<f64>,
}

#[derive(Debug, FromRow)]
pub struct WaterRow {
    pub id: Uuid,
    pub amount: Option<f64>,
    pub logged_at: OffsetDateTime,
}

#[derive(Debug, FromRow)]
pub struct ProfileRow {
    pub first_name: Option<String>,
    pub daily_calories_goal: Option<f64>,
    pub daily_protein_goal: Option<f64>,
    pub daily_fat_goal: Option<f64>,
    pub daily_carbs_goal: Option<f64>,
}

#[derive(Debug, FromRow)]
pub struct DigestRow {
    pub for_date: Date,
    pub summary_md: Option<String>,
    pub recommendation: Option<String>,
}

fn zero_default(value: Option<f64>) -> f64 {
    value.filter(|v| v.is_finite()).unwrap_or(0.0)
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

impl From<MealRow> for MealEntry {
    fn from(r: MealRow) -> Self {
        Self {
            id: r.id,
            dish: r.dish.unwrap_or_default(),
            meal_type: MealType::parse(r.meal_type.as_deref()),
            eaten_at: r.eaten_at,
            kcal: zero_default(r.kcal),
            protein: zero_default(r.prot),
            fat: zero_default(r.fat),
            carb: zero_default(r.carb),
        }
    }
}

impl From<WaterRow> for WaterEntry {
    fn from(r: WaterRow) -> Self {
        Self {
            id: r.id,
            amount: zero_default(r.amount),
            logged_at: r.logged_at,
        }
    }
}

impl From<ProfileRow> for Profile {
    fn from(r: ProfileRow) -> Self {
        Self {
            first_name: non_blank(r.first_name),
            daily_calorie_goal: r.daily_calories_goal,
            daily_protein_goal: r.daily_protein_goal,
            daily_fat_goal: r.daily_fat_goal,
            daily_carb_goal: r.daily_carbs_goal,
        }
    }
}

impl From<DigestRow> for Digest {
    fn from(r: DigestRow) -> Self {
        Self {
            for_date: r.for_date,
            summary_md: non_blank(r.summary_md),
            recommendation: non_blank(r.recommendation),
        }
    }
}

#[cfg(test)]
mod tests {
    use time::macros::{date, datetime};

    use super::*;

    #[test]
    fn meal_row_defaults_missing_values_to_zero() {
        let row = MealRow {
            id: Uuid::new_v4(),
            dish: None,
            meal_type: Some("dinner".into()),
            eaten_at: datetime!(2024-03-10 18:00 UTC),
            kcal: Some(640.0),
            prot: None,
            fat: Some(f64::NAN),
            carb: Some(-3.0),
        };
        let meal = MealEntry::from(row);
        assert_eq!(meal.dish, "");
        assert_eq!(meal.meal_type, MealType::Dinner);
        assert_eq!(meal.kcal, 640.0);
        assert_eq!(meal.protein, 0.0);
        assert_eq!(meal.fat, 0.0);
        assert_eq!(meal.carb, -3.0);
    }

    #[test]
    fn water_row_without_amount_is_zero() {
        let row = WaterRow {
            id: Uuid::new_v4(),
            amount: None,
            logged_at: datetime!(2024-03-10 18:00 UTC),
        };
        assert_eq!(WaterEntry::from(row).amount, 0.0);
    }

    #[test]
    fn blank_strings_become_none() {
        let profile = Profile::from(ProfileRow {
            first_name: Some("  ".into()),
            daily_calories_goal: Some(1900.0),
            daily_protein_goal: None,
            daily_fat_goal: None,
            daily_carbs_goal: None,
        });
        assert_eq!(profile.first_name, None);
        assert_eq!(profile.daily_calorie_goal, Some(1900.0));

        let digest = Digest::from(DigestRow {
            for_date: date!(2024-03-10),
            summary_md: Some("".into()),
            recommendation: Some("Пейте больше воды".into()),
        });
        assert_eq!(digest.summary_md, None);
        assert_eq!(digest.recommendation.as_deref(), Some("Пейте больше воды"));
    }
}
