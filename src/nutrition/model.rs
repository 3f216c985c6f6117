use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime, UtcOffset};
use uuid::Uuid;

/// Kind of meal as recorded by the chat bot.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
    #[default]
    Unspecified,
}

impl MealType {
    /// Unknown or missing values fall back to `Unspecified`.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
            Some("breakfast") => Self::Breakfast,
            Some("lunch") => Self::Lunch,
            Some("dinner") => Self::Dinner,
            Some("snack") => Self::Snack,
            _ => Self::Unspecified,
        }
    }
}

/// One recorded meal. Values are already zero-defaulted.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MealEntry {
    pub id: Uuid,
    pub dish: String,
    pub meal_type: MealType,
    #[serde(with = "time::serde::rfc3339")]
    pub eaten_at: OffsetDateTime,
    pub kcal: f64,
    pub protein: f64,
    pub fat: f64,
    pub carb: f64,
}

impl MealEntry {
    pub fn local_date(&self, offset: UtcOffset) -> Date {
        self.eaten_at.to_offset(offset).date()
    }
}

/// One recorded water intake, in litres.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WaterEntry {
    pub id: Uuid,
    pub amount: f64,
    #[serde(with = "time::serde::rfc3339")]
    pub logged_at: OffsetDateTime,
}

/// User profile as stored; every field is optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Profile {
    pub first_name: Option<String>,
    pub daily_calorie_goal: Option<f64>,
    pub daily_protein_goal: Option<f64>,
    pub daily_fat_goal: Option<f64>,
    pub daily_carb_goal: Option<f64>,
}

/// Daily targets with the fallback defaults already applied.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct NutritionGoals {
    pub daily_calorie_goal: f64,
    pub daily_protein_goal: f64,
    pub daily_fat_goal: f64,
    pub daily_carb_goal: f64,
}

impl NutritionGoals {
    pub const DEFAULT_CALORIES: f64 = 2200.0;
    pub const DEFAULT_PROTEIN: f64 = 150.0;
    pub const DEFAULT_FAT: f64 = 80.0;
    pub const DEFAULT_CARB: f64 = 220.0;

    /// Missing, zero, negative or non-finite profile values use the defaults.
    pub fn from_profile(profile: Option<&Profile>) -> Self {
        let pick = |value: Option<f64>, default: f64| {
            value.filter(|v| v.is_finite() && *v > 0.0).unwrap_or(default)
        };
        let profile = profile.cloned().unwrap_or_default();
        Self {
            daily_calorie_goal: pick(profile.daily_calorie_goal, Self::DEFAULT_CALORIES),
            daily_protein_goal: pick(profile.daily_protein_goal, Self::DEFAULT_PROTEIN),
            daily_fat_goal: pick(profile.daily_fat_goal, Self::DEFAULT_FAT),
            daily_carb_goal: pick(profile.daily_carb_goal, Self::DEFAULT_CARB),
        }
    }
}

impl Default for NutritionGoals {
    fn default() -> Self {
        Self::from_profile(None)
    }
}

/// Sum of calories and macros over one calendar day. Not rounded.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq)]
pub struct DailyTotals {
    pub kcal: f64,
    pub protein: f64,
    pub fat: f64,
    pub carb: f64,
}

/// One day of the trailing weekly series.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct WeeklyPoint {
    pub date: Date,
    pub day: &'static str,
    pub calories: f64,
}

pub(crate) fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}
