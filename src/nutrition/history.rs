use serde::Serialize;
use time::{Date, OffsetDateTime, UtcOffset};
use uuid::Uuid;

use super::goals::round_half_away;
use super::locale::Locale;
use super::model::{MealEntry, MealType};

/// How many days of meals the history card covers.
pub const HISTORY_DAYS: i64 = 3;
/// Items shown before "show all".
pub const HISTORY_PREVIEW: usize = 3;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MealHistoryItem {
    pub id: Uuid,
    pub dish: String,
    pub meal_type: MealType,
    pub meal_type_label: &'static str,
    #[serde(with = "time::serde::rfc3339")]
    pub eaten_at: OffsetDateTime,
    pub time: String,
    pub day: String,
    pub kcal: i64,
    pub protein: i64,
    pub fat: i64,
    pub carb: i64,
    pub has_macros: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MealHistory {
    pub total: usize,
    pub preview: Vec<MealHistoryItem>,
    pub items: Vec<MealHistoryItem>,
}

impl MealHistory {
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// Newest-first history with relative day labels.
pub fn build_meal_history(
    meals: &[MealEntry],
    now: OffsetDateTime,
    offset: UtcOffset,
    locale: Locale,
    preview: usize,
) -> MealHistory {
    let today = now.to_offset(offset).date();

    let mut sorted: Vec<&MealEntry> = meals.iter().collect();
    sorted.sort_by(|a, b| b.eaten_at.cmp(&a.eaten_at));

    let items: Vec<MealHistoryItem> = sorted
        .into_iter()
        .map(|meal| history_item(meal, today, offset, locale))
        .collect();

    MealHistory {
        total: items.len(),
        preview: items.iter().take(preview).cloned().collect(),
        items,
    }
}

fn history_item(meal: &MealEntry, today: Date, offset: UtcOffset, locale: Locale) -> MealHistoryItem {
    let local = meal.eaten_at.to_offset(offset);
    MealHistoryItem {
        id: meal.id,
        dish: meal.dish.clone(),
        meal_type: meal.meal_type,
        meal_type_label: locale.meal_type(meal.meal_type),
        eaten_at: meal.eaten_at,
        time: format!("{:02}:{:02}", local.hour(), local.minute()),
        day: relative_day(local.date(), today, locale),
        kcal: round_half_away(meal.kcal),
        protein: round_half_away(meal.protein),
        fat: round_half_away(meal.fat),
        carb: round_half_away(meal.carb),
        has_macros: meal.protein != 0.0 || meal.fat != 0.0 || meal.carb != 0.0,
    }
}

/// "Today", "Yesterday", or a short date.
pub fn relative_day(date: Date, today: Date, locale: Locale) -> String {
    if date == today {
        locale.today().to_string()
    } else if Some(date) == today.previous_day() {
        locale.yesterday().to_string()
    } else {
        locale.day_month(date)
    }
}
