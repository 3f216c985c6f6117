use std::str::FromStr;

use serde::Serialize;
use time::{Date, Month, Weekday};

use super::model::MealType;

/// Language of the labels placed into view models.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ru,
    En,
}

#[derive(Debug, thiserror::Error)]
#[error("unknown locale `{0}`, expected `ru` or `en`")]
pub struct UnknownLocale(String);

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ru" | "ru-ru" => Ok(Self::Ru),
            "en" | "en-us" | "en-gb" => Ok(Self::En),
            other => Err(UnknownLocale(other.to_string())),
        }
    }
}

impl Locale {
    pub fn weekday_short(self, weekday: Weekday) -> &'static str {
        use Weekday::*;
        match (self, weekday) {
            (Self::Ru, Monday) => "Пн",
            (Self::Ru, Tuesday) => "Вт",
            (Self::Ru, Wednesday) => "Ср",
            (Self::Ru, Thursday) => "Чт",
            (Self::Ru, Friday) => "Пт",
            (Self::Ru, Saturday) => "Сб",
            (Self::Ru, Sunday) => "Вс",
            (Self::En, Monday) => "Mon",
            (Self::En, Tuesday) => "Tue",
            (Self::En, Wednesday) => "Wed",
            (Self::En, Thursday) => "Thu",
            (Self::En, Friday) => "Fri",
            (Self::En, Saturday) => "Sat",
            (Self::En, Sunday) => "Sun",
        }
    }

    /// Short month name for chart axes.
    pub fn month_short(self, month: Month) -> &'static str {
        const RU: [&str; 12] = [
            "янв", "фев", "мар", "апр", "май", "июн", "июл", "авг", "сен", "окт", "ноя", "дек",
        ];
        const EN: [&str; 12] = [
            "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
        ];
        let index = usize::from(u8::from(month) - 1);
        match self {
            Self::Ru => RU[index],
            Self::En => EN[index],
        }
    }

    /// "5 мар." / "Mar 5".
    pub fn day_month(self, date: Date) -> String {
        // Genitive forms, as a Russian date reads.
        const RU_GENITIVE: [&str; 12] = [
            "янв.", "февр.", "мар.", "апр.", "мая", "июн.", "июл.", "авг.", "сент.", "окт.",
            "нояб.", "дек.",
        ];
        match self {
            Self::Ru => {
                let index = usize::from(u8::from(date.month()) - 1);
                format!("{} {}", date.day(), RU_GENITIVE[index])
            }
            Self::En => format!("{} {}", self.month_short(date.month()), date.day()),
        }
    }

    pub fn meal_type(self, meal_type: MealType) -> &'static str {
        match (self, meal_type) {
            (Self::Ru, MealType::Breakfast) => "Завтрак",
            (Self::Ru, MealType::Lunch) => "Обед",
            (Self::Ru, MealType::Dinner) => "Ужин",
            (Self::Ru, MealType::Snack) => "Перекус",
            (Self::Ru, MealType::Unspecified) => "Приём пищи",
            (Self::En, MealType::Breakfast) => "Breakfast",
            (Self::En, MealType::Lunch) => "Lunch",
            (Self::En, MealType::Dinner) => "Dinner",
            (Self::En, MealType::Snack) => "Snack",
            (Self::En, MealType::Unspecified) => "Meal",
        }
    }

    pub fn today(self) -> &'static str {
        match self {
            Self::Ru => "Сегодня",
            Self::En => "Today",
        }
    }

    pub fn yesterday(self) -> &'static str {
        match self {
            Self::Ru => "Вчера",
            Self::En => "Yesterday",
        }
    }

    /// Macro card titles: protein, fat, carbohydrate.
    pub fn macro_names(self) -> [&'static str; 3] {
        match self {
            Self::Ru => ["Белки", "Жиры", "Углеводы"],
            Self::En => ["Protein", "Fat", "Carbs"],
        }
    }

    pub fn grams(self) -> &'static str {
        match self {
            Self::Ru => "г",
            Self::En => "g",
        }
    }

    pub fn default_user_name(self) -> &'static str {
        match self {
            Self::Ru => "Пользователь",
            Self::En => "User",
        }
    }
}
