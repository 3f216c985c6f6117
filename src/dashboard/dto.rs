use serde::Serialize;
use time::Date;
use uuid::Uuid;

use crate::nutrition::{
    bar_width, exceeded_by, percentage_of_goal, remaining, round_half_away, DailyTotals, Digest,
    Locale, MealHistory, MonthlyAnalytics, NutritionGoals, WaterProgress, WeeklyPoint,
    WeeklySummary,
};

/// Whether a view has data to show. Load failures are not a view state;
/// they are returned as errors.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ViewState {
    Empty,
    Ready,
}

impl ViewState {
    pub fn of(is_empty: bool) -> Self {
        if is_empty {
            Self::Empty
        } else {
            Self::Ready
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CalorieRing {
    pub consumed: i64,
    pub goal: f64,
    pub remaining: i64,
    pub percentage: i64,
}

#[derive(Debug, Serialize)]
pub struct MacroCard {
    pub name: &'static str,
    pub unit: &'static str,
    pub current: i64,
    pub target: f64,
    pub percentage: i64,
    pub bar_width: i64,
    pub exceeded_by: Option<i64>,
}

impl MacroCard {
    fn new(name: &'static str, unit: &'static str, current: f64, target: f64) -> Self {
        let percentage = percentage_of_goal(current, target);
        Self {
            name,
            unit,
            current: round_half_away(current),
            target,
            percentage,
            bar_width: bar_width(percentage),
            exceeded_by: exceeded_by(percentage),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct WaterView {
    pub state: ViewState,
    pub current: f64,
    pub target: f64,
    pub percentage: f64,
    pub percentage_rounded: i64,
    pub bar_width: f64,
    pub goal_reached: bool,
}

impl From<WaterProgress> for WaterView {
    fn from(p: WaterProgress) -> Self {
        Self {
            state: ViewState::of(p.current == 0.0),
            current: p.current,
            target: p.target,
            percentage: p.percentage,
            percentage_rounded: round_half_away(p.percentage),
            bar_width: p.bar_width(),
            goal_reached: p.goal_reached,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TodayView {
    pub state: ViewState,
    pub meals_count: usize,
    pub totals: DailyTotals,
    pub goals: NutritionGoals,
    pub calories: CalorieRing,
    pub macros: [MacroCard; 3],
    pub water: WaterView,
}

impl TodayView {
    pub fn build(
        meals_count: usize,
        totals: DailyTotals,
        goals: NutritionGoals,
        water: WaterProgress,
        locale: Locale,
    ) -> Self {
        let [protein, fat, carb] = locale.macro_names();
        let grams = locale.grams();
        Self {
            state: ViewState::of(meals_count == 0),
            meals_count,
            totals,
            goals,
            calories: CalorieRing {
                consumed: round_half_away(totals.kcal),
                goal: goals.daily_calorie_goal,
                remaining: round_half_away(remaining(goals.daily_calorie_goal, totals.kcal)),
                percentage: percentage_of_goal(totals.kcal, goals.daily_calorie_goal),
            },
            macros: [
                MacroCard::new(protein, grams, totals.protein, goals.daily_protein_goal),
                MacroCard::new(fat, grams, totals.fat, goals.daily_fat_goal),
                MacroCard::new(carb, grams, totals.carb, goals.daily_carb_goal),
            ],
            water: water.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct WeekPointView {
    pub date: Date,
    pub day: &'static str,
    pub calories: i64,
}

#[derive(Debug, Serialize)]
pub struct WeekView {
    pub state: ViewState,
    pub points: Vec<WeekPointView>,
    pub total_calories: i64,
    pub average_calories: i64,
}

impl WeekView {
    pub fn build(meals_count: usize, series: &[WeeklyPoint]) -> Self {
        let summary = WeeklySummary::from_series(series);
        Self {
            state: ViewState::of(meals_count == 0),
            points: series
                .iter()
                .map(|p| WeekPointView {
                    date: p.date,
                    day: p.day,
                    calories: round_half_away(p.calories),
                })
                .collect(),
            total_calories: round_half_away(summary.total_calories),
            average_calories: summary.average_calories,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HistoryView {
    pub state: ViewState,
    #[serde(flatten)]
    pub history: MealHistory,
}

#[derive(Debug, Serialize)]
pub struct DigestView {
    pub state: ViewState,
    pub digest: Option<Digest>,
    pub hours_until_next: f64,
    pub can_request_analysis: bool,
}

#[derive(Debug, Serialize)]
pub struct AnalyticsView {
    pub state: ViewState,
    #[serde(flatten)]
    pub analytics: MonthlyAnalytics,
}

#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub id: Uuid,
    pub email: Option<String>,
    pub display_name: String,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub database: &'static str,
    pub feedback_relay: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_day_renders_zeroes_against_default_goals() {
        let view = TodayView::build(
            0,
            DailyTotals::default(),
            NutritionGoals::default(),
            WaterProgress { current: 0.0, target: 3.0, percentage: 0.0, goal_reached: false },
            Locale::Ru,
        );
        assert_eq!(view.state, ViewState::Empty);
        assert_eq!(view.calories.goal, 2200.0);
        assert_eq!(view.calories.remaining, 2200);
        assert!(view.macros.iter().all(|m| m.percentage == 0 && m.bar_width == 0));
        assert_eq!(view.macros[0].name, "Белки");
        assert_eq!(view.water.state, ViewState::Empty);
    }

    #[test]
    fn exceeded_macro_keeps_true_percentage() {
        let totals = DailyTotals { kcal: 2500.0, protein: 225.0, fat: 40.0, carb: 110.0 };
        let view = TodayView::build(
            4,
            totals,
            NutritionGoals::default(),
            WaterProgress { current: 1.5, target: 3.0, percentage: 50.0, goal_reached: false },
            Locale::En,
        );
        assert_eq!(view.state, ViewState::Ready);
        assert_eq!(view.calories.percentage, 114);
        assert_eq!(view.calories.remaining, 0);
        let protein = &view.macros[0];
        assert_eq!(protein.percentage, 150);
        assert_eq!(protein.bar_width, 100);
        assert_eq!(protein.exceeded_by, Some(50));
        assert_eq!(view.macros[1].percentage, 50);
        assert_eq!(view.macros[2].exceeded_by, None);
    }

    #[test]
    fn view_state_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&ViewState::Empty).unwrap(), "\"empty\"");
    }
}
