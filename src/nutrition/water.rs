use serde::Serialize;

use super::model::{finite_or_zero, WaterEntry};

/// Deployment-wide daily water target; there is no per-user override.
pub const DEFAULT_WATER_TARGET_LITRES: f64 = 3.0;

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct WaterProgress {
    pub current: f64,
    pub target: f64,
    /// Uncapped and unrounded.
    pub percentage: f64,
    pub goal_reached: bool,
}

impl WaterProgress {
    pub fn bar_width(&self) -> f64 {
        self.percentage.clamp(0.0, 100.0)
    }
}

pub fn compute_water_progress<'a>(
    entries: impl IntoIterator<Item = &'a WaterEntry>,
    target: f64,
) -> WaterProgress {
    let current: f64 = entries
        .into_iter()
        .map(|entry| finite_or_zero(entry.amount))
        .sum();
    let percentage = if target.is_finite() && target > 0.0 {
        current / target * 100.0
    } else {
        0.0
    };
    WaterProgress {
        current,
        target,
        percentage,
        goal_reached: percentage >= 100.0,
    }
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;
    use uuid::Uuid;

    use super::*;

    fn water(amount: f64) -> WaterEntry {
        WaterEntry {
            id: Uuid::new_v4(),
            amount,
            logged_at: datetime!(2024-03-10 10:00 UTC),
        }
    }

    #[test]
    fn no_entries_is_zero_progress() {
        let progress = compute_water_progress(&Vec::new(), DEFAULT_WATER_TARGET_LITRES);
        assert_eq!(progress.current, 0.0);
        assert_eq!(progress.percentage, 0.0);
        assert!(!progress.goal_reached);
    }

    #[test]
    fn percentage_is_not_clamped() {
        let entries = vec![water(2.0), water(2.5)];
        let progress = compute_water_progress(&entries, DEFAULT_WATER_TARGET_LITRES);
        assert_eq!(progress.current, 4.5);
        assert_eq!(progress.percentage, 150.0);
        assert_eq!(progress.bar_width(), 100.0);
        assert!(progress.goal_reached);
    }

    #[test]
    fn half_the_target() {
        let entries = vec![water(0.5), water(1.0)];
        let progress = compute_water_progress(&entries, DEFAULT_WATER_TARGET_LITRES);
        assert_eq!(progress.percentage, 50.0);
        assert!(!progress.goal_reached);
    }

    #[test]
    fn zero_target_does_not_divide() {
        let progress = compute_water_progress(&vec![water(1.0)], 0.0);
        assert_eq!(progress.percentage, 0.0);
    }
}
