//! Percentage-of-goal arithmetic.
//!
//! [`percentage_of_goal`] is always uncapped; the clamping helpers exist for
//! progress-bar widths and are kept apart so the true value stays available
//! for "exceeded by" messages.

/// Rounds half away from zero; non-finite input becomes 0.
pub fn round_half_away(value: f64) -> i64 {
    let rounded = value.round();
    if rounded.is_finite() {
        rounded as i64
    } else {
        0
    }
}

/// `round(current / goal * 100)`, uncapped. A non-positive goal gives 0.
pub fn percentage_of_goal(current: f64, goal: f64) -> i64 {
    if !goal.is_finite() || goal <= 0.0 || !current.is_finite() {
        return 0;
    }
    round_half_away(current / goal * 100.0)
}

/// Progress bar width in percent, clamped to `0..=100`.
pub fn bar_width(percentage: i64) -> i64 {
    percentage.clamp(0, 100)
}

pub fn exceeded_by(percentage: i64) -> Option<i64> {
    (percentage > 100).then(|| percentage - 100)
}

/// What is left of the goal, never below zero.
pub fn remaining(goal: f64, consumed: f64) -> f64 {
    (goal - consumed).max(0.0)
}
