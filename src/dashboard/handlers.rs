use axum::{extract::State, routing::get, Json, Router};
use time::OffsetDateTime;
use tracing::{debug, instrument, warn};

use super::dto::{
    AnalyticsView, DigestView, HistoryView, MeResponse, StatusResponse, TodayView, ViewState,
    WaterView, WeekView,
};
use crate::{
    error::ApiError,
    nutrition::{
        build_meal_history, can_request_analysis, compute_daily_totals, compute_monthly_analytics,
        compute_water_progress, compute_weekly_series, hours_until_next_analysis, meals_on,
        NutritionGoals, HISTORY_DAYS, HISTORY_PREVIEW, WEEK_DAYS,
    },
    session::Session,
    state::AppState,
    store::{DayWindow, UserData},
};

pub fn dashboard_routes() -> Router<AppState> {
    Router::new()
        .route("/dashboard/today", get(today))
        .route("/dashboard/week", get(week))
        .route("/dashboard/water", get(water))
        .route("/dashboard/meals", get(meals))
        .route("/dashboard/digest", get(digest))
        .route("/dashboard/analytics", get(analytics))
}

pub fn account_routes() -> Router<AppState> {
    Router::new()
        .route("/me", get(get_me))
        .route("/status", get(status))
}

fn user_data<'a>(state: &'a AppState, session: &Session, now: OffsetDateTime) -> UserData<'a> {
    let window = DayWindow::at(now, state.config.dashboard.utc_offset);
    UserData::new(state.store.as_ref(), session.user_id, window)
}

#[instrument(skip(state, session), fields(user_id = %session.user_id))]
pub async fn today(
    State(state): State<AppState>,
    session: Session,
) -> Result<Json<TodayView>, ApiError> {
    let cfg = &state.config.dashboard;
    let data = user_data(&state, &session, OffsetDateTime::now_utc());
    let window = data.window();

    let (meals, water, profile) = tokio::try_join!(
        data.list_today_meals(),
        data.list_today_water(),
        data.get_profile()
    )?;

    let todays: Vec<_> = meals_on(&meals, window.today, window.offset).collect();
    let totals = compute_daily_totals(todays.iter().copied());
    let goals = NutritionGoals::from_profile(profile.as_ref());
    let water = compute_water_progress(&water, cfg.water_target_litres);
    debug!(meals = todays.len(), kcal = totals.kcal, "today aggregated");

    Ok(Json(TodayView::build(todays.len(), totals, goals, water, cfg.locale)))
}

#[instrument(skip(state, session), fields(user_id = %session.user_id))]
pub async fn week(
    State(state): State<AppState>,
    session: Session,
) -> Result<Json<WeekView>, ApiError> {
    let cfg = &state.config.dashboard;
    let data = user_data(&state, &session, OffsetDateTime::now_utc());
    let window = data.window();

    let meals = data.list_recent_meals(WEEK_DAYS as i64).await?;
    let series = compute_weekly_series(&meals, window.today, window.offset, cfg.locale);

    Ok(Json(WeekView::build(meals.len(), &series)))
}

#[instrument(skip(state, session), fields(user_id = %session.user_id))]
pub async fn water(
    State(state): State<AppState>,
    session: Session,
) -> Result<Json<WaterView>, ApiError> {
    let data = user_data(&state, &session, OffsetDateTime::now_utc());
    let entries = data.list_today_water().await?;
    let progress = compute_water_progress(&entries, state.config.dashboard.water_target_litres);
    Ok(Json(progress.into()))
}

#[instrument(skip(state, session), fields(user_id = %session.user_id))]
pub async fn meals(
    State(state): State<AppState>,
    session: Session,
) -> Result<Json<HistoryView>, ApiError> {
    let cfg = &state.config.dashboard;
    let now = OffsetDateTime::now_utc();
    let data = user_data(&state, &session, now);

    let meals = data.list_recent_meals(HISTORY_DAYS).await?;
    let history = build_meal_history(&meals, now, cfg.utc_offset, cfg.locale, HISTORY_PREVIEW);

    Ok(Json(HistoryView {
        state: ViewState::of(history.is_empty()),
        history,
    }))
}

#[instrument(skip(state, session), fields(user_id = %session.user_id))]
pub async fn digest(
    State(state): State<AppState>,
    session: Session,
) -> Result<Json<DigestView>, ApiError> {
    let now = OffsetDateTime::now_utc();
    let digest = user_data(&state, &session, now).latest_digest().await?;

    Ok(Json(DigestView {
        state: ViewState::of(digest.is_none()),
        hours_until_next: hours_until_next_analysis(digest.as_ref(), now),
        can_request_analysis: can_request_analysis(digest.as_ref(), now),
        digest,
    }))
}

#[instrument(skip(state, session), fields(user_id = %session.user_id))]
pub async fn analytics(
    State(state): State<AppState>,
    session: Session,
) -> Result<Json<AnalyticsView>, ApiError> {
    let cfg = &state.config.dashboard;
    let data = user_data(&state, &session, OffsetDateTime::now_utc());

    let (meals, profile) = tokio::try_join!(
        data.list_meals_for_months(cfg.analytics_months),
        data.get_profile()
    )?;
    let goals = NutritionGoals::from_profile(profile.as_ref());
    let analytics =
        compute_monthly_analytics(&meals, cfg.utc_offset, goals.daily_calorie_goal, cfg.locale);

    Ok(Json(AnalyticsView {
        state: ViewState::of(analytics.months.is_empty()),
        analytics,
    }))
}

#[instrument(skip(state, session), fields(user_id = %session.user_id))]
pub async fn get_me(
    State(state): State<AppState>,
    session: Session,
) -> Result<Json<MeResponse>, ApiError> {
    let profile = state.store.get_profile(session.user_id).await?;
    let display_name = profile
        .and_then(|p| p.first_name)
        .or_else(|| session.email.clone())
        .unwrap_or_else(|| state.config.dashboard.locale.default_user_name().to_string());

    Ok(Json(MeResponse {
        id: session.user_id,
        email: session.email,
        display_name,
    }))
}

#[instrument(skip(state))]
pub async fn status(State(state): State<AppState>) -> Json<StatusResponse> {
    let database = match state.store.ping().await {
        Ok(()) => "ok",
        Err(e) => {
            warn!(error = %e, "database ping failed");
            "unavailable"
        }
    };
    Json(StatusResponse {
        database,
        feedback_relay: state.mailer.is_some(),
    })
}
