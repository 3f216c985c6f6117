use std::{fmt::Display, str::FromStr};

use anyhow::{anyhow, ensure, Context};
use time::{macros::format_description, UtcOffset};

use crate::nutrition::{Locale, ANALYTICS_MONTHS, DEFAULT_WATER_TARGET_LITRES};

/// Verification settings for bearer tokens issued by the hosted auth provider.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub secret: String,
    pub issuer: Option<String>,
    pub audience: String,
}

#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub utc_offset: UtcOffset,
    pub locale: Locale,
    pub water_target_litres: f64,
    pub analytics_months: u32,
}

#[derive(Debug, Clone)]
pub struct FeedbackConfig {
    pub api_key: Option<String>,
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub auth: AuthConfig,
    pub dashboard: DashboardConfig,
    pub feedback: FeedbackConfig,
}

const FEEDBACK_MAILBOX: &str = "calori.ai@yandex.com";

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL is not set")?;
        let auth = AuthConfig {
            secret: std::env::var("SUPABASE_JWT_SECRET")
                .context("SUPABASE_JWT_SECRET is not set")?,
            issuer: std::env::var("JWT_ISSUER").ok().filter(|v| !v.is_empty()),
            audience: std::env::var("JWT_AUDIENCE").unwrap_or_else(|_| "authenticated".into()),
        };
        let dashboard = DashboardConfig {
            utc_offset: match std::env::var("DASHBOARD_UTC_OFFSET") {
                Ok(raw) => parse_utc_offset(&raw)?,
                Err(_) => UtcOffset::from_hms(3, 0, 0)?,
            },
            locale: match std::env::var("DASHBOARD_LOCALE") {
                Ok(raw) => raw.parse()?,
                Err(_) => Locale::default(),
            },
            water_target_litres: water_target(env_parse(
                "DASHBOARD_WATER_TARGET_L",
                DEFAULT_WATER_TARGET_LITRES,
            )?)?,
            analytics_months: analytics_months(env_parse(
                "DASHBOARD_ANALYTICS_MONTHS",
                ANALYTICS_MONTHS,
            )?)?,
        };
        let feedback = FeedbackConfig {
            api_key: std::env::var("RESEND_API_KEY").ok().filter(|v| !v.is_empty()),
            from: std::env::var("FEEDBACK_FROM").unwrap_or_else(|_| FEEDBACK_MAILBOX.into()),
            to: std::env::var("FEEDBACK_TO").unwrap_or_else(|_| FEEDBACK_MAILBOX.into()),
        };
        Ok(Self {
            database_url,
            auth,
            dashboard,
            feedback,
        })
    }
}

/// Reads `key`, falling back to `default` only when the variable is unset.
fn env_parse<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    match std::env::var(key) {
        Ok(raw) => parse_value(key, &raw),
        Err(_) => Ok(default),
    }
}

fn parse_value<T>(key: &str, raw: &str) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    raw.trim()
        .parse::<T>()
        .map_err(|e| anyhow!("invalid {key} `{raw}`: {e}"))
}

fn water_target(litres: f64) -> anyhow::Result<f64> {
    ensure!(
        litres.is_finite() && litres > 0.0,
        "DASHBOARD_WATER_TARGET_L must be a positive number of litres, got {litres}"
    );
    Ok(litres)
}

fn analytics_months(months: u32) -> anyhow::Result<u32> {
    ensure!(months > 0, "DASHBOARD_ANALYTICS_MONTHS must be at least 1");
    Ok(months)
}

/// Parses `+03:00`, `-05:30` or `Z`.
pub fn parse_utc_offset(raw: &str) -> anyhow::Result<UtcOffset> {
    let raw = raw.trim();
    if raw.eq_ignore_ascii_case("z") || raw.eq_ignore_ascii_case("utc") {
        return Ok(UtcOffset::UTC);
    }
    UtcOffset::parse(
        raw,
        format_description!("[offset_hour sign:mandatory]:[offset_minute]"),
    )
    .with_context(|| format!("invalid UTC offset `{raw}`"))
}

#[cfg(test)]
mod tests {
    use time::macros::offset;

    use super::*;

    #[test]
    fn parses_offsets() {
        assert_eq!(parse_utc_offset("+03:00").unwrap(), offset!(+3));
        assert_eq!(parse_utc_offset("-05:30").unwrap(), offset!(-5:30));
        assert_eq!(parse_utc_offset("Z").unwrap(), UtcOffset::UTC);
        assert!(parse_utc_offset("3").is_err());
    }

    #[test]
    fn unset_variable_uses_default() {
        assert_eq!(env_parse("CALORIDASH_TEST_SURELY_UNSET", 6_u32).unwrap(), 6);
    }

    #[test]
    fn malformed_numbers_are_rejected() {
        let err = parse_value::<f64>("DASHBOARD_WATER_TARGET_L", "three").unwrap_err();
        assert!(err.to_string().contains("DASHBOARD_WATER_TARGET_L"));
        assert!(parse_value::<u32>("DASHBOARD_ANALYTICS_MONTHS", "-1").is_err());
        assert_eq!(parse_value::<f64>("DASHBOARD_WATER_TARGET_L", " 2.5 ").unwrap(), 2.5);
    }

    #[test]
    fn water_target_must_be_positive() {
        assert!(water_target(0.0).is_err());
        assert!(water_target(-1.0).is_err());
        assert!(water_target(f64::NAN).is_err());
        assert_eq!(water_target(2.5).unwrap(), 2.5);
    }

    #[test]
    fn analytics_window_needs_a_month() {
        assert!(analytics_months(0).is_err());
        assert_eq!(analytics_months(12).unwrap(), 12);
    }
}
