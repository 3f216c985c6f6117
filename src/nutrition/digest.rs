use serde::Serialize;
use time::{Date, OffsetDateTime};

/// Hours that must pass after a digest before a new analysis is offered.
pub const ANALYSIS_INTERVAL_HOURS: f64 = 24.0;

/// Latest AI-generated dietary digest.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Digest {
    pub for_date: Date,
    pub summary_md: Option<String>,
    pub recommendation: Option<String>,
}

/// Hours left until the next analysis. The digest counts from UTC midnight
/// of its `for_date`, whatever the dashboard's display offset.
pub fn hours_until_next_analysis(digest: Option<&Digest>, now: OffsetDateTime) -> f64 {
    let Some(digest) = digest else {
        return ANALYSIS_INTERVAL_HOURS;
    };
    let issued = digest.for_date.midnight().assume_utc();
    let elapsed = (now - issued).as_seconds_f64() / 3600.0;
    (ANALYSIS_INTERVAL_HOURS - elapsed).max(0.0)
}

pub fn can_request_analysis(digest: Option<&Digest>, now: OffsetDateTime) -> bool {
    digest.is_some() && hours_until_next_analysis(digest, now) <= 0.0
}
