//! Campaign duration and daily budget.
//!
//! Both functions are total: bad input degrades to a one-day run rather than
//! an error.

use super::campaign::CampaignSpec;
use chrono::{DateTime, NaiveDate, NaiveDateTime};

const OFFSET_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%z", "%Y-%m-%dT%H:%M:%S%.f%z"];
const NAIVE_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Calendar date as written in the string, time of day dropped.
///
/// A timestamp with an offset keeps the date in its own offset, so the
/// result is independent of the local time zone.
pub fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.date_naive());
    }

    OFFSET_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(value, fmt).ok())
        .map(|dt| dt.date_naive())
        .or_else(|| {
            NaiveDateTime::parse_from_str(value, NAIVE_DATETIME_FORMAT)
                .ok()
                .map(|dt| dt.date())
        })
        .or_else(|| NaiveDate::parse_from_str(value, DATE_FORMAT).ok())
}

/// Inclusive day count between two dates, never below 1.
pub fn duration_days(start: &str, end: &str) -> u32 {
    let (Some(start), Some(end)) = (parse_calendar_date(start), parse_calendar_date(end)) else {
        return 1;
    };

    if end < start {
        return 1;
    }

    let days = (end - start).num_days() + 1;
    u32::try_from(days).unwrap_or(u32::MAX).max(1)
}

/// `round(total / days * 100)`, rounding half away from zero.
pub fn daily_budget_minor_units(total_budget: f64, days: u32) -> u64 {
    let days = f64::from(days.max(1));
    let cents = (total_budget / days * 100.0).round();

    if cents.is_finite() && cents > 0.0 {
        cents as u64
    } else {
        0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetPlan {
    pub duration_days: u32,
    pub daily_budget: u64,
}

impl BudgetPlan {
    pub fn for_campaign(spec: &CampaignSpec) -> Self {
        let duration_days = duration_days(&spec.start_time, &spec.end_time);
        Self {
            duration_days,
            daily_budget: daily_budget_minor_units(spec.total_budget, duration_days),
        }
    }

    pub fn daily_budget_major(&self) -> f64 {
        self.daily_budget as f64 / 100.0
    }

    pub fn summary(&self) -> String {
        let unit = if self.duration_days == 1 { "day" } else { "days" };
        format!(
            "Calculated daily budget: ${:.2} over {} {unit}.",
            self.daily_budget_major(),
            self.duration_days
        )
    }
}
