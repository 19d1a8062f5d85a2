//! Folding the period-based `/forecast` feed into one entry per day.
//!
//! The feed alternates daytime and nighttime periods. It opens with whatever
//! is left of the current day ("This Afternoon", "Tonight", ...), then
//! alternates `"<Weekday>"` / `"<Weekday> Night"`, and usually ends with a
//! lone daytime period that would start an eighth day.

use chrono::Weekday;

use crate::{DailyForecast, ForecastPeriod, WeatherError};

/// Label of the first day, whatever the feed calls its periods.
pub const TODAY: &str = "Today";

/// Hard cap on the number of days returned.
pub const MAX_DAYS: usize = 7;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodKind {
    /// A bare weekday name: the daytime half of a new day. The group is
    /// labelled with the feed's own spelling of the name; the parsed day is
    /// kept so callers can tell weekdays apart without reparsing.
    DayStart(Weekday),
    /// `"<Weekday> Night"`: the second half of the latest day.
    NightContinuation,
    /// Anything else belongs to the current, partial day.
    Other,
}

pub fn classify(name: &str) -> PeriodKind {
    let mut words = name.split_whitespace();

    // chrono also accepts "Mon"; the feed only ever spells names out.
    let Some(weekday) = words
        .next()
        .filter(|word| word.len() > 3)
        .and_then(|word| word.parse::<Weekday>().ok())
    else {
        return PeriodKind::Other;
    };

    match (words.next(), words.next()) {
        (None, _) => PeriodKind::DayStart(weekday),
        (Some("Night"), None) => PeriodKind::NightContinuation,
        _ => PeriodKind::Other,
    }
}

/// Groups `periods` into days, in feed order.
///
/// Fails only when a night period arrives before any day has been opened,
/// which a well-formed feed never does.
pub fn decode(periods: &[ForecastPeriod]) -> Result<Vec<DailyForecast>, WeatherError> {
    let mut days: Vec<DailyForecast> = Vec::with_capacity(MAX_DAYS + 1);

    for period in periods {
        let temperature = period.to_temperature();

        match classify(&period.name) {
            PeriodKind::DayStart(_) => days.push(DailyForecast::new(&period.name, temperature)),
            PeriodKind::NightContinuation => match days.last_mut() {
                Some(day) => day.temperatures.push(temperature),
                None => {
                    return Err(WeatherError::MalformedFeed(format!(
                        "'{}' precedes any daytime period",
                        period.name
                    )));
                }
            },
            PeriodKind::Other => match days.last_mut() {
                Some(day) => day.temperatures.push(temperature),
                None => days.push(DailyForecast::new(TODAY, temperature)),
            },
        }
    }

    Ok(finalize(days))
}

fn finalize(days: Vec<DailyForecast>) -> Vec<DailyForecast> {
    // Past the first day, a single reading means the feed was cut mid-day.
    let mut days: Vec<DailyForecast> = days
        .into_iter()
        .enumerate()
        .filter(|(i, day)| *i == 0 || day.temperatures.len() >= 2)
        .map(|(_, day)| day)
        .collect();

    days.truncate(MAX_DAYS);

    if let Some(first) = days.first_mut() {
        first.when = TODAY.to_string();
    }

    days
}
