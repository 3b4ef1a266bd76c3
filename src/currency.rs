//! Computation of FAA recency of experience ("currency") from a pilot's flight history.
//!
//! All evaluations expect flights ordered most-recent-first, as returned by
//! [`crate::Logbook::flights`]. The scan cannot detect a different order: such an input
//! silently yields an incorrect expiration.
use serde::Serialize;
use time::{Duration, OffsetDateTime};

use crate::calendar::{add_months, last_day_of_month};
use crate::FlightRecord;

/// Landings required within [`LANDING_PERIOD`] to carry passengers
pub const REQUIRED_LANDINGS: u32 = 3;
/// Period after the oldest qualifying landing during which landing currency holds
pub const LANDING_PERIOD: Duration = Duration::days(90);
/// Approaches required within [`INSTRUMENT_MONTHS`] to fly under instrument flight rules
pub const REQUIRED_APPROACHES: u32 = 6;
/// Calendar months after the oldest qualifying approach during which instrument currency holds
pub const INSTRUMENT_MONTHS: u32 = 6;

/// The currency of a single requirement
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CurrencyResult {
    /// Human-readable name of the requirement (e.g. `ASEL night landings`)
    pub label: String,
    /// When currency lapses. Equals the evaluation instant when the pilot is not current.
    #[serde(with = "time::serde::rfc3339")]
    pub expiration: OffsetDateTime,
}

/// Presentation state of a [`CurrencyResult`] at a given instant
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Current,
    /// Current, but lapses within the warning window
    ExpiringSoon,
    Expired,
}

impl CurrencyResult {
    pub fn is_current(&self, now: OffsetDateTime) -> bool {
        now < self.expiration
    }

    /// The last calendar day on which the requirement is current, in the offset of
    /// the expiration.
    pub fn current_until(&self) -> time::Date {
        self.expiration.saturating_sub(Duration::NANOSECOND).date()
    }

    /// The [`Status`] at `now`, where `warning` is how long before expiration a
    /// result is reported as [`Status::ExpiringSoon`].
    pub fn status(&self, now: OffsetDateTime, warning: Duration) -> Status {
        if !self.is_current(now) {
            Status::Expired
        } else if self.expiration - now <= warning {
            Status::ExpiringSoon
        } else {
            Status::Current
        }
    }
}

/// Walks `flights` accumulating `count` until it reaches `threshold`, returning the
/// date of the flight that completed it.
fn oldest_qualifying<'a>(
    flights: impl IntoIterator<Item = &'a FlightRecord>,
    threshold: u32,
    count: impl Fn(&FlightRecord) -> u32,
) -> Option<OffsetDateTime> {
    let mut total = 0u32;
    for flight in flights {
        total = total.saturating_add(count(flight));
        if total >= threshold {
            return Some(flight.date);
        }
    }
    None
}

/// Returns the landing currency over `flights` (most recent first).
///
/// Night currency counts night landings only; day currency counts day and night landings.
/// Currency holds for [`LANDING_PERIOD`] after the flight whose landings completed
/// [`REQUIRED_LANDINGS`]. Without enough landings the result expires at `now`.
pub fn landing_currency<'a>(
    label: impl Into<String>,
    flights: impl IntoIterator<Item = &'a FlightRecord>,
    require_night: bool,
    now: OffsetDateTime,
) -> CurrencyResult {
    let label = label.into();
    let oldest_landing = if require_night {
        oldest_qualifying(flights, REQUIRED_LANDINGS, |f| f.night_landings)
    } else {
        oldest_qualifying(flights, REQUIRED_LANDINGS, FlightRecord::landings)
    };
    log::debug!("{label}: oldest qualifying landing {oldest_landing:?}");

    CurrencyResult {
        label,
        expiration: oldest_landing
            .map(|date| date.saturating_add(LANDING_PERIOD))
            .unwrap_or(now),
    }
}

/// Returns the instrument currency over `flights` (most recent first).
///
/// Currency is established by [`REQUIRED_APPROACHES`] and expires as computed by
/// [`instrument_expiration`]. Without enough approaches the result expires at `now`.
pub fn instrument_currency<'a>(
    label: impl Into<String>,
    flights: impl IntoIterator<Item = &'a FlightRecord>,
    now: OffsetDateTime,
) -> CurrencyResult {
    let label = label.into();
    let oldest_approach =
        oldest_qualifying(flights, REQUIRED_APPROACHES, |f| f.instrument_approaches);
    log::debug!("{label}: oldest qualifying approach {oldest_approach:?}");

    CurrencyResult {
        label,
        expiration: oldest_approach.map(instrument_expiration).unwrap_or(now),
    }
}

/// Returns the expiration of instrument currency established on `oldest`. Currency holds
/// through the last day of the [`INSTRUMENT_MONTHS`]th calendar month after it
/// (e.g. 2024-01-15 -> through 2024-07-31), so it expires at midnight starting the
/// following month, in `oldest`'s offset.
pub fn instrument_expiration(oldest: OffsetDateTime) -> OffsetDateTime {
    let end = add_months(oldest.date(), INSTRUMENT_MONTHS)
        .and_then(|date| last_day_of_month(date).next_day())
        .unwrap_or(time::Date::MAX);
    end.midnight().assume_offset(oldest.offset())
}
