//! Clock abstraction and age arithmetic
//!
//! Premium calculation, promo-offer eligibility, and lifecycle stamps all
//! depend on "today". Rather than reading ambient time inside the domain
//! logic, every service takes a [`Clock`], so tests can pin a date and
//! production wires in [`SystemClock`].

use chrono::{DateTime, Datelike, NaiveDate, Utc};

/// Supplies the current date and timestamp to domain services.
pub trait Clock: Send + Sync {
    /// The current calendar date.
    fn today(&self) -> NaiveDate;

    /// The current instant, used for `created_at` / `processed_at` stamps.
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Production clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// Clock pinned to a fixed instant, for deterministic tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    instant: DateTime<Utc>,
}

impl FixedClock {
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self { instant }
    }

    /// Convenience constructor pinning midnight UTC on the given day.
    ///
    /// # Panics
    ///
    /// Panics on an invalid calendar date; intended for test setup.
    pub fn ymd(year: i32, month: u32, day: u32) -> Self {
        let date = NaiveDate::from_ymd_opt(year, month, day).expect("valid date");
        Self::new(date.and_hms_opt(0, 0, 0).expect("valid time").and_utc())
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.instant.date_naive()
    }

    fn now(&self) -> DateTime<Utc> {
        self.instant
    }
}

/// Computes a person's age in whole years as of `today`.
///
/// A birth date in the future yields 0 rather than a negative age.
pub fn age_in_years(birth_date: NaiveDate, today: NaiveDate) -> u32 {
    if birth_date > today {
        return 0;
    }
    let mut age = today.year() - birth_date.year();
    if (today.month(), today.day()) < (birth_date.month(), birth_date.day()) {
        age -= 1;
    }
    age.max(0) as u32
}
