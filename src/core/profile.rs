//! Seasonal peak-sun-hours profile.

use chrono::Month;
use serde::Serialize;

use crate::quantity::time::Hours;

/// Solar conditions of a single calendar month.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MonthRecord {
    pub month: Month,

    /// Peak sun hours per day.
    pub solar_hours: Hours,

    pub n_days: u16,
}

impl MonthRecord {
    const fn new(month: Month, solar_hours: f64, n_days: u16) -> Self {
        Self { month, solar_hours: Hours::new(solar_hours), n_days }
    }
}

/// Twelve months starting with January.
#[must_use]
#[derive(Debug)]
pub struct Profile([MonthRecord; 12]);

/// Indicative peak sun hours for central Poland, no leap year.
pub static REFERENCE_PROFILE: Profile = Profile([
    MonthRecord::new(Month::January, 0.5, 31),
    MonthRecord::new(Month::February, 1.0, 28),
    MonthRecord::new(Month::March, 2.5, 31),
    MonthRecord::new(Month::April, 3.5, 30),
    MonthRecord::new(Month::May, 4.5, 31),
    MonthRecord::new(Month::June, 5.0, 30),
    MonthRecord::new(Month::July, 5.0, 31),
    MonthRecord::new(Month::August, 4.5, 31),
    MonthRecord::new(Month::September, 3.0, 30),
    MonthRecord::new(Month::October, 2.0, 31),
    MonthRecord::new(Month::November, 1.0, 30),
    MonthRecord::new(Month::December, 0.5, 31),
]);

impl Profile {
    pub const fn records(&self) -> &[MonthRecord; 12] {
        &self.0
    }

    #[must_use]
    pub fn n_days(&self) -> u32 {
        self.0.iter().map(|record| u32::from(record.n_days)).sum()
    }

    /// Day-weighted average of the daily solar hours.
    ///
    /// The starting month does not matter here, so this is always calculated on the calendar order.
    pub fn average_solar_hours(&self) -> Hours {
        let n_days = self.n_days();
        if n_days == 0 {
            return Hours::ZERO;
        }
        let total: Hours =
            self.0.iter().map(|record| record.solar_hours * f64::from(record.n_days)).sum();
        total / f64::from(n_days)
    }

    /// Reorder the months cyclically so that the year starts with `start`.
    pub fn rotate(&self, start: Month) -> Rotation<'_> {
        Rotation { profile: self, offset: start.number_from_month() as usize - 1 }
    }
}

/// Cyclic view into a [`Profile`] without copying the records.
#[must_use]
#[derive(Copy, Clone, Debug)]
pub struct Rotation<'a> {
    profile: &'a Profile,
    offset: usize,
}

impl<'a> Rotation<'a> {
    pub fn first(self) -> &'a MonthRecord {
        &self.profile.0[self.offset]
    }

    pub fn iter(self) -> impl ExactSizeIterator<Item = &'a MonthRecord> + Clone {
        let records = self.profile.records();
        (0..records.len()).map(move |index| &records[(self.offset + index) % records.len()])
    }

    #[must_use]
    pub fn n_days(self) -> u32 {
        self.iter().map(|record| u32::from(record.n_days)).sum()
    }
}
