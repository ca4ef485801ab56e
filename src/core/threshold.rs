use serde::Serialize;

use crate::quantity::{energy::MilliwattHours, power::Milliwatts, time::Hours};

/// Minimal panel power at which the annual average harvest covers the consumption.
///
/// Infinite when nothing can be harvested: zero sun or zero efficiency.
pub fn min_panel_power(
    daily_consumption: MilliwattHours,
    average_solar_hours: Hours,
    efficiency: f64,
) -> Milliwatts {
    let effective_hours = average_solar_hours * efficiency;
    if effective_hours == Hours::ZERO {
        Milliwatts::INFINITY
    } else {
        daily_consumption / effective_hours
    }
}

#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Threshold {
    pub best: Milliwatts,
    pub worst: Milliwatts,
}
