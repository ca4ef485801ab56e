//! Per-month energy balance for reporting.

use chrono::Month;
use serde::Serialize;

use crate::{
    core::{
        battery::state_of_charge,
        energy::EnergyModel,
        profile::Rotation,
        simulator::Trajectory,
    },
    quantity::{energy::MilliwattHours, time::Hours},
};

#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct MonthlyBalance {
    pub month: Month,
    pub n_days: u16,
    pub solar_hours: Hours,
    pub daily_harvest: MilliwattHours,
    pub harvest: MilliwattHours,
    pub consumption: MilliwattHours,

    /// Harvest minus consumption over the whole month, regardless of the battery limits.
    pub balance: MilliwattHours,

    /// State of charge at the end of the last day of the month, `0..=1`.
    pub state_of_charge: f64,
}

impl MonthlyBalance {
    #[must_use]
    pub fn is_deficit(&self) -> bool {
        self.balance < MilliwattHours::ZERO
    }
}

/// Summarize every month of the profile.
///
/// The end-of-month state of charge is taken from the `trajectory`, which must have been simulated
/// on the same profile.
pub fn aggregate(
    energy_model: &EnergyModel,
    efficiency: f64,
    profile: Rotation<'_>,
    trajectory: &Trajectory,
    capacity: MilliwattHours,
) -> Vec<MonthlyBalance> {
    profile
        .iter()
        .scan(0_usize, |n_elapsed_days, record| {
            *n_elapsed_days += usize::from(record.n_days);
            let residual_energy = n_elapsed_days
                .checked_sub(1)
                .and_then(|index| trajectory.days.get(index))
                .map_or(capacity, |day| day.residual_energy);
            let n_days = f64::from(record.n_days);
            let daily_harvest = energy_model.daily_harvest(record.solar_hours, efficiency);
            let harvest = daily_harvest * n_days;
            let consumption = energy_model.daily_consumption * n_days;
            Some(MonthlyBalance {
                month: record.month,
                n_days: record.n_days,
                solar_hours: record.solar_hours,
                daily_harvest,
                harvest,
                consumption,
                balance: harvest - consumption,
                state_of_charge: state_of_charge(residual_energy, capacity),
            })
        })
        .collect()
}
