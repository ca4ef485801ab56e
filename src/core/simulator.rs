//! Day-by-day state-of-charge simulation.

use bon::Builder;
use chrono::Month;
use serde::Serialize;

use crate::{
    core::{battery::BatteryState, energy::EnergyModel, profile::Rotation},
    quantity::energy::MilliwattHours,
};

#[must_use]
#[derive(Copy, Clone, Builder)]
pub struct Simulator<'a> {
    energy_model: &'a EnergyModel,
    capacity: MilliwattHours,

    /// Harvest efficiency of the simulated scenario, `0..=1`.
    efficiency: f64,
}

impl Simulator<'_> {
    /// Step a fully charged battery through every day of the profile.
    pub fn run(&self, profile: Rotation<'_>) -> Trajectory {
        let mut battery = BatteryState::full(self.capacity);
        let mut minimum = Minimum {
            residual_energy: battery.residual_energy(),
            month: profile.first().month,
        };
        let mut days = Vec::with_capacity(profile.n_days() as usize);

        for record in profile.iter() {
            let balance = self.energy_model.daily_balance(record.solar_hours, self.efficiency);
            for _ in 0..record.n_days {
                let residual_energy = battery.apply(balance);
                if residual_energy < minimum.residual_energy {
                    minimum = Minimum { residual_energy, month: record.month };
                }
                days.push(Day { month: record.month, residual_energy });
            }
        }

        Trajectory { days, minimum }
    }
}

/// End-of-day battery state.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Day {
    pub month: Month,
    pub residual_energy: MilliwattHours,
}

/// Lowest residual energy over the year and the month where it was first reached.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Minimum {
    pub residual_energy: MilliwattHours,
    pub month: Month,
}

#[must_use]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Trajectory {
    /// One entry per simulated day, in the simulation order.
    pub days: Vec<Day>,

    pub minimum: Minimum,
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;
    use crate::{
        core::{energy::SYSTEM_VOLTAGE, profile::REFERENCE_PROFILE},
        quantity::{charge::MilliampHours, current::Milliamps, power::Milliwatts},
    };

    fn simulate(panel_watts: f64, efficiency: f64, start: Month) -> Trajectory {
        let energy_model =
            EnergyModel::new(Milliamps::new(0.162), Milliwatts::from_watts(panel_watts));
        Simulator::builder()
            .energy_model(&energy_model)
            .capacity(MilliampHours::new(500.0) * SYSTEM_VOLTAGE)
            .efficiency(efficiency)
            .build()
            .run(REFERENCE_PROFILE.rotate(start))
    }

    #[test]
    fn test_one_entry_per_day() {
        assert_eq!(simulate(0.15, 0.2, Month::July).days.len(), 365);
    }

    #[test]
    fn test_state_of_charge_stays_within_bounds() {
        let capacity = MilliampHours::new(500.0) * SYSTEM_VOLTAGE;
        for panel_watts in [0.0, 0.01, 0.05, 0.15, 1.0] {
            for efficiency in [0.0, 0.05, 0.2, 1.0] {
                for start in [Month::January, Month::July, Month::November] {
                    for day in simulate(panel_watts, efficiency, start).days {
                        assert!(day.residual_energy >= MilliwattHours::ZERO);
                        assert!(day.residual_energy <= capacity);
                    }
                }
            }
        }
    }

    #[test]
    fn test_more_panel_never_hurts() {
        for start in [Month::January, Month::July, Month::October] {
            let minimums = [0.0, 0.005, 0.01, 0.02, 0.05, 0.1, 0.15, 0.5]
                .into_iter()
                .map(|panel_watts| simulate(panel_watts, 0.05, start).minimum.residual_energy)
                .collect_vec();
            for (lower, higher) in minimums.iter().tuple_windows() {
                assert!(lower <= higher, "{lower:?} > {higher:?}");
            }
        }
    }

    #[test]
    fn test_idempotence() {
        assert_eq!(simulate(0.02, 0.05, Month::March), simulate(0.02, 0.05, Month::March));
    }

    #[test]
    fn test_without_panel() {
        // 1500 mWh at 11.664 mWh/d lasts 128.6 days: July through October is 123 days.
        let trajectory = simulate(0.0, 0.2, Month::July);
        assert_eq!(trajectory.minimum.residual_energy, MilliwattHours::ZERO);
        assert_eq!(trajectory.minimum.month, Month::November);

        let first_empty = trajectory
            .days
            .iter()
            .position(|day| day.residual_energy == MilliwattHours::ZERO)
            .unwrap();
        assert_eq!(first_empty, 128);
        for (before, after) in trajectory.days[..=first_empty].iter().tuple_windows() {
            assert!(after.residual_energy < before.residual_energy);
        }
        assert!(
            trajectory.days[first_empty..]
                .iter()
                .all(|day| day.residual_energy == MilliwattHours::ZERO)
        );
    }

    #[test]
    fn test_surplus_keeps_battery_full() {
        // 1 W at 100% gives at least 500 mWh per day, well above the load:
        let trajectory = simulate(1.0, 1.0, Month::April);
        let capacity = MilliampHours::new(500.0) * SYSTEM_VOLTAGE;
        assert!(trajectory.days.iter().all(|day| day.residual_energy == capacity));
        assert_eq!(trajectory.minimum.month, Month::April);
        assert_eq!(trajectory.minimum.residual_energy, capacity);
    }

    #[test]
    fn test_default_scenario_survives_in_best_case() {
        let trajectory = simulate(0.15, 0.2, Month::July);
        assert!(trajectory.minimum.residual_energy > MilliwattHours::ZERO);
    }
}
