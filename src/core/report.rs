use serde::Serialize;

use crate::{
    core::{
        battery::state_of_charge,
        config::SimulationConfig,
        dark_streak::DarkStreakAssessment,
        profile::REFERENCE_PROFILE,
        runtime::BatteryRuntime,
        scenario::{Scenario, ScenarioResult},
        threshold::{Threshold, min_panel_power},
    },
    prelude::*,
    quantity::energy::MilliwattHours,
};

/// Battery-only figures, independent of the panel.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct BatterySummary {
    pub capacity: MilliwattHours,
    pub daily_consumption: MilliwattHours,

    /// Daily consumption as a fraction of the capacity.
    pub daily_share: f64,

    pub runtime: BatteryRuntime,
}

/// Everything computed for a single configuration.
#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Report {
    pub config: SimulationConfig,
    pub battery: BatterySummary,
    pub best: ScenarioResult,
    pub worst: ScenarioResult,
    pub threshold: Threshold,
    pub dark_streak: DarkStreakAssessment,
}

impl Report {
    #[instrument(skip_all)]
    pub fn run(config: &SimulationConfig) -> Self {
        let energy_model = config.energy_model();
        let capacity = config.capacity();
        let battery = BatterySummary {
            capacity,
            daily_consumption: energy_model.daily_consumption,
            daily_share: state_of_charge(energy_model.daily_consumption, capacity),
            runtime: BatteryRuntime::estimate(config.battery_capacity, config.load_current),
        };
        info!(?battery.capacity, ?battery.daily_consumption, "battery");

        let average_solar_hours = REFERENCE_PROFILE.average_solar_hours();
        let threshold = Threshold {
            best: min_panel_power(
                energy_model.daily_consumption,
                average_solar_hours,
                config.best_efficiency,
            ),
            worst: min_panel_power(
                energy_model.daily_consumption,
                average_solar_hours,
                config.worst_efficiency,
            ),
        };
        let dark_streak = config.dark_streak.assess(&energy_model, capacity);
        info!(?threshold.best, ?threshold.worst, dark_streak.is_sufficient, "analyzed");

        let [best, worst] =
            Scenario::ALL.map(|scenario| ScenarioResult::evaluate(config, scenario));

        Self {
            config: *config,
            battery,
            best,
            worst,
            threshold,
            dark_streak,
        }
    }

    pub fn scenarios(&self) -> impl Iterator<Item = &ScenarioResult> {
        [&self.best, &self.worst].into_iter()
    }
}
