use serde::Serialize;

use crate::{
    core::{
        balance::{MonthlyBalance, aggregate},
        battery::state_of_charge,
        config::SimulationConfig,
        profile::REFERENCE_PROFILE,
        simulator::{Minimum, Simulator},
        summary::{AnnualSummary, Autonomy},
    },
    fmt::FormattedPercentage,
    prelude::*,
    quantity::energy::MilliwattHours,
};

/// Bounding harvest-efficiency scenario.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, derive_more::Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Scenario {
    #[display("BEST")]
    Best,

    #[display("WORST")]
    Worst,
}

impl Scenario {
    pub const ALL: [Self; 2] = [Self::Best, Self::Worst];
}

/// Outcome of a full-year simulation under one scenario.
#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScenarioResult {
    pub scenario: Scenario,
    pub efficiency: f64,
    pub minimum: Minimum,

    /// Lowest state of charge as a fraction of the capacity.
    pub minimum_state_of_charge: f64,

    /// One record per month, in the simulation order.
    pub months: Vec<MonthlyBalance>,

    pub annual: AnnualSummary,
    pub autonomy: Autonomy,
}

impl ScenarioResult {
    /// Simulate a full year starting with a fully charged battery.
    #[instrument(skip_all, fields(scenario = %scenario))]
    pub fn evaluate(config: &SimulationConfig, scenario: Scenario) -> Self {
        let efficiency = config.efficiency(scenario);
        let energy_model = config.energy_model();
        let capacity = config.capacity();
        let profile = REFERENCE_PROFILE.rotate(config.start_month);

        let trajectory = Simulator::builder()
            .energy_model(&energy_model)
            .capacity(capacity)
            .efficiency(efficiency)
            .build()
            .run(profile);
        let months = aggregate(&energy_model, efficiency, profile, &trajectory, capacity);
        for month in &months {
            debug!(
                month = month.month.name(),
                balance = ?month.balance,
                state_of_charge = ?FormattedPercentage(month.state_of_charge),
                "month",
            );
        }
        let annual = AnnualSummary::from_months(&months, energy_model.daily_consumption);
        let minimum_state_of_charge = state_of_charge(trajectory.minimum.residual_energy, capacity);
        info!(
            minimum = ?trajectory.minimum.residual_energy,
            month = trajectory.minimum.month.name(),
            "simulated",
        );

        Self {
            scenario,
            efficiency,
            minimum: trajectory.minimum,
            minimum_state_of_charge,
            months,
            annual,
            autonomy: Autonomy::new(config.battery_capacity, annual.average_balance),
        }
    }

    /// The battery never runs flat throughout the year.
    #[must_use]
    pub fn is_stable(&self) -> bool {
        self.minimum.residual_energy > MilliwattHours::ZERO
    }
}

#[cfg(test)]
mod tests {
    use chrono::Month;

    use super::*;
    use crate::quantity::{charge::MilliampHours, current::Milliamps, power::Milliwatts};

    fn config(panel_watts: f64) -> SimulationConfig {
        SimulationConfig::builder()
            .load_current(Milliamps::new(0.162))
            .battery_capacity(MilliampHours::new(500.0))
            .panel_power(Milliwatts::from_watts(panel_watts))
            .best_efficiency(0.2)
            .worst_efficiency(0.05)
            .start_month(7)
            .build()
            .unwrap()
    }

    #[test]
    fn test_idempotence() {
        let config = config(0.15);
        for scenario in Scenario::ALL {
            assert_eq!(
                ScenarioResult::evaluate(&config, scenario),
                ScenarioResult::evaluate(&config, scenario),
            );
        }
    }

    #[test]
    fn test_scenarios_are_independent() {
        let config = config(0.15);
        let best = ScenarioResult::evaluate(&config, Scenario::Best);
        let worst = ScenarioResult::evaluate(&config, Scenario::Worst);
        assert_eq!(best.scenario, Scenario::Best);
        assert_eq!(worst.scenario, Scenario::Worst);
        assert!(best.minimum.residual_energy >= worst.minimum.residual_energy);
        assert!(best.annual.average_harvest > worst.annual.average_harvest);
    }

    #[test]
    fn test_default_device() {
        let config = config(0.15);

        // The best case harvests at least 15 mWh/d even in December:
        let best = ScenarioResult::evaluate(&config, Scenario::Best);
        assert!(best.is_stable());
        assert!(best.months.iter().all(|month| !month.is_deficit()));
        assert!(best.autonomy.cutoff.is_infinite());

        // The worst case runs a deficit from November through February:
        let worst = ScenarioResult::evaluate(&config, Scenario::Worst);
        let deficit_months =
            worst.months.iter().filter(|month| month.is_deficit()).map(|month| month.month);
        assert!(deficit_months.eq([
            Month::November,
            Month::December,
            Month::January,
            Month::February,
        ]));
    }

    #[test]
    fn test_without_panel() {
        let config = config(0.0);
        for scenario in Scenario::ALL {
            let result = ScenarioResult::evaluate(&config, scenario);
            assert!(!result.is_stable());
            assert_eq!(result.minimum.month, Month::November);
            assert_eq!(result.months.last().unwrap().state_of_charge, 0.0);
            assert_eq!(result.annual.average_harvest, MilliwattHours::ZERO);
        }
    }
}
