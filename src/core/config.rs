use bon::bon;
use chrono::Month;
use serde::Serialize;

use crate::{
    core::{
        dark_streak::DarkStreak,
        energy::{EnergyModel, SYSTEM_VOLTAGE},
        scenario::Scenario,
    },
    prelude::*,
    quantity::{
        charge::MilliampHours,
        current::Milliamps,
        energy::MilliwattHours,
        power::Milliwatts,
        time::Hours,
    },
};

/// Validated simulation input.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct SimulationConfig {
    pub load_current: Milliamps,
    pub battery_capacity: MilliampHours,
    pub panel_power: Milliwatts,

    /// Harvest efficiency of the [`Scenario::Best`], `0..=1`.
    pub best_efficiency: f64,

    /// Harvest efficiency of the [`Scenario::Worst`], `0..=1`.
    pub worst_efficiency: f64,

    pub start_month: Month,
    pub dark_streak: DarkStreak,
}

#[bon]
impl SimulationConfig {
    #[builder]
    pub fn new(
        load_current: Milliamps,
        battery_capacity: MilliampHours,
        panel_power: Milliwatts,
        best_efficiency: f64,
        worst_efficiency: f64,
        start_month: u8,

        #[builder(default)] dark_days: u32,
        #[builder(default = Hours::ZERO)] dark_solar_hours: Hours,
        #[builder(default)] dark_efficiency: f64,
    ) -> Result<Self> {
        ensure_magnitude("load current", load_current.get())?;
        ensure_magnitude("battery capacity", battery_capacity.get())?;
        ensure_magnitude("panel power", panel_power.get())?;
        ensure_magnitude("dark-streak solar hours", dark_solar_hours.get())?;
        ensure_efficiency("best-case efficiency", best_efficiency)?;
        ensure_efficiency("worst-case efficiency", worst_efficiency)?;
        ensure_efficiency("dark-streak efficiency", dark_efficiency)?;
        let start_month = Month::try_from(start_month)
            .ok()
            .with_context(|| format!("start month must be within 1..=12, got {start_month}"))?;
        Ok(Self {
            load_current,
            battery_capacity,
            panel_power,
            best_efficiency,
            worst_efficiency,
            start_month,
            dark_streak: DarkStreak {
                n_days: dark_days,
                solar_hours: dark_solar_hours,
                efficiency: dark_efficiency,
            },
        })
    }
}

impl SimulationConfig {
    #[must_use]
    pub const fn efficiency(&self, scenario: Scenario) -> f64 {
        match scenario {
            Scenario::Best => self.best_efficiency,
            Scenario::Worst => self.worst_efficiency,
        }
    }

    /// Battery capacity converted to energy at the system voltage.
    pub fn capacity(&self) -> MilliwattHours {
        self.battery_capacity * SYSTEM_VOLTAGE
    }

    pub fn energy_model(&self) -> EnergyModel {
        EnergyModel::new(self.load_current, self.panel_power)
    }
}

fn ensure_magnitude(name: &str, value: f64) -> Result {
    ensure!(value.is_finite() && value >= 0.0, "{name} must be a non-negative number, got {value}");
    Ok(())
}

fn ensure_efficiency(name: &str, value: f64) -> Result {
    ensure!((0.0..=1.0).contains(&value), "{name} must be within 0..=1, got {value}");
    Ok(())
}
