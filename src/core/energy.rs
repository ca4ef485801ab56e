use serde::Serialize;

use crate::quantity::{
    current::Milliamps,
    energy::MilliwattHours,
    power::Milliwatts,
    time::Hours,
    voltage::Volts,
};

/// Device supply voltage, all conversions between charge and energy go through it.
pub const SYSTEM_VOLTAGE: Volts = Volts::new(3.0);

/// Energy consumed by a constant load over one day.
pub fn daily_consumption(load_current: Milliamps, voltage: Volts) -> MilliwattHours {
    load_current * voltage * Hours::ONE_DAY
}

/// Energy delivered by the panel over one day.
///
/// `efficiency` covers everything between the panel rating and the cell: MPPT or regulator,
/// temperature, angle, dirt, and cabling.
pub fn daily_harvest(
    panel_power: Milliwatts,
    solar_hours: Hours,
    efficiency: f64,
) -> MilliwattHours {
    panel_power * solar_hours * efficiency
}

/// Daily energy figures of a specific device and panel.
#[must_use]
#[derive(Copy, Clone, Debug, Serialize)]
pub struct EnergyModel {
    pub panel_power: Milliwatts,
    pub daily_consumption: MilliwattHours,
}

impl EnergyModel {
    pub fn new(load_current: Milliamps, panel_power: Milliwatts) -> Self {
        Self { panel_power, daily_consumption: daily_consumption(load_current, SYSTEM_VOLTAGE) }
    }

    pub fn daily_harvest(&self, solar_hours: Hours, efficiency: f64) -> MilliwattHours {
        daily_harvest(self.panel_power, solar_hours, efficiency)
    }

    /// Net daily energy flow into the battery, negative when the load wins.
    pub fn daily_balance(&self, solar_hours: Hours, efficiency: f64) -> MilliwattHours {
        self.daily_harvest(solar_hours, efficiency) - self.daily_consumption
    }
}
