//! Static check whether a full battery rides out a run of dark days.

use serde::Serialize;

use crate::{
    core::energy::EnergyModel,
    quantity::{energy::MilliwattHours, time::Hours},
};

/// A run of consecutive days with little or no sun.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct DarkStreak {
    pub n_days: u32,
    pub solar_hours: Hours,

    /// Harvest efficiency on the dark days, `0..=1`.
    pub efficiency: f64,
}

#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DarkStreakAssessment {
    pub daily_harvest: MilliwattHours,
    pub daily_deficit: MilliwattHours,
    pub required_buffer: MilliwattHours,
    pub is_sufficient: bool,
}

impl DarkStreak {
    /// Assess the streak assuming that it starts with the battery fully charged.
    pub fn assess(
        &self,
        energy_model: &EnergyModel,
        capacity: MilliwattHours,
    ) -> DarkStreakAssessment {
        let daily_harvest = energy_model.daily_harvest(self.solar_hours, self.efficiency);
        let daily_deficit =
            (energy_model.daily_consumption - daily_harvest).max(MilliwattHours::ZERO);
        let required_buffer = daily_deficit * f64::from(self.n_days);
        DarkStreakAssessment {
            daily_harvest,
            daily_deficit,
            required_buffer,
            is_sufficient: capacity >= required_buffer,
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::{
        core::energy::SYSTEM_VOLTAGE,
        quantity::{charge::MilliampHours, current::Milliamps, power::Milliwatts},
    };

    fn energy_model() -> EnergyModel {
        EnergyModel::new(Milliamps::new(0.162), Milliwatts::from_watts(0.15))
    }

    #[test]
    fn test_two_weeks_without_sun() {
        let streak = DarkStreak { n_days: 14, solar_hours: Hours::ZERO, efficiency: 0.05 };
        let assessment = streak.assess(&energy_model(), MilliampHours::new(500.0) * SYSTEM_VOLTAGE);
        assert_eq!(assessment.daily_harvest, MilliwattHours::ZERO);
        assert_abs_diff_eq!(assessment.daily_deficit.get(), 11.664, epsilon = 1e-9);
        assert_abs_diff_eq!(assessment.required_buffer.get(), 163.296, epsilon = 1e-9);
        assert!(assessment.is_sufficient);
    }

    #[test]
    fn test_small_battery_is_insufficient() {
        let streak = DarkStreak { n_days: 14, solar_hours: Hours::ZERO, efficiency: 0.05 };
        let assessment = streak.assess(&energy_model(), MilliampHours::new(50.0) * SYSTEM_VOLTAGE);
        assert!(!assessment.is_sufficient);
    }

    #[test]
    fn test_harvest_above_consumption_needs_no_buffer() {
        // 150 mW × 1 h × 10% = 15 mWh/d > 11.664 mWh/d:
        let streak = DarkStreak { n_days: 30, solar_hours: Hours::new(1.0), efficiency: 0.1 };
        let assessment = streak.assess(&energy_model(), MilliwattHours::ZERO);
        assert_eq!(assessment.daily_deficit, MilliwattHours::ZERO);
        assert_eq!(assessment.required_buffer, MilliwattHours::ZERO);
        assert!(assessment.is_sufficient);
    }

    #[test]
    fn test_zero_days() {
        let streak = DarkStreak { n_days: 0, solar_hours: Hours::ZERO, efficiency: 0.05 };
        assert!(streak.assess(&energy_model(), MilliwattHours::ZERO).is_sufficient);
    }
}
