use serde::Serialize;

use crate::{
    core::{balance::MonthlyBalance, energy::SYSTEM_VOLTAGE, runtime::UsableCapacity},
    quantity::{charge::MilliampHours, energy::MilliwattHours, time::Hours},
};

/// Day-weighted annual averages of a scenario.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct AnnualSummary {
    pub average_harvest: MilliwattHours,

    /// Average harvest to consumption ratio, zero when nothing is consumed.
    pub coverage: f64,

    pub average_balance: MilliwattHours,
}

impl AnnualSummary {
    pub fn from_months(months: &[MonthlyBalance], daily_consumption: MilliwattHours) -> Self {
        let n_days: u32 = months.iter().map(|month| u32::from(month.n_days)).sum();
        let total_harvest: MilliwattHours = months.iter().map(|month| month.harvest).sum();
        let average_harvest =
            if n_days == 0 { MilliwattHours::ZERO } else { total_harvest / f64::from(n_days) };
        Self {
            average_harvest,
            coverage: if daily_consumption > MilliwattHours::ZERO {
                average_harvest / daily_consumption
            } else {
                0.0
            },
            average_balance: average_harvest - daily_consumption,
        }
    }
}

/// Time until a full battery is drained by a constant negative daily balance.
pub fn hours_until_empty(capacity: MilliwattHours, daily_balance: MilliwattHours) -> Hours {
    if daily_balance >= MilliwattHours::ZERO {
        Hours::INFINITY
    } else {
        Hours::from_days(capacity / -daily_balance)
    }
}

/// Autonomy on the average balance, informational since it ignores the seasons.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Autonomy {
    pub safe: Hours,
    pub cutoff: Hours,
}

impl Autonomy {
    pub fn new(capacity: MilliampHours, average_balance: MilliwattHours) -> Self {
        let capacity = UsableCapacity::from(capacity);
        Self {
            safe: hours_until_empty(capacity.safe * SYSTEM_VOLTAGE, average_balance),
            cutoff: hours_until_empty(capacity.cutoff * SYSTEM_VOLTAGE, average_balance),
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use chrono::Month;

    use super::*;
    use crate::{
        core::{
            balance::aggregate,
            energy::EnergyModel,
            profile::REFERENCE_PROFILE,
            simulator::Simulator,
        },
        quantity::{current::Milliamps, power::Milliwatts},
    };

    fn summarize(efficiency: f64) -> AnnualSummary {
        let energy_model = EnergyModel::new(Milliamps::new(0.162), Milliwatts::from_watts(0.15));
        let capacity = MilliampHours::new(500.0) * SYSTEM_VOLTAGE;
        let profile = REFERENCE_PROFILE.rotate(Month::July);
        let trajectory = Simulator::builder()
            .energy_model(&energy_model)
            .capacity(capacity)
            .efficiency(efficiency)
            .build()
            .run(profile);
        let months = aggregate(&energy_model, efficiency, profile, &trajectory, capacity);
        AnnualSummary::from_months(&months, energy_model.daily_consumption)
    }

    #[test]
    fn test_annual_average() {
        let summary = summarize(0.2);

        // 150 mW × 1007.5 h / 365 d × 20%:
        let expected_harvest = 150.0 * 1007.5 / 365.0 * 0.2;
        assert_relative_eq!(summary.average_harvest.get(), expected_harvest, max_relative = 1e-9);
        assert_relative_eq!(summary.coverage, expected_harvest / 11.664, max_relative = 1e-9);
        assert_relative_eq!(
            summary.average_balance.get(),
            expected_harvest - 11.664,
            max_relative = 1e-9
        );
    }

    #[test]
    fn test_positive_balance_lasts_forever() {
        assert!(hours_until_empty(MilliwattHours::new(1500.0), MilliwattHours::ZERO).is_infinite());
        assert!(
            hours_until_empty(MilliwattHours::new(1500.0), MilliwattHours::new(1.0)).is_infinite()
        );
    }

    #[test]
    fn test_negative_balance() {
        let hours = hours_until_empty(MilliwattHours::new(1500.0), MilliwattHours::new(-10.0));
        assert_abs_diff_eq!(hours.get(), 150.0 * 24.0, epsilon = 1e-9);
    }

    #[test]
    fn test_autonomy() {
        let autonomy = Autonomy::new(MilliampHours::new(500.0), MilliwattHours::new(-15.0));
        // 1500 mWh and 1125 mWh drained at 15 mWh/d:
        assert_abs_diff_eq!(autonomy.cutoff.to_days(), 100.0, epsilon = 1e-9);
        assert_abs_diff_eq!(autonomy.safe.to_days(), 75.0, epsilon = 1e-9);
    }
}
