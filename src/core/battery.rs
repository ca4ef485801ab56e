use serde::Serialize;

use crate::quantity::energy::MilliwattHours;

/// Stored energy of the cell, always kept within `0..=capacity`.
#[must_use]
#[derive(Copy, Clone, Debug, Serialize)]
pub struct BatteryState {
    capacity: MilliwattHours,
    residual_energy: MilliwattHours,
}

impl BatteryState {
    pub fn full(capacity: MilliwattHours) -> Self {
        Self { capacity, residual_energy: capacity }
    }

    pub const fn residual_energy(&self) -> MilliwattHours {
        self.residual_energy
    }

    /// Apply the net energy flow, dropping the surplus above the capacity and any debt below zero.
    pub fn apply(&mut self, net_energy: MilliwattHours) -> MilliwattHours {
        self.residual_energy =
            (self.residual_energy + net_energy).clamp(MilliwattHours::ZERO, self.capacity);
        self.residual_energy
    }
}

/// State of charge in `0.0..=1.0`, zero for a zero-capacity battery.
#[must_use]
pub fn state_of_charge(residual_energy: MilliwattHours, capacity: MilliwattHours) -> f64 {
    if capacity > MilliwattHours::ZERO { residual_energy / capacity } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_discharge() {
        let mut battery = BatteryState::full(MilliwattHours::new(1500.0));
        assert_eq!(battery.apply(MilliwattHours::new(-500.0)), MilliwattHours::new(1000.0));
        assert_abs_diff_eq!(
            state_of_charge(battery.residual_energy(), MilliwattHours::new(1500.0)),
            2.0 / 3.0
        );
    }

    #[test]
    fn test_overflow_is_lost() {
        let mut battery = BatteryState::full(MilliwattHours::new(1500.0));
        battery.apply(MilliwattHours::new(-100.0));
        assert_eq!(battery.apply(MilliwattHours::new(300.0)), MilliwattHours::new(1500.0));

        // The surplus is not banked:
        assert_eq!(battery.apply(MilliwattHours::new(-100.0)), MilliwattHours::new(1400.0));
    }

    #[test]
    fn test_deficit_is_not_debt() {
        let mut battery = BatteryState::full(MilliwattHours::new(100.0));
        assert_eq!(battery.apply(MilliwattHours::new(-300.0)), MilliwattHours::ZERO);
        assert_eq!(battery.apply(MilliwattHours::new(50.0)), MilliwattHours::new(50.0));
    }

    #[test]
    fn test_zero_capacity() {
        let mut battery = BatteryState::full(MilliwattHours::ZERO);
        battery.apply(MilliwattHours::new(10.0));
        assert_eq!(battery.residual_energy(), MilliwattHours::ZERO);
        assert_abs_diff_eq!(state_of_charge(battery.residual_energy(), MilliwattHours::ZERO), 0.0);
    }
}
