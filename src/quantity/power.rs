use std::{
    fmt::{Debug, Display, Formatter},
    ops::Mul,
};

use crate::quantity::{Quantity, energy::MilliwattHours, time::Hours};

pub type Milliwatts = Quantity<1, 1, 0>;

impl Milliwatts {
    pub fn from_watts(watts: f64) -> Self {
        Self::new(watts * 1000.0)
    }

    #[must_use]
    pub fn to_watts(self) -> f64 {
        self.get() / 1000.0
    }
}

impl Mul<Hours> for Milliwatts {
    type Output = MilliwattHours;

    fn mul(self, rhs: Hours) -> Self::Output {
        Quantity(self.0 * rhs.0)
    }
}

impl Display for Milliwatts {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.get() >= 1000.0 {
            write!(f, "{:.3} W", self.to_watts())
        } else {
            write!(f, "{:.1} mW", self.0)
        }
    }
}

impl Debug for Milliwatts {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3}mW", self.0)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_watts() {
        assert_abs_diff_eq!(Milliwatts::from_watts(0.15).get(), 150.0, epsilon = 1e-9);
        assert_abs_diff_eq!(Milliwatts::new(1250.0).to_watts(), 1.25);
    }

    #[test]
    fn test_display() {
        assert_eq!(Milliwatts::new(150.0).to_string(), "150.0 mW");
        assert_eq!(Milliwatts::from_watts(2.5).to_string(), "2.500 W");
        assert_eq!(Milliwatts::INFINITY.to_string(), "inf W");
    }
}
