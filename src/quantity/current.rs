use std::{
    fmt::{Debug, Display, Formatter},
    ops::Mul,
};

use crate::quantity::{
    Quantity,
    charge::MilliampHours,
    power::Milliwatts,
    time::Hours,
    voltage::Volts,
};

/// Average load current.
pub type Milliamps = Quantity<1, 0, 0>;

impl Mul<Volts> for Milliamps {
    type Output = Milliwatts;

    fn mul(self, rhs: Volts) -> Self::Output {
        Quantity(self.0 * rhs.0)
    }
}

impl Mul<Hours> for Milliamps {
    type Output = MilliampHours;

    fn mul(self, rhs: Hours) -> Self::Output {
        Quantity(self.0 * rhs.0)
    }
}

impl Display for Milliamps {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3} mA", self.0)
    }
}

impl Debug for Milliamps {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3}mA", self.0)
    }
}
