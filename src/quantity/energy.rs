use std::{
    fmt::{Debug, Display, Formatter},
    ops::Div,
};

use crate::quantity::{Quantity, power::Milliwatts, time::Hours};

/// Milliwatt-hours, the unit of stored, harvested, and consumed energy.
pub type MilliwattHours = Quantity<1, 1, 1>;

impl Div<Hours> for MilliwattHours {
    type Output = Milliwatts;

    fn div(self, rhs: Hours) -> Self::Output {
        Quantity(self.0 / rhs.0)
    }
}

impl Div<Milliwatts> for MilliwattHours {
    type Output = Hours;

    fn div(self, rhs: Milliwatts) -> Self::Output {
        Quantity(self.0 / rhs.0)
    }
}

impl Display for MilliwattHours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} mWh", self.0)
    }
}

impl Debug for MilliwattHours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3}mWh", self.0)
    }
}
