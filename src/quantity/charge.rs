use std::{
    fmt::{Debug, Display, Formatter},
    ops::{Div, Mul},
};

use crate::quantity::{
    Quantity,
    current::Milliamps,
    energy::MilliwattHours,
    time::Hours,
    voltage::Volts,
};

/// Battery capacity as printed on the cell.
pub type MilliampHours = Quantity<1, 0, 1>;

impl Mul<Volts> for MilliampHours {
    type Output = MilliwattHours;

    fn mul(self, rhs: Volts) -> Self::Output {
        Quantity(self.0 * rhs.0)
    }
}

impl Div<Milliamps> for MilliampHours {
    type Output = Hours;

    fn div(self, rhs: Milliamps) -> Self::Output {
        Quantity(self.0 / rhs.0)
    }
}

impl Display for MilliampHours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1} mAh", self.0)
    }
}

impl Debug for MilliampHours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}mAh", self.0)
    }
}
