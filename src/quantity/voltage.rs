use std::fmt::{Debug, Display, Formatter};

use crate::quantity::Quantity;

pub type Volts = Quantity<0, 1, 0>;

impl Volts {
    pub fn from_millivolts(millivolts: f64) -> Self {
        Self::new(millivolts / 1000.0)
    }

    #[must_use]
    pub const fn to_millivolts(self) -> f64 {
        self.0.0 * 1000.0
    }
}

impl Display for Volts {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} V", self.0)
    }
}

impl Debug for Volts {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4}V", self.0)
    }
}
