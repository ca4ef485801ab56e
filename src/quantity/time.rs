use std::fmt::{Debug, Display, Formatter};

use crate::quantity::Quantity;

pub type Hours = Quantity<0, 0, 1>;

impl Hours {
    pub const ONE_DAY: Self = Self::new(24.0);

    pub fn from_days(days: f64) -> Self {
        Self::ONE_DAY * days
    }

    #[must_use]
    pub fn to_days(self) -> f64 {
        self / Self::ONE_DAY
    }
}

impl Display for Hours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} h", self.0)
    }
}

impl Debug for Hours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}h", self.0)
    }
}
