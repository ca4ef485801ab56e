pub mod charge;
pub mod current;
pub mod energy;
pub mod power;
pub mod time;
pub mod voltage;

use std::ops::{Div, Mul};

use ordered_float::OrderedFloat;
use serde::{Serialize, Serializer};

/// Physical quantity with its dimension encoded as exponents of current, voltage, and time.
///
/// The base units are milliamps, volts, and hours, so that the products come out in the
/// milliwatt-hours used throughout the battery model.
#[derive(
    Clone,
    Copy,
    Eq,
    Ord,
    PartialEq,
    PartialOrd,
    derive_more::Add,
    derive_more::AddAssign,
    derive_more::From,
    derive_more::FromStr,
    derive_more::Neg,
    derive_more::Sub,
    derive_more::SubAssign,
    derive_more::Sum,
)]
#[from(i32, f64, OrderedFloat<f64>)]
#[must_use]
pub struct Quantity<const CURRENT: isize, const VOLTAGE: isize, const TIME: isize>(
    pub OrderedFloat<f64>,
);

impl<const CURRENT: isize, const VOLTAGE: isize, const TIME: isize>
    Quantity<CURRENT, VOLTAGE, TIME>
{
    pub const ZERO: Self = Self(OrderedFloat(0.0));
    pub const INFINITY: Self = Self(OrderedFloat(f64::INFINITY));

    pub const fn new(value: f64) -> Self {
        Self(OrderedFloat(value))
    }

    #[must_use]
    pub const fn get(self) -> f64 {
        self.0.0
    }

    #[must_use]
    pub const fn is_finite(self) -> bool {
        self.0.0.is_finite()
    }

    #[must_use]
    pub const fn is_infinite(self) -> bool {
        self.0.0.is_infinite()
    }

    pub const fn abs(mut self) -> Self {
        self.0 = OrderedFloat(self.0.0.abs());
        self
    }
}

impl<const CURRENT: isize, const VOLTAGE: isize, const TIME: isize> Mul<f64>
    for Quantity<CURRENT, VOLTAGE, TIME>
{
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self(self.0 * rhs)
    }
}

impl<const CURRENT: isize, const VOLTAGE: isize, const TIME: isize> Div<f64>
    for Quantity<CURRENT, VOLTAGE, TIME>
{
    type Output = Self;

    fn div(self, rhs: f64) -> Self::Output {
        Self(self.0 / rhs)
    }
}

/// Ratio of two quantities of the same dimension.
impl<const CURRENT: isize, const VOLTAGE: isize, const TIME: isize> Div<Self>
    for Quantity<CURRENT, VOLTAGE, TIME>
{
    type Output = f64;

    fn div(self, rhs: Self) -> Self::Output {
        self.0.0 / rhs.0.0
    }
}

/// Finite values are plain numbers, the others are strings like `"inf"`, distinguishable from `null`.
impl<const CURRENT: isize, const VOLTAGE: isize, const TIME: isize> Serialize
    for Quantity<CURRENT, VOLTAGE, TIME>
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_finite() {
            serializer.serialize_f64(self.get())
        } else {
            serializer.collect_str(&self.0)
        }
    }
}
