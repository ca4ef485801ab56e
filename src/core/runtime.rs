//! Battery-only runtime under a linear voltage-to-capacity model.

use itertools::Itertools;
use serde::Serialize;

use crate::{
    prelude::*,
    quantity::{charge::MilliampHours, current::Milliamps, time::Hours, voltage::Volts},
};

/// Fully charged 1S cell.
pub const FULL_VOLTAGE: Volts = Volts::new(4.2);

/// Conservative end of discharge, leaves headroom for the regulator and RF peaks.
pub const SAFE_VOLTAGE: Volts = Volts::new(3.3);

/// Hard end of discharge, the rated capacity is counted down to here.
pub const CUTOFF_VOLTAGE: Volts = Volts::new(3.0);

/// Share of the rated capacity available when discharging from full down to `voltage`.
#[must_use]
pub fn usable_fraction(voltage: Volts) -> f64 {
    (FULL_VOLTAGE - voltage) / (FULL_VOLTAGE - CUTOFF_VOLTAGE)
}

/// Time to drain `capacity` at a constant `current`, infinite when nothing is drawn.
pub fn runtime(capacity: MilliampHours, current: Milliamps) -> Hours {
    if current == Milliamps::ZERO { Hours::INFINITY } else { capacity / current }
}

#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct UsableCapacity {
    /// Down to [`SAFE_VOLTAGE`].
    pub safe: MilliampHours,

    /// Down to [`CUTOFF_VOLTAGE`].
    pub cutoff: MilliampHours,
}

impl From<MilliampHours> for UsableCapacity {
    fn from(capacity: MilliampHours) -> Self {
        Self {
            safe: capacity * usable_fraction(SAFE_VOLTAGE),
            cutoff: capacity * usable_fraction(CUTOFF_VOLTAGE),
        }
    }
}

/// Runtime on the battery alone.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BatteryRuntime {
    pub capacity: UsableCapacity,
    pub safe: Hours,
    pub cutoff: Hours,
}

impl BatteryRuntime {
    pub fn estimate(capacity: MilliampHours, current: Milliamps) -> Self {
        let capacity = UsableCapacity::from(capacity);
        Self {
            capacity,
            safe: runtime(capacity.safe, current),
            cutoff: runtime(capacity.cutoff, current),
        }
    }
}

/// Measured average current at a given cell voltage.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CurvePoint {
    pub voltage: Volts,
    pub current: Milliamps,
}

/// Load current as a function of the cell voltage, sorted from the full cell downwards.
#[must_use]
#[derive(Clone, Debug, Serialize)]
pub struct CurrentCurve(Vec<CurvePoint>);

impl CurrentCurve {
    pub fn try_new(points: Vec<CurvePoint>) -> Result<Self> {
        ensure!(points.len() >= 2, "at least two curve points are needed");
        for (higher, lower) in points.iter().tuple_windows() {
            ensure!(
                higher.voltage > lower.voltage,
                "curve voltages must be strictly decreasing: {:?} is followed by {:?}",
                higher.voltage,
                lower.voltage,
            );
        }
        for point in &points {
            ensure!(
                point.current.is_finite() && point.current >= Milliamps::ZERO,
                "invalid current at {:?}: {:?}",
                point.voltage,
                point.current,
            );
        }
        Ok(Self(points))
    }

    /// Runtime from the first point down to `cutoff`.
    ///
    /// Each segment gets the capacity share of its voltage span, measured against the span from the
    /// first point down to [`CUTOFF_VOLTAGE`], and drains it at the segment's mean current.
    pub fn runtime(&self, capacity: MilliampHours, cutoff: Volts) -> Hours {
        let usable_span = self.0[0].voltage - CUTOFF_VOLTAGE;
        self.0
            .iter()
            .tuple_windows()
            .take_while(|(higher, _)| higher.voltage > cutoff)
            .map(|(higher, lower)| {
                let span = higher.voltage - lower.voltage.max(cutoff);
                let segment_capacity = capacity * (span / usable_span);
                let mean_current = (higher.current + lower.current) / 2.0;
                runtime(segment_capacity, mean_current)
            })
            .sum()
    }
}
