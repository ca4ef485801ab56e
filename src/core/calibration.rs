//! Two-point linear calibration of a battery voltage reading.

use serde::Serialize;

use crate::{prelude::*, quantity::voltage::Volts};

/// Raw readings closer than this cannot define a slope.
const MIN_RAW_SPAN: Volts = Volts::new(1e-9);

/// Raw device reading taken while the true voltage was `reference`.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CalibrationPoint {
    pub raw: Volts,
    pub reference: Volts,
}

/// `true = gain × raw + offset`.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Calibration {
    pub gain: f64,
    pub offset: Volts,
}

impl Calibration {
    pub fn try_from_points(first: CalibrationPoint, second: CalibrationPoint) -> Result<Self> {
        for point in [first, second] {
            ensure!(
                point.raw.is_finite() && point.reference.is_finite(),
                "calibration voltages must be finite, got {point:?}",
            );
        }
        let raw_span = second.raw - first.raw;
        ensure!(
            raw_span.abs() >= MIN_RAW_SPAN,
            "raw readings are identical ({:?}), cannot compute the gain",
            first.raw,
        );
        let gain = (second.reference - first.reference) / raw_span;
        Ok(Self { gain, offset: first.reference - first.raw * gain })
    }

    pub fn apply(&self, raw: Volts) -> Volts {
        raw * self.gain + self.offset
    }

    /// Calibrated value minus the reference, ideally zero.
    pub fn residual(&self, point: CalibrationPoint) -> Volts {
        self.apply(point.raw) - point.reference
    }
}
