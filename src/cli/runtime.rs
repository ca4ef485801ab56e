use clap::Parser;

use crate::{
    cli::parse,
    core::runtime::{BatteryRuntime, CurrentCurve, CurvePoint, SAFE_VOLTAGE},
    prelude::*,
    quantity::{charge::MilliampHours, current::Milliamps, voltage::Volts},
    tables::build_runtime_table,
};

#[derive(Parser)]
pub struct RuntimeArgs {
    /// Average device current in milliamps.
    #[clap(
        long = "load-current",
        env = "LOAD_CURRENT",
        default_value = "0.162",
        value_parser = parse::quantity::<Milliamps>,
    )]
    load_current: Milliamps,

    /// Rated cell capacity in milliamp-hours.
    #[clap(
        long = "battery-capacity",
        env = "BATTERY_CAPACITY",
        default_value = "500",
        value_parser = parse::quantity::<MilliampHours>,
    )]
    battery_capacity: MilliampHours,

    #[clap(flatten)]
    curve: CurrentCurveArgs,
}

/// Average currents measured at several cell voltages, all four are needed for the curve model.
#[derive(Parser)]
struct CurrentCurveArgs {
    /// Average current at 4.2 V in milliamps.
    #[clap(long = "current-at-4v2", value_parser = parse::quantity::<Milliamps>)]
    at_4v2: Option<Milliamps>,

    /// Average current at 3.7 V in milliamps.
    #[clap(long = "current-at-3v7", value_parser = parse::quantity::<Milliamps>)]
    at_3v7: Option<Milliamps>,

    /// Average current at 3.5 V in milliamps.
    #[clap(long = "current-at-3v5", value_parser = parse::quantity::<Milliamps>)]
    at_3v5: Option<Milliamps>,

    /// Average current at 3.3 V in milliamps.
    #[clap(long = "current-at-3v3", value_parser = parse::quantity::<Milliamps>)]
    at_3v3: Option<Milliamps>,
}

impl CurrentCurveArgs {
    fn try_into_curve(self) -> Result<Option<CurrentCurve>> {
        match (self.at_4v2, self.at_3v7, self.at_3v5, self.at_3v3) {
            (None, None, None, None) => Ok(None),
            (Some(at_4v2), Some(at_3v7), Some(at_3v5), Some(at_3v3)) => {
                let points = [(4.2, at_4v2), (3.7, at_3v7), (3.5, at_3v5), (3.3, at_3v3)]
                    .into_iter()
                    .map(|(voltage, current)| CurvePoint { voltage: Volts::new(voltage), current })
                    .collect();
                CurrentCurve::try_new(points).map(Some)
            }
            _ => bail!("the current curve needs all four points: 4.2, 3.7, 3.5, and 3.3 V"),
        }
    }
}

impl RuntimeArgs {
    #[instrument(skip_all)]
    pub fn run(self) -> Result {
        ensure!(
            self.load_current.is_finite() && self.load_current >= Milliamps::ZERO,
            "invalid load current: {:?}",
            self.load_current,
        );
        ensure!(
            self.battery_capacity.is_finite() && self.battery_capacity >= MilliampHours::ZERO,
            "invalid battery capacity: {:?}",
            self.battery_capacity,
        );
        let runtime = BatteryRuntime::estimate(self.battery_capacity, self.load_current);
        let segmented = self
            .curve
            .try_into_curve()?
            .map(|curve| curve.runtime(self.battery_capacity, SAFE_VOLTAGE));
        info!(safe = ?runtime.safe, cutoff = ?runtime.cutoff, ?segmented, "estimated");
        println!("{}", build_runtime_table(&runtime, segmented));
        Ok(())
    }
}
