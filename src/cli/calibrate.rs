use clap::Parser;

use crate::{
    cli::parse,
    core::calibration::{Calibration, CalibrationPoint},
    prelude::*,
    quantity::voltage::Volts,
    tables::build_calibration_table,
};

/// Voltages are in millivolts, or in volts when below 20.
#[derive(Parser)]
pub struct CalibrateArgs {
    /// First reference voltage, as measured with a multimeter.
    #[clap(long = "reference-1", default_value = "4200", value_parser = parse::voltage)]
    reference_1: Volts,

    /// Raw device reading at the first reference voltage.
    #[clap(long = "raw-1", value_parser = parse::voltage)]
    raw_1: Volts,

    /// Second reference voltage, as measured with a multimeter.
    #[clap(long = "reference-2", default_value = "3600", value_parser = parse::voltage)]
    reference_2: Volts,

    /// Raw device reading at the second reference voltage.
    #[clap(long = "raw-2", value_parser = parse::voltage)]
    raw_2: Volts,
}

impl CalibrateArgs {
    #[instrument(skip_all)]
    pub fn run(self) -> Result {
        let points = [
            CalibrationPoint { raw: self.raw_1, reference: self.reference_1 },
            CalibrationPoint { raw: self.raw_2, reference: self.reference_2 },
        ];
        let calibration = Calibration::try_from_points(points[0], points[1])?;
        info!(gain = calibration.gain, offset = ?calibration.offset, "calibrated");
        println!("CAL_K   = {:.8}", calibration.gain);
        println!("CAL_BmV = {:.2}", calibration.offset.to_millivolts());
        println!("{}", build_calibration_table(&calibration, &points));
        Ok(())
    }
}
