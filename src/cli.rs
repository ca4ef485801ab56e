mod calibrate;
mod parse;
mod runtime;
mod simulate;

use clap::{Parser, Subcommand};

pub use self::{calibrate::CalibrateArgs, runtime::RuntimeArgs, simulate::SimulateArgs};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Main command: simulate a year on battery and PV under the best and worst efficiency.
    #[clap(name = "simulate")]
    Simulate(Box<SimulateArgs>),

    /// Runtime on the battery alone.
    #[clap(name = "runtime")]
    Runtime(Box<RuntimeArgs>),

    /// Two-point calibration of the device's battery voltage reading.
    #[clap(name = "calibrate")]
    Calibrate(Box<CalibrateArgs>),
}
