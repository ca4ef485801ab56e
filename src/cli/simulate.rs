use clap::Parser;

use crate::{
    cli::parse,
    core::{config::SimulationConfig, report::Report},
    prelude::*,
    quantity::{charge::MilliampHours, current::Milliamps, power::Milliwatts, time::Hours},
    tables::{
        build_battery_table,
        build_dark_streak_table,
        build_monthly_table,
        build_scenarios_table,
        build_threshold_table,
    },
};

const DISCLAIMER: &str = "\
Efficiencies cover MPPT or regulator, temperature, panel angle, dirt, and cables.
Winter in Poland is 0.2–1.0 PSH, summer 4.5–5.5, about 3 on the annual average.

The system voltage is fixed at 3.0 V with an ideal regulator,
and there are no losses other than the PV efficiency.
Not accounted for:
 - regulator quiescent current, dropout and brown-out, voltage sag on RF peaks
 - temperature: 20–40% less capacity at 0…-10 °C
 - cell aging: 10–20% capacity loss per year or cycling
Typical runtime estimation error is ±5–10%, without extreme cold or aging.";

#[derive(Parser)]
pub struct SimulateArgs {
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

    /// Rated panel power in watts.
    #[clap(
        long = "panel-power",
        env = "PANEL_POWER",
        default_value = "0.15",
        value_parser = parse::watts,
    )]
    panel_power: Milliwatts,

    /// Overall PV efficiency in the best case, percent.
    #[clap(
        long = "best-efficiency-percent",
        env = "BEST_EFFICIENCY_PERCENT",
        default_value = "20",
        value_parser = parse::percent,
    )]
    best_efficiency: f64,

    /// Overall PV efficiency in the worst case, percent.
    #[clap(
        long = "worst-efficiency-percent",
        env = "WORST_EFFICIENCY_PERCENT",
        default_value = "5",
        value_parser = parse::percent,
    )]
    worst_efficiency: f64,

    /// Month to start the simulation with a fully charged battery: 1 is January, 12 is December.
    #[clap(
        long = "start-month",
        env = "START_MONTH",
        default_value = "7",
        value_parser = clap::value_parser!(u8).range(1..=12),
    )]
    start_month: u8,

    /// Maximum number of consecutive dark days.
    #[clap(
        long = "dark-days",
        env = "DARK_DAYS",
        default_value = "14",
        value_parser = parse::count,
    )]
    dark_days: u32,

    /// Peak sun hours on a dark day.
    #[clap(
        long = "dark-solar-hours",
        env = "DARK_SOLAR_HOURS",
        default_value = "0.0",
        value_parser = parse::quantity::<Hours>,
    )]
    dark_solar_hours: Hours,

    /// Overall PV efficiency on a dark day, percent.
    #[clap(
        long = "dark-efficiency-percent",
        env = "DARK_EFFICIENCY_PERCENT",
        default_value = "5",
        value_parser = parse::percent,
    )]
    dark_efficiency: f64,

    /// Print the report as JSON instead of the tables.
    #[clap(long)]
    json: bool,
}

impl SimulateArgs {
    #[instrument(skip_all)]
    pub fn run(self) -> Result {
        let config = SimulationConfig::builder()
            .load_current(self.load_current)
            .battery_capacity(self.battery_capacity)
            .panel_power(self.panel_power)
            .best_efficiency(self.best_efficiency)
            .worst_efficiency(self.worst_efficiency)
            .start_month(self.start_month)
            .dark_days(self.dark_days)
            .dark_solar_hours(self.dark_solar_hours)
            .dark_efficiency(self.dark_efficiency)
            .build()
            .context("invalid configuration")?;
        info!(
            load_current = ?config.load_current,
            battery_capacity = ?config.battery_capacity,
            panel_power = ?config.panel_power,
            start_month = config.start_month.name(),
            "simulating…",
        );

        let report = Report::run(&config);
        if self.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
            return Ok(());
        }

        println!("{}", build_battery_table(&report.battery));
        println!("{}", build_scenarios_table(&report.scenarios().collect::<Vec<_>>()));
        println!("{}", build_threshold_table(&report.threshold, config.panel_power));
        println!("{}", build_dark_streak_table(&config.dark_streak, &report.dark_streak));
        for result in report.scenarios() {
            println!("\n{} monthly balance:", result.scenario);
            println!("{}", build_monthly_table(result));
        }
        println!("\n{DISCLAIMER}");
        Ok(())
    }
}
