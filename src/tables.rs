use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{
    core::{
        calibration::{Calibration, CalibrationPoint},
        dark_streak::{DarkStreak, DarkStreakAssessment},
        report::BatterySummary,
        runtime::{BatteryRuntime, CUTOFF_VOLTAGE, SAFE_VOLTAGE},
        scenario::ScenarioResult,
        threshold::Threshold,
    },
    fmt::{FormattedDuration, FormattedPercentage},
    quantity::{energy::MilliwattHours, power::Milliwatts, time::Hours},
};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table
}

fn right(content: impl ToString) -> Cell {
    Cell::new(content).set_alignment(CellAlignment::Right)
}

fn balance_color(balance: MilliwattHours) -> Color {
    if balance < MilliwattHours::ZERO { Color::Red } else { Color::Green }
}

pub fn build_battery_table(battery: &BatterySummary) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Capacity", "Consumption", "Daily share", "To safe", "To cutoff"]);
    table.add_row(vec![
        right(battery.capacity),
        right(format!("{}/d", battery.daily_consumption)),
        right(FormattedPercentage(battery.daily_share)),
        Cell::new(format!("{} @ {SAFE_VOLTAGE}", FormattedDuration(battery.runtime.safe))),
        Cell::new(format!("{} @ {CUTOFF_VOLTAGE}", FormattedDuration(battery.runtime.cutoff))),
    ]);
    table
}

pub fn build_runtime_table(runtime: &BatteryRuntime, segmented: Option<Hours>) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Model", "Down to", "Usable", "Runtime"]);
    table.add_row(vec![
        Cell::new("Linear"),
        Cell::new(SAFE_VOLTAGE),
        right(runtime.capacity.safe),
        Cell::new(FormattedDuration(runtime.safe)),
    ]);
    table.add_row(vec![
        Cell::new("Linear").add_attribute(Attribute::Dim),
        Cell::new(CUTOFF_VOLTAGE),
        right(runtime.capacity.cutoff),
        Cell::new(FormattedDuration(runtime.cutoff)),
    ]);
    if let Some(segmented) = segmented {
        table.add_row(vec![
            Cell::new("Current curve"),
            Cell::new(SAFE_VOLTAGE),
            right(runtime.capacity.safe),
            Cell::new(FormattedDuration(segmented)),
        ]);
    }
    table
}

pub fn build_scenarios_table(scenarios: &[&ScenarioResult]) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        "Scenario",
        "Efficiency",
        "Harvest",
        "Coverage",
        "Balance",
        "Min SOC",
        "Month",
        "Autonomy",
        "Verdict",
    ]);
    for result in scenarios {
        table.add_row(vec![
            Cell::new(result.scenario).add_attribute(Attribute::Bold),
            right(FormattedPercentage(result.efficiency)),
            right(format!("{}/d", result.annual.average_harvest)),
            right(FormattedPercentage(result.annual.coverage)),
            right(format!("{}/d", result.annual.average_balance))
                .fg(balance_color(result.annual.average_balance)),
            right(format!(
                "{} ({})",
                result.minimum.residual_energy,
                FormattedPercentage(result.minimum_state_of_charge)
            )),
            Cell::new(result.minimum.month.name()),
            Cell::new(FormattedDuration(result.autonomy.cutoff)).add_attribute(Attribute::Dim),
            if result.is_stable() {
                Cell::new("stable all year").fg(Color::Green)
            } else {
                Cell::new("runs flat in the worst month").fg(Color::Red)
            },
        ]);
    }
    table
}

pub fn build_threshold_table(threshold: &Threshold, panel_power: Milliwatts) -> Table {
    let color = |required: Milliwatts| {
        if panel_power >= required { Color::Green } else { Color::Red }
    };
    let mut table = new_table();
    table.set_header(vec!["Panel", "Break-even BEST", "Break-even WORST"]);
    table.add_row(vec![
        right(panel_power),
        right(threshold.best).fg(color(threshold.best)),
        right(threshold.worst).fg(color(threshold.worst)),
    ]);
    table
}

pub fn build_dark_streak_table(streak: &DarkStreak, assessment: &DarkStreakAssessment) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Dark days", "Harvest", "Deficit", "Buffer", "Status"]);
    table.add_row(vec![
        right(streak.n_days),
        right(format!("{}/d", assessment.daily_harvest)),
        right(format!("{}/d", assessment.daily_deficit)),
        right(assessment.required_buffer),
        if assessment.is_sufficient {
            Cell::new("OK").fg(Color::Green)
        } else {
            Cell::new("insufficient, increase the battery or panel").fg(Color::Red)
        },
    ]);
    table
}

pub fn build_monthly_table(result: &ScenarioResult) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        "Month",
        "Sun",
        "Harvest/d",
        "Harvest",
        "Consumption",
        "Balance",
        "SOC at end",
        "",
    ]);
    for month in &result.months {
        table.add_row(vec![
            Cell::new(format!("{:.3}", month.month.name())),
            right(month.solar_hours).add_attribute(Attribute::Dim),
            right(month.daily_harvest),
            right(month.harvest),
            right(month.consumption).add_attribute(Attribute::Dim),
            right(month.balance).fg(balance_color(month.balance)),
            right(FormattedPercentage(month.state_of_charge)),
            if month.is_deficit() { Cell::new("!").fg(Color::Red) } else { Cell::new("") },
        ]);
    }
    table
}

pub fn build_calibration_table(calibration: &Calibration, points: &[CalibrationPoint]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Reference", "Raw", "Calibrated", "Error"]);
    for point in points {
        let residual = calibration.residual(*point);
        table.add_row(vec![
            right(format!("{:.1} mV", point.reference.to_millivolts())),
            right(format!("{:.1} mV", point.raw.to_millivolts())).add_attribute(Attribute::Dim),
            right(format!("{:.2} mV", calibration.apply(point.raw).to_millivolts())),
            right(format!("{:+.2} mV", residual.to_millivolts())),
        ]);
    }
    table
}
