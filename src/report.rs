/*
 * Copyright (c):
 * 2025 zephyrj
 * zephyrj@protonmail.com
 *
 * This file is part of torque-curves.
 *
 * torque-curves is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * torque-curves is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with torque-curves. If not, see <https://www.gnu.org/licenses/>.
 */

use std::fmt::Write;
use itertools::{izip, Itertools};
use vehicle_curves::{CurveCalculator, EngineSeries, WheelTorqueSeries};

pub fn engine_table(calculator: &CurveCalculator, series: &EngineSeries) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:>6} {:>12} {:>10}", "RPM", "Torque (Nm)", "HP");
    for (rpm, torque, hp) in izip!(&series.rpm, calculator.torque_curve().values(), &series.horsepower) {
        let _ = writeln!(out, "{:>6} {:>12.1} {:>10.1}", rpm, torque, hp);
    }
    if let Some((rpm, hp)) = series.peak_horsepower() {
        let _ = writeln!(out, "Peak: {:.1} hp @ {} rpm", hp, rpm);
    }
    out
}

pub fn wheel_torque_table(calculator: &CurveCalculator,
                          rpm: &[i32],
                          series: &WheelTorqueSeries) -> String {
    let mut out = String::new();
    if let Some(drivetrain) = calculator.drivetrain() {
        let ratios = drivetrain.gear_ratios().iter()
            .enumerate()
            .map(|(idx, ratio)| format!("{}: {:.2}", idx + 1, ratio))
            .join("  ");
        let _ = writeln!(out, "Diff: {:.2}  {}", drivetrain.differential(), ratios);
    }
    let header = (1..=series.len()).map(|gear| format!("{:>10}", format!("gear {}", gear))).join(" ");
    let _ = writeln!(out, "{:>6} {}", "RPM", header);
    for (sample_idx, rpm_val) in rpm.iter().enumerate() {
        let row = series.iter().map(|gear| format!("{:>10.1}", gear[sample_idx])).join(" ");
        let _ = writeln!(out, "{:>6} {}", rpm_val, row);
    }
    out
}
