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

use std::path::PathBuf;
use clap::Parser;

/// Plot horsepower and per gear wheel torque curves from a vehicle torque curve
#[derive(Debug, Parser)]
#[command(name = "torque-curves", version, about)]
pub struct Args {
    /// JSON vehicle record containing a `torque_curve` and optionally
    /// `gear_ratios` and `differential_ratio`
    pub vehicle_file: PathBuf,

    /// Adjust a gear ratio. Gears are numbered from 1. May be repeated
    #[arg(long = "gear", value_name = "GEAR=RATIO", value_parser = parse_gear_adjustment)]
    pub gear_adjustments: Vec<GearAdjustment>,

    /// Adjust the differential ratio
    #[arg(long = "diff", value_name = "RATIO")]
    pub differential: Option<f64>,

    /// Export the charts as SVG files using this name
    #[arg(long, value_name = "NAME")]
    pub export: Option<String>,

    /// Directory to export charts to. Overrides the configured output_dir
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GearAdjustment {
    /// Index of the gear, from 0
    pub gear_idx: usize,
    pub ratio: f64
}

fn parse_gear_adjustment(arg: &str) -> Result<GearAdjustment, String> {
    let (gear, ratio) = arg.split_once('=').ok_or(
        format!("expected GEAR=RATIO, got '{}'", arg)
    )?;
    let gear_num: usize = gear.trim().parse().map_err(|_| format!("invalid gear number '{}'", gear))?;
    if gear_num == 0 {
        return Err(String::from("gears are numbered from 1"));
    }
    let ratio: f64 = ratio.trim().parse().map_err(|_| format!("invalid ratio '{}'", ratio))?;
    Ok(GearAdjustment { gear_idx: gear_num - 1, ratio })
}
