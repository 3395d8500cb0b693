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

mod cli;
mod report;
mod settings;

use std::env;
use std::error::Error;
use std::fs;
use std::process::ExitCode;
use clap::Parser;
use tracing::{error, info, warn};
use vehicle_curves::{plot, vehicle_file, CurveCalculator, ErrorKind};

use crate::cli::Args;
use crate::settings::GlobalSettings;

fn init_logging() {
    match env::current_dir() {
        Ok(current_dir) => {
            let file_appender = tracing_appender::rolling::never(current_dir, "torque_curves.log");
            let subscriber = tracing_subscriber::fmt()
                .with_writer(file_appender)
                .with_ansi(false)
                .compact()
                .finish();
            match tracing::subscriber::set_global_default(subscriber) {
                Ok(_) => {
                    info!("Logging initialised");
                }
                Err(e) => {
                    eprintln!("Failed to init logging. {}", e.to_string());
                }
            }
        }
        Err(e) => {
            eprintln!("Failed to init logging. Couldn't determine current dir {}", e.to_string());
        }
    }
}

fn apply_adjustments(calculator: &mut CurveCalculator, args: &Args) -> vehicle_curves::Result<()> {
    for adjustment in &args.gear_adjustments {
        let ratio = calculator.set_gear_ratio(adjustment.gear_idx, adjustment.ratio)?;
        info!("Gear {} ratio adjusted to {}", adjustment.gear_idx + 1, ratio);
    }
    if let Some(diff) = args.differential {
        let ratio = calculator.set_differential(diff)?;
        info!("Differential ratio adjusted to {}", ratio);
    }
    Ok(())
}

fn run(mut calculator: CurveCalculator, args: Args) -> Result<(), Box<dyn Error>> {
    let settings = GlobalSettings::load().unwrap_or_else(|e| {
        warn!("Falling back to default settings. {}", e.to_string());
        GlobalSettings::default()
    });

    apply_adjustments(&mut calculator, &args)?;

    let engine_series = calculator.compute_engine_series();
    println!("{}", report::engine_table(&calculator, &engine_series));
    if calculator.has_drivetrain() {
        let wheel_torque = calculator.compute_wheel_torque_series()?;
        println!("{}", report::wheel_torque_table(&calculator, &engine_series.rpm, &wheel_torque));
    }

    if let Some(name) = &args.export {
        let output_dir = args.output_dir.clone().unwrap_or(settings.output_dir());
        fs::create_dir_all(&output_dir)?;
        for path in plot::export_all(&calculator, name, &output_dir, settings.plot_dimensions())? {
            println!("Successfully exported {}", path.display());
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    init_logging();
    let args = Args::parse();

    let calculator = match vehicle_file::load(&args.vehicle_file) {
        Ok(calculator) => calculator,
        Err(e) => {
            error!("Failed to load {}. {}", args.vehicle_file.display(), e.to_string());
            match e.kind() {
                ErrorKind::NotLoadable => {
                    eprintln!("{}: file not loadable. {}", args.vehicle_file.display(), e);
                }
                _ => {
                    eprintln!("{}: {}", args.vehicle_file.display(), e);
                }
            }
            return ExitCode::FAILURE;
        }
    };

    match run(calculator, args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e.to_string());
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
