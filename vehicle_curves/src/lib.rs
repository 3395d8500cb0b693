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

pub mod error;
pub mod torque_curve;
pub mod drivetrain;
pub mod calculator;
pub mod vehicle_file;
pub mod plot;

pub use calculator::{CurveCalculator, EngineSeries, WheelTorqueSeries};
pub use drivetrain::DrivetrainConfig;
pub use error::{Error, ErrorKind, Result};
pub use torque_curve::TorqueCurve;
