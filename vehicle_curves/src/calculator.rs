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

use tracing::debug;
use utils::numeric::round_float_to;
use utils::units::calculate_power_hp;
use crate::drivetrain::DrivetrainConfig;
use crate::error::{Error, ErrorKind, Result};
use crate::torque_curve::TorqueCurve;

const HORSEPOWER_DECIMAL_PLACES: u32 = 1;

#[derive(Clone, Debug, PartialEq)]
pub struct EngineSeries {
    pub rpm: Vec<i32>,
    pub horsepower: Vec<f64>
}

impl EngineSeries {
    pub fn peak_horsepower(&self) -> Option<(i32, f64)> {
        let mut peak: Option<(i32, f64)> = None;
        for (rpm, hp) in self.rpm.iter().zip(self.horsepower.iter()) {
            match peak {
                Some((_, peak_hp)) if peak_hp >= *hp => {}
                _ => peak = Some((*rpm, *hp))
            }
        }
        peak
    }
}

/// Wheel torque (Nm) per gear. Indexed by gear, then by torque curve sample
pub type WheelTorqueSeries = Vec<Vec<f64>>;

/// Derives engine power and wheel torque curves from a torque curve and an
/// optional set of drivetrain ratios.
///
/// Derived series are never cached; they are rebuilt from the current
/// inputs on every call so adjustments are always reflected.
#[derive(Clone, Debug)]
pub struct CurveCalculator {
    torque_curve: TorqueCurve,
    drivetrain: Option<DrivetrainConfig>
}

impl CurveCalculator {
    pub fn new(torque_curve: TorqueCurve, drivetrain: Option<DrivetrainConfig>) -> CurveCalculator {
        CurveCalculator { torque_curve, drivetrain }
    }

    pub fn torque_curve(&self) -> &TorqueCurve {
        &self.torque_curve
    }

    pub fn drivetrain(&self) -> Option<&DrivetrainConfig> {
        self.drivetrain.as_ref()
    }

    pub fn has_drivetrain(&self) -> bool {
        self.drivetrain.is_some()
    }

    pub fn gear_count(&self) -> usize {
        match &self.drivetrain {
            Some(drivetrain) => drivetrain.gear_count(),
            None => 0
        }
    }

    pub fn compute_engine_series(&self) -> EngineSeries {
        let mut rpm = Vec::with_capacity(self.torque_curve.len());
        let mut horsepower = Vec::with_capacity(self.torque_curve.len());
        for (rpm_val, torque) in self.torque_curve.iter() {
            rpm.push(rpm_val);
            horsepower.push(round_float_to(calculate_power_hp(rpm_val as f64, torque),
                                           HORSEPOWER_DECIMAL_PLACES));
        }
        EngineSeries { rpm, horsepower }
    }

    pub fn compute_wheel_torque_series(&self) -> Result<WheelTorqueSeries> {
        let drivetrain = self.required_drivetrain()?;
        let differential = drivetrain.differential();
        let series: WheelTorqueSeries = drivetrain.gear_ratios().iter().map(|ratio| {
            self.torque_curve.values().iter().map(|torque| {
                ratio * differential * torque
            }).collect::<Vec<f64>>()
        }).collect();
        Ok(series)
    }

    /// Set the ratio of a gear. See [`DrivetrainConfig::set_gear_ratio`]
    ///
    /// - `gear_idx`: The index of the gear (indexed from 0)
    pub fn set_gear_ratio(&mut self, gear_idx: usize, value: f64) -> Result<f64> {
        debug!("Adjusting gear index {} to {}", gear_idx, value);
        self.required_drivetrain_mut()?.set_gear_ratio(gear_idx, value)
    }

    pub fn set_differential(&mut self, value: f64) -> Result<f64> {
        debug!("Adjusting differential to {}", value);
        Ok(self.required_drivetrain_mut()?.set_differential(value))
    }

    fn required_drivetrain(&self) -> Result<&DrivetrainConfig> {
        self.drivetrain.as_ref().ok_or(
            Error::new(ErrorKind::ConfigurationMissing,
                       String::from("No gear ratios or differential ratio are configured"))
        )
    }

    fn required_drivetrain_mut(&mut self) -> Result<&mut DrivetrainConfig> {
        self.drivetrain.as_mut().ok_or(
            Error::new(ErrorKind::ConfigurationMissing,
                       String::from("No gear ratios or differential ratio are configured"))
        )
    }
}
