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
use utils::numeric::clamp_and_round;
use crate::error::{Error, ErrorKind, Result};

pub const MIN_RATIO: f64 = 0.10;
pub const MAX_RATIO: f64 = 10.0;
pub const RATIO_DECIMAL_PLACES: u32 = 2;

/// Snap a ratio onto the adjustable range and granularity
pub fn constrain_ratio(value: f64) -> f64 {
    clamp_and_round(value, MIN_RATIO, MAX_RATIO, RATIO_DECIMAL_PLACES)
}

#[derive(Clone, Debug, PartialEq)]
pub struct DrivetrainConfig {
    gear_ratios: Vec<f64>,
    differential: f64
}

impl DrivetrainConfig {
    /// Values are stored as provided; only adjustments made through the
    /// setters are constrained.
    pub fn new(gear_ratios: Vec<f64>, differential: f64) -> DrivetrainConfig {
        DrivetrainConfig { gear_ratios, differential }
    }

    pub fn gear_ratios(&self) -> &[f64] {
        &self.gear_ratios
    }

    pub fn gear_count(&self) -> usize {
        self.gear_ratios.len()
    }

    pub fn differential(&self) -> f64 {
        self.differential
    }

    /// Update the ratio of a single gear
    ///
    /// - `gear_idx`: The index of the gear (indexed from 0)
    /// - `value`: The new ratio. Clamped to [`MIN_RATIO`]..=[`MAX_RATIO`] and
    ///   rounded to [`RATIO_DECIMAL_PLACES`]
    pub fn set_gear_ratio(&mut self, gear_idx: usize, value: f64) -> Result<f64> {
        let gear_count = self.gear_ratios.len();
        match self.gear_ratios.get_mut(gear_idx) {
            Some(ratio) => {
                *ratio = constrain_ratio(value);
                debug!("Gear {} ratio set to {}", gear_idx + 1, *ratio);
                Ok(*ratio)
            }
            None => {
                Err(Error::new(ErrorKind::IndexOutOfRange,
                               format!("Gear index {} is invalid for a {} gear configuration",
                                       gear_idx, gear_count)))
            }
        }
    }

    pub fn set_differential(&mut self, value: f64) -> f64 {
        self.differential = constrain_ratio(value);
        debug!("Differential ratio set to {}", self.differential);
        self.differential
    }
}
