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

use crate::error::{Error, ErrorKind, Result};

pub const START_RPM: i32 = 1000;
pub const RPM_STEP: i32 = 100;

/// Engine torque (Nm) sampled every [`RPM_STEP`] starting at [`START_RPM`]
#[derive(Clone, Debug, PartialEq)]
pub struct TorqueCurve {
    torque_nm: Vec<f64>
}

impl TorqueCurve {
    pub fn new(torque_nm: Vec<f64>) -> Result<TorqueCurve> {
        if torque_nm.is_empty() {
            return Err(Error::new(ErrorKind::EmptyTorqueCurve,
                                  String::from("A torque curve needs at least one sample")));
        }
        Ok(TorqueCurve { torque_nm })
    }

    pub fn rpm_at(idx: usize) -> i32 {
        START_RPM + (idx as i32 * RPM_STEP)
    }

    pub fn len(&self) -> usize {
        self.torque_nm.len()
    }

    pub fn values(&self) -> &[f64] {
        &self.torque_nm
    }

    pub fn max_rpm(&self) -> i32 {
        TorqueCurve::rpm_at(self.torque_nm.len() - 1)
    }

    /// Iterate over `(rpm, torque)` pairs
    pub fn iter(&self) -> impl Iterator<Item=(i32, f64)> + '_ {
        self.torque_nm.iter().enumerate().map(|(idx, torque)| (TorqueCurve::rpm_at(idx), *torque))
    }
}
