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

pub const NM_PER_LB_FT: f64 = 1.356;

/// The rpm at which torque in lb-ft and horsepower are numerically equal
pub const HP_CROSSOVER_RPM: f64 = 5252.0;

pub fn nm_to_lb_ft(torque_nm: f64) -> f64 {
    torque_nm / NM_PER_LB_FT
}

/// Mechanical horsepower produced by `torque_nm` at `rpm`
pub fn calculate_power_hp(rpm: f64, torque_nm: f64) -> f64 {
    nm_to_lb_ft(torque_nm) * rpm / HP_CROSSOVER_RPM
}

#[cfg(test)]
mod tests {
    use crate::units::{calculate_power_hp, nm_to_lb_ft};

    #[test]
    fn torque_conversion() {
        assert!((nm_to_lb_ft(1.356) - 1.0).abs() < 1e-12);
        assert_eq!(nm_to_lb_ft(0.0), 0.0);
    }

    #[test]
    fn power_at_crossover_matches_torque() {
        let torque_lb_ft = nm_to_lb_ft(400.0);
        assert!((calculate_power_hp(5252.0, 400.0) - torque_lb_ft).abs() < 1e-9);
    }
}
