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

/// Round to `decimal_places` using the exact value of `float`, with ties going
/// to the even neighbour. `2.675` is stored as 2.67499.. so becomes `2.67`;
/// `0.125` is an exact tie so becomes `0.12`.
pub fn round_float_to(float: f64, decimal_places: u32) -> f64 {
    if !float.is_finite() {
        return float;
    }
    let precision_base: u64 = 10;
    let precision_factor = precision_base.pow(decimal_places) as f64;
    let scaled = float * precision_factor;
    // scaled + residual is exactly float * precision_factor
    let residual = float.mul_add(precision_factor, -scaled);
    let floor = scaled.floor();
    let rounded = if scaled - floor == 0.5 {
        if residual > 0.0 {
            floor + 1.0
        } else if residual < 0.0 {
            floor
        } else if floor % 2.0 == 0.0 {
            floor
        } else {
            floor + 1.0
        }
    } else {
        scaled.round()
    };
    rounded / precision_factor
}

/// Restrict `val` to the closed range `[min, max]` and then round it to the
/// given number of decimal places
pub fn clamp_and_round(val: f64, min: f64, max: f64, decimal_places: u32) -> f64 {
    round_float_to(val.max(min).min(max), decimal_places)
}
