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

use std::fs;
use std::path::Path;
use serde::Deserialize;
use serde_json::Value;
use tracing::{info, warn};
use utils::filesystem::has_extension;
use crate::calculator::CurveCalculator;
use crate::drivetrain::DrivetrainConfig;
use crate::error::{Error, ErrorKind, Result};
use crate::torque_curve::TorqueCurve;

pub const FILE_EXTENSION: &str = "json";
pub const TORQUE_CURVE_KEY: &str = "torque_curve";

/// The subset of a vehicle record that the curves are built from. Any other
/// keys present in the file are ignored
#[derive(Debug, Deserialize)]
pub struct VehicleRecord {
    pub torque_curve: Vec<f64>,
    #[serde(default)]
    pub gear_ratios: Option<Vec<f64>>,
    #[serde(default)]
    pub differential_ratio: Option<f64>
}

impl VehicleRecord {
    pub fn from_json_str(data: &str) -> Result<VehicleRecord> {
        let json: Value = serde_json::from_str(data).map_err(|e| {
            Error::new(ErrorKind::NotLoadable, format!("Invalid JSON. {}", e))
        })?;
        if !contains_torque_curve(&json) {
            return Err(Error::new(ErrorKind::NotLoadable,
                                  format!("No '{}' key present", TORQUE_CURVE_KEY)));
        }
        Ok(serde_json::from_value(json)?)
    }

    /// A drivetrain is only available when the record holds a non-empty list of
    /// gear ratios and a non-zero differential ratio
    pub fn drivetrain(&self) -> Option<DrivetrainConfig> {
        match (&self.gear_ratios, self.differential_ratio) {
            (Some(gears), Some(diff)) if !gears.is_empty() && diff != 0.0 => {
                Some(DrivetrainConfig::new(gears.clone(), diff))
            }
            _ => None
        }
    }

    pub fn into_calculator(self) -> Result<CurveCalculator> {
        let drivetrain = self.drivetrain();
        let torque_curve = TorqueCurve::new(self.torque_curve)?;
        Ok(CurveCalculator::new(torque_curve, drivetrain))
    }
}

fn contains_torque_curve(json: &Value) -> bool {
    match json.as_object() {
        Some(map) => map.contains_key(TORQUE_CURVE_KEY),
        None => false
    }
}

/// Check whether `path` points at something that [`load`] will accept: a `.json`
/// file containing a torque curve
pub fn can_load(path: &Path) -> bool {
    if !has_extension(path, FILE_EXTENSION) {
        return false;
    }
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) => {
            warn!("Couldn't read {}. {}", path.display(), e.to_string());
            return false;
        }
    };
    match serde_json::from_str::<Value>(&data) {
        Ok(json) => contains_torque_curve(&json),
        Err(_) => false
    }
}

pub fn parse(data: &str) -> Result<CurveCalculator> {
    VehicleRecord::from_json_str(data)?.into_calculator()
}

pub fn load(path: &Path) -> Result<CurveCalculator> {
    if !has_extension(path, FILE_EXTENSION) {
        return Err(Error::new(ErrorKind::NotLoadable,
                              format!("{} is not a .{} file", path.display(), FILE_EXTENSION)));
    }
    let data = fs::read_to_string(path)?;
    let calculator = parse(&data)?;
    info!("Loaded {} torque samples from {}", calculator.torque_curve().len(), path.display());
    match calculator.drivetrain() {
        Some(drivetrain) => {
            info!("Found {} gear ratios and a differential ratio of {}",
                  drivetrain.gear_count(), drivetrain.differential());
        }
        None => {
            info!("{} has no drivetrain data. Only the engine curves are available",
                  path.display());
        }
    }
    Ok(calculator)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::{Path, PathBuf};
    use crate::error::ErrorKind;
    use crate::vehicle_file::{can_load, load, parse, VehicleRecord};

    const FULL_RECORD: &'static str = r#"
{
    "name": "Test Car",
    "torque_curve": [180, 200, 220, 235, 240, 238, 230],
    "gear_ratios": [3.82, 2.20, 1.52, 1.22, 1.02],
    "differential_ratio": 4.1
}
"#;

    const ENGINE_ONLY_RECORD: &'static str = r#"{ "torque_curve": [100, 200] }"#;

    fn test_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("torque-curves-vehicle-file-{}", name));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn write_file(dir: &Path, name: &str, data: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, data).unwrap();
        path
    }

    #[test]
    fn parse_full_record() {
        let calc = parse(FULL_RECORD).unwrap();
        assert_eq!(calc.torque_curve().len(), 7);
        let drivetrain = calc.drivetrain().unwrap();
        assert_eq!(drivetrain.gear_ratios(), &[3.82, 2.20, 1.52, 1.22, 1.02]);
        assert_eq!(drivetrain.differential(), 4.1);
    }

    #[test]
    fn parse_engine_only_record() {
        let calc = parse(ENGINE_ONLY_RECORD).unwrap();
        assert!(!calc.has_drivetrain());
        assert_eq!(calc.torque_curve().values(), &[100.0, 200.0]);
    }

    #[test]
    fn drivetrain_needs_both_keys() {
        let record = VehicleRecord::from_json_str(
            r#"{ "torque_curve": [100], "gear_ratios": [3.0, 2.0] }"#).unwrap();
        assert!(record.drivetrain().is_none());
        let record = VehicleRecord::from_json_str(
            r#"{ "torque_curve": [100], "differential_ratio": 3.7 }"#).unwrap();
        assert!(record.drivetrain().is_none());
    }

    #[test]
    fn empty_or_zero_drivetrain_values_are_ignored() {
        let record = VehicleRecord::from_json_str(
            r#"{ "torque_curve": [100], "gear_ratios": [], "differential_ratio": 3.7 }"#).unwrap();
        assert!(record.drivetrain().is_none());
        let record = VehicleRecord::from_json_str(
            r#"{ "torque_curve": [100], "gear_ratios": [3.0], "differential_ratio": 0 }"#).unwrap();
        assert!(record.drivetrain().is_none());
    }

    #[test]
    fn out_of_range_file_values_are_not_clamped() {
        let calc = parse(
            r#"{ "torque_curve": [100], "gear_ratios": [12.345], "differential_ratio": 0.05 }"#).unwrap();
        let drivetrain = calc.drivetrain().unwrap();
        assert_eq!(drivetrain.gear_ratios(), &[12.345]);
        assert_eq!(drivetrain.differential(), 0.05);
    }

    #[test]
    fn missing_torque_curve_not_loadable() {
        let err = parse(r#"{ "gear_ratios": [3.0], "differential_ratio": 3.7 }"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotLoadable);
        let err = parse("[1, 2, 3]").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotLoadable);
        let err = parse("not json").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotLoadable);
    }

    #[test]
    fn badly_typed_values() {
        let err = parse(r#"{ "torque_curve": ["a", "b"] }"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::JsonDecodeError);
        let err = parse(r#"{ "torque_curve": [] }"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EmptyTorqueCurve);
    }

    #[test]
    fn can_load_checks() {
        let dir = test_dir("can-load");
        let good = write_file(&dir, "good.json", FULL_RECORD);
        assert!(can_load(&good));
        let wrong_ext = write_file(&dir, "good.txt", FULL_RECORD);
        assert!(!can_load(&wrong_ext));
        let no_curve = write_file(&dir, "no_curve.json", r#"{ "gear_ratios": [1.0] }"#);
        assert!(!can_load(&no_curve));
        let garbage = write_file(&dir, "garbage.json", "{{{");
        assert!(!can_load(&garbage));
        assert!(!can_load(&dir.join("does-not-exist.json")));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn load_from_file() {
        let dir = test_dir("load");
        let path = write_file(&dir, "load.json", FULL_RECORD);
        let calc = load(&path).unwrap();
        assert_eq!(calc.gear_count(), 5);
        let wrong_ext = write_file(&dir, "load.txt", FULL_RECORD);
        assert_eq!(load(&wrong_ext).unwrap_err().kind(), ErrorKind::NotLoadable);
        let no_curve = write_file(&dir, "no_curve.json", r#"{ "differential_ratio": 3.7 }"#);
        assert_eq!(load(&no_curve).unwrap_err().kind(), ErrorKind::NotLoadable);
        let _ = fs::remove_dir_all(&dir);
    }
}
