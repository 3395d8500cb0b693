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
use std::path::PathBuf;
use config::{Config, ConfigError};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GlobalSettings {
    output_dir: String,
    plot_width: u32,
    plot_height: u32
}

impl GlobalSettings {
    const OUTPUT_DIR: &'static str = "output_dir";
    const PLOT_WIDTH: &'static str = "plot_width";
    const PLOT_HEIGHT: &'static str = "plot_height";
    const CONFIG_FILENAME: &'static str = "torque-curves-conf";

    const DEFAULT_PLOT_WIDTH: u32 = 800;
    const DEFAULT_PLOT_HEIGHT: u32 = 600;

    pub fn default() -> Self {
        GlobalSettings {
            output_dir: get_default_output_dir(),
            plot_width: GlobalSettings::DEFAULT_PLOT_WIDTH,
            plot_height: GlobalSettings::DEFAULT_PLOT_HEIGHT
        }
    }

    pub fn load() -> Result<Self, ConfigError> {
        return match GlobalSettings::builder_with_defaults()?
            .add_source(config::File::with_name(GlobalSettings::CONFIG_FILENAME))
            .add_source(config::Environment::with_prefix("APP"))
            .build() {
            Ok(settings) => {
                settings.try_deserialize()
            }
            Err(e) => {
                warn!("Failed to load settings. {}", e.to_string());
                let settings = GlobalSettings::builder_with_defaults()?.build()?;
                let ret: GlobalSettings = settings.try_deserialize()?;
                ret.write().unwrap_or_else(|e| { error!("Failed to write settings. {}", e.to_string())});
                Ok(ret)
            }
        }
    }

    fn builder_with_defaults() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            .set_default(GlobalSettings::OUTPUT_DIR, get_default_output_dir())?
            .set_default(GlobalSettings::PLOT_WIDTH, GlobalSettings::DEFAULT_PLOT_WIDTH as i64)?
            .set_default(GlobalSettings::PLOT_HEIGHT, GlobalSettings::DEFAULT_PLOT_HEIGHT as i64)
    }

    pub fn output_dir(&self) -> PathBuf {
        PathBuf::from(&self.output_dir)
    }

    pub fn plot_dimensions(&self) -> (u32, u32) {
        (self.plot_width, self.plot_height)
    }

    pub fn write(&self) -> std::io::Result<()> {
        fs::write(format!("{}.toml", GlobalSettings::CONFIG_FILENAME), toml::to_string(&self).map_err(|_e|{
            std::io::Error::new(std::io::ErrorKind::Other, "Failed to encode settings to toml")
        })?)
    }
}

fn get_default_output_dir() -> String {
    String::from(".")
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use crate::settings::GlobalSettings;

    #[test]
    fn defaults() {
        let settings = GlobalSettings::default();
        assert_eq!(settings.output_dir(), PathBuf::from("."));
        assert_eq!(settings.plot_dimensions(), (800, 600));
    }

    #[test]
    fn toml_round_trip_keeps_overrides() {
        let settings = GlobalSettings {
            output_dir: String::from("/tmp/plots"),
            plot_width: 1024,
            plot_height: 768
        };
        let encoded = toml::to_string(&settings).unwrap();
        assert!(encoded.contains("output_dir = \"/tmp/plots\""));
        let decoded: GlobalSettings = toml::from_str(&encoded).unwrap();
        assert_eq!(decoded, settings);
        assert_eq!(decoded.output_dir(), PathBuf::from("/tmp/plots"));
        assert_eq!(decoded.plot_dimensions(), (1024, 768));
    }

    #[test]
    fn defaults_deserialize_through_config() {
        let settings: GlobalSettings = GlobalSettings::builder_with_defaults().unwrap()
            .build().unwrap()
            .try_deserialize().unwrap();
        assert_eq!(settings, GlobalSettings::default());
    }
}
