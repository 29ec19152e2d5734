use std::fs;
use std::path::{Path, PathBuf};
use config::{Config, ConfigError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WheelDefinition {
    pub diameter: i32,
    pub rubber_type: String
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CarDefinition {
    pub name: String,
    pub horsepower: i32,
    pub fuel_type: String,
    pub body_style: String,
    pub doors: i32,
    #[serde(default)]
    pub wheels: Vec<WheelDefinition>
}

impl CarDefinition {
    fn with_wheels(name: &str,
                   horsepower: i32,
                   fuel_type: &str,
                   body_style: &str,
                   doors: i32,
                   wheels: &[(i32, &str)]) -> CarDefinition {
        CarDefinition {
            name: name.to_string(),
            horsepower,
            fuel_type: fuel_type.to_string(),
            body_style: body_style.to_string(),
            doors,
            wheels: wheels.iter().map(|(diameter, rubber_type)| WheelDefinition {
                diameter: *diameter,
                rubber_type: rubber_type.to_string()
            }).collect()
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GlobalSettings {
    #[serde(default = "default_log_filename")]
    log_filename: String,
    #[serde(default = "default_showroom")]
    showroom: Vec<CarDefinition>
}

fn default_log_filename() -> String {
    GlobalSettings::DEFAULT_LOG_FILENAME.to_string()
}

fn default_showroom() -> Vec<CarDefinition> {
    vec![
        CarDefinition::with_wheels("Авто 1", 120, "PETROL", "сидан", 5,
                                   &[(18, "летняя"), (18, "летняя"), (18, "летняя"), (18, "летняя")]),
        CarDefinition::with_wheels("Авто 2", 90, "PETROL", "хэтчбек", 3,
                                   &[(15, "летняя"), (15, "летняя"), (15, "всесезонная"), (15, "всесезонная")]),
        CarDefinition::with_wheels("Авто 3", 150, "DIESEL", "внедорожник", 5,
                                   &[(20, "повышенной проходимости"), (20, "повышенной проходимости"),
                                     (20, "повышенной проходимости"), (20, "повышенной проходимости")]),
    ]
}

impl GlobalSettings {
    const LOG_FILENAME: &'static str = "log_filename";
    const DEFAULT_LOG_FILENAME: &'static str = "car_garage.log";
    const CONFIG_FILENAME: &'static str = "car-garage-conf";

    pub fn default() -> Self {
        GlobalSettings {
            log_filename: default_log_filename(),
            showroom: default_showroom()
        }
    }

    pub fn config_path() -> PathBuf {
        PathBuf::from(format!("{}.toml", GlobalSettings::CONFIG_FILENAME))
    }

    pub fn load() -> Result<Self, ConfigError> {
        GlobalSettings::load_from(&GlobalSettings::config_path())
    }

    /// Loads settings from `config_path` layered over the defaults and `APP_` environment
    /// variables. A missing file is not an error, a malformed one is and the file is left as is.
    pub fn load_from(config_path: &Path) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default(GlobalSettings::LOG_FILENAME, GlobalSettings::DEFAULT_LOG_FILENAME)?
            .add_source(config::File::from(config_path).required(false))
            .add_source(config::Environment::with_prefix("APP"))
            .build()?
            .try_deserialize()
    }

    pub fn log_filename(&self) -> &str {
        &self.log_filename
    }

    pub fn showroom(&self) -> &[CarDefinition] {
        &self.showroom
    }

    pub fn write(&self) -> std::io::Result<()> {
        self.write_to(&GlobalSettings::config_path())
    }

    pub fn write_to(&self, config_path: &Path) -> std::io::Result<()> {
        fs::write(config_path, toml::to_string(&self).map_err(|_e|{
            std::io::Error::new(std::io::ErrorKind::Other, "Failed to encode settings to toml")
        })?)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use crate::settings::GlobalSettings;

    fn scratch_config_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("car-garage-{}-{}.toml", std::process::id(), name))
    }

    #[test]
    fn default_showroom_has_three_cars() {
        let settings = GlobalSettings::default();
        assert_eq!(settings.log_filename(), "car_garage.log");
        assert_eq!(settings.showroom().len(), 3);
        assert!(settings.showroom().iter().all(|car| car.wheels.len() == 4));
        assert_eq!(settings.showroom()[2].body_style, "внедорожник");
    }

    #[test]
    fn parse_settings_file() -> Result<(), String> {
        let data = r#"
log_filename = "showroom.log"

[[showroom]]
name = "Электрокар"
horsepower = 110
fuel_type = "Электричество"
body_style = "лифтбек"
doors = 5
wheels = [
    { diameter = 17, rubber_type = "летняя" },
    { diameter = 17, rubber_type = "летняя" },
]
"#;
        let settings: GlobalSettings = toml::from_str(data).map_err(|e| e.to_string())?;
        assert_eq!(settings.log_filename(), "showroom.log");
        assert_eq!(settings.showroom().len(), 1);
        assert_eq!(settings.showroom()[0].fuel_type, "Электричество");
        assert_eq!(settings.showroom()[0].wheels[1].diameter, 17);
        Ok(())
    }

    #[test]
    fn missing_keys_use_defaults() -> Result<(), String> {
        let settings: GlobalSettings = toml::from_str("").map_err(|e| e.to_string())?;
        assert_eq!(settings.log_filename(), "car_garage.log");
        assert_eq!(settings.showroom(), GlobalSettings::default().showroom());
        Ok(())
    }

    #[test]
    fn load_missing_file_uses_defaults() -> Result<(), String> {
        let path = scratch_config_path("missing");
        let _ = fs::remove_file(&path);
        let settings = GlobalSettings::load_from(&path).map_err(|e| e.to_string())?;
        assert_eq!(settings.showroom(), GlobalSettings::default().showroom());
        assert!(!path.exists());
        Ok(())
    }

    #[test]
    fn load_valid_file() -> Result<(), String> {
        let path = scratch_config_path("valid");
        let mut settings = GlobalSettings::default();
        settings.log_filename = "x.log".to_string();
        settings.showroom.truncate(1);
        settings.write_to(&path).map_err(|e| e.to_string())?;
        let loaded = GlobalSettings::load_from(&path).map_err(|e| e.to_string());
        let _ = fs::remove_file(&path);
        let loaded = loaded?;
        assert_eq!(loaded.log_filename(), "x.log");
        assert_eq!(loaded.showroom(), settings.showroom());
        Ok(())
    }

    #[test]
    fn malformed_file_is_left_untouched() -> Result<(), String> {
        let path = scratch_config_path("malformed");
        let user_content = "showroom = [ { name = \"broken\" ";
        fs::write(&path, user_content).map_err(|e| e.to_string())?;
        let result = GlobalSettings::load_from(&path);
        let on_disk = fs::read_to_string(&path).map_err(|e| e.to_string());
        let _ = fs::remove_file(&path);
        assert!(result.is_err());
        assert_eq!(on_disk?, user_content);
        Ok(())
    }
}
