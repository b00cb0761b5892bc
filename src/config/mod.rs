use crate::core::auth::hash_password;
use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use chrono::{Duration, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

const DEFAULT_ADMIN_PASSWORD: &str = "admin123";
const MAX_HISTORY_DAYS: i64 = 36_500;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_late_threshold")]
    pub late_threshold: String,
    #[serde(default = "default_standard_hours")]
    pub standard_work_hours: f64,
    #[serde(default = "default_short_day")]
    pub short_day_hours: f64,
    #[serde(default = "default_long_day")]
    pub long_day_hours: f64,
    #[serde(default = "default_long_break")]
    pub long_break_hours: f64,
    #[serde(default = "default_history_days")]
    pub history_days: i64,
    #[serde(default = "default_admin_hash")]
    pub admin_password_hash: String,
}

fn default_late_threshold() -> String {
    "09:00".to_string()
}
fn default_standard_hours() -> f64 {
    8.0
}
fn default_short_day() -> f64 {
    4.0
}
fn default_long_day() -> f64 {
    12.0
}
fn default_long_break() -> f64 {
    2.0
}
fn default_history_days() -> i64 {
    30
}
fn default_admin_hash() -> String {
    hash_password(DEFAULT_ADMIN_PASSWORD)
}

impl Default for Config {
    fn default() -> Self {
        Self::with_database(Self::database_file().to_string_lossy().to_string())
    }
}

impl Config {
    fn with_database(database: String) -> Self {
        Self {
            database,
            late_threshold: default_late_threshold(),
            standard_work_hours: default_standard_hours(),
            short_day_hours: default_short_day(),
            long_day_hours: default_long_day(),
            long_break_hours: default_long_break(),
            history_days: default_history_days(),
            admin_password_hash: default_admin_hash(),
        }
    }

    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("rtimesheet")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rtimesheet")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtimesheet.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rtimesheet.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        let mut cfg: Config =
            serde_yaml::from_str(&content).map_err(|e| AppError::Config(e.to_string()))?;
        cfg.database = expand_tilde(&cfg.database).to_string_lossy().to_string();
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> AppResult<()> {
        if NaiveTime::parse_from_str(&self.late_threshold, "%H:%M").is_err() {
            return Err(AppError::Config(format!(
                "late_threshold must be HH:MM, got '{}'",
                self.late_threshold
            )));
        }
        if !(1..=MAX_HISTORY_DAYS).contains(&self.history_days) {
            return Err(AppError::Config(format!(
                "history_days must be between 1 and {MAX_HISTORY_DAYS}, got {}",
                self.history_days
            )));
        }
        if self.standard_work_hours <= 0.0 {
            return Err(AppError::Config(
                "standard_work_hours must be positive".into(),
            ));
        }
        Ok(())
    }

    /// Late threshold as a time of day (09:00 if the stored value is unusable).
    pub fn late_threshold_time(&self) -> NaiveTime {
        NaiveTime::parse_from_str(&self.late_threshold, "%H:%M")
            .unwrap_or(NaiveTime::MIN + Duration::hours(9))
    }

    pub fn standard_day(&self) -> Duration {
        Duration::minutes((self.standard_work_hours * 60.0).round() as i64)
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();

        // DB path: user provided (same resolution as the global --db flag) or default
        let db_path = match custom_db {
            Some(name) => expand_tilde(&name),
            None => dir.join("rtimesheet.sqlite"),
        };

        let config = Self::with_database(db_path.to_string_lossy().to_string());

        // Write config file
        if !is_test {
            fs::create_dir_all(&dir)?;
            let yaml = serde_yaml::to_string(&config).map_err(|_| AppError::ConfigSave)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let cfg: Config = serde_yaml::from_str("database: /tmp/x.sqlite\n").unwrap();
        assert_eq!(cfg.late_threshold, "09:00");
        assert_eq!(cfg.standard_day(), Duration::hours(8));
        assert_eq!(cfg.history_days, 30);
        assert_eq!(cfg.admin_password_hash, hash_password("admin123"));
    }

    #[test]
    fn rejects_bad_threshold() {
        let mut cfg = Config::default();
        cfg.late_threshold = "nine".into();
        assert!(cfg.validate().is_err());
        assert_eq!(
            cfg.late_threshold_time(),
            NaiveTime::from_hms_opt(9, 0, 0).unwrap()
        );
    }

    #[test]
    fn rejects_unbounded_history() {
        let mut cfg = Config::default();
        cfg.history_days = 999_999_999_999;
        assert!(cfg.validate().is_err());
        cfg.history_days = 0;
        assert!(cfg.validate().is_err());
        cfg.history_days = 365;
        assert!(cfg.validate().is_ok());
    }
}
