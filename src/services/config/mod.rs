// Configuration service
// Loads merchant preferences and business hours from a TOML file

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::Deserialize;

use crate::models::business_hours::BusinessHours;
use crate::models::settings::Settings;
use crate::services::clock::{clock_for_timezone, Clock};

/// Environment variable naming a config file to use instead of the default.
pub const CONFIG_ENV_VAR: &str = "BOOKING_CALENDAR_CONFIG";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid settings in {path}: {message}")]
    Invalid { path: PathBuf, message: String },

    #[error("unrecognised preference: {0}")]
    Unrecognised(String),
}

/// Top-level configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub preferences: Settings,
    pub business_hours: BusinessHours,
}

impl AppConfig {
    /// Read and parse a config file.
    ///
    /// Unrecognised preference values are accepted here and fall back to
    /// their defaults when used; only a bad timezone name is rejected.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: AppConfig = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        config
            .preferences
            .timezone()
            .map_err(|message| ConfigError::Invalid {
                path: path.to_path_buf(),
                message,
            })?;

        log::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load configuration from the first location that applies.
    ///
    /// An explicit path or the `BOOKING_CALENDAR_CONFIG` variable must name a
    /// readable file. The platform default location is optional; when it is
    /// absent the built-in defaults are used.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }

        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR) {
            return Self::load_from(Path::new(&path));
        }

        match default_config_path() {
            Some(path) if path.is_file() => Self::load_from(&path),
            Some(path) => {
                log::debug!("No config file at {}, using defaults", path.display());
                Ok(Self::default())
            }
            None => {
                log::debug!("No config directory available, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Reject preferences that would otherwise fall back to a default.
    pub fn validate_strict(&self) -> Result<(), ConfigError> {
        self.preferences
            .validate()
            .map_err(ConfigError::Unrecognised)
    }

    /// Clock for the configured timezone, or local time.
    pub fn clock(&self) -> Box<dyn Clock> {
        clock_for_timezone(self.preferences.timezone.as_deref())
    }
}

/// Platform config location, e.g. `~/.config/booking-calendar/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "BookingCalendar", "booking-calendar")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::settings::{FirstDayOfWeek, TimeFormat};
    use crate::models::view::CalendarViewMode;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_full_config() {
        let file = write_config(
            r#"
            [preferences]
            first_day_of_week = "sunday"
            time_format = "12h"
            default_view = "MonthGrid"
            timezone = "Australia/Brisbane"

            [business_hours.monday]
            open = "09:00"
            close = "17:30"
            "#,
        );

        let config = AppConfig::load_from(file.path()).unwrap();
        let prefs = config.preferences.preferences();
        assert_eq!(prefs.first_day_of_week, FirstDayOfWeek::Sunday);
        assert_eq!(prefs.time_format, TimeFormat::TwelveHour);
        assert_eq!(config.preferences.default_view(), CalendarViewMode::MonthGrid);
        assert!(config.business_hours.monday.is_some());
        assert!(config.business_hours.tuesday.is_none());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let file = write_config("");
        let config = AppConfig::load_from(file.path()).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_unrecognised_preferences_fall_back() {
        let file = write_config(
            r#"
            [preferences]
            first_day_of_week = "wednesday"
            time_format = "sundial"
            "#,
        );
        let config = AppConfig::load_from(file.path()).unwrap();
        let prefs = config.preferences.preferences();
        assert_eq!(prefs.first_day_of_week, FirstDayOfWeek::Monday);
        assert_eq!(prefs.time_format, TimeFormat::TwentyFourHour);
    }

    #[test]
    fn test_numeric_preferences_load() {
        let file = write_config(
            r#"
            [preferences]
            first_day_of_week = 0
            time_format = 12
            "#,
        );
        let config = AppConfig::load_from(file.path()).unwrap();
        let prefs = config.preferences.preferences();
        assert_eq!(prefs.first_day_of_week, FirstDayOfWeek::Sunday);
        assert_eq!(prefs.time_format, TimeFormat::TwelveHour);
        assert!(config.validate_strict().is_ok());
    }

    #[test]
    fn test_preferences_of_wrong_type_fall_back() {
        let file = write_config(
            r#"
            [preferences]
            first_day_of_week = true
            time_format = { hours = 12 }
            default_view = 3
            "#,
        );
        let config = AppConfig::load_from(file.path()).unwrap();
        let prefs = config.preferences.preferences();
        assert_eq!(prefs.first_day_of_week, FirstDayOfWeek::Monday);
        assert_eq!(prefs.time_format, TimeFormat::TwentyFourHour);
        assert_eq!(config.preferences.default_view(), CalendarViewMode::WeekGrid);
    }

    #[test]
    fn test_validate_strict_reports_fallbacks() {
        let file = write_config(
            r#"
            [preferences]
            first_day_of_week = "wednesday"
            "#,
        );
        let config = AppConfig::load_from(file.path()).unwrap();
        assert!(matches!(
            config.validate_strict(),
            Err(ConfigError::Unrecognised(_))
        ));
        assert!(AppConfig::default().validate_strict().is_ok());
    }

    #[test]
    fn test_unknown_timezone_is_rejected() {
        let file = write_config(
            r#"
            [preferences]
            timezone = "Atlantis/Central"
            "#,
        );
        let result = AppConfig::load_from(file.path());
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn test_malformed_toml() {
        let file = write_config("[preferences\nfirst_day_of_week = ");
        let result = AppConfig::load_from(file.path());
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_unknown_section_is_rejected() {
        let file = write_config("[blocked_time]\nmonday = true\n");
        assert!(matches!(
            AppConfig::load_from(file.path()),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = AppConfig::load_from(&dir.path().join("missing.toml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    #[serial]
    fn test_env_var_overrides_default_location() {
        let file = write_config("[preferences]\ntime_format = \"12h\"\n");
        std::env::set_var(CONFIG_ENV_VAR, file.path());
        let result = AppConfig::load(None);
        std::env::remove_var(CONFIG_ENV_VAR);

        let config = result.unwrap();
        assert_eq!(config.preferences.preferences().time_format, TimeFormat::TwelveHour);
    }

    #[test]
    #[serial]
    fn test_explicit_path_wins_over_env_var() {
        let env_file = write_config("[preferences]\ntime_format = \"12h\"\n");
        let explicit = write_config("[preferences]\ntime_format = \"24h\"\n");
        std::env::set_var(CONFIG_ENV_VAR, env_file.path());
        let result = AppConfig::load(Some(explicit.path()));
        std::env::remove_var(CONFIG_ENV_VAR);

        let config = result.unwrap();
        assert_eq!(
            config.preferences.preferences().time_format,
            TimeFormat::TwentyFourHour
        );
    }
}
