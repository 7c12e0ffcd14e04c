use serde::{Deserialize, Serialize};

use crate::calendar::WeekStart;
use crate::models::ViewType;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Basename del router (equivalente al BASE_URL del bundler)
    pub base_url: String,
    pub mount_element_id: String,
    pub app_title: String,
    pub default_view: String,
    pub week_starts_on: String,
    pub enable_logging: bool,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: "/".to_string(),
            mount_element_id: "app".to_string(),
            app_title: "Calendar".to_string(),
            default_view: "month".to_string(),
            week_starts_on: "monday".to_string(),
            enable_logging: true,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: option_env!("BASE_URL")
                .map(|s| s.to_string())
                .unwrap_or(defaults.base_url),
            mount_element_id: option_env!("MOUNT_ELEMENT_ID")
                .map(|s| s.to_string())
                .unwrap_or(defaults.mount_element_id),
            app_title: option_env!("APP_TITLE")
                .map(|s| s.to_string())
                .unwrap_or(defaults.app_title),
            default_view: option_env!("DEFAULT_VIEW")
                .map(|s| s.to_string())
                .unwrap_or(defaults.default_view),
            week_starts_on: option_env!("WEEK_STARTS_ON")
                .map(|s| s.to_string())
                .unwrap_or(defaults.week_starts_on),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            log_level: option_env!("LOG_LEVEL")
                .map(|s| s.to_string())
                .unwrap_or(defaults.log_level),
        }
    }

    /// Basename para el router; `None` cuando la app vive en la raíz
    pub fn router_basename(&self) -> Option<String> {
        let trimmed = self.base_url.trim_end_matches('/');
        if trimmed.is_empty() {
            None
        } else if trimmed.starts_with('/') {
            Some(trimmed.to_string())
        } else {
            Some(format!("/{}", trimmed))
        }
    }

    /// Vista inicial; un valor desconocido cae en Month
    pub fn initial_view(&self) -> ViewType {
        ViewType::parse(&self.default_view.to_lowercase()).unwrap_or_default()
    }

    pub fn week_start(&self) -> WeekStart {
        WeekStart::parse(&self.week_starts_on)
    }

    /// Nivel para wasm_logger. Con logging deshabilitado solo pasan errores.
    pub fn log_level(&self) -> log::Level {
        if !self.enable_logging {
            return log::Level::Error;
        }
        match self.log_level.to_lowercase().as_str() {
            "error" => log::Level::Error,
            "warn" => log::Level::Warn,
            "debug" => log::Level::Debug,
            "trace" => log::Level::Trace,
            _ => log::Level::Info,
        }
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.mount_element_id, "app");
        assert_eq!(config.router_basename(), None);
        assert_eq!(config.initial_view(), ViewType::Month);
        assert_eq!(config.week_start(), WeekStart::Monday);
        assert_eq!(config.log_level(), log::Level::Info);
    }

    #[test]
    fn test_router_basename_normalization() {
        let mut config = AppConfig::default();
        config.base_url = "/calendar/".to_string();
        assert_eq!(config.router_basename().as_deref(), Some("/calendar"));
        config.base_url = "calendar".to_string();
        assert_eq!(config.router_basename().as_deref(), Some("/calendar"));
    }

    #[test]
    fn test_view_week_start_and_log_level_parsing() {
        let mut config = AppConfig::default();
        config.default_view = "Week".to_string();
        config.week_starts_on = "Sunday".to_string();
        config.log_level = "debug".to_string();
        assert_eq!(config.initial_view(), ViewType::Week);
        assert_eq!(config.week_start(), WeekStart::Sunday);
        assert_eq!(config.log_level(), log::Level::Debug);

        config.default_view = "agenda".to_string();
        config.enable_logging = false;
        assert_eq!(config.initial_view(), ViewType::Month);
        assert_eq!(config.log_level(), log::Level::Error);
    }
}
