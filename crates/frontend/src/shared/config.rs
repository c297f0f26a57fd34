//! Конфигурация приложения.
//!
//! Значения по умолчанию можно переопределить при сборке:
//! `ADMIN_API_PORT=8080 ADMIN_NOTIFICATION_TTL_MS=6000 trunk build`

const DEFAULT_API_PORT: u16 = 3000;
const DEFAULT_API_PREFIX: &str = "/api";
const DEFAULT_NOTIFICATION_TTL_MS: u32 = 4000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Порт backend-сервера (хост берётся из адреса страницы)
    pub api_port: u16,
    /// Префикс всех REST-путей
    pub api_prefix: &'static str,
    /// Время жизни всплывающего уведомления
    pub notification_ttl_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_port: DEFAULT_API_PORT,
            api_prefix: DEFAULT_API_PREFIX,
            notification_ttl_ms: DEFAULT_NOTIFICATION_TTL_MS,
        }
    }
}

impl AppConfig {
    /// Конфигурация с учётом переменных окружения времени сборки
    pub fn from_build_env() -> Self {
        Self::from_overrides(
            option_env!("ADMIN_API_PORT"),
            option_env!("ADMIN_NOTIFICATION_TTL_MS"),
        )
    }

    fn from_overrides(api_port: Option<&str>, notification_ttl_ms: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(raw) = api_port {
            match raw.trim().parse() {
                Ok(port) => config.api_port = port,
                Err(_) => log::warn!("Invalid ADMIN_API_PORT '{}', using {}", raw, config.api_port),
            }
        }
        if let Some(raw) = notification_ttl_ms {
            match raw.trim().parse() {
                Ok(ttl) => config.notification_ttl_ms = ttl,
                Err(_) => log::warn!(
                    "Invalid ADMIN_NOTIFICATION_TTL_MS '{}', using {}",
                    raw,
                    config.notification_ttl_ms
                ),
            }
        }
        config
    }

    /// Базовый URL backend-сервера для заданного протокола и хоста страницы
    pub fn base_url(&self, protocol: &str, hostname: &str) -> String {
        format!("{}//{}:{}", protocol, hostname, self.api_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_overrides(None, None);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.api_port, 3000);
        assert_eq!(config.api_prefix, "/api");
    }

    #[test]
    fn test_overrides_and_invalid_values() {
        let config = AppConfig::from_overrides(Some("8080"), Some("1500"));
        assert_eq!(config.api_port, 8080);
        assert_eq!(config.notification_ttl_ms, 1500);

        let config = AppConfig::from_overrides(Some("not-a-port"), Some(""));
        assert_eq!(config.api_port, 3000);
        assert_eq!(config.notification_ttl_ms, 4000);
    }

    #[test]
    fn test_base_url() {
        let config = AppConfig::default();
        assert_eq!(
            config.base_url("https:", "admin.example.com"),
            "https://admin.example.com:3000"
        );
    }
}
