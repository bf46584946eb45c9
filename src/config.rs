// ============================================================================
// CONFIG - Configuración de la pantalla (resuelta una sola vez al arrancar)
// ============================================================================

use serde::{Deserialize, Serialize};

const DEFAULT_BACKEND_URL_DEVELOPMENT: &str = "http://localhost:8000";
const DEFAULT_BACKEND_URL_PRODUCTION: &str = "https://back-indicadores-1.onrender.com";
const DEFAULT_SUCCESS_NOTICE_MS: u32 = 2000;

/// Hosts que se consideran entorno de desarrollo
const LOOPBACK_HOSTS: &[&str] = &["localhost", "127.0.0.1", "::1", "[::1]"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url_development: String,
    pub backend_url_production: String,
    pub enable_logging: bool,
    pub language: String,
    pub admin_role: String,
    pub login_url: String,
    pub home_url: String,
    pub detail_page: String,
    pub success_notice_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url_development: DEFAULT_BACKEND_URL_DEVELOPMENT.to_string(),
            backend_url_production: DEFAULT_BACKEND_URL_PRODUCTION.to_string(),
            enable_logging: true,
            language: "ES".to_string(),
            admin_role: "admin".to_string(),
            login_url: "../index.html".to_string(),
            home_url: "../index.html".to_string(),
            detail_page: "reporte.html".to_string(),
            success_notice_ms: DEFAULT_SUCCESS_NOTICE_MS,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    /// (build.rs las inyecta desde `.env`)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            backend_url_development: option_env!("BACKEND_URL_DEVELOPMENT")
                .map(str::to_string)
                .unwrap_or(defaults.backend_url_development),
            backend_url_production: option_env!("BACKEND_URL_PRODUCTION")
                .map(str::to_string)
                .unwrap_or(defaults.backend_url_production),
            enable_logging: option_env!("ENABLE_LOGGING")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
            language: option_env!("LANGUAGE")
                .map(|v| v.to_uppercase())
                .unwrap_or(defaults.language),
            admin_role: option_env!("ADMIN_ROLE")
                .map(str::to_string)
                .unwrap_or(defaults.admin_role),
            login_url: option_env!("LOGIN_URL")
                .map(str::to_string)
                .unwrap_or(defaults.login_url),
            home_url: option_env!("HOME_URL")
                .map(str::to_string)
                .unwrap_or(defaults.home_url),
            detail_page: option_env!("DETAIL_PAGE")
                .map(str::to_string)
                .unwrap_or(defaults.detail_page),
            success_notice_ms: option_env!("SUCCESS_NOTICE_MS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.success_notice_ms),
        }
    }

    /// Resuelve la URL del backend para el host actual
    pub fn api_config(&self, hostname: &str) -> ApiConfig {
        let environment = Environment::from_hostname(hostname);
        let base_url = match environment {
            Environment::Development => &self.backend_url_development,
            Environment::Production => &self.backend_url_production,
        };
        ApiConfig {
            environment,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn log_level(&self) -> log::Level {
        if self.enable_logging {
            log::Level::Debug
        } else {
            log::Level::Warn
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn from_hostname(hostname: &str) -> Self {
        let host = hostname.trim().to_ascii_lowercase();
        if LOOPBACK_HOSTS.contains(&host.as_str()) {
            Environment::Development
        } else {
            Environment::Production
        }
    }
}

/// Destino del API. Inmutable durante la vida del proceso.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub environment: Environment,
    pub base_url: String,
}
