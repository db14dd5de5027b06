//! Configuración de variables de entorno
//!
//! Este módulo construye la configuración explícita que recibe el runner.
//! No hay estado global mutable: la configuración se inyecta en el
//! orquestador y de ahí a cada paso.

use std::env;

/// Base por defecto del API bajo prueba
const DEFAULT_BASE_URL: &str = "http://localhost:8083/api";

/// Timeout por petición, en milisegundos
const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Configuración del runner
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Raíz del API, p.ej. http://localhost:8083/api
    pub base_url: String,
    /// Timeout de cada petición HTTP en milisegundos
    pub timeout_ms: u64,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            base_url: env::var("E2E_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            timeout_ms: env::var("E2E_TIMEOUT_MS")
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_MS),
        }
    }
}

impl RunnerConfig {
    /// Configuración apuntando a un despliegue concreto
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    /// Raíz de los endpoints de autenticación
    pub fn auth_url(&self) -> String {
        format!("{}/auth", self.base_url)
    }

    /// Raíz de los endpoints de vehículos
    pub fn vehicles_url(&self) -> String {
        format!("{}/vehicles", self.base_url)
    }

    /// Raíz de los endpoints de trips
    pub fn trips_url(&self) -> String {
        format!("{}/trips", self.base_url)
    }

    /// Raíz de los endpoints de bookings
    pub fn bookings_url(&self) -> String {
        format!("{}/bookings", self.base_url)
    }
}
