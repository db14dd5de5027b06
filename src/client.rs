//! Cliente HTTP del API bajo prueba
//!
//! Este módulo contiene el adaptador HTTP compartido por todos los pasos.
//! Emite la petición y devuelve una respuesta estructurada (status + body)
//! o un TransportError; ningún error de reqwest escapa de aquí. No decide
//! nada de negocio y no registra nada: el logging es del paso que llama.

use reqwest::{Client, Method};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

use crate::config::RunnerConfig;
use crate::utils::errors::TransportError;

/// Cuerpo de respuesta: JSON parseado o texto crudo
#[derive(Debug, Clone)]
pub enum Payload {
    Json(Value),
    Text(String),
}

/// Respuesta estructurada de una llamada al backend
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Payload,
}

impl ApiResponse {
    /// true si el status es 2xx
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Cuerpo JSON, si el backend devolvió JSON parseable
    pub fn json(&self) -> Option<&Value> {
        match &self.body {
            Payload::Json(value) => Some(value),
            Payload::Text(_) => None,
        }
    }

    /// Representación textual del cuerpo, para diagnóstico de fallos
    pub fn body_text(&self) -> String {
        match &self.body {
            Payload::Json(value) => value.to_string(),
            Payload::Text(raw) => raw.clone(),
        }
    }

    /// Deserializa el cuerpo JSON al tipo pedido.
    /// El detalle del fallo queda en el Err para que el paso lo clasifique.
    pub fn parse_json<T: serde::de::DeserializeOwned>(&self) -> Result<T, String> {
        match self.json() {
            Some(value) => serde_json::from_value(value.clone()).map_err(|err| err.to_string()),
            None => Err("body is not JSON".to_string()),
        }
    }
}

/// Adaptador HTTP compartido por los pasos del recorrido
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
}

impl ApiClient {
    /// Crear el cliente con el timeout de la configuración
    pub fn new(config: &RunnerConfig) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;

        Ok(Self { client })
    }

    /// GET sin cuerpo ni autenticación
    pub async fn get(&self, url: &str) -> Result<ApiResponse, TransportError> {
        self.execute::<Value>(Method::GET, url, None, None).await
    }

    /// POST con cuerpo JSON y token Bearer opcional
    pub async fn post_json<B: Serialize>(
        &self,
        url: &str,
        body: &B,
        bearer_token: Option<&str>,
    ) -> Result<ApiResponse, TransportError> {
        self.execute(Method::POST, url, Some(body), bearer_token)
            .await
    }

    /// PUT con cuerpo JSON y token Bearer opcional
    pub async fn put_json<B: Serialize>(
        &self,
        url: &str,
        body: &B,
        bearer_token: Option<&str>,
    ) -> Result<ApiResponse, TransportError> {
        self.execute(Method::PUT, url, Some(body), bearer_token)
            .await
    }

    /// Núcleo del adaptador: arma la petición, la envía y clasifica el cuerpo.
    /// Un cuerpo no parseable como JSON se entrega como texto crudo; esa
    /// tolerancia la decide cada paso, no el adaptador.
    async fn execute<B: Serialize>(
        &self,
        method: Method,
        url: &str,
        body: Option<&B>,
        bearer_token: Option<&str>,
    ) -> Result<ApiResponse, TransportError> {
        let mut request = self.client.request(method, url);

        if let Some(token) = bearer_token {
            request = request.header("Authorization", format!("Bearer {}", token));
        }

        if let Some(json_body) = body {
            request = request.json(json_body);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let raw = response.text().await?;

        let body = match serde_json::from_str::<Value>(&raw) {
            Ok(value) => Payload::Json(value),
            Err(_) => Payload::Text(raw),
        };

        Ok(ApiResponse { status, body })
    }
}
