use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::ids::EntityId;

// Request para publicar un trip
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripRequest {
    pub driver_id: EntityId,
    pub from_location: String,
    pub to_location: String,
    /// Fecha ISO 8601 (YYYY-MM-DD), siempre el día siguiente
    pub available_date: String,
    pub available_time: String,
    pub seats_available: u32,
    pub price_per_seat: f64,
    pub from_lat: f64,
    pub from_lng: f64,
    pub to_lat: f64,
    pub to_lng: f64,
}

/// Entrada de la colección de trips tal como la devuelve el backend.
///
/// Todos los campos son opcionales: el listado puede mezclar formas
/// distintas y una entrada sin ruta simplemente nunca pasa el re-filtro.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripSummary {
    #[serde(default)]
    pub id: Option<EntityId>,
    #[serde(default)]
    pub from_location: Option<String>,
    #[serde(default)]
    pub to_location: Option<String>,
    #[serde(default)]
    pub seats_available: Option<u32>,
    #[serde(default)]
    pub price_per_seat: Option<f64>,
}

impl TripSummary {
    /// Coincidencia de ruta por substring, sensible a mayúsculas.
    /// Una entrada sin origen o destino nunca coincide.
    pub fn matches_route(&self, from: &str, to: &str) -> bool {
        let from_matches = self
            .from_location
            .as_deref()
            .map_or(false, |location| location.contains(from));
        let to_matches = self
            .to_location
            .as_deref()
            .map_or(false, |location| location.contains(to));

        from_matches && to_matches
    }
}

/// Ack normalizado de la publicación de un trip.
///
/// El backend puede responder la entidad creada, un wrapper con mensaje
/// o texto plano; todas las formas degradan a este par status/id.
#[derive(Debug, Clone, PartialEq)]
pub struct TripPostAck {
    pub status: String,
    pub id: String,
}

impl TripPostAck {
    /// Normaliza un cuerpo 2xx parseable: toma `status` e `id` si existen,
    /// probando también el wrapper `{"trip": {...}}`.
    pub fn from_json(body: &Value) -> Self {
        let status = body
            .get("status")
            .and_then(Value::as_str)
            .unwrap_or("success")
            .to_string();

        let id = body
            .get("id")
            .and_then(id_as_string)
            .or_else(|| {
                body.get("trip")
                    .and_then(|trip| trip.get("id"))
                    .and_then(id_as_string)
            })
            .unwrap_or_else(|| "unknown".to_string());

        Self { status, id }
    }

    /// Éxito degenerado: 2xx con cuerpo no parseable
    pub fn degenerate() -> Self {
        Self {
            status: "success".to_string(),
            id: "unknown".to_string(),
        }
    }
}

fn id_as_string(value: &Value) -> Option<String> {
    match value {
        Value::Number(number) => Some(number.to_string()),
        Value::String(text) => Some(text.clone()),
        _ => None,
    }
}
