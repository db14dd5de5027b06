use serde::{Deserialize, Serialize};

use crate::models::ids::EntityId;

// Referencia anidada con solo el id, convención relacional del backend
#[derive(Debug, Clone, Serialize)]
pub struct EntityRef {
    pub id: EntityId,
}

impl From<EntityId> for EntityRef {
    fn from(id: EntityId) -> Self {
        Self { id }
    }
}

// Request de creación de booking
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub trip: EntityRef,
    pub user: EntityRef,
    pub passenger_count: u32,
    pub total_price: f64,
    pub start_location: String,
    pub end_location: String,
    pub status: String,
}

/// Confirmación devuelta por el backend. Solo se tipan los campos que el
/// reporte final consulta; el resto de la entidad se ignora.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingConfirmation {
    #[serde(default)]
    pub id: Option<EntityId>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub start_location: Option<String>,
    #[serde(default)]
    pub end_location: Option<String>,
    #[serde(default)]
    pub passenger_count: Option<u32>,
}
