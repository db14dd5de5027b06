use serde::{Deserialize, Serialize};

use crate::models::ids::EntityId;

// Request para crear un vehículo
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleRequest {
    pub driver_name: String,
    pub driver_email: String,
    pub driver_contact: String,
    pub model: String,
    pub number_plate: String,
    #[serde(rename = "type")]
    pub vehicle_type: String,
    pub seats: u32,
    pub status: String,
    pub document_status: String,
    pub latitude: f64,
    pub longitude: f64,
    pub battery_percent: u32,
    pub odometer: u32,
    pub driver_rating: f64,
    pub vehicle_photo_url: String,
}

impl VehicleRequest {
    /// Vehículo estándar del escenario para un driver concreto.
    /// Nace Pending/Pending; la aprobación del manager lo activa después.
    pub fn for_driver(driver_name: &str, driver_email: &str, number_plate: String) -> Self {
        Self {
            driver_name: driver_name.to_string(),
            driver_email: driver_email.to_string(),
            driver_contact: "9876543210".to_string(),
            model: "Integration Test Car".to_string(),
            number_plate,
            vehicle_type: "Sedan".to_string(),
            seats: 4,
            status: "Pending".to_string(),
            document_status: "Pending".to_string(),
            latitude: 13.0827,
            longitude: 80.2707,
            battery_percent: 100,
            odometer: 0,
            driver_rating: 5.0,
            vehicle_photo_url: "https://randomuser.me/api/portraits/men/32.jpg".to_string(),
        }
    }
}

// Request de aprobación: transición Pending -> Active / Verified
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleApprovalRequest {
    pub status: String,
    pub document_status: String,
}

impl VehicleApprovalRequest {
    pub fn approved() -> Self {
        Self {
            status: "Active".to_string(),
            document_status: "Verified".to_string(),
        }
    }
}

/// Respuesta del alta de vehículo. El backend devuelve la entidad completa;
/// aquí solo se tipan los campos que el recorrido consume.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleCreated {
    pub id: EntityId,
    #[serde(default)]
    pub number_plate: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}
