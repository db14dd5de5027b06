//! Servicio de vehículos
//!
//! Alta del vehículo del driver y aprobación posterior por el manager.
//! El alta es dependencia dura del resto del recorrido: sin vehículo no
//! hay trip que publicar ni nada que aprobar.

use tracing::{error, info};

use crate::client::ApiClient;
use crate::config::RunnerConfig;
use crate::dto::vehicle_dto::{VehicleApprovalRequest, VehicleCreated, VehicleRequest};
use crate::models::ids::EntityId;
use crate::models::principal::Principal;
use crate::utils::errors::{protocol_error, shape_error, StepResult};

/// Prefijo de las matrículas generadas por el runner
pub const PLATE_PREFIX: &str = "TN-TEST";

/// Servicio de alta y aprobación contra /vehicles
pub struct VehicleService {
    client: ApiClient,
    vehicles_url: String,
}

impl VehicleService {
    pub fn new(client: ApiClient, config: &RunnerConfig) -> Self {
        Self {
            client,
            vehicles_url: config.vehicles_url(),
        }
    }

    /// Dar de alta el vehículo del driver con matrícula única por corrida.
    /// Acepta 200 o 201; cualquier otro status es fallo de protocolo.
    pub async fn create_vehicle(&self, driver: &Principal) -> StepResult<VehicleCreated> {
        let plate = generate_plate();
        info!("🚗 Creating vehicle: {}...", plate);

        let request = VehicleRequest::for_driver(&driver.name, &driver.email, plate.clone());
        let response = self
            .client
            .post_json(&self.vehicles_url, &request, Some(&driver.auth_token))
            .await?;

        if !matches!(response.status, 200 | 201) {
            error!("❌ Vehicle creation failed: {}", response.body_text());
            return Err(protocol_error(response.status, response.body_text()));
        }

        let mut created: VehicleCreated = response
            .parse_json()
            .map_err(|detail| shape_error(format!("vehicle response: {}", detail)))?;

        // Algunos backends no devuelven la matrícula; se conserva la generada
        if created.number_plate.is_none() {
            created.number_plate = Some(plate);
        }

        info!("✅ Vehicle created with ID: {}", created.id);
        Ok(created)
    }

    /// Aprobar el vehículo como manager: Pending -> Active, documentos
    /// Pending -> Verified. Solo 200 cuenta como aprobado.
    pub async fn approve_vehicle(
        &self,
        manager: &Principal,
        vehicle_id: &EntityId,
    ) -> StepResult<()> {
        info!("👮 Approving vehicle ID: {}...", vehicle_id);

        let request = VehicleApprovalRequest::approved();
        let url = format!("{}/{}", self.vehicles_url, vehicle_id);
        let response = self
            .client
            .put_json(&url, &request, Some(&manager.auth_token))
            .await?;

        if response.status != 200 {
            error!("❌ Vehicle approval failed: {}", response.body_text());
            return Err(protocol_error(response.status, response.body_text()));
        }

        info!("✅ Vehicle approved and active.");
        Ok(())
    }
}

/// Matrícula única por corrida: PREFIX-<epoch en segundos>
pub fn generate_plate() -> String {
    format_plate(chrono::Utc::now().timestamp())
}

fn format_plate(epoch_seconds: i64) -> String {
    format!("{}-{}", PLATE_PREFIX, epoch_seconds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::principal::Role;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn service_for(server: &MockServer) -> VehicleService {
        let config = RunnerConfig::with_base_url(server.uri());
        let client = ApiClient::new(&config).unwrap();
        VehicleService::new(client, &config)
    }

    fn driver() -> Principal {
        Principal {
            id: EntityId::Number(2),
            name: "Test Driver".to_string(),
            email: "dvr_int@test.com".to_string(),
            role: Role::Driver,
            auth_token: "tok-driver".to_string(),
        }
    }

    fn manager() -> Principal {
        Principal {
            id: EntityId::Number(1),
            name: "Test Manager".to_string(),
            email: "mgr_int@test.com".to_string(),
            role: Role::Manager,
            auth_token: "tok-manager".to_string(),
        }
    }

    #[test]
    fn test_plate_format_is_prefix_dash_epoch() {
        let plate = format_plate(1_755_800_000);
        assert_eq!(plate, "TN-TEST-1755800000");
    }

    #[test]
    fn test_plates_from_different_seconds_differ() {
        assert_ne!(format_plate(1_755_800_000), format_plate(1_755_800_001));
    }

    #[test]
    fn test_generated_plate_has_numeric_suffix() {
        let plate = generate_plate();
        let suffix = plate.strip_prefix("TN-TEST-").unwrap();
        assert!(suffix.parse::<i64>().is_ok());
    }

    #[tokio::test]
    async fn test_create_vehicle_sends_pending_payload_with_driver_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/vehicles"))
            .and(header("authorization", "Bearer tok-driver"))
            .and(body_partial_json(json!({
                "driverName": "Test Driver",
                "driverEmail": "dvr_int@test.com",
                "type": "Sedan",
                "seats": 4,
                "status": "Pending",
                "documentStatus": "Pending"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "id": 10,
                "status": "Pending"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let created = service_for(&server).create_vehicle(&driver()).await.unwrap();

        assert_eq!(created.id, EntityId::Number(10));
        // La matrícula generada se conserva aunque el backend no la devuelva
        assert!(created.number_plate.unwrap().starts_with("TN-TEST-"));
    }

    #[tokio::test]
    async fn test_create_vehicle_error_status_is_fatal() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/vehicles"))
            .respond_with(ResponseTemplate::new(500).set_body_string("storage error"))
            .mount(&server)
            .await;

        let err = service_for(&server).create_vehicle(&driver()).await.unwrap_err();
        assert_eq!(err.status(), Some(500));
    }

    #[tokio::test]
    async fn test_create_vehicle_without_id_is_shape_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/vehicles"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "Pending"})))
            .mount(&server)
            .await;

        let err = service_for(&server).create_vehicle(&driver()).await.unwrap_err();
        assert!(err.to_string().contains("shape error"));
    }

    #[tokio::test]
    async fn test_approval_puts_active_verified_with_manager_token() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/vehicles/10"))
            .and(header("authorization", "Bearer tok-manager"))
            .and(body_partial_json(json!({
                "status": "Active",
                "documentStatus": "Verified"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 10,
                "status": "Active",
                "documentStatus": "Verified"
            })))
            .expect(1)
            .mount(&server)
            .await;

        service_for(&server)
            .approve_vehicle(&manager(), &EntityId::Number(10))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_approval_non_200_is_protocol_error() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/vehicles/10"))
            .respond_with(ResponseTemplate::new(404).set_body_string("no such vehicle"))
            .mount(&server)
            .await;

        let err = service_for(&server)
            .approve_vehicle(&manager(), &EntityId::Number(10))
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(404));
    }
}
