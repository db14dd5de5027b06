//! Orquestador del recorrido completo
//!
//! Secuencia los pasos del flujo marketplace: registro de los tres
//! actores, alta y aprobación del vehículo, publicación del trip y
//! reserva final. Los pasos corren estrictamente en orden y cada uno
//! lee solo lo que produjeron los anteriores.

use tracing::{error, warn};

use crate::client::ApiClient;
use crate::config::RunnerConfig;
use crate::models::context::RunContext;
use crate::models::principal::{Principal, Role};
use crate::services::auth_service::AuthService;
use crate::services::booking_service::BookingService;
use crate::services::trip_service::TripService;
use crate::services::vehicle_service::VehicleService;
use crate::utils::errors::StepResult;
use crate::utils::report;

/// Credenciales fijas del escenario
const SCENARIO_PASSWORD: &str = "pass123";
const MANAGER_IDENTITY: (&str, &str) = ("Test Manager", "mgr_int@test.com");
const DRIVER_IDENTITY: (&str, &str) = ("Test Driver", "dvr_int@test.com");
const CUSTOMER_IDENTITY: (&str, &str) = ("Test Customer", "cust_int@test.com");

/// Etapa del recorrido, para atribuir fallos en el veredicto
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JourneyStage {
    Registration,
    VehicleSetup,
    VehicleApproval,
    TripPublication,
    TripBooking,
}

impl JourneyStage {
    /// Nombre de la etapa tal como aparece en el veredicto final
    pub fn label(&self) -> &'static str {
        match self {
            JourneyStage::Registration => "REGISTRATION",
            JourneyStage::VehicleSetup => "VEHICLE SETUP",
            JourneyStage::VehicleApproval => "VEHICLE APPROVAL",
            JourneyStage::TripPublication => "TRIP POSTING",
            JourneyStage::TripBooking => "BOOKING",
        }
    }
}

/// Veredicto agregado de la corrida
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Passed,
    Failed,
}

/// Resultado final de la corrida: veredicto, etapa del fallo si lo hubo
/// y el contexto acumulado hasta ese punto.
#[derive(Debug)]
pub struct JourneyReport {
    pub verdict: Verdict,
    pub failed_stage: Option<JourneyStage>,
    pub context: RunContext,
}

impl JourneyReport {
    fn passed(context: RunContext) -> Self {
        Self {
            verdict: Verdict::Passed,
            failed_stage: None,
            context,
        }
    }

    fn failed_at(stage: JourneyStage, context: RunContext) -> Self {
        Self {
            verdict: Verdict::Failed,
            failed_stage: Some(stage),
            context,
        }
    }
}

/// Runner del recorrido end-to-end
pub struct JourneyRunner {
    auth: AuthService,
    vehicles: VehicleService,
    trips: TripService,
    bookings: BookingService,
}

impl JourneyRunner {
    /// Construye el runner con un adaptador HTTP compartido entre pasos
    pub fn new(config: &RunnerConfig) -> StepResult<Self> {
        let client = ApiClient::new(config)?;

        Ok(Self {
            auth: AuthService::new(client.clone(), config),
            vehicles: VehicleService::new(client.clone(), config),
            trips: TripService::new(client.clone(), config),
            bookings: BookingService::new(client, config),
        })
    }

    /// Ejecuta el recorrido completo y devuelve el reporte.
    ///
    /// Política de aborto: registro, vehículo, aprobación y booking son
    /// fatales; la publicación del trip no lo es, porque puede quedar un
    /// trip reservable de una corrida anterior.
    pub async fn run(&self) -> JourneyReport {
        let mut context = RunContext::default();

        // 1. Registro de los tres actores. Se intentan los tres aunque
        //    alguno falle, y cualquier fallo aborta la corrida.
        report::print_step("User Registration");
        let manager = self.register(MANAGER_IDENTITY, Role::Manager).await;
        let driver = self.register(DRIVER_IDENTITY, Role::Driver).await;
        let customer = self.register(CUSTOMER_IDENTITY, Role::Customer).await;

        let (manager, driver, customer) = match (manager, driver, customer) {
            (Ok(manager), Ok(driver), Ok(customer)) => (manager, driver, customer),
            _ => {
                error!("❌ Critical: user registration failed. Aborting.");
                return JourneyReport::failed_at(JourneyStage::Registration, context);
            }
        };
        context.manager = Some(manager.clone());
        context.driver = Some(driver.clone());
        context.customer = Some(customer.clone());

        // 2. Alta del vehículo del driver
        report::print_step("Vehicle Setup");
        let vehicle = match self.vehicles.create_vehicle(&driver).await {
            Ok(vehicle) => vehicle,
            Err(err) => {
                error!("❌ Critical: vehicle setup failed: {}. Aborting.", err);
                return JourneyReport::failed_at(JourneyStage::VehicleSetup, context);
            }
        };
        context.vehicle_id = Some(vehicle.id.clone());
        context.number_plate = vehicle.number_plate.clone();

        // 3. Aprobación por el manager
        report::print_step("Manager Approval");
        if let Err(err) = self.vehicles.approve_vehicle(&manager, &vehicle.id).await {
            error!("❌ Critical: vehicle approval failed: {}. Aborting.", err);
            return JourneyReport::failed_at(JourneyStage::VehicleApproval, context);
        }
        context.vehicle_approved = true;

        // 4. Publicación del trip. No fatal: puede haber quedado un trip
        //    reservable de una corrida anterior.
        report::print_step("Post Trip");
        match self.trips.post_trip(&driver).await {
            Ok(ack) => context.trip_ack = Some(ack),
            Err(err) => {
                warn!(
                    "⚠️ Trip posting failed ({}), an earlier trip may still be bookable...",
                    err
                );
            }
        }

        // 5. Descubrimiento y reserva
        report::print_step("Book Trip");
        let trip_id = match self.trips.discover_trip().await {
            Ok(trip_id) => trip_id,
            Err(err) => {
                error!("❌ Trip discovery failed: {}", err);
                return JourneyReport::failed_at(JourneyStage::TripBooking, context);
            }
        };
        context.trip_id = Some(trip_id.clone());

        match self.bookings.create_booking(&customer, trip_id).await {
            Ok(confirmation) => {
                context.booking = Some(confirmation);
                JourneyReport::passed(context)
            }
            Err(err) => {
                error!("❌ Booking failed: {}", err);
                JourneyReport::failed_at(JourneyStage::TripBooking, context)
            }
        }
    }

    async fn register(&self, identity: (&str, &str), role: Role) -> StepResult<Principal> {
        let (name, email) = identity;
        self.auth
            .register_or_login(name, email, SCENARIO_PASSWORD, role)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ids::EntityId;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn runner_for(server: &MockServer) -> JourneyRunner {
        let config = RunnerConfig::with_base_url(server.uri());
        JourneyRunner::new(&config).unwrap()
    }

    /// Monta las respuestas de auth para los tres actores del escenario
    async fn mount_auth(server: &MockServer) {
        for (email, id) in [
            ("mgr_int@test.com", 1),
            ("dvr_int@test.com", 2),
            ("cust_int@test.com", 3),
        ] {
            Mock::given(method("POST"))
                .and(path("/auth/register"))
                .and(body_partial_json(json!({"email": email})))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                    "token": format!("mock-jwt-{}", id),
                    "id": id
                })))
                .mount(server)
                .await;
        }
    }

    async fn mount_vehicle_flow(server: &MockServer) {
        Mock::given(method("POST"))
            .and(path("/vehicles"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "id": 10,
                "numberPlate": "TN-TEST-1755800000",
                "status": "Pending"
            })))
            .mount(server)
            .await;
        Mock::given(method("PUT"))
            .and(path("/vehicles/10"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 10,
                "status": "Active"
            })))
            .mount(server)
            .await;
    }

    async fn mount_trip_flow(server: &MockServer) {
        Mock::given(method("POST"))
            .and(path("/trips/post"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "message": "Trip posted successfully",
                "trip": {"id": 77}
            })))
            .mount(server)
            .await;
        Mock::given(method("GET"))
            .and(path("/trips/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
                "id": 77,
                "fromLocation": "Chennai",
                "toLocation": "Bangalore"
            }])))
            .mount(server)
            .await;
    }

    async fn mount_booking(server: &MockServer) {
        Mock::given(method("POST"))
            .and(path("/bookings"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "id": 500,
                "status": "PENDING"
            })))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_full_journey_passes_and_fills_context() {
        let server = MockServer::start().await;
        mount_auth(&server).await;
        mount_vehicle_flow(&server).await;
        mount_trip_flow(&server).await;
        mount_booking(&server).await;

        let report = runner_for(&server).await.run().await;

        assert_eq!(report.verdict, Verdict::Passed);
        assert_eq!(report.failed_stage, None);

        let context = report.context;
        assert_eq!(context.manager.unwrap().id, EntityId::Number(1));
        assert_eq!(context.driver.as_ref().unwrap().id, EntityId::Number(2));
        assert_eq!(context.customer.unwrap().id, EntityId::Number(3));
        assert_eq!(context.vehicle_id, Some(EntityId::Number(10)));
        assert_eq!(context.number_plate.as_deref(), Some("TN-TEST-1755800000"));
        assert!(context.vehicle_approved);
        assert_eq!(context.trip_ack.unwrap().id, "77");
        assert_eq!(context.trip_id, Some(EntityId::Number(77)));
        assert_eq!(context.booking.unwrap().id, Some(EntityId::Number(500)));
    }

    #[tokio::test]
    async fn test_registration_failure_aborts_before_vehicles() {
        let server = MockServer::start().await;
        // Los tres registros y sus logins de fallback fallan
        Mock::given(method("POST"))
            .and(path("/auth/register"))
            .respond_with(ResponseTemplate::new(500).set_body_string("db down"))
            .expect(3)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(ResponseTemplate::new(401).set_body_string("nope"))
            .expect(3)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/vehicles"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 10})))
            .expect(0)
            .mount(&server)
            .await;

        let report = runner_for(&server).await.run().await;

        assert_eq!(report.verdict, Verdict::Failed);
        assert_eq!(report.failed_stage, Some(JourneyStage::Registration));
        assert!(report.context.manager.is_none());
    }

    #[tokio::test]
    async fn test_vehicle_failure_is_attributed_to_vehicle_setup() {
        let server = MockServer::start().await;
        mount_auth(&server).await;
        Mock::given(method("POST"))
            .and(path("/vehicles"))
            .respond_with(ResponseTemplate::new(500).set_body_string("storage error"))
            .expect(1)
            .mount(&server)
            .await;
        // Nada posterior debe ejecutarse, ni siquiera la aprobación
        Mock::given(method("PUT"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/trips/post"))
            .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
            .expect(0)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/bookings"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 1})))
            .expect(0)
            .mount(&server)
            .await;

        let report = runner_for(&server).await.run().await;

        assert_eq!(report.verdict, Verdict::Failed);
        assert_eq!(report.failed_stage, Some(JourneyStage::VehicleSetup));
        // El registro sí llegó a completarse
        assert!(report.context.manager.is_some());
        assert_eq!(report.context.vehicle_id, None);
    }

    #[tokio::test]
    async fn test_approval_failure_stops_before_trip_posting() {
        let server = MockServer::start().await;
        mount_auth(&server).await;
        Mock::given(method("POST"))
            .and(path("/vehicles"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 10})))
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .and(path("/vehicles/10"))
            .respond_with(ResponseTemplate::new(403).set_body_string("not a manager"))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/trips/post"))
            .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
            .expect(0)
            .mount(&server)
            .await;

        let report = runner_for(&server).await.run().await;

        assert_eq!(report.verdict, Verdict::Failed);
        assert_eq!(report.failed_stage, Some(JourneyStage::VehicleApproval));
        assert_eq!(report.context.vehicle_id, Some(EntityId::Number(10)));
        assert!(!report.context.vehicle_approved);
    }

    #[tokio::test]
    async fn test_trip_posting_failure_is_not_fatal() {
        let server = MockServer::start().await;
        mount_auth(&server).await;
        mount_vehicle_flow(&server).await;
        // La publicación falla pero la búsqueda encuentra un trip anterior
        Mock::given(method("POST"))
            .and(path("/trips/post"))
            .respond_with(ResponseTemplate::new(500).set_body_string("validation error"))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/trips/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
                "id": 42,
                "fromLocation": "Chennai",
                "toLocation": "Bangalore"
            }])))
            .mount(&server)
            .await;
        mount_booking(&server).await;

        let report = runner_for(&server).await.run().await;

        assert_eq!(report.verdict, Verdict::Passed);
        assert!(report.context.trip_ack.is_none());
        assert_eq!(report.context.trip_id, Some(EntityId::Number(42)));
    }

    #[tokio::test]
    async fn test_degenerate_trip_ack_still_books() {
        let server = MockServer::start().await;
        mount_auth(&server).await;
        mount_vehicle_flow(&server).await;
        // 200 con cuerpo vacío
        Mock::given(method("POST"))
            .and(path("/trips/post"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/trips/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
                "id": 77,
                "fromLocation": "Chennai",
                "toLocation": "Bangalore"
            }])))
            .mount(&server)
            .await;
        mount_booking(&server).await;

        let report = runner_for(&server).await.run().await;

        assert_eq!(report.verdict, Verdict::Passed);
        let ack = report.context.trip_ack.unwrap();
        assert_eq!(ack.status, "success");
        assert_eq!(ack.id, "unknown");
    }

    #[tokio::test]
    async fn test_no_bookable_trip_fails_at_booking_stage() {
        let server = MockServer::start().await;
        mount_auth(&server).await;
        mount_vehicle_flow(&server).await;
        Mock::given(method("POST"))
            .and(path("/trips/post"))
            .respond_with(ResponseTemplate::new(500).set_body_string("rejected"))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/trips/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/trips"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let report = runner_for(&server).await.run().await;

        assert_eq!(report.verdict, Verdict::Failed);
        assert_eq!(report.failed_stage, Some(JourneyStage::TripBooking));
        assert!(report.context.booking.is_none());
    }

    #[tokio::test]
    async fn test_stage_labels_for_verdict_line() {
        assert_eq!(JourneyStage::Registration.label(), "REGISTRATION");
        assert_eq!(JourneyStage::TripBooking.label(), "BOOKING");
    }
}
