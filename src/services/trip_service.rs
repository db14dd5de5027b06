//! Servicio de trips
//!
//! Publica el trip del escenario y descubre un trip reservable. El
//! descubrimiento no confía en el filtro del servidor: la búsqueda
//! filtrada es solo una optimización y el re-filtro local es el que
//! decide qué trip se reserva.

use chrono::{Local, NaiveDate};
use tracing::{error, info, warn};

use crate::client::ApiClient;
use crate::config::RunnerConfig;
use crate::dto::trip_dto::{TripPostAck, TripRequest, TripSummary};
use crate::models::ids::EntityId;
use crate::models::principal::Principal;
use crate::utils::errors::{protocol_error, shape_error, StepError, StepResult, TransportError};

/// Ruta fija del escenario
pub const FROM_LOCATION: &str = "Chennai";
pub const TO_LOCATION: &str = "Bangalore";

const AVAILABLE_TIME: &str = "10:00";
const SEATS_AVAILABLE: u32 = 3;
const PRICE_PER_SEAT: f64 = 500.0;
const FROM_LAT: f64 = 13.0827;
const FROM_LNG: f64 = 80.2707;
const TO_LAT: f64 = 12.9716;
const TO_LNG: f64 = 77.5946;

/// Servicio de publicación y descubrimiento contra /trips
pub struct TripService {
    client: ApiClient,
    trips_url: String,
}

impl TripService {
    pub fn new(client: ApiClient, config: &RunnerConfig) -> Self {
        Self {
            client,
            trips_url: config.trips_url(),
        }
    }

    /// Publicar el trip Chennai -> Bangalore de mañana.
    ///
    /// Acepta 200 o 201. Un 2xx con cuerpo no parseable cuenta como
    /// publicado (ack degenerado): hay backends que responden texto plano.
    pub async fn post_trip(&self, driver: &Principal) -> StepResult<TripPostAck> {
        info!("🛣️ Posting trip for driver ID: {}...", driver.id);

        let request = TripRequest {
            driver_id: driver.id.clone(),
            from_location: FROM_LOCATION.to_string(),
            to_location: TO_LOCATION.to_string(),
            available_date: available_date_for(Local::now().date_naive()),
            available_time: AVAILABLE_TIME.to_string(),
            seats_available: SEATS_AVAILABLE,
            price_per_seat: PRICE_PER_SEAT,
            from_lat: FROM_LAT,
            from_lng: FROM_LNG,
            to_lat: TO_LAT,
            to_lng: TO_LNG,
        };

        let response = self
            .client
            .post_json(
                &format!("{}/post", self.trips_url),
                &request,
                Some(&driver.auth_token),
            )
            .await?;

        if !matches!(response.status, 200 | 201) {
            error!("❌ Trip posting failed: {}", response.body_text());
            return Err(protocol_error(response.status, response.body_text()));
        }

        let ack = match response.json() {
            Some(body) => TripPostAck::from_json(body),
            None => TripPostAck::degenerate(),
        };
        info!("✅ Trip posted. Status: {}, ID: {}", ack.status, ack.id);
        Ok(ack)
    }

    /// Descubrir un trip reservable para la ruta del escenario.
    ///
    /// Orden de preferencia: búsqueda filtrada del servidor, listado
    /// completo si la búsqueda falla o viene vacía, y sobre lo obtenido
    /// el re-filtro local por substring. Si ninguna entrada coincide se
    /// degrada a la primera disponible.
    pub async fn discover_trip(&self) -> StepResult<EntityId> {
        info!(
            "🔍 Searching for trip {} -> {}...",
            FROM_LOCATION, TO_LOCATION
        );

        let search_url = format!(
            "{}/search?from={}&to={}",
            self.trips_url,
            urlencoding::encode(FROM_LOCATION),
            urlencoding::encode(TO_LOCATION)
        );

        let mut trips = self.fetch_trips(&search_url).await?;

        if trips.as_deref().map_or(true, |list| list.is_empty()) {
            warn!("⚠️ Filtered search failed or came back empty, trying the full list...");
            trips = self.fetch_trips(&self.trips_url).await?;
        }

        let trips = match trips {
            Some(list) if !list.is_empty() => list,
            _ => {
                error!("❌ No trips found in the system.");
                return Err(StepError::NoTripsAvailable);
            }
        };

        // El filtro del servidor es best-effort; el re-filtro local decide
        let exact = trips
            .iter()
            .find(|trip| trip.matches_route(FROM_LOCATION, TO_LOCATION));
        if exact.is_none() {
            warn!("⚠️ Route match not found, using the first available trip.");
        }
        let selected = exact.unwrap_or(&trips[0]);

        match &selected.id {
            Some(id) => {
                info!("✅ Found trip ID: {}", id);
                Ok(id.clone())
            }
            None => Err(shape_error("selected trip entry has no id")),
        }
    }

    /// Una consulta de colección: None si el status no es 200 o el cuerpo
    /// no es un array de trips. Solo el transporte corta la operación.
    async fn fetch_trips(&self, url: &str) -> Result<Option<Vec<TripSummary>>, TransportError> {
        let response = self.client.get(url).await?;
        if response.status != 200 {
            return Ok(None);
        }
        Ok(response.parse_json::<Vec<TripSummary>>().ok())
    }
}

/// Fecha del trip publicado: siempre el día siguiente, en ISO 8601
pub fn available_date_for(today: NaiveDate) -> String {
    (today + chrono::Duration::days(1))
        .format("%Y-%m-%d")
        .to_string()
}
