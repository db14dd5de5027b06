//! Servicio de bookings
//!
//! Reserva el trip descubierto para el customer. El payload usa las
//! referencias anidadas `{trip: {id}, user: {id}}` que espera el backend
//! relacional, y hay un único reintento contra el endpoint alternativo.

use tracing::{error, info, warn};

use crate::client::{ApiClient, ApiResponse};
use crate::config::RunnerConfig;
use crate::dto::booking_dto::{BookingConfirmation, BookingRequest};
use crate::models::ids::EntityId;
use crate::models::principal::Principal;
use crate::services::trip_service::{FROM_LOCATION, TO_LOCATION};
use crate::utils::errors::{protocol_error, shape_error, StepResult};

const PASSENGER_COUNT: u32 = 1;
const TOTAL_PRICE: f64 = 500.0;

/// Servicio de reservas contra /bookings
pub struct BookingService {
    client: ApiClient,
    bookings_url: String,
}

impl BookingService {
    pub fn new(client: ApiClient, config: &RunnerConfig) -> Self {
        Self {
            client,
            bookings_url: config.bookings_url(),
        }
    }

    /// Reservar un asiento del trip para el customer.
    ///
    /// POST al endpoint primario; si no responde 200/201 se reintenta una
    /// única vez contra /bookings/create con el mismo payload. Los ids
    /// viajan exactamente como llegaron del backend.
    pub async fn create_booking(
        &self,
        customer: &Principal,
        trip_id: EntityId,
    ) -> StepResult<BookingConfirmation> {
        info!(
            "🎫 Booking trip ID {} for customer ID {}...",
            trip_id, customer.id
        );

        let request = BookingRequest {
            trip: trip_id.into(),
            user: customer.id.clone().into(),
            passenger_count: PASSENGER_COUNT,
            total_price: TOTAL_PRICE,
            start_location: FROM_LOCATION.to_string(),
            end_location: TO_LOCATION.to_string(),
            status: "PENDING".to_string(),
        };

        let response = self
            .client
            .post_json(&self.bookings_url, &request, Some(&customer.auth_token))
            .await?;

        if matches!(response.status, 200 | 201) {
            return confirmation_from(&response);
        }

        warn!(
            "⚠️ Booking failed ({}), retrying at /bookings/create...",
            response.status
        );

        let retry_url = format!("{}/create", self.bookings_url);
        let response = self
            .client
            .post_json(&retry_url, &request, Some(&customer.auth_token))
            .await?;

        if matches!(response.status, 200 | 201) {
            return confirmation_from(&response);
        }

        error!("❌ Booking retry failed: {}", response.body_text());
        Err(protocol_error(response.status, response.body_text()))
    }
}

fn confirmation_from(response: &ApiResponse) -> StepResult<BookingConfirmation> {
    let confirmation: BookingConfirmation = response
        .parse_json()
        .map_err(|detail| shape_error(format!("booking response: {}", detail)))?;

    match &confirmation.id {
        Some(id) => info!("✅ Booking created with ID: {}", id),
        None => info!("✅ Booking created."),
    }
    Ok(confirmation)
}
