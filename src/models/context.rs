//! Estado acumulado del recorrido
//!
//! El contexto solo se escribe hacia adelante: cada paso lee lo que
//! produjeron los pasos anteriores y añade lo suyo. No hay mutación
//! retroactiva ni estado compartido entre corridas.

use crate::dto::booking_dto::BookingConfirmation;
use crate::dto::trip_dto::TripPostAck;
use crate::models::ids::EntityId;
use crate::models::principal::Principal;

/// Agregado efímero que los pasos van completando en orden
#[derive(Debug, Default)]
pub struct RunContext {
    pub manager: Option<Principal>,
    pub driver: Option<Principal>,
    pub customer: Option<Principal>,
    pub vehicle_id: Option<EntityId>,
    pub number_plate: Option<String>,
    pub vehicle_approved: bool,
    /// Ack de la publicación del trip; None si el paso falló (no fatal)
    pub trip_ack: Option<TripPostAck>,
    /// Trip elegido por la fase de descubrimiento
    pub trip_id: Option<EntityId>,
    pub booking: Option<BookingConfirmation>,
}
