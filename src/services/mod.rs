//! Services module
//!
//! Este módulo contiene los pasos del recorrido contra el backend. Cada
//! servicio encapsula las llamadas y la tolerancia de forma de su área:
//! auth, vehículos, trips y bookings.

pub mod auth_service;
pub mod booking_service;
pub mod trip_service;
pub mod vehicle_service;

pub use auth_service::*;
pub use booking_service::*;
pub use trip_service::*;
pub use vehicle_service::*;
