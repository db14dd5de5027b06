//! DTOs del protocolo HTTP
//!
//! Este módulo contiene los requests y responses tal como viajan por el
//! wire, separados de los modelos de dominio del runner.

pub mod auth_dto;
pub mod booking_dto;
pub mod trip_dto;
pub mod vehicle_dto;
