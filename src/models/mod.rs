//! Modelos del runner
//!
//! Este módulo contiene los modelos de dominio del recorrido: actores
//! autenticados, identificadores del backend y el contexto acumulado.

pub mod context;
pub mod ids;
pub mod principal;

pub use context::*;
pub use ids::*;
pub use principal::*;
