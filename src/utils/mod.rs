//! Utilidades del runner
//!
//! Este módulo contiene el manejo de errores y la salida de consola
//! compartidos por todos los pasos.

pub mod errors;
pub mod report;

pub use errors::*;
