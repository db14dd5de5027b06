//! Configuración del runner
//!
//! Este módulo contiene la configuración de entorno del runner:
//! URL base del API bajo prueba y timeouts por petición.

pub mod environment;

pub use environment::*;
