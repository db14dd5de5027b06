//! Sistema de manejo de errores
//!
//! Este módulo define la taxonomía de fallos del runner: transporte,
//! protocolo y forma del payload. Cada paso devuelve un Result explícito
//! en lugar de centinelas nulos.

use thiserror::Error;

/// Fallo de transporte: conexión rechazada, timeout, DNS.
///
/// Solo se produce en la frontera del adaptador HTTP; un status de error
/// del backend NO es un fallo de transporte.
#[derive(Error, Debug)]
#[error("transport failure: {detail}")]
pub struct TransportError {
    pub detail: String,
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        Self {
            detail: err.to_string(),
        }
    }
}

/// Errores de los pasos del workflow
#[derive(Error, Debug)]
pub enum StepError {
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("protocol error: status {status}: {detail}")]
    Protocol { status: u16, detail: String },

    #[error("shape error: {0}")]
    Shape(String),

    #[error("no trips available in the system")]
    NoTripsAvailable,
}

/// Resultado tipado para los pasos del workflow
pub type StepResult<T> = Result<T, StepError>;

/// Función helper para crear errores de protocolo
pub fn protocol_error(status: u16, detail: impl Into<String>) -> StepError {
    StepError::Protocol {
        status,
        detail: detail.into(),
    }
}

/// Función helper para crear errores de forma del payload
pub fn shape_error(detail: impl Into<String>) -> StepError {
    StepError::Shape(detail.into())
}

impl StepError {
    /// true si el fallo vino de la capa de transporte
    pub fn is_transport(&self) -> bool {
        matches!(self, StepError::Transport(_))
    }

    /// Status HTTP asociado, si el fallo fue de protocolo
    pub fn status(&self) -> Option<u16> {
        match self {
            StepError::Protocol { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protocol_error_carries_status() {
        let err = protocol_error(409, "duplicate email");
        assert_eq!(err.status(), Some(409));
        assert!(err.to_string().contains("409"));
        assert!(err.to_string().contains("duplicate email"));
    }

    #[test]
    fn test_transport_error_converts_into_step_error() {
        let transport = TransportError {
            detail: "connection refused".to_string(),
        };
        let err: StepError = transport.into();
        assert!(err.is_transport());
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_shape_error_message() {
        let err = shape_error("auth response missing token");
        assert!(err.to_string().contains("shape error"));
        assert!(err.to_string().contains("missing token"));
    }

    #[test]
    fn test_no_trips_is_not_transport() {
        assert!(!StepError::NoTripsAvailable.is_transport());
    }
}
