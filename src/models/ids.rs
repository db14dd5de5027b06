//! Identificadores de entidades del backend
//!
//! El backend relacional devuelve ids numéricos, pero otros despliegues
//! devuelven strings. Esta unión sin tag conserva el tipo JSON original,
//! de modo que al reinyectar el id en payloads posteriores (driverId,
//! trip.id, user.id) viaje exactamente como llegó.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Id tal como viene del wire: número o string
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityId {
    Number(i64),
    Text(String),
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityId::Number(value) => write!(f, "{}", value),
            EntityId::Text(value) => write!(f, "{}", value),
        }
    }
}

impl From<i64> for EntityId {
    fn from(value: i64) -> Self {
        EntityId::Number(value)
    }
}

impl From<&str> for EntityId {
    fn from(value: &str) -> Self {
        EntityId::Text(value.to_string())
    }
}
