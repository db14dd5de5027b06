//! Actores autenticados del recorrido
//!
//! Un Principal es el resultado de un registro o login exitoso: identidad
//! más el token con el que firma sus llamadas posteriores.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::ids::EntityId;

/// Rol del actor en la plataforma
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Manager,
    Driver,
    Customer,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Role::Manager => "MANAGER",
            Role::Driver => "DRIVER",
            Role::Customer => "CUSTOMER",
        };
        write!(f, "{}", label)
    }
}

/// Actor autenticado contra el backend
#[derive(Debug, Clone)]
pub struct Principal {
    pub id: EntityId,
    pub name: String,
    pub email: String,
    pub role: Role,
    /// Token Bearer devuelto por auth; nunca vacío
    pub auth_token: String,
}
