use serde::{Deserialize, Serialize};

use crate::models::ids::EntityId;
use crate::models::principal::Role;

// Register request
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

// Login request (fallback cuando el registro no devuelve 200)
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Respuesta de /auth/register y /auth/login.
///
/// El backend es inconsistente entre endpoints: el registro devuelve `id`
/// y el login puede devolver `userId`. Se modelan ambas variantes y
/// `resolved_id` las reconcilia en un único campo canónico.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub id: Option<EntityId>,
    #[serde(default, rename = "userId")]
    pub user_id: Option<EntityId>,
    #[serde(default)]
    pub role: Option<String>,
}

impl AuthResponse {
    /// Id canónico: `id` si existe, si no `userId`.
    ///
    /// Es una función pura e idempotente: aplicarla sobre una respuesta
    /// que ya trae `id` no cambia nada.
    pub fn resolved_id(&self) -> Option<&EntityId> {
        self.id.as_ref().or(self.user_id.as_ref())
    }

    /// Token Bearer no vacío, si lo hay
    pub fn bearer_token(&self) -> Option<&str> {
        self.token.as_deref().filter(|token| !token.is_empty())
    }
}
