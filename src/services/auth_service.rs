//! Servicio de autenticación
//!
//! Implementa el paso registro-o-login: intenta el alta y, si el backend
//! no responde 200 (p.ej. el usuario ya existe de una corrida anterior),
//! cae a login con las mismas credenciales.

use tracing::{error, info, warn};

use crate::client::{ApiClient, ApiResponse};
use crate::config::RunnerConfig;
use crate::dto::auth_dto::{AuthResponse, LoginRequest, RegisterRequest};
use crate::models::principal::{Principal, Role};
use crate::utils::errors::{protocol_error, shape_error, StepResult};

/// Servicio de registro y login contra /auth
pub struct AuthService {
    client: ApiClient,
    auth_url: String,
}

impl AuthService {
    pub fn new(client: ApiClient, config: &RunnerConfig) -> Self {
        Self {
            client,
            auth_url: config.auth_url(),
        }
    }

    /// Registrar un actor o, si el registro no devuelve 200, loguearlo.
    ///
    /// Un status de error en el registro NO es fatal por sí mismo:
    /// normalmente significa que el usuario quedó de una corrida anterior.
    /// Solo si el login posterior también falla el paso devuelve error.
    pub async fn register_or_login(
        &self,
        name: &str,
        email: &str,
        password: &str,
        role: Role,
    ) -> StepResult<Principal> {
        info!("🔑 Registering {}: {}...", role, email);

        let register = RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            role,
        };
        let response = self
            .client
            .post_json(&format!("{}/register", self.auth_url), &register, None)
            .await?;

        if response.status == 200 {
            return self.principal_from(&response, name, email, role, "Registered");
        }

        warn!(
            "⚠️ Registration failed ({}), attempting login...",
            response.status
        );

        let login = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response = self
            .client
            .post_json(&format!("{}/login", self.auth_url), &login, None)
            .await?;

        if response.status != 200 {
            error!("❌ Login failed: {}", response.body_text());
            return Err(protocol_error(response.status, response.body_text()));
        }

        self.principal_from(&response, name, email, role, "Logged in")
    }

    /// Convierte una respuesta auth 200 en un Principal utilizable.
    /// Exige token no vacío y algún id (canónico o legacy `userId`).
    fn principal_from(
        &self,
        response: &ApiResponse,
        name: &str,
        email: &str,
        role: Role,
        via: &str,
    ) -> StepResult<Principal> {
        let auth: AuthResponse = response
            .parse_json()
            .map_err(|detail| shape_error(format!("auth response: {}", detail)))?;

        let token = auth
            .bearer_token()
            .ok_or_else(|| shape_error("auth response missing token"))?;
        let id = auth
            .resolved_id()
            .ok_or_else(|| shape_error("auth response missing id/userId"))?;

        info!(
            "✅ {} successfully. ID: {}, Token: {}...",
            via,
            id,
            token_preview(token)
        );

        Ok(Principal {
            id: id.clone(),
            name: name.to_string(),
            email: email.to_string(),
            role,
            auth_token: token.to_string(),
        })
    }
}

/// Primeros 10 caracteres del token, para log sin filtrar credenciales
fn token_preview(token: &str) -> String {
    token.chars().take(10).collect()
}
