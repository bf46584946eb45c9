use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Perfil guardado por el login en `localStorage["user_data"]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub role: Option<String>,
    /// Resto de campos (username, email, ...) que esta pantalla no usa
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserProfile {
    /// `true` si el perfil declara un rol distinto del requerido.
    /// Un perfil sin rol no se considera restringido.
    pub fn declares_other_role(&self, required: &str) -> bool {
        match self.role.as_deref() {
            Some(role) if !role.is_empty() => role != required,
            _ => false,
        }
    }
}
