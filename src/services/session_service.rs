// ============================================================================
// SESSION SERVICE - Lectura de la sesión persistida por el login
// ============================================================================
// Esta pantalla nunca escribe la sesión: el login la crea y el logout la borra.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::UserProfile;
use crate::utils::storage::read_raw;
use crate::utils::{TOKEN_KEY, USER_DATA_KEY};

/// Acceso a la sesión persistida
pub trait SessionProvider {
    /// Token bearer; un token vacío cuenta como ausente
    fn token(&self) -> Option<String>;

    /// JSON crudo de `user_data`
    fn user_data(&self) -> Option<String>;

    /// Perfil deserializado. `Ok(None)` si no hay `user_data`.
    fn profile(&self) -> Result<Option<UserProfile>, serde_json::Error> {
        self.user_data()
            .map(|raw| serde_json::from_str(&raw))
            .transpose()
    }
}

/// Sesión leída de `window.localStorage` en cada llamada (sin cache)
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageSession;

impl SessionProvider for LocalStorageSession {
    fn token(&self) -> Option<String> {
        read_raw(TOKEN_KEY).filter(|token| !token.is_empty())
    }

    fn user_data(&self) -> Option<String> {
        read_raw(USER_DATA_KEY)
    }
}

/// Sesión en memoria
#[derive(Debug, Clone, Default)]
pub struct MemorySession {
    token: Rc<RefCell<Option<String>>>,
    user_data: Rc<RefCell<Option<String>>>,
}

impl MemorySession {
    pub fn new(token: Option<&str>, user_data: Option<&str>) -> Self {
        Self {
            token: Rc::new(RefCell::new(token.map(str::to_string))),
            user_data: Rc::new(RefCell::new(user_data.map(str::to_string))),
        }
    }

    pub fn set_token(&self, token: Option<&str>) {
        *self.token.borrow_mut() = token.map(str::to_string);
    }
}

impl SessionProvider for MemorySession {
    fn token(&self) -> Option<String> {
        self.token.borrow().clone().filter(|token| !token.is_empty())
    }

    fn user_data(&self) -> Option<String> {
        self.user_data.borrow().clone()
    }
}
