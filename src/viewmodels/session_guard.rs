// ============================================================================
// SESSION GUARD - Control de acceso antes de pintar la pantalla
// ============================================================================

use std::rc::Rc;

use crate::services::{Dialogs, Navigator, Notice, NoticeIcon, SessionProvider};
use crate::utils::i18n::t;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    Granted,
    Unauthenticated,
    Forbidden { role: String },
}

pub struct SessionGuard {
    dialogs: Rc<dyn Dialogs>,
    navigator: Rc<dyn Navigator>,
    admin_role: String,
    login_url: String,
    home_url: String,
    language: String,
}

impl SessionGuard {
    pub fn new(
        dialogs: Rc<dyn Dialogs>,
        navigator: Rc<dyn Navigator>,
        admin_role: &str,
        login_url: &str,
        home_url: &str,
        language: &str,
    ) -> Self {
        Self {
            dialogs,
            navigator,
            admin_role: admin_role.to_string(),
            login_url: login_url.to_string(),
            home_url: home_url.to_string(),
            language: language.to_string(),
        }
    }

    /// Decide el acceso. Un `user_data` ilegible no bloquea (solo se registra).
    pub fn check(&self, session: &dyn SessionProvider) -> Access {
        if session.token().is_none() {
            log::warn!("🔒 Sin token en localStorage");
            return Access::Unauthenticated;
        }

        match session.profile() {
            Ok(Some(profile)) if profile.declares_other_role(&self.admin_role) => {
                let role = profile.role.unwrap_or_default();
                log::warn!("🚫 Rol '{}' sin acceso de administrador", role);
                Access::Forbidden { role }
            }
            Ok(_) => Access::Granted,
            Err(e) => {
                log::error!("❌ Error al verificar rol: {}", e);
                Access::Granted
            }
        }
    }

    /// Aplica la decisión: aviso bloqueante + redirección si no hay acceso.
    /// Devuelve `true` si la pantalla puede continuar.
    pub async fn enforce(&self, access: &Access) -> bool {
        let lang = self.language.as_str();
        let (notice, target) = match access {
            Access::Granted => return true,
            Access::Unauthenticated => (
                Notice::new(
                    NoticeIcon::Warning,
                    t("no_autenticado", lang),
                    t("debe_iniciar_sesion", lang),
                )
                .with_button(t("ir_a_login", lang)),
                &self.login_url,
            ),
            Access::Forbidden { .. } => (
                Notice::new(
                    NoticeIcon::Error,
                    t("acceso_denegado", lang),
                    t("solo_administradores", lang),
                )
                .with_button(t("volver", lang)),
                &self.home_url,
            ),
        };

        self.dialogs.alert(&notice).await;
        self.navigator.navigate(target);
        false
    }

    pub async fn check_and_enforce(&self, session: &dyn SessionProvider) -> bool {
        let access = self.check(session);
        self.enforce(&access).await
    }
}
