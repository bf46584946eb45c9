// ============================================================================
// DIALOG SERVICE - Diálogos modales y avisos (SweetAlert2)
// ============================================================================

use gloo_timers::future::TimeoutFuture;
use serde::Serialize;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

use crate::services::file_service::LocalFuture;
use crate::utils::escape_html;
use crate::utils::swal_ffi::{is_confirmed, swal_available, swal_close, swal_fire, swal_show_loading};

const CONFIRM_BUTTON_COLOR: &str = "#dc3545";
const CANCEL_BUTTON_COLOR: &str = "#6c757d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeIcon {
    Success,
    Error,
    Warning,
    Info,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub icon: NoticeIcon,
    pub title: String,
    pub text: String,
    pub button: Option<String>,
}

impl Notice {
    pub fn new(icon: NoticeIcon, title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            icon,
            title: title.into(),
            text: text.into(),
            button: None,
        }
    }

    pub fn with_button(mut self, button: impl Into<String>) -> Self {
        self.button = Some(button.into());
        self
    }
}

/// Diálogo de confirmación con el nombre del elemento afectado
#[derive(Debug, Clone, PartialEq)]
pub struct ConfirmDialog {
    pub title: String,
    pub message: String,
    pub subject: String,
    pub confirm_text: String,
    pub cancel_text: String,
}

/// Colaborador de diálogos
pub trait Dialogs {
    /// Modal bloqueante confirmar/cancelar; `true` si se confirma
    fn confirm<'a>(&'a self, dialog: &'a ConfirmDialog) -> LocalFuture<'a, bool>;

    /// Aviso bloqueante; termina cuando el usuario lo cierra
    fn alert<'a>(&'a self, notice: &'a Notice) -> LocalFuture<'a, ()>;

    /// Aviso no bloqueante (no se espera)
    fn notify(&self, notice: &Notice);

    /// Aviso que se cierra solo tras `duration_ms`
    fn toast<'a>(&'a self, notice: &'a Notice, duration_ms: u32) -> LocalFuture<'a, ()>;

    /// Indicador "en curso" que el usuario no puede cerrar
    fn show_progress(&self, title: &str, text: &str);

    fn close_progress(&self);
}

#[derive(Serialize, Default)]
#[serde(rename_all = "camelCase")]
struct SwalOptions<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    icon: Option<NoticeIcon>,
    title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    confirm_button_text: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cancel_button_text: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    show_cancel_button: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    confirm_button_color: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cancel_button_color: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    show_confirm_button: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    timer: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    allow_outside_click: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    allow_escape_key: Option<bool>,
}

impl<'a> SwalOptions<'a> {
    fn notice(notice: &'a Notice) -> Self {
        Self {
            icon: Some(notice.icon),
            title: &notice.title,
            text: Some(&notice.text),
            confirm_button_text: notice.button.as_deref(),
            ..Self::default()
        }
    }

    fn confirm(dialog: &'a ConfirmDialog) -> Self {
        Self {
            icon: Some(NoticeIcon::Warning),
            title: &dialog.title,
            html: Some(format!(
                "<p>{}</p><strong>{}</strong>",
                escape_html(&dialog.message),
                escape_html(&dialog.subject)
            )),
            confirm_button_text: Some(&dialog.confirm_text),
            cancel_button_text: Some(&dialog.cancel_text),
            show_cancel_button: Some(true),
            confirm_button_color: Some(CONFIRM_BUTTON_COLOR),
            cancel_button_color: Some(CANCEL_BUTTON_COLOR),
            ..Self::default()
        }
    }
}

/// Diálogos con SweetAlert2; si `Swal` no está cargado se usan los
/// diálogos nativos del navegador.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwalDialogs;

impl SwalDialogs {
    async fn fire(options: &SwalOptions<'_>) -> Result<JsValue, JsValue> {
        let js_options = serde_wasm_bindgen::to_value(options)?;
        JsFuture::from(swal_fire(&js_options)).await
    }

    fn native_alert(notice: &Notice) {
        if let Some(window) = web_sys::window() {
            let message = format!("{}\n\n{}", notice.title, notice.text);
            if let Err(e) = window.alert_with_message(&message) {
                log::error!("❌ window.alert falló: {:?}", e);
            }
        }
    }

    async fn confirm_dialog(&self, dialog: &ConfirmDialog) -> bool {
        if !swal_available() {
            log::warn!("⚠️ Swal no disponible, usando confirm() nativo");
            let message = format!("{}\n\n{} {}", dialog.title, dialog.message, dialog.subject);
            return web_sys::window()
                .and_then(|window| window.confirm_with_message(&message).ok())
                .unwrap_or(false);
        }

        match Self::fire(&SwalOptions::confirm(dialog)).await {
            Ok(result) => is_confirmed(&result),
            Err(e) => {
                log::error!("❌ Error mostrando confirmación: {:?}", e);
                false
            }
        }
    }

    async fn alert_dialog(&self, notice: &Notice) {
        if !swal_available() {
            Self::native_alert(notice);
            return;
        }
        if let Err(e) = Self::fire(&SwalOptions::notice(notice)).await {
            log::error!("❌ Error mostrando aviso: {:?}", e);
        }
    }

    async fn timed_notice(&self, notice: &Notice, duration_ms: u32) {
        if !swal_available() {
            log::info!("ℹ️ {}: {}", notice.title, notice.text);
            TimeoutFuture::new(duration_ms).await;
            return;
        }

        let options = SwalOptions {
            timer: Some(duration_ms),
            show_confirm_button: Some(false),
            ..SwalOptions::notice(notice)
        };
        if let Err(e) = Self::fire(&options).await {
            log::error!("❌ Error mostrando aviso temporal: {:?}", e);
        }
    }
}

impl Dialogs for SwalDialogs {
    fn confirm<'a>(&'a self, dialog: &'a ConfirmDialog) -> LocalFuture<'a, bool> {
        Box::pin(self.confirm_dialog(dialog))
    }

    fn alert<'a>(&'a self, notice: &'a Notice) -> LocalFuture<'a, ()> {
        Box::pin(self.alert_dialog(notice))
    }

    fn notify(&self, notice: &Notice) {
        if !swal_available() {
            log::warn!("⚠️ {}: {}", notice.title, notice.text);
            return;
        }
        // No se espera la promesa: el aviso queda abierto mientras la pantalla sigue
        match serde_wasm_bindgen::to_value(&SwalOptions::notice(notice)) {
            Ok(options) => {
                let _ = swal_fire(&options);
            }
            Err(e) => log::error!("❌ Error serializando aviso: {}", e),
        }
    }

    fn toast<'a>(&'a self, notice: &'a Notice, duration_ms: u32) -> LocalFuture<'a, ()> {
        Box::pin(self.timed_notice(notice, duration_ms))
    }

    fn show_progress(&self, title: &str, text: &str) {
        if !swal_available() {
            log::info!("⏳ {} - {}", title, text);
            return;
        }
        let options = SwalOptions {
            title,
            text: Some(text),
            allow_outside_click: Some(false),
            allow_escape_key: Some(false),
            show_confirm_button: Some(false),
            ..SwalOptions::default()
        };
        match serde_wasm_bindgen::to_value(&options) {
            Ok(js_options) => {
                let _ = swal_fire(&js_options);
                swal_show_loading();
            }
            Err(e) => log::error!("❌ Error serializando indicador: {}", e),
        }
    }

    fn close_progress(&self) {
        if swal_available() {
            swal_close();
        }
    }
}
