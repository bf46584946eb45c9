// ============================================================================
// APP - Cableado de la pantalla de historial de archivos
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::config::AppConfig;
use crate::dom::current_hostname;
use crate::models::FileId;
use crate::services::{
    ApiClient, Dialogs, FileBackend, HttpFileBackend, LocalStorageSession, Navigator,
    SessionProvider, SwalDialogs, WindowNavigator,
};
use crate::utils::TABLE_BODY_SELECTOR;
use crate::viewmodels::{DeletionViewModel, FileListViewModel, SessionGuard};
use crate::views::DomFileTable;

/// Aplicación principal
pub struct App {
    session: Rc<dyn SessionProvider>,
    guard: Rc<SessionGuard>,
    loader: Rc<FileListViewModel>,
}

impl App {
    /// Crear aplicación: resuelve el backend una sola vez y conecta las piezas
    pub fn new(config: &AppConfig) -> Result<Self, JsValue> {
        let api_config = config.api_config(&current_hostname());
        log::info!(
            "🌐 Backend: {} ({:?})",
            api_config.base_url,
            api_config.environment
        );

        let session: Rc<dyn SessionProvider> = Rc::new(LocalStorageSession);
        let dialogs: Rc<dyn Dialogs> = Rc::new(SwalDialogs);
        let navigator: Rc<dyn Navigator> = Rc::new(WindowNavigator);
        let backend: Rc<dyn FileBackend> = Rc::new(HttpFileBackend::new(ApiClient::new(
            &api_config,
            session.clone(),
        )));

        let table = Rc::new(DomFileTable::mount(
            TABLE_BODY_SELECTOR,
            navigator.clone(),
            &config.language,
        )?);

        let loader = Rc::new(FileListViewModel::new(
            session.clone(),
            backend.clone(),
            table.clone(),
            dialogs.clone(),
            &config.detail_page,
            &config.language,
        ));

        let deletion = Rc::new(DeletionViewModel::new(
            session.clone(),
            backend,
            dialogs.clone(),
            loader.clone(),
            &config.language,
            config.success_notice_ms,
        ));

        table.set_on_delete(Rc::new(move |id: FileId, name: String| {
            let deletion = deletion.clone();
            spawn_local(async move {
                let state = deletion.run(id, &name).await;
                log::debug!("🗑️ Flujo de eliminación terminado: {:?}", state);
            });
        }));

        let guard = Rc::new(SessionGuard::new(
            dialogs,
            navigator,
            &config.admin_role,
            &config.login_url,
            &config.home_url,
            &config.language,
        ));

        Ok(Self {
            session,
            guard,
            loader,
        })
    }

    /// Control de acceso y primera carga
    pub fn start(&self) {
        let session = self.session.clone();
        let guard = self.guard.clone();
        let loader = self.loader.clone();
        spawn_local(async move {
            if !guard.check_and_enforce(session.as_ref()).await {
                return;
            }
            let outcome = loader.load().await;
            log::info!("📋 Carga inicial: {:?}", outcome);
        });
    }

    /// Recargar el listado (sin volver a pasar por el control de acceso)
    pub fn reload(&self) {
        let loader = self.loader.clone();
        spawn_local(async move {
            let outcome = loader.load().await;
            log::info!("🔄 Recarga: {:?}", outcome);
        });
    }
}
