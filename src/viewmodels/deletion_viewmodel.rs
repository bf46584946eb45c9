// ============================================================================
// DELETION VIEWMODEL - Confirmar → eliminar → avisar → recargar
// ============================================================================
// Máquina de estados explícita. Cada `step()` hace UNA transición con su
// efecto; `run()` avanza hasta un estado final. Cada clic crea su propio
// flujo (no se deduplican clics repetidos).
// ============================================================================

use std::rc::Rc;

use thiserror::Error;

use crate::models::FileId;
use crate::services::{ApiError, ConfirmDialog, Dialogs, FileBackend, Notice, NoticeIcon, SessionProvider};
use crate::utils::i18n::t;
use crate::viewmodels::file_list_viewmodel::FileListViewModel;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeleteError {
    #[error("token de autenticación ausente")]
    MissingToken,
    #[error("sin permisos (HTTP 403)")]
    Forbidden,
    #[error("archivo inexistente (HTTP 404)")]
    NotFound,
    #[error("HTTP {0}")]
    Status(u16),
    #[error("network error: {0}")]
    Network(String),
}

impl From<ApiError> for DeleteError {
    fn from(error: ApiError) -> Self {
        match error {
            ApiError::MissingToken => DeleteError::MissingToken,
            ApiError::Status(403) => DeleteError::Forbidden,
            ApiError::Status(404) => DeleteError::NotFound,
            ApiError::Status(code) => DeleteError::Status(code),
            ApiError::Network(message) | ApiError::Parse(message) => DeleteError::Network(message),
        }
    }
}

impl DeleteError {
    /// Texto para el usuario
    pub fn message(&self, lang: &str) -> String {
        match self {
            DeleteError::MissingToken => t("token_no_encontrado", lang),
            DeleteError::Forbidden => t("sin_permisos", lang),
            DeleteError::NotFound => t("archivo_no_existe", lang),
            DeleteError::Status(code) => format!("{}: {}", t("error_al_eliminar", lang), code),
            DeleteError::Network(message) if message.trim().is_empty() => t("no_se_pudo_eliminar", lang),
            DeleteError::Network(message) => message.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeletionTarget {
    pub id: FileId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DeletionState {
    Idle,
    /// Diálogo de confirmación abierto
    Confirming,
    /// Petición DELETE en curso
    Requesting,
    /// Resultado pendiente de comunicar
    Reporting(Result<(), DeleteError>),
    /// Éxito comunicado, falta recargar la tabla
    Refreshing,
    Done,
    Failed(DeleteError),
    Cancelled,
}

impl DeletionState {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            DeletionState::Done | DeletionState::Failed(_) | DeletionState::Cancelled
        )
    }
}

/// Dependencias compartidas por todos los flujos de eliminación
pub struct DeletionViewModel {
    session: Rc<dyn SessionProvider>,
    backend: Rc<dyn FileBackend>,
    dialogs: Rc<dyn Dialogs>,
    loader: Rc<FileListViewModel>,
    language: String,
    success_notice_ms: u32,
}

impl DeletionViewModel {
    pub fn new(
        session: Rc<dyn SessionProvider>,
        backend: Rc<dyn FileBackend>,
        dialogs: Rc<dyn Dialogs>,
        loader: Rc<FileListViewModel>,
        language: &str,
        success_notice_ms: u32,
    ) -> Self {
        Self {
            session,
            backend,
            dialogs,
            loader,
            language: language.to_string(),
            success_notice_ms,
        }
    }

    pub fn start(&self, id: FileId, name: &str) -> DeletionWorkflow<'_> {
        DeletionWorkflow {
            viewmodel: self,
            target: DeletionTarget {
                id,
                name: name.to_string(),
            },
            state: DeletionState::Idle,
        }
    }

    /// Flujo completo para un archivo; devuelve el estado final
    pub async fn run(&self, id: FileId, name: &str) -> DeletionState {
        self.start(id, name).run().await
    }

    async fn confirm(&self, target: &DeletionTarget) -> bool {
        let lang = self.language.as_str();
        let dialog = ConfirmDialog {
            title: t("estas_seguro", lang),
            message: t("a_punto_de_eliminar", lang),
            subject: target.name.clone(),
            confirm_text: t("si_eliminar", lang),
            cancel_text: t("cancelar", lang),
        };
        self.dialogs.confirm(&dialog).await
    }

    async fn request(&self, id: &FileId) -> Result<(), DeleteError> {
        if self.session.token().is_none() {
            return Err(DeleteError::MissingToken);
        }

        let lang = self.language.as_str();
        self.dialogs
            .show_progress(&t("eliminando", lang), &t("por_favor_espere", lang));
        let result = self.backend.delete_file(id).await.map_err(DeleteError::from);
        self.dialogs.close_progress();
        result
    }

    async fn report_success(&self) {
        let lang = self.language.as_str();
        let notice = Notice::new(
            NoticeIcon::Success,
            t("eliminado", lang),
            t("eliminado_correctamente", lang),
        );
        self.dialogs.toast(&notice, self.success_notice_ms).await;
    }

    async fn report_failure(&self, error: &DeleteError) {
        log::error!("❌ Error al eliminar: {}", error);
        let lang = self.language.as_str();
        let notice = Notice::new(NoticeIcon::Error, t("error", lang), error.message(lang));
        self.dialogs.alert(&notice).await;
    }
}

/// Un flujo de eliminación concreto
pub struct DeletionWorkflow<'a> {
    viewmodel: &'a DeletionViewModel,
    target: DeletionTarget,
    state: DeletionState,
}

impl<'a> DeletionWorkflow<'a> {
    pub fn state(&self) -> &DeletionState {
        &self.state
    }

    pub fn target(&self) -> &DeletionTarget {
        &self.target
    }

    /// Una transición
    pub async fn step(&mut self) -> &DeletionState {
        let vm = self.viewmodel;
        let next = match std::mem::replace(&mut self.state, DeletionState::Idle) {
            DeletionState::Idle => DeletionState::Confirming,
            DeletionState::Confirming => {
                if vm.confirm(&self.target).await {
                    DeletionState::Requesting
                } else {
                    log::info!("↩️ Eliminación de '{}' cancelada", self.target.name);
                    DeletionState::Cancelled
                }
            }
            DeletionState::Requesting => DeletionState::Reporting(vm.request(&self.target.id).await),
            DeletionState::Reporting(Ok(())) => {
                vm.report_success().await;
                DeletionState::Refreshing
            }
            DeletionState::Reporting(Err(error)) => {
                vm.report_failure(&error).await;
                DeletionState::Failed(error)
            }
            DeletionState::Refreshing => {
                vm.loader.load().await;
                DeletionState::Done
            }
            terminal => terminal,
        };
        self.state = next;
        &self.state
    }

    pub async fn run(mut self) -> DeletionState {
        while !self.state.is_terminal() {
            self.step().await;
        }
        self.state
    }
}
