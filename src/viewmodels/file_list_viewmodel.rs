// ============================================================================
// FILE LIST VIEWMODEL - Carga del listado de archivos
// ============================================================================
// Cada carga toma un número de generación: si otra carga empezó después,
// la respuesta vieja se descarta y no pisa la tabla.
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

use crate::models::FileListResponse;
use crate::services::{Dialogs, FileBackend, Notice, NoticeIcon, SessionProvider};
use crate::utils::i18n::t;
use crate::viewmodels::file_rows::{Placeholder, TableBody, TableView};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Sin token: no se llamó al backend
    SignInRequired,
    /// Tabla pintada con N archivos
    Rendered(usize),
    /// Error de red, HTTP o JSON
    Failed,
    /// JSON con forma desconocida
    Malformed,
    /// Otra carga más reciente tomó la tabla
    Superseded,
}

pub struct FileListViewModel {
    session: Rc<dyn SessionProvider>,
    backend: Rc<dyn FileBackend>,
    table: Rc<dyn TableView>,
    dialogs: Rc<dyn Dialogs>,
    detail_page: String,
    language: String,
    generation: Cell<u64>,
}

impl FileListViewModel {
    pub fn new(
        session: Rc<dyn SessionProvider>,
        backend: Rc<dyn FileBackend>,
        table: Rc<dyn TableView>,
        dialogs: Rc<dyn Dialogs>,
        detail_page: &str,
        language: &str,
    ) -> Self {
        Self {
            session,
            backend,
            table,
            dialogs,
            detail_page: detail_page.to_string(),
            language: language.to_string(),
            generation: Cell::new(0),
        }
    }

    /// Cargar archivos y pintar la tabla
    pub async fn load(&self) -> LoadOutcome {
        // También sin token: una carga anterior en vuelo no debe pisar el aviso
        let generation = self.generation.get() + 1;
        self.generation.set(generation);

        if self.session.token().is_none() {
            log::error!("❌ Token no encontrado. El usuario no está autenticado.");
            self.table.show(TableBody::Placeholder(Placeholder::SignInRequired));
            return LoadOutcome::SignInRequired;
        }

        self.table.show(TableBody::Placeholder(Placeholder::Loading));
        log::info!("📋 Cargando archivos (carga #{})", generation);

        let result = self.backend.list_files().await;

        if self.generation.get() != generation {
            log::warn!("⏭️ Respuesta de la carga #{} descartada: hay una más reciente", generation);
            return LoadOutcome::Superseded;
        }

        match result {
            Ok(FileListResponse::Malformed(payload)) => {
                log::error!("❌ No es una lista válida de archivos: {}", payload);
                self.table.show(TableBody::Placeholder(Placeholder::Malformed));
                LoadOutcome::Malformed
            }
            Ok(response) => {
                let files = response.into_files().unwrap_or_default();
                log::info!("✅ {} archivos recibidos", files.len());
                self.table
                    .show(TableBody::from_records(&files, &self.detail_page));
                LoadOutcome::Rendered(files.len())
            }
            Err(e) => {
                log::error!("❌ Error al cargar archivos: {}", e);
                self.table.show(TableBody::Placeholder(Placeholder::LoadFailed));
                let lang = self.language.as_str();
                self.dialogs.notify(&Notice::new(
                    NoticeIcon::Error,
                    t("error", lang),
                    t("no_se_pudieron_cargar", lang),
                ));
                LoadOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FileId;
    use crate::services::{ApiError, MemorySession};
    use crate::testing::{record, DialogEvent, FakeBackend, RecordingTable, ScriptedDialogs};
    use futures::channel::oneshot;
    use futures::executor::{block_on, LocalPool};
    use futures::task::LocalSpawnExt;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::cell::RefCell;

    struct Fixture {
        session: Rc<MemorySession>,
        backend: Rc<FakeBackend>,
        table: Rc<RecordingTable>,
        dialogs: Rc<ScriptedDialogs>,
        viewmodel: Rc<FileListViewModel>,
    }

    fn fixture(token: Option<&str>, backend: FakeBackend) -> Fixture {
        let session = Rc::new(MemorySession::new(token, None));
        let backend = Rc::new(backend);
        let table = Rc::new(RecordingTable::default());
        let dialogs = Rc::new(ScriptedDialogs::answering(true));
        let viewmodel = Rc::new(FileListViewModel::new(
            session.clone(),
            backend.clone(),
            table.clone(),
            dialogs.clone(),
            "reporte.html",
            "ES",
        ));
        Fixture { session, backend, table, dialogs, viewmodel }
    }

    #[test]
    fn without_token_shows_sign_in_row_and_skips_network() {
        let f = fixture(None, FakeBackend::with_files(vec![record(1, "a.xlsx")]));
        assert_eq!(block_on(f.viewmodel.load()), LoadOutcome::SignInRequired);
        assert_eq!(f.backend.list_calls.get(), 0);
        assert_eq!(
            *f.table.history.borrow(),
            vec![TableBody::Placeholder(Placeholder::SignInRequired)]
        );
    }

    #[test]
    fn loading_row_then_one_row_per_file() {
        let f = fixture(
            Some("tok"),
            FakeBackend::with_files(vec![record(1, "a.xlsx"), record(2, "b.xlsx")]),
        );
        assert_eq!(block_on(f.viewmodel.load()), LoadOutcome::Rendered(2));

        let history = f.table.history.borrow();
        assert_eq!(history[0], TableBody::Placeholder(Placeholder::Loading));
        let TableBody::Rows(rows) = &history[1] else {
            panic!("expected rows, got {:?}", history[1]);
        };
        assert_eq!(
            rows.iter().map(|row| row.id.clone()).collect::<Vec<_>>(),
            vec![FileId::Number(1), FileId::Number(2)]
        );
        assert!(f.dialogs.events().is_empty());
    }

    #[test]
    fn paginated_response_is_unwrapped() {
        let response = FileListResponse::from_value(json!({
            "results": [{ "id": 4, "nombre_archivo": "abril.xlsx", "fecha_subida": null }]
        }));
        let f = fixture(Some("tok"), FakeBackend::listing(Ok(response)));
        assert_eq!(block_on(f.viewmodel.load()), LoadOutcome::Rendered(1));
    }

    #[test]
    fn empty_list_shows_no_files_row() {
        let f = fixture(Some("tok"), FakeBackend::with_files(Vec::new()));
        assert_eq!(block_on(f.viewmodel.load()), LoadOutcome::Rendered(0));
        assert_eq!(f.table.last(), Some(TableBody::Placeholder(Placeholder::Empty)));
    }

    #[test]
    fn malformed_payload_shows_fallback_row_without_notice() {
        let response = FileListResponse::from_value(json!({ "foo": 1 }));
        let f = fixture(Some("tok"), FakeBackend::listing(Ok(response)));
        assert_eq!(block_on(f.viewmodel.load()), LoadOutcome::Malformed);
        assert_eq!(f.table.last(), Some(TableBody::Placeholder(Placeholder::Malformed)));
        assert!(f.dialogs.events().is_empty());
    }

    #[test]
    fn http_error_shows_failure_row_and_non_blocking_notice() {
        let f = fixture(Some("tok"), FakeBackend::listing(Err(ApiError::Status(500))));
        assert_eq!(block_on(f.viewmodel.load()), LoadOutcome::Failed);
        assert_eq!(f.table.last(), Some(TableBody::Placeholder(Placeholder::LoadFailed)));
        assert!(matches!(
            &f.dialogs.events()[..],
            [DialogEvent::Notify(notice)] if notice.icon == NoticeIcon::Error
        ));
    }

    #[test]
    fn token_is_read_fresh_on_every_load() {
        let f = fixture(Some("tok"), FakeBackend::with_files(vec![record(1, "a.xlsx")]));
        block_on(f.viewmodel.load());
        f.session.set_token(None);
        assert_eq!(block_on(f.viewmodel.load()), LoadOutcome::SignInRequired);
        assert_eq!(f.backend.list_calls.get(), 1);
    }

    #[test]
    fn reloading_unchanged_backend_renders_identical_table() {
        let f = fixture(
            Some("tok"),
            FakeBackend::with_files(vec![record(1, "a.xlsx"), record(2, "b.xlsx")]),
        );
        block_on(f.viewmodel.load());
        let first = f.table.last();
        block_on(f.viewmodel.load());
        assert_eq!(f.table.last(), first);
    }

    #[test]
    fn stale_response_is_discarded() {
        let f = fixture(Some("tok"), FakeBackend::with_files(Vec::new()));
        let (first_tx, first_rx) = oneshot::channel();
        let (second_tx, second_rx) = oneshot::channel();
        f.backend.list_gates.borrow_mut().extend([first_rx, second_rx]);

        let outcomes = Rc::new(RefCell::new(Vec::new()));
        let mut pool = LocalPool::new();
        for label in ["primera", "segunda"] {
            let viewmodel = f.viewmodel.clone();
            let outcomes = outcomes.clone();
            pool.spawner()
                .spawn_local(async move {
                    let outcome = viewmodel.load().await;
                    outcomes.borrow_mut().push((label, outcome));
                })
                .unwrap();
        }
        pool.run_until_stalled();

        second_tx
            .send(Ok(FileListResponse::Direct(vec![record(2, "nuevo.xlsx")])))
            .unwrap();
        pool.run_until_stalled();
        first_tx
            .send(Ok(FileListResponse::Direct(vec![record(1, "viejo.xlsx")])))
            .unwrap();
        pool.run_until_stalled();

        assert_eq!(
            *outcomes.borrow(),
            vec![("segunda", LoadOutcome::Rendered(1)), ("primera", LoadOutcome::Superseded)]
        );
        let Some(TableBody::Rows(rows)) = f.table.last() else {
            panic!("expected rows");
        };
        assert_eq!(rows[0].name, "nuevo.xlsx");
    }

    #[test]
    fn sign_out_during_load_keeps_sign_in_row() {
        let f = fixture(Some("tok"), FakeBackend::with_files(Vec::new()));
        let (tx, rx) = oneshot::channel();
        f.backend.list_gates.borrow_mut().push_back(rx);

        let outcome = Rc::new(RefCell::new(None));
        let mut pool = LocalPool::new();
        {
            let viewmodel = f.viewmodel.clone();
            let outcome = outcome.clone();
            pool.spawner()
                .spawn_local(async move {
                    *outcome.borrow_mut() = Some(viewmodel.load().await);
                })
                .unwrap();
        }
        pool.run_until_stalled();

        f.session.set_token(None);
        assert_eq!(block_on(f.viewmodel.load()), LoadOutcome::SignInRequired);

        tx.send(Ok(FileListResponse::Direct(vec![record(1, "viejo.xlsx")])))
            .unwrap();
        pool.run_until_stalled();

        assert_eq!(*outcome.borrow(), Some(LoadOutcome::Superseded));
        assert_eq!(
            f.table.last(),
            Some(TableBody::Placeholder(Placeholder::SignInRequired))
        );
    }
}
