// Dobles de prueba para los view-models (sin navegador)

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use futures::channel::oneshot;

use crate::models::{FileId, FileListResponse, FileRecord};
use crate::services::{ApiError, ConfirmDialog, Dialogs, FileBackend, LocalFuture, Navigator, Notice};
use crate::viewmodels::file_rows::{TableBody, TableView};

pub fn record(id: i64, name: &str) -> FileRecord {
    FileRecord {
        id: FileId::Number(id),
        nombre_archivo: name.to_string(),
        fecha_subida: Some("2024-03-05 09:30:00".to_string()),
    }
}

#[derive(Default)]
pub struct RecordingTable {
    pub history: RefCell<Vec<TableBody>>,
}

impl RecordingTable {
    pub fn last(&self) -> Option<TableBody> {
        self.history.borrow().last().cloned()
    }
}

impl TableView for RecordingTable {
    fn show(&self, body: TableBody) {
        self.history.borrow_mut().push(body);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DialogEvent {
    Confirm(String),
    Alert(Notice),
    Notify(Notice),
    Toast(Notice, u32),
    ProgressShown(String),
    ProgressClosed,
}

pub struct ScriptedDialogs {
    pub confirm_answer: Cell<bool>,
    pub events: RefCell<Vec<DialogEvent>>,
}

impl ScriptedDialogs {
    pub fn answering(confirm_answer: bool) -> Self {
        Self {
            confirm_answer: Cell::new(confirm_answer),
            events: RefCell::new(Vec::new()),
        }
    }

    pub fn events(&self) -> Vec<DialogEvent> {
        self.events.borrow().clone()
    }
}

impl Dialogs for ScriptedDialogs {
    fn confirm<'a>(&'a self, dialog: &'a ConfirmDialog) -> LocalFuture<'a, bool> {
        self.events
            .borrow_mut()
            .push(DialogEvent::Confirm(dialog.subject.clone()));
        let answer = self.confirm_answer.get();
        Box::pin(async move { answer })
    }

    fn alert<'a>(&'a self, notice: &'a Notice) -> LocalFuture<'a, ()> {
        self.events.borrow_mut().push(DialogEvent::Alert(notice.clone()));
        Box::pin(async {})
    }

    fn notify(&self, notice: &Notice) {
        self.events.borrow_mut().push(DialogEvent::Notify(notice.clone()));
    }

    fn toast<'a>(&'a self, notice: &'a Notice, duration_ms: u32) -> LocalFuture<'a, ()> {
        self.events
            .borrow_mut()
            .push(DialogEvent::Toast(notice.clone(), duration_ms));
        Box::pin(async {})
    }

    fn show_progress(&self, title: &str, _text: &str) {
        self.events
            .borrow_mut()
            .push(DialogEvent::ProgressShown(title.to_string()));
    }

    fn close_progress(&self) {
        self.events.borrow_mut().push(DialogEvent::ProgressClosed);
    }
}

/// Backend con respuestas fijas. Si hay compuertas en `list_gates`, cada
/// llamada a `list_files` espera a la siguiente antes de responder.
pub struct FakeBackend {
    pub list_result: RefCell<Result<FileListResponse, ApiError>>,
    pub delete_result: RefCell<Result<(), ApiError>>,
    pub list_calls: Cell<usize>,
    pub deleted: RefCell<Vec<FileId>>,
    pub list_gates: RefCell<VecDeque<oneshot::Receiver<Result<FileListResponse, ApiError>>>>,
}

impl FakeBackend {
    pub fn listing(list_result: Result<FileListResponse, ApiError>) -> Self {
        Self {
            list_result: RefCell::new(list_result),
            delete_result: RefCell::new(Ok(())),
            list_calls: Cell::new(0),
            deleted: RefCell::new(Vec::new()),
            list_gates: RefCell::new(VecDeque::new()),
        }
    }

    pub fn with_files(files: Vec<FileRecord>) -> Self {
        Self::listing(Ok(FileListResponse::Direct(files)))
    }

    pub fn deleting(self, delete_result: Result<(), ApiError>) -> Self {
        *self.delete_result.borrow_mut() = delete_result;
        self
    }
}

impl FileBackend for FakeBackend {
    fn list_files(&self) -> LocalFuture<'_, Result<FileListResponse, ApiError>> {
        self.list_calls.set(self.list_calls.get() + 1);
        let gate = self.list_gates.borrow_mut().pop_front();
        Box::pin(async move {
            match gate {
                Some(gate) => gate.await.unwrap_or(Err(ApiError::Network("gate dropped".to_string()))),
                None => self.list_result.borrow().clone(),
            }
        })
    }

    fn delete_file<'a>(&'a self, id: &'a FileId) -> LocalFuture<'a, Result<(), ApiError>> {
        self.deleted.borrow_mut().push(id.clone());
        Box::pin(async move { self.delete_result.borrow().clone() })
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    pub visited: RefCell<Vec<String>>,
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, href: &str) {
        self.visited.borrow_mut().push(href.to_string());
    }
}
