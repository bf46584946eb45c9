use std::future::Future;
use std::pin::Pin;

use serde_json::Value;

use crate::models::{FileId, FileListResponse};
use crate::services::api_client::{ApiClient, ApiError, RequestOptions};
use crate::utils::{archivo_endpoint, ARCHIVOS_ENDPOINT};

/// Future sin `Send`: todo corre en el hilo del navegador
pub type LocalFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Operaciones del backend de archivos
pub trait FileBackend {
    /// `GET /api/archivos/archivos/`
    fn list_files(&self) -> LocalFuture<'_, Result<FileListResponse, ApiError>>;

    /// `DELETE /api/archivos/archivos/{id}/`
    fn delete_file<'a>(&'a self, id: &'a FileId) -> LocalFuture<'a, Result<(), ApiError>>;
}

/// Backend real sobre `ApiClient`
#[derive(Clone)]
pub struct HttpFileBackend {
    client: ApiClient,
}

impl HttpFileBackend {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    async fn fetch_list(&self) -> Result<FileListResponse, ApiError> {
        let response = self
            .client
            .fetch(ARCHIVOS_ENDPOINT, RequestOptions::default())
            .await?;

        if !response.ok() {
            log::warn!("⚠️ Listado de archivos: HTTP {} {}", response.status(), response.status_text());
            return Err(ApiError::Status(response.status()));
        }

        let body = response
            .json::<Value>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;
        log::debug!("📥 Respuesta recibida: {}", body);

        Ok(FileListResponse::from_value(body))
    }

    async fn send_delete(&self, id: &FileId) -> Result<(), ApiError> {
        log::info!("🗑️ Eliminando archivo {}", id);
        let response = self
            .client
            .fetch(&archivo_endpoint(id), RequestOptions::delete())
            .await?;

        if response.ok() {
            log::info!("✅ Archivo {} eliminado", id);
            Ok(())
        } else {
            Err(ApiError::Status(response.status()))
        }
    }
}

impl FileBackend for HttpFileBackend {
    fn list_files(&self) -> LocalFuture<'_, Result<FileListResponse, ApiError>> {
        Box::pin(self.fetch_list())
    }

    fn delete_file<'a>(&'a self, id: &'a FileId) -> LocalFuture<'a, Result<(), ApiError>> {
        Box::pin(self.send_delete(id))
    }
}
