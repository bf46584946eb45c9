use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Identificador de archivo tal como lo envía el backend (entero o texto)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FileId {
    Number(i64),
    Text(String),
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileId::Number(n) => write!(f, "{}", n),
            FileId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for FileId {
    fn from(value: i64) -> Self {
        FileId::Number(value)
    }
}

impl From<&str> for FileId {
    fn from(value: &str) -> Self {
        FileId::Text(value.to_string())
    }
}

/// Archivo subido registrado en el backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileRecord {
    pub id: FileId,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub nombre_archivo: String,
    #[serde(default, deserialize_with = "optional_text")]
    pub fecha_subida: Option<String>,
}

// Un campo irregular (null, número) en un registro no invalida el listado
fn lenient_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text),
        other => Some(other.to_string()),
    }
}

fn text_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_text(Value::deserialize(deserializer)?).unwrap_or_default())
}

fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_text(Value::deserialize(deserializer)?))
}

/// Forma de la respuesta de `GET /api/archivos/archivos/`
#[derive(Debug, Clone, PartialEq)]
pub enum FileListResponse {
    /// Lista directa `[...]`
    Direct(Vec<FileRecord>),
    /// Respuesta paginada `{ "results": [...] }`
    Paginated(Vec<FileRecord>),
    /// Cualquier otra cosa
    Malformed(Value),
}

impl FileListResponse {
    pub fn from_value(value: Value) -> Self {
        if value.is_array() {
            return match serde_json::from_value::<Vec<FileRecord>>(value.clone()) {
                Ok(files) => FileListResponse::Direct(files),
                Err(_) => FileListResponse::Malformed(value),
            };
        }

        let results = value
            .get("results")
            .filter(|results| results.is_array())
            .cloned();
        match results.map(serde_json::from_value::<Vec<FileRecord>>) {
            Some(Ok(files)) => FileListResponse::Paginated(files),
            _ => FileListResponse::Malformed(value),
        }
    }

    /// Lista normalizada, `None` si la respuesta no es válida
    pub fn into_files(self) -> Option<Vec<FileRecord>> {
        match self {
            FileListResponse::Direct(files) | FileListResponse::Paginated(files) => Some(files),
            FileListResponse::Malformed(_) => None,
        }
    }
}
