// ============================================================================
// FILE ROWS - Proyección de archivos a filas de tabla (sin DOM)
// ============================================================================

use crate::models::{FileId, FileRecord};
use crate::utils::{format_upload_date, DETAIL_QUERY_PARAM};

/// Fila ya lista para pintar
#[derive(Debug, Clone, PartialEq)]
pub struct FileRow {
    pub id: FileId,
    pub name: String,
    pub uploaded_at: String,
    pub detail_href: String,
}

/// Fila única que ocupa todas las columnas en lugar de datos
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    SignInRequired,
    Loading,
    Empty,
    LoadFailed,
    Malformed,
}

impl Placeholder {
    /// Clave i18n del texto
    pub fn message_key(self) -> &'static str {
        match self {
            Placeholder::SignInRequired => "inicia_sesion_para_ver",
            Placeholder::Loading => "cargando_archivos",
            Placeholder::Empty => "sin_archivos",
            Placeholder::LoadFailed => "error_obtener_archivos",
            Placeholder::Malformed => "archivos_invalidos",
        }
    }

    /// Los placeholders informativos van centrados
    pub fn centered(self) -> bool {
        matches!(self, Placeholder::Loading | Placeholder::Empty)
    }
}

/// Contenido completo del `<tbody>`
#[derive(Debug, Clone, PartialEq)]
pub enum TableBody {
    Rows(Vec<FileRow>),
    Placeholder(Placeholder),
}

impl TableBody {
    /// Lista vacía => placeholder "sin archivos"
    pub fn from_records(records: &[FileRecord], detail_page: &str) -> Self {
        if records.is_empty() {
            return TableBody::Placeholder(Placeholder::Empty);
        }
        TableBody::Rows(project_rows(records, detail_page))
    }
}

/// Destino de la tabla (DOM en el navegador)
pub trait TableView {
    fn show(&self, body: TableBody);
}

pub fn detail_href(detail_page: &str, id: &FileId) -> String {
    format!("{}?{}={}", detail_page, DETAIL_QUERY_PARAM, id)
}

/// Una fila por archivo, en el mismo orden
pub fn project_rows(records: &[FileRecord], detail_page: &str) -> Vec<FileRow> {
    records
        .iter()
        .map(|record| FileRow {
            id: record.id.clone(),
            name: record.nombre_archivo.clone(),
            uploaded_at: format_upload_date(record.fecha_subida.as_deref()),
            detail_href: detail_href(detail_page, &record.id),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(id: i64, name: &str, fecha: Option<&str>) -> FileRecord {
        FileRecord {
            id: FileId::Number(id),
            nombre_archivo: name.to_string(),
            fecha_subida: fecha.map(str::to_string),
        }
    }

    #[test]
    fn one_row_per_record_in_input_order() {
        let records = vec![
            record(9, "zeta.xlsx", Some("2024-03-05 09:30:00")),
            record(3, "alfa.xlsx", None),
            record(5, "beta.csv", Some("2024-01-01 00:00")),
        ];
        let rows = project_rows(&records, "reporte.html");

        assert_eq!(rows.len(), 3);
        assert_eq!(
            rows.iter().map(|row| row.name.as_str()).collect::<Vec<_>>(),
            vec!["zeta.xlsx", "alfa.xlsx", "beta.csv"]
        );
        assert_eq!(
            rows[0],
            FileRow {
                id: FileId::Number(9),
                name: "zeta.xlsx".to_string(),
                uploaded_at: "05/03/2024 09:30".to_string(),
                detail_href: "reporte.html?archivo=9".to_string(),
            }
        );
        assert_eq!(rows[1].uploaded_at, "N/A");
    }

    #[test]
    fn empty_list_is_the_no_files_placeholder() {
        assert_eq!(
            TableBody::from_records(&[], "reporte.html"),
            TableBody::Placeholder(Placeholder::Empty)
        );
    }

    #[test]
    fn empty_and_error_placeholders_are_distinct() {
        assert_ne!(Placeholder::Empty.message_key(), Placeholder::LoadFailed.message_key());
        assert_ne!(Placeholder::Malformed.message_key(), Placeholder::LoadFailed.message_key());
    }
}
