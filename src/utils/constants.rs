/// Claves de `localStorage` escritas por el login
pub const TOKEN_KEY: &str = "token";
pub const USER_DATA_KEY: &str = "user_data";

/// Endpoint de la colección de archivos (con barra final, como lo espera el backend)
pub const ARCHIVOS_ENDPOINT: &str = "/api/archivos/archivos/";

/// Parámetro de query de la vista de detalle
pub const DETAIL_QUERY_PARAM: &str = "archivo";

/// Columnas de la tabla: nombre, fecha, acciones
pub const TABLE_COLUMNS: u32 = 3;

/// Selector del `<tbody>` de la tabla de archivos
pub const TABLE_BODY_SELECTOR: &str = ".archivos";

/// Marcador para fechas ausentes
pub const NOT_AVAILABLE: &str = "N/A";

/// Endpoint de un archivo concreto
pub fn archivo_endpoint(id: &impl std::fmt::Display) -> String {
    format!("{}{}/", ARCHIVOS_ENDPOINT, id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FileId;

    #[test]
    fn file_endpoint_keeps_trailing_slash() {
        assert_eq!(archivo_endpoint(&FileId::Number(7)), "/api/archivos/archivos/7/");
    }
}
