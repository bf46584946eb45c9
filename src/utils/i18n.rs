// ============================================================================
// MÓDULO DE INTERNACIONALIZACIÓN
// ============================================================================

use std::collections::HashMap;

/// Obtener diccionario de traducciones para un idioma
fn get_translations(lang: &str) -> HashMap<&'static str, &'static str> {
    let mut translations = HashMap::new();
    let lang_upper = lang.to_uppercase();

    match lang_upper.as_str() {
        "EN" => {
            // Session guard
            translations.insert("no_autenticado", "Not authenticated");
            translations.insert("debe_iniciar_sesion", "You must sign in to access this page");
            translations.insert("ir_a_login", "Go to login");
            translations.insert("acceso_denegado", "Access denied");
            translations.insert("solo_administradores", "Only administrators can access this page");
            translations.insert("volver", "Back");

            // Tabla
            translations.insert("inicia_sesion_para_ver", "You must sign in to see the files.");
            translations.insert("cargando_archivos", "Loading files...");
            translations.insert("sin_archivos", "No files uploaded.");
            translations.insert("archivos_invalidos", "The files could not be loaded.");
            translations.insert("error_obtener_archivos", "An error occurred while fetching the files.");
            translations.insert("no_se_pudieron_cargar", "The files could not be loaded");
            translations.insert("eliminar", "Delete");
            translations.insert("eliminar_archivo", "Delete file");

            // Eliminación
            translations.insert("error", "Error");
            translations.insert("estas_seguro", "Are you sure?");
            translations.insert("a_punto_de_eliminar", "You are about to delete the file:");
            translations.insert("si_eliminar", "Yes, delete");
            translations.insert("cancelar", "Cancel");
            translations.insert("eliminando", "Deleting...");
            translations.insert("por_favor_espere", "Please wait");
            translations.insert("eliminado", "Deleted!");
            translations.insert("eliminado_correctamente", "The file has been deleted");
            translations.insert("sin_permisos", "You don't have permission to delete this file");
            translations.insert("archivo_no_existe", "The file does not exist");
            translations.insert("error_al_eliminar", "Error deleting");
            translations.insert("no_se_pudo_eliminar", "The file could not be deleted");
            translations.insert("token_no_encontrado", "Authentication token not found");
        }
        _ => {
            // ES por defecto
            translations.insert("no_autenticado", "No autenticado");
            translations.insert("debe_iniciar_sesion", "Debe iniciar sesión para acceder");
            translations.insert("ir_a_login", "Ir a login");
            translations.insert("acceso_denegado", "Acceso denegado");
            translations.insert("solo_administradores", "Solo los administradores pueden acceder a esta página");
            translations.insert("volver", "Volver");

            translations.insert("inicia_sesion_para_ver", "Debes iniciar sesión para ver los archivos.");
            translations.insert("cargando_archivos", "Cargando archivos...");
            translations.insert("sin_archivos", "No hay archivos subidos.");
            translations.insert("archivos_invalidos", "No se pudieron cargar los archivos.");
            translations.insert("error_obtener_archivos", "Ocurrió un error al obtener los archivos.");
            translations.insert("no_se_pudieron_cargar", "No se pudieron cargar los archivos");
            translations.insert("eliminar", "Eliminar");
            translations.insert("eliminar_archivo", "Eliminar archivo");

            translations.insert("error", "Error");
            translations.insert("estas_seguro", "¿Estás seguro?");
            translations.insert("a_punto_de_eliminar", "Estás a punto de eliminar el archivo:");
            translations.insert("si_eliminar", "Sí, eliminar");
            translations.insert("cancelar", "Cancelar");
            translations.insert("eliminando", "Eliminando...");
            translations.insert("por_favor_espere", "Por favor espere");
            translations.insert("eliminado", "¡Eliminado!");
            translations.insert("eliminado_correctamente", "El archivo ha sido eliminado correctamente");
            translations.insert("sin_permisos", "No tienes permisos para eliminar este archivo");
            translations.insert("archivo_no_existe", "El archivo no existe");
            translations.insert("error_al_eliminar", "Error al eliminar");
            translations.insert("no_se_pudo_eliminar", "No se pudo eliminar el archivo");
            translations.insert("token_no_encontrado", "No se encontró el token de autenticación");
        }
    }

    translations
}

/// Función de traducción
///
/// # Arguments
/// * `key` - Clave de traducción
/// * `lang` - Idioma ("ES" o "EN")
///
/// # Returns
/// String traducida o la clave si no se encuentra traducción
pub fn t(key: &str, lang: &str) -> String {
    let translations = get_translations(lang);

    if let Some(translation) = translations.get(key) {
        return translation.to_string();
    }

    key.to_string()
}
