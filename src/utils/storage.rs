use gloo_storage::{LocalStorage, Storage};

/// Lee un valor crudo (sin JSON) de localStorage.
/// El login guarda el token tal cual, por eso no se usa `LocalStorage::get`.
pub fn read_raw(key: &str) -> Option<String> {
    LocalStorage::raw().get_item(key).ok().flatten()
}
