// ============================================================================
// EVENT HANDLING
// ============================================================================
// El Closure devuelto sostiene el listener: mientras viva, el handler sigue
// registrado. Quien pinta filas lo guarda y lo suelta al volver a pintar.
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Element, MouseEvent};

/// Listener de click ligado a la vida del valor
pub type ClickListener = Closure<dyn FnMut(MouseEvent)>;

/// Helper para crear click handler simple
pub fn on_click<F>(element: &Element, handler: F) -> Result<ClickListener, JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
    element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    Ok(closure)
}
