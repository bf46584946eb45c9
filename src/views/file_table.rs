// ============================================================================
// FILE TABLE - Render del <tbody> de archivos
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Element, MouseEvent};

use crate::dom::{append_child, clear_children, query_selector, ClickListener, ElementBuilder};
use crate::models::FileId;
use crate::services::Navigator;
use crate::utils::i18n::t;
use crate::utils::TABLE_COLUMNS;
use crate::viewmodels::file_rows::{FileRow, Placeholder, TableBody, TableView};

/// Acción del botón eliminar de una fila
pub type DeleteHandler = Rc<dyn Fn(FileId, String)>;

pub struct DomFileTable {
    tbody: Element,
    navigator: Rc<dyn Navigator>,
    language: String,
    on_delete: RefCell<Option<DeleteHandler>>,
    /// Listeners de las filas pintadas; se sueltan al volver a pintar
    listeners: RefCell<Vec<ClickListener>>,
}

impl DomFileTable {
    /// Buscar el `<tbody>` en la página
    pub fn mount(selector: &str, navigator: Rc<dyn Navigator>, language: &str) -> Result<Self, JsValue> {
        let tbody = query_selector(selector)?
            .ok_or_else(|| JsValue::from_str(&format!("No se encontró {}", selector)))?;
        Ok(Self {
            tbody,
            navigator,
            language: language.to_string(),
            on_delete: RefCell::new(None),
            listeners: RefCell::new(Vec::new()),
        })
    }

    /// Se conecta después de crear el flujo de eliminación (que a su vez usa la tabla)
    pub fn set_on_delete(&self, handler: DeleteHandler) {
        *self.on_delete.borrow_mut() = Some(handler);
    }

    fn render(&self, body: &TableBody) -> Result<(), JsValue> {
        clear_children(&self.tbody);
        let mut listeners = Vec::new();
        let painted = match body {
            TableBody::Placeholder(placeholder) => self
                .render_placeholder(*placeholder)
                .and_then(|row| append_child(&self.tbody, &row)),
            TableBody::Rows(rows) => rows.iter().try_for_each(|row| {
                let tr = self.render_row(row, &mut listeners)?;
                append_child(&self.tbody, &tr)
            }),
        };
        // Las filas viejas ya no están en el DOM
        *self.listeners.borrow_mut() = listeners;
        painted
    }

    fn render_placeholder(&self, placeholder: Placeholder) -> Result<Element, JsValue> {
        let mut cell = ElementBuilder::new("td")?
            .attr("colspan", &TABLE_COLUMNS.to_string())?
            .text(&t(placeholder.message_key(), &self.language));
        if placeholder.centered() {
            cell = cell.attr("style", "text-align: center;")?;
        }

        Ok(ElementBuilder::new("tr")?
            .class("fila-mensaje")
            .child(&cell.build())?
            .build())
    }

    fn render_row(&self, row: &FileRow, listeners: &mut Vec<ClickListener>) -> Result<Element, JsValue> {
        let name_cell = self.link_cell(&row.name, &row.detail_href, listeners)?;
        let date_cell = self.link_cell(&row.uploaded_at, &row.detail_href, listeners)?;

        let delete_button = {
            let handler = self.on_delete.borrow().clone();
            let id = row.id.clone();
            let name = row.name.clone();
            ElementBuilder::new("button")?
                .class("btn-eliminar")
                .attr("type", "button")?
                .attr("title", &t("eliminar_archivo", &self.language))?
                .text(&t("eliminar", &self.language))
                .on_click(listeners, move |e: MouseEvent| {
                    // El click no debe llegar a la navegación de la fila
                    e.stop_propagation();
                    match &handler {
                        Some(handler) => handler(id.clone(), name.clone()),
                        None => log::warn!("⚠️ Botón eliminar sin acción conectada"),
                    }
                })?
                .build()
        };

        let actions_cell = ElementBuilder::new("td")?
            .class("acciones-columna")
            .child(&delete_button)?
            .build();

        Ok(ElementBuilder::new("tr")?
            .class("fila-archivo")
            .attr("data-archivo-id", &row.id.to_string())?
            .child(&name_cell)?
            .child(&date_cell)?
            .child(&actions_cell)?
            .build())
    }

    fn link_cell(
        &self,
        text: &str,
        href: &str,
        listeners: &mut Vec<ClickListener>,
    ) -> Result<Element, JsValue> {
        let navigator = self.navigator.clone();
        let href = href.to_string();
        Ok(ElementBuilder::new("td")?
            .attr("style", "cursor: pointer;")?
            .text(text)
            .on_click(listeners, move |_e: MouseEvent| navigator.navigate(&href))?
            .build())
    }
}

impl TableView for DomFileTable {
    fn show(&self, body: TableBody) {
        if let Err(e) = self.render(&body) {
            log::error!("❌ Error pintando la tabla de archivos: {:?}", e);
        }
    }
}
