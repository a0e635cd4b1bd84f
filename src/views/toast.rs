// ============================================================================
// TOAST VIEW - Contenedor de notificaciones flotantes
// ============================================================================
// El contenedor se actualiza en sitio (sin re-render del shell) cada vez que
// un toast aparece o expira.
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, set_inner_html, ElementBuilder};
use crate::state::AppState;

/// Renderizar el contenedor de toasts (vacío o con los activos)
pub fn render_toasts(state: &AppState) -> Result<Element, JsValue> {
    let container = ElementBuilder::new("div")?
        .id("toast-root")?
        .class("toast-container")
        .build();
    fill_toasts(state, &container)?;
    Ok(container)
}

/// Reemplazar el contenido del contenedor existente sin tocar el resto del DOM
pub fn refresh_toasts(state: &AppState) -> Result<(), JsValue> {
    if let Some(container) = crate::dom::get_element_by_id("toast-root") {
        set_inner_html(&container, "");
        fill_toasts(state, &container)?;
    }
    Ok(())
}

fn fill_toasts(state: &AppState, container: &Element) -> Result<(), JsValue> {
    for toast in state.toasts.items() {
        let el = ElementBuilder::new("div")?
            .class(&format!("toast toast-{}", toast.kind.css_class()))
            .text(&toast.message)
            .build();
        append_child(container, &el)?;
    }
    Ok(())
}
