// ============================================================================
// FILTER CHIPS - Filtro por estado compartido por deliveries y transfers
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, on_click, ElementBuilder};
use crate::models::DocumentStatus;
use crate::state::AppState;

const CHIPS: [(&str, Option<DocumentStatus>); 4] = [
    ("All", None),
    ("Draft", Some(DocumentStatus::Draft)),
    ("Ready", Some(DocumentStatus::Ready)),
    ("Done", Some(DocumentStatus::Done)),
];

/// Fila de chips "All / Draft / Ready / Done". El chip activo refleja
/// `state.status_filter`; hacer click lo cambia y re-renderiza.
pub fn render_status_chips(state: &AppState) -> Result<Element, JsValue> {
    let row = ElementBuilder::new("div")?.class("filter-chips").build();
    let active = *state.status_filter.borrow();

    for (label, filter) in CHIPS {
        let class = if filter == active { "chip active" } else { "chip" };
        let chip = ElementBuilder::new("button")?
            .attr("type", "button")?
            .class(class)
            .text(label)
            .build();
        let state = state.clone();
        on_click(&chip, move |_| {
            state.set_status_filter(filter);
        })?;
        append_child(&row, &chip)?;
    }

    Ok(row)
}
