// ============================================================================
// APP - Aplicación principal
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, get_element_by_id, set_inner_html};
use crate::state::AppState;
use crate::viewmodels::AuthViewModel;
use crate::views::render_app;

/// Aplicación principal: dueña del estado global y del re-render
pub struct App {
    state: AppState,
    root: Element,
}

impl App {
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let state = AppState::new();

        // Re-render batcheado ante cualquier cambio de estado
        state.subscribe_to_changes(move || {
            use gloo_timers::callback::Timeout;
            Timeout::new(0, move || {
                crate::rerender_app();
            })
            .forget();
        });

        // Restaurar sesión persistida: reconecta el canal y recarga datos
        {
            let state_clone = state.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let vm = AuthViewModel::new();
                if vm.restore_session(&state_clone).await {
                    log::info!("✅ [APP] Sesión restaurada desde storage");
                } else {
                    log::info!("🔐 [APP] Sin sesión guardada, mostrando login");
                }
                crate::rerender_app();
            });
        }

        Ok(Self { state, root })
    }

    /// Re-render completo del árbol bajo #app
    pub fn render(&mut self) -> Result<(), JsValue> {
        set_inner_html(&self.root, "");
        let view = render_app(&self.state)?;
        append_child(&self.root, &view)?;
        Ok(())
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }
}
