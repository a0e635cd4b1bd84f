// ============================================================================
// SOCKET SERVICE - Canal en tiempo real (singleton)
// ============================================================================
// Exactamente UNA conexión viva por sesión: connect() cierra la anterior
// antes de abrir la nueva, disconnect() es idempotente. El socket solo
// decodifica sobres y los enruta al Synchronizer; nunca muta estado él mismo.
// La política de reconexión y el orden de entrega quedan en el transporte:
// el Synchronizer tolera duplicados y eventos fuera de orden.
// ============================================================================

use crate::models::{DomainEvent, EventEnvelope};
use crate::state::{apply_event, AppState};
use crate::utils::SOCKET_URL;
use serde_json::json;
use std::cell::RefCell;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CloseEvent, ErrorEvent, MessageEvent, WebSocket};

/// Conexión viva + closures de sus listeners. Mantener las closures aquí las
/// conserva vivas hasta el disconnect, sin `forget()` acumulativo.
struct SocketHandle {
    socket: WebSocket,
    _on_open: Closure<dyn FnMut()>,
    _on_message: Closure<dyn FnMut(MessageEvent)>,
    _on_error: Closure<dyn FnMut(ErrorEvent)>,
    _on_close: Closure<dyn FnMut(CloseEvent)>,
}

thread_local! {
    static SOCKET: RefCell<Option<SocketHandle>> = const { RefCell::new(None) };
}

/// Abrir el canal autenticado con el bearer token. Si ya había una conexión,
/// se cierra primero (como máximo una viva).
pub fn connect(token: &str, state: AppState) -> Result<(), JsValue> {
    disconnect();

    let socket = WebSocket::new(SOCKET_URL)?;
    log::info!("🔌 Abriendo canal en tiempo real: {}", SOCKET_URL);

    let on_open = {
        let socket = socket.clone();
        let token = token.to_string();
        Closure::wrap(Box::new(move || {
            log::info!("✅ WebSocket conectado, enviando handshake de auth");
            let handshake = json!({ "event": "auth", "data": { "token": token } });
            if let Err(e) = socket.send_with_str(&handshake.to_string()) {
                log::error!("❌ Error enviando handshake: {:?}", e);
            }
        }) as Box<dyn FnMut()>)
    };
    socket.set_onopen(Some(on_open.as_ref().unchecked_ref()));

    let on_message = {
        Closure::wrap(Box::new(move |event: MessageEvent| {
            let Some(text) = event.data().as_string() else {
                log::warn!("⚠️ Frame no textual del socket, ignorado");
                return;
            };
            route_frame(&state, &text);
        }) as Box<dyn FnMut(MessageEvent)>)
    };
    socket.set_onmessage(Some(on_message.as_ref().unchecked_ref()));

    let on_error = Closure::wrap(Box::new(move |event: ErrorEvent| {
        log::error!("❌ Error de WebSocket: {}", event.message());
    }) as Box<dyn FnMut(ErrorEvent)>);
    socket.set_onerror(Some(on_error.as_ref().unchecked_ref()));

    let on_close = Closure::wrap(Box::new(move |event: CloseEvent| {
        log::info!("🔌 WebSocket desconectado (code {})", event.code());
    }) as Box<dyn FnMut(CloseEvent)>);
    socket.set_onclose(Some(on_close.as_ref().unchecked_ref()));

    SOCKET.with(|cell| {
        *cell.borrow_mut() = Some(SocketHandle {
            socket,
            _on_open: on_open,
            _on_message: on_message,
            _on_error: on_error,
            _on_close: on_close,
        });
    });

    Ok(())
}

/// Cerrar el canal si existe. Seguro de llamar sin conexión.
pub fn disconnect() {
    SOCKET.with(|cell| {
        if let Some(handle) = cell.borrow_mut().take() {
            handle.socket.set_onopen(None);
            handle.socket.set_onmessage(None);
            handle.socket.set_onerror(None);
            handle.socket.set_onclose(None);
            let _ = handle.socket.close();
            log::info!("🔌 Canal en tiempo real cerrado");
        }
    });
}

pub fn is_connected() -> bool {
    SOCKET.with(|cell| cell.borrow().is_some())
}

/// Decodificar un frame de texto y aplicarlo al estado. Separado del
/// listener para poder probarlo sin navegador.
fn route_frame(state: &AppState, text: &str) {
    let envelope: EventEnvelope = match serde_json::from_str(text) {
        Ok(envelope) => envelope,
        Err(e) => {
            log::warn!("⚠️ Frame inválido del socket: {}", e);
            return;
        }
    };

    let name = envelope.event.clone();
    match DomainEvent::decode(envelope) {
        Some(event) => {
            log::debug!("📨 Evento {} recibido", name);
            apply_event(state, event);
        }
        None => log::debug!("📨 Evento {} sin handler, descartado", name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frames_route_into_collections() {
        let state = AppState::new();
        route_frame(
            &state,
            r#"{"event":"product:created","data":{"id":7,"name":"Rice","sku":"SKU-007","category":"Grains","unit":"kg","price":85.0,"stock":20,"minStock":10}}"#,
        );
        assert_eq!(state.products.len(), 1);

        // Entrega duplicada: absorbida
        route_frame(
            &state,
            r#"{"event":"product:created","data":{"id":7,"name":"Rice","sku":"SKU-007","category":"Grains","unit":"kg","price":85.0,"stock":20,"minStock":10}}"#,
        );
        assert_eq!(state.products.len(), 1);

        route_frame(&state, r#"{"event":"product:deleted","data":{"id":7}}"#);
        assert!(state.products.is_empty());
    }

    #[test]
    fn garbage_frames_are_dropped() {
        let state = AppState::new();
        route_frame(&state, "not json at all");
        route_frame(&state, r#"{"event":"unknown:event","data":{}}"#);
        assert!(state.products.is_empty());
    }
}
