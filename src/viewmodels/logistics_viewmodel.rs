// ============================================================================
// LOGISTICS VIEWMODEL - Entregas, traslados, recepciones y ajustes
// ============================================================================
// Entregas y traslados van contra el servidor (create + avance de estado).
// Recepciones y ajustes son colecciones solo-cliente, como en las páginas
// originales, pero pasan por el mismo Synchronizer.
// ============================================================================

use crate::models::{
    Adjustment, DocumentStatus, NewDelivery, NewTransfer, Receipt, ToastKind,
};
use crate::services::{ApiClient, ApiError, ApiResult};
use crate::state::AppState;

pub struct LogisticsViewModel {
    api: ApiClient,
}

impl LogisticsViewModel {
    pub fn new() -> Self {
        Self {
            api: ApiClient::new(),
        }
    }

    fn report(state: &AppState, error: &ApiError) {
        if !matches!(error, ApiError::Unauthorized) {
            state.toasts.show(error.to_string(), ToastKind::Error);
        }
    }

    // ------------------------------------------------------------------
    // Deliveries
    // ------------------------------------------------------------------

    pub async fn create_delivery(&self, state: &AppState, payload: NewDelivery) -> ApiResult<()> {
        match self.api.create_delivery(&payload).await {
            Ok(created) => {
                state.deliveries.prepend_new(created);
                state
                    .toasts
                    .show("Delivery order created successfully!", ToastKind::Success);
                state.notify_subscribers();
                Ok(())
            }
            Err(e) => {
                Self::report(state, &e);
                Err(e)
            }
        }
    }

    pub async fn mark_delivery_ready(&self, state: &AppState, id: i64) -> ApiResult<()> {
        match self.api.update_delivery_status(id, DocumentStatus::Ready).await {
            Ok(updated) => {
                let tracking = updated.tracking_number.clone();
                state.deliveries.update_tracked(updated);
                state.toasts.show(
                    format!("Delivery {} marked as ready!", tracking),
                    ToastKind::Success,
                );
                state.notify_subscribers();
                Ok(())
            }
            Err(e) => {
                Self::report(state, &e);
                Err(e)
            }
        }
    }

    pub async fn ship_delivery(&self, state: &AppState, id: i64) -> ApiResult<()> {
        match self.api.update_delivery_status(id, DocumentStatus::Done).await {
            Ok(updated) => {
                let tracking = updated.tracking_number.clone();
                state.deliveries.update_tracked(updated);
                state.toasts.show(
                    format!("Delivery {} shipped successfully!", tracking),
                    ToastKind::Success,
                );
                state.notify_subscribers();
                Ok(())
            }
            Err(e) => {
                Self::report(state, &e);
                Err(e)
            }
        }
    }

    // ------------------------------------------------------------------
    // Transfers
    // ------------------------------------------------------------------

    pub async fn create_transfer(&self, state: &AppState, payload: NewTransfer) -> ApiResult<()> {
        match self.api.create_transfer(&payload).await {
            Ok(created) => {
                state.transfers.prepend_new(created);
                state
                    .toasts
                    .show("Transfer created successfully!", ToastKind::Success);
                state.notify_subscribers();
                Ok(())
            }
            Err(e) => {
                Self::report(state, &e);
                Err(e)
            }
        }
    }

    pub async fn advance_transfer(
        &self,
        state: &AppState,
        id: i64,
        status: DocumentStatus,
    ) -> ApiResult<()> {
        match self.api.update_transfer_status(id, status).await {
            Ok(updated) => {
                let ref_id = updated.ref_id.clone();
                state.transfers.update_tracked(updated);
                state.toasts.show(
                    format!("Transfer {} updated!", ref_id),
                    ToastKind::Success,
                );
                state.notify_subscribers();
                Ok(())
            }
            Err(e) => {
                Self::report(state, &e);
                Err(e)
            }
        }
    }

    // ------------------------------------------------------------------
    // Receipts (solo-cliente)
    // ------------------------------------------------------------------

    pub fn add_receipt(
        &self,
        state: &AppState,
        supplier: String,
        product: String,
        quantity: u32,
        date: String,
    ) {
        let receipt = Receipt {
            id: chrono::Utc::now().timestamp_millis(),
            ref_id: next_ref_id("RCP", state.receipts.items().iter().map(|r| r.ref_id.as_str()), 0),
            supplier,
            product,
            quantity,
            date,
            status: DocumentStatus::Draft,
        };
        state.receipts.push_back(receipt);
        state
            .toasts
            .show("Receipt created successfully!", ToastKind::Success);
        state.notify_subscribers();
    }

    /// Avance local Draft → Waiting → Done; nunca toca un documento ya Done
    pub fn advance_receipt(&self, state: &AppState, id: i64, status: DocumentStatus) {
        let applied = state.receipts.modify(id, |r| {
            if !r.status.regressed_by(status) {
                r.status = status;
            }
        });
        if applied {
            state.notify_subscribers();
        }
    }

    pub fn delete_receipt(&self, state: &AppState, id: i64) {
        if state.receipts.remove_by_id(id) {
            state
                .toasts
                .show("Receipt deleted successfully!", ToastKind::Success);
            state.notify_subscribers();
        }
    }

    // ------------------------------------------------------------------
    // Adjustments (solo-cliente)
    // ------------------------------------------------------------------

    #[allow(clippy::too_many_arguments)]
    pub fn add_adjustment(
        &self,
        state: &AppState,
        product: String,
        recorded: f64,
        counted: f64,
        unit: String,
        reason: String,
        date: String,
    ) {
        let adjustment = Adjustment {
            id: chrono::Utc::now().timestamp_millis(),
            ref_id: next_ref_id(
                "ADJ",
                state.adjustments.items().iter().map(|a| a.ref_id.as_str()),
                7,
            ),
            product,
            recorded,
            counted,
            unit,
            reason,
            date,
            status: DocumentStatus::Draft,
        };
        state.adjustments.push_back(adjustment);
        state
            .toasts
            .show("Adjustment recorded successfully!", ToastKind::Success);
        state.notify_subscribers();
    }

    pub fn complete_adjustment(&self, state: &AppState, id: i64) {
        let applied = state.adjustments.modify(id, |a| {
            if !a.status.is_terminal() {
                a.status = DocumentStatus::Done;
            }
        });
        if applied {
            state.notify_subscribers();
        }
    }
}

impl Default for LogisticsViewModel {
    fn default() -> Self {
        Self::new()
    }
}

/// Generar el siguiente ref id secuencial ("RCP-001", "ADJ-008", …) a partir
/// del último de la colección, como hacían las páginas originales.
fn next_ref_id<'a>(prefix: &str, refs: impl Iterator<Item = &'a str>, seed: u32) -> String {
    let last = refs
        .last()
        .and_then(|r| r.rsplit('-').next())
        .and_then(|n| n.parse::<u32>().ok())
        .unwrap_or(seed);
    format!("{}-{:03}", prefix, last + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ref_ids_are_sequential() {
        assert_eq!(next_ref_id("RCP", [].into_iter(), 0), "RCP-001");
        assert_eq!(
            next_ref_id("RCP", ["RCP-001", "RCP-002"].into_iter(), 0),
            "RCP-003"
        );
        assert_eq!(next_ref_id("ADJ", [].into_iter(), 7), "ADJ-008");
    }

    #[test]
    fn local_receipt_flow_respects_done_guard() {
        let state = AppState::new();
        let vm = LogisticsViewModel::new();
        vm.add_receipt(
            &state,
            "AgroSupply".into(),
            "Rice".into(),
            100,
            "2026-08-30".into(),
        );
        let id = state.receipts.items()[0].id;

        vm.advance_receipt(&state, id, DocumentStatus::Waiting);
        assert_eq!(state.receipts.get(id).unwrap().status, DocumentStatus::Waiting);

        vm.advance_receipt(&state, id, DocumentStatus::Done);
        vm.advance_receipt(&state, id, DocumentStatus::Draft);
        assert_eq!(state.receipts.get(id).unwrap().status, DocumentStatus::Done);
    }
}
