use super::{DocumentStatus, Identified, Tracked};
use serde::{Deserialize, Serialize};

/// Ajuste de inventario (conteo físico vs registrado). Solo-cliente, como
/// las recepciones.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Adjustment {
    pub id: i64,
    pub ref_id: String,
    pub product: String,
    pub recorded: f64,
    pub counted: f64,
    pub unit: String,
    pub reason: String,
    pub date: String,
    #[serde(default)]
    pub status: DocumentStatus,
}

impl Adjustment {
    /// Diferencia contada menos registrada (negativa = faltante)
    pub fn difference(&self) -> f64 {
        self.counted - self.recorded
    }
}

impl Identified for Adjustment {
    fn entity_id(&self) -> i64 {
        self.id
    }
}

impl Tracked for Adjustment {
    fn status(&self) -> DocumentStatus {
        self.status
    }
}
