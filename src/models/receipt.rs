use super::{DocumentStatus, Identified, Tracked};
use serde::{Deserialize, Serialize};

/// Recepción de mercancía. Colección solo-cliente (sin endpoint propio),
/// pero pasa por el mismo Synchronizer que los documentos del servidor.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub id: i64,
    pub ref_id: String,
    pub supplier: String,
    pub product: String,
    pub quantity: u32,
    pub date: String,
    #[serde(default)]
    pub status: DocumentStatus,
}

impl Identified for Receipt {
    fn entity_id(&self) -> i64 {
        self.id
    }
}

impl Tracked for Receipt {
    fn status(&self) -> DocumentStatus {
        self.status
    }
}
