use super::{DocumentStatus, Identified, Tracked};
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Transfer {
    pub id: i64,
    pub ref_id: String,
    pub product: String,
    pub quantity: u32,
    /// Almacén origen ("from" en el wire)
    #[serde(rename = "from")]
    pub from_warehouse: String,
    /// Almacén destino ("to" en el wire)
    #[serde(rename = "to")]
    pub to_warehouse: String,
    pub date: String,
    #[serde(default)]
    pub status: DocumentStatus,
}

impl Identified for Transfer {
    fn entity_id(&self) -> i64 {
        self.id
    }
}

impl Tracked for Transfer {
    fn status(&self) -> DocumentStatus {
        self.status
    }
}

/// Payload de creación (id, refId y status los asigna el servidor)
#[derive(Clone, PartialEq, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct NewTransfer {
    pub product: String,
    pub quantity: u32,
    #[serde(rename = "from")]
    pub from_warehouse: String,
    #[serde(rename = "to")]
    pub to_warehouse: String,
    pub date: String,
}
