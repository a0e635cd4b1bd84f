use super::{DocumentStatus, Identified, Tracked};
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Delivery {
    pub id: i64,
    pub tracking_number: String,
    pub customer: String,
    pub product: String,
    pub quantity: u32,
    pub date: String,
    #[serde(default)]
    pub status: DocumentStatus,
}

impl Identified for Delivery {
    fn entity_id(&self) -> i64 {
        self.id
    }
}

impl Tracked for Delivery {
    fn status(&self) -> DocumentStatus {
        self.status
    }
}

/// Payload de creación (id, trackingNumber y status los asigna el servidor)
#[derive(Clone, PartialEq, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct NewDelivery {
    pub customer: String,
    pub product: String,
    pub quantity: u32,
    pub date: String,
}
