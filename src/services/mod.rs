pub mod api_client;
pub mod export_service;
pub mod socket_service;

pub use api_client::{ApiClient, ApiError, ApiResult};
pub use export_service::{download_products_csv, products_to_csv};
