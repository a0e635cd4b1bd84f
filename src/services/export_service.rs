// ============================================================================
// EXPORT SERVICE - Exportar productos a CSV
// ============================================================================
// Transformación pura y síncrona (sin red): colección → tabla CSV con header
// fijo, descargada como products_export.csv vía Blob + <a download>.
// ============================================================================

use crate::models::Product;
use wasm_bindgen::{JsCast, JsValue};

const CSV_HEADERS: [&str; 7] = ["Name", "SKU", "Category", "Price", "Stock", "Unit", "Status"];
const EXPORT_FILENAME: &str = "products_export.csv";

/// Serializar la colección de productos a CSV. El nombre va entre comillas
/// (puede llevar comas), el resto de columnas son valores planos.
pub fn products_to_csv(products: &[Product]) -> String {
    let mut lines = Vec::with_capacity(products.len() + 1);
    lines.push(CSV_HEADERS.join(","));

    for product in products {
        lines.push(format!(
            "\"{}\",{},{},{},{},{},{}",
            product.name.replace('"', "\"\""),
            product.sku,
            product.category,
            product.price,
            product.stock,
            product.unit,
            product.stock_status(),
        ));
    }

    lines.join("\n")
}

/// Descargar el CSV en el navegador (Blob + link oculto)
pub fn download_products_csv(products: &[Product]) -> Result<(), JsValue> {
    let csv = products_to_csv(products);

    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str(&csv));

    let options = web_sys::BlobPropertyBag::new();
    options.set_type("text/csv;charset=utf-8;");
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)?;

    let url = web_sys::Url::create_object_url_with_blob(&blob)?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let link: web_sys::HtmlAnchorElement = document
        .create_element("a")?
        .dyn_into()
        .map_err(|_| JsValue::from_str("not an anchor"))?;
    link.set_href(&url);
    link.set_download(EXPORT_FILENAME);
    link.set_attribute("style", "visibility:hidden")?;

    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("no body"))?;
    body.append_child(&link)?;
    link.click();
    body.remove_child(&link)?;
    web_sys::Url::revoke_object_url(&url)?;

    log::info!("📤 {} productos exportados a {}", products.len(), EXPORT_FILENAME);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, name: &str, stock: u32, min_stock: u32) -> Product {
        Product {
            id,
            name: name.into(),
            sku: format!("SKU-{:03}", id),
            category: "Grains".into(),
            unit: "kg".into(),
            price: 85.5,
            stock,
            min_stock,
            warehouse_id: None,
        }
    }

    #[test]
    fn header_row_is_fixed() {
        let csv = products_to_csv(&[]);
        assert_eq!(csv, "Name,SKU,Category,Price,Stock,Unit,Status");
    }

    #[test]
    fn rows_follow_header_with_derived_status() {
        let csv = products_to_csv(&[product(1, "Basmati Rice", 20, 10), product(2, "Wheat", 5, 10)]);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "\"Basmati Rice\",SKU-001,Grains,85.5,20,kg,In Stock");
        assert_eq!(lines[2], "\"Wheat\",SKU-002,Grains,85.5,5,kg,Low Stock");
    }

    #[test]
    fn quotes_in_names_are_escaped() {
        let csv = products_to_csv(&[product(1, "Rice \"Premium\"", 20, 10)]);
        assert!(csv.lines().nth(1).unwrap().starts_with("\"Rice \"\"Premium\"\"\""));
    }
}
