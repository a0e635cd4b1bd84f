// ============================================================================
// ELEMENT BUILDER - Builder pattern para crear elementos fácilmente
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, create_element, set_attribute, set_class_name, set_text_content};

pub struct ElementBuilder {
    element: Element,
}

impl ElementBuilder {
    /// Crear nuevo builder para un elemento
    pub fn new(tag: &str) -> Result<Self, JsValue> {
        Ok(Self {
            element: create_element(tag)?,
        })
    }

    /// Establecer class name (reemplaza todas las clases)
    pub fn class(self, class: &str) -> Self {
        set_class_name(&self.element, class);
        self
    }

    /// Establecer ID
    pub fn id(self, id: &str) -> Result<Self, JsValue> {
        set_attribute(&self.element, "id", id)?;
        Ok(self)
    }

    /// Establecer text content
    pub fn text(self, text: &str) -> Self {
        set_text_content(&self.element, text);
        self
    }

    /// Establecer inner HTML
    pub fn html(self, html: &str) -> Self {
        self.element.set_inner_html(html);
        self
    }

    /// Agregar hijo
    pub fn child(self, child: Element) -> Result<Self, JsValue> {
        append_child(&self.element, &child)?;
        Ok(self)
    }

    /// Establecer atributo
    pub fn attr(self, name: &str, value: &str) -> Result<Self, JsValue> {
        set_attribute(&self.element, name, value)?;
        Ok(self)
    }

    /// Construir y retornar elemento
    pub fn build(self) -> Element {
        self.element
    }
}

// Estos tests necesitan un `document` real, así que solo corren en navegador
// (wasm-pack test --headless).
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn builder_assembles_element() {
        let element = ElementBuilder::new("div")
            .unwrap()
            .class("toast success")
            .text("Product added successfully!")
            .build();

        assert_eq!(element.tag_name(), "DIV");
        assert_eq!(element.class_name(), "toast success");
        assert_eq!(
            element.text_content().unwrap(),
            "Product added successfully!"
        );
    }

    #[wasm_bindgen_test]
    fn builder_nests_children_and_attrs() {
        let child = ElementBuilder::new("span").unwrap().text("📦").build();
        let element = ElementBuilder::new("button")
            .unwrap()
            .id("export-btn")
            .unwrap()
            .attr("type", "button")
            .unwrap()
            .child(child)
            .unwrap()
            .build();

        assert_eq!(element.id(), "export-btn");
        assert_eq!(element.get_attribute("type").as_deref(), Some("button"));
        assert_eq!(element.child_element_count(), 1);
    }
}
