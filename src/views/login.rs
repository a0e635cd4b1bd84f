// ============================================================================
// LOGIN VIEW - Pantalla de acceso y registro
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{
    append_child, create_element, get_element_by_id, input_value, on_click, on_submit,
    set_class_name, set_text_content, ElementBuilder,
};
use crate::state::AppState;
use crate::viewmodels::AuthViewModel;

/// Renderizar pantalla de login (con formulario de registro alternativo)
pub fn render_login(state: &AppState) -> Result<Element, JsValue> {
    let screen = ElementBuilder::new("div")?.class("login-screen").build();
    let container = ElementBuilder::new("div")?.class("login-container").build();

    // Header
    let header = ElementBuilder::new("div")?.class("login-header").build();
    let logo = ElementBuilder::new("div")?
        .class("logo-icon")
        .text("📦")
        .build();
    let title = ElementBuilder::new("h1")?.text("StockMaster").build();
    let subtitle = ElementBuilder::new("p")?
        .text("Inventory Management System")
        .build();
    append_child(&header, &logo)?;
    append_child(&header, &title)?;
    append_child(&header, &subtitle)?;
    append_child(&container, &header)?;

    // Error inline (vacío hasta que falle un intento)
    let error_box = ElementBuilder::new("div")?
        .id("login-error")?
        .class("login-error hidden")
        .build();
    append_child(&container, &error_box)?;

    append_child(&container, &render_login_form(state)?)?;
    append_child(&container, &render_register_form(state)?)?;
    append_child(&screen, &container)?;
    Ok(screen)
}

fn render_login_form(state: &AppState) -> Result<Element, JsValue> {
    let form = create_element("form")?;
    set_class_name(&form, "login-form");
    form.set_id("login-form");

    append_child(&form, &form_group("login-email", "Email", "email")?)?;
    append_child(&form, &form_group("login-password", "Password", "password")?)?;

    let submit = ElementBuilder::new("button")?
        .attr("type", "submit")?
        .class("btn-primary")
        .text("Login")
        .build();
    append_child(&form, &submit)?;

    let switch = ElementBuilder::new("p")?
        .class("login-switch")
        .html("Don't have an account? <a id=\"show-register\" href=\"#\">Sign up</a>")
        .build();
    append_child(&form, &switch)?;

    {
        let state = state.clone();
        on_submit(&form, move || {
            let email = input_value("login-email");
            let password = input_value("login-password");
            if email.is_empty() || password.is_empty() {
                show_error("Please fill in all fields");
                return;
            }
            let state = state.clone();
            spawn_local(async move {
                let vm = AuthViewModel::new();
                if let Err(e) = vm.login(&state, email, password).await {
                    show_error(&e.to_string());
                }
            });
        })?;
    }

    if let Some(link) = switch.query_selector("#show-register")? {
        on_click(&link, move |e| {
            e.prevent_default();
            toggle_forms(true);
        })?;
    }

    Ok(form)
}

fn render_register_form(state: &AppState) -> Result<Element, JsValue> {
    let form = create_element("form")?;
    set_class_name(&form, "login-form hidden");
    form.set_id("register-form");

    append_child(&form, &form_group("register-name", "Name", "text")?)?;
    append_child(&form, &form_group("register-email", "Email", "email")?)?;
    append_child(&form, &form_group("register-password", "Password", "password")?)?;

    let submit = ElementBuilder::new("button")?
        .attr("type", "submit")?
        .class("btn-primary")
        .text("Create Account")
        .build();
    append_child(&form, &submit)?;

    let switch = ElementBuilder::new("p")?
        .class("login-switch")
        .html("Already have an account? <a id=\"show-login\" href=\"#\">Login</a>")
        .build();
    append_child(&form, &switch)?;

    {
        let state = state.clone();
        on_submit(&form, move || {
            let name = input_value("register-name");
            let email = input_value("register-email");
            let password = input_value("register-password");
            if name.is_empty() || email.is_empty() || password.is_empty() {
                show_error("Please fill in all fields");
                return;
            }
            let state = state.clone();
            spawn_local(async move {
                let vm = AuthViewModel::new();
                if let Err(e) = vm.register(&state, name, email, password).await {
                    show_error(&e.to_string());
                }
            });
        })?;
    }

    if let Some(link) = switch.query_selector("#show-login")? {
        on_click(&link, move |e| {
            e.prevent_default();
            toggle_forms(false);
        })?;
    }

    Ok(form)
}

fn form_group(id: &str, label: &str, input_type: &str) -> Result<Element, JsValue> {
    let group = ElementBuilder::new("div")?.class("form-group").build();
    let label_el = ElementBuilder::new("label")?
        .attr("for", id)?
        .text(label)
        .build();
    let input = ElementBuilder::new("input")?
        .id(id)?
        .attr("type", input_type)?
        .attr("autocomplete", "off")?
        .build();
    append_child(&group, &label_el)?;
    append_child(&group, &input)?;
    Ok(group)
}

fn show_error(message: &str) {
    if let Some(el) = get_element_by_id("login-error") {
        set_class_name(&el, "login-error");
        set_text_content(&el, message);
    }
}

fn toggle_forms(register: bool) {
    if let (Some(login), Some(reg)) = (
        get_element_by_id("login-form"),
        get_element_by_id("register-form"),
    ) {
        if register {
            set_class_name(&login, "login-form hidden");
            set_class_name(&reg, "login-form");
        } else {
            set_class_name(&login, "login-form");
            set_class_name(&reg, "login-form hidden");
        }
    }
    if let Some(err) = get_element_by_id("login-error") {
        set_class_name(&err, "login-error hidden");
        set_text_content(&err, "");
    }
}
