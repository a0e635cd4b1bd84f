// ============================================================================
// TOPBAR VIEW - Título, campana de notificaciones y usuario
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, on_click, ElementBuilder};
use crate::models::NotificationKind;
use crate::state::AppState;
use crate::utils::format_date_time;
use crate::viewmodels::{AuthViewModel, NotificationsViewModel};

pub fn render_topbar(state: &AppState) -> Result<Element, JsValue> {
    let topbar = ElementBuilder::new("header")?.class("topbar").build();

    let title = ElementBuilder::new("h2")?
        .class("page-title")
        .text(state.active_page.borrow().title())
        .build();
    append_child(&topbar, &title)?;

    let actions = ElementBuilder::new("div")?.class("topbar-actions").build();
    append_child(&actions, &render_bell(state)?)?;
    append_child(&actions, &render_user(state)?)?;
    append_child(&topbar, &actions)?;

    if *state.show_notifications.borrow() {
        append_child(&topbar, &render_dropdown(state)?)?;
    }

    Ok(topbar)
}

fn render_bell(state: &AppState) -> Result<Element, JsValue> {
    let unread = state.unread_notifications();
    let bell = ElementBuilder::new("button")?
        .class("btn-bell")
        .html(&if unread > 0 {
            format!("🔔<span class=\"badge\">{}</span>", unread)
        } else {
            "🔔".to_string()
        })
        .build();

    let state = state.clone();
    on_click(&bell, move |_| {
        state.toggle_notifications();
    })?;
    Ok(bell)
}

fn render_user(state: &AppState) -> Result<Element, JsValue> {
    let container = ElementBuilder::new("div")?.class("topbar-user").build();

    if let Some(user) = state.auth.user() {
        let name = ElementBuilder::new("span")?
            .class("user-name")
            .text(&user.name)
            .build();
        let role = ElementBuilder::new("span")?
            .class("user-role")
            .text(if user.role.is_admin() { "Admin" } else { "User" })
            .build();
        append_child(&container, &name)?;
        append_child(&container, &role)?;
    }

    let logout = ElementBuilder::new("button")?
        .class("btn-logout")
        .text("Logout")
        .build();
    {
        let state = state.clone();
        on_click(&logout, move |_| {
            AuthViewModel::new().logout(&state);
        })?;
    }
    append_child(&container, &logout)?;
    Ok(container)
}

fn render_dropdown(state: &AppState) -> Result<Element, JsValue> {
    let dropdown = ElementBuilder::new("div")?
        .class("notifications-dropdown")
        .build();

    let header = ElementBuilder::new("div")?
        .class("dropdown-header")
        .build();
    let label = ElementBuilder::new("span")?.text("Notifications").build();
    append_child(&header, &label)?;

    if state.unread_notifications() > 0 {
        let mark_all = ElementBuilder::new("button")?
            .class("btn-link")
            .text("Mark all as read")
            .build();
        let state_all = state.clone();
        on_click(&mark_all, move |_| {
            let state = state_all.clone();
            spawn_local(async move {
                let _ = NotificationsViewModel::new().mark_all_read(&state).await;
            });
        })?;
        append_child(&header, &mark_all)?;
    }
    append_child(&dropdown, &header)?;

    let notifications = state.notifications.items();
    if notifications.is_empty() {
        let empty = ElementBuilder::new("div")?
            .class("dropdown-empty")
            .text("No notifications")
            .build();
        append_child(&dropdown, &empty)?;
        return Ok(dropdown);
    }

    let list = ElementBuilder::new("ul")?.class("notifications-list").build();
    for notification in notifications {
        let class = if notification.read {
            "notification-item"
        } else {
            "notification-item unread"
        };
        let item = ElementBuilder::new("li")?
            .class(class)
            .html(&format!(
                "<span class=\"notification-icon\">{}</span>\
                 <div class=\"notification-body\">\
                 <strong>{}</strong><p>{}</p>\
                 <time>{}</time></div>",
                kind_icon(notification.kind),
                notification.title,
                notification.message,
                format_date_time(&notification.created_at)
            ))
            .build();

        if !notification.read {
            let state = state.clone();
            let id = notification.id;
            on_click(&item, move |_| {
                let state = state.clone();
                spawn_local(async move {
                    let _ = NotificationsViewModel::new().mark_read(&state, id).await;
                });
            })?;
        }
        append_child(&list, &item)?;
    }
    append_child(&dropdown, &list)?;
    Ok(dropdown)
}

fn kind_icon(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Success => "✅",
        NotificationKind::Warning => "⚠️",
        NotificationKind::Error => "❌",
        NotificationKind::Info => "ℹ️",
    }
}
