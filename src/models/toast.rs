use std::fmt;

/// Tipo de toast (solo presentación)
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ToastKind {
    Success,
    Info,
    Warning,
    Error,
}

impl ToastKind {
    /// Clase CSS del badge del toast
    pub fn css_class(&self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Info => "info",
            ToastKind::Warning => "warning",
            ToastKind::Error => "error",
        }
    }
}

impl fmt::Display for ToastKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.css_class())
    }
}

impl From<super::NotificationKind> for ToastKind {
    fn from(kind: super::NotificationKind) -> Self {
        match kind {
            super::NotificationKind::Info => ToastKind::Info,
            super::NotificationKind::Success => ToastKind::Success,
            super::NotificationKind::Warning => ToastKind::Warning,
            super::NotificationKind::Error => ToastKind::Error,
        }
    }
}

/// Mensaje efímero local: nunca se persiste, se autodestruye a los 3000 ms
#[derive(Clone, PartialEq, Debug)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
}
