// ============================================================================
// AUTH STATE - Estado de autenticación (Session Store)
// ============================================================================
// Usuario + bearer token en memoria, persistidos juntos en localStorage bajo
// claves fijas. Se limpian siempre juntos, nunca por separado.
// ============================================================================

use crate::models::User;
use crate::utils::{load_from_storage, load_raw_from_storage, STORAGE_KEY_TOKEN, STORAGE_KEY_USER};
#[cfg(target_arch = "wasm32")]
use crate::utils::{remove_from_storage, save_raw_to_storage, save_to_storage};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone)]
pub struct AuthState {
    user: Rc<RefCell<Option<User>>>,
    token: Rc<RefCell<Option<String>>>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            user: Rc::new(RefCell::new(None)),
            token: Rc::new(RefCell::new(None)),
        }
    }

    pub fn user(&self) -> Option<User> {
        self.user.borrow().clone()
    }

    pub fn token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.borrow().is_some()
    }

    /// Guardar la sesión en memoria y en localStorage
    pub fn set_session(&self, user: User, token: String) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Err(e) = save_to_storage(STORAGE_KEY_USER, &user) {
                log::error!("❌ Error guardando usuario en storage: {}", e);
            }
            if let Err(e) = save_raw_to_storage(STORAGE_KEY_TOKEN, &token) {
                log::error!("❌ Error guardando token en storage: {}", e);
            }
        }
        *self.user.borrow_mut() = Some(user);
        *self.token.borrow_mut() = Some(token);
    }

    /// Limpiar la sesión de memoria y de localStorage (ambas claves juntas)
    pub fn clear_session(&self) {
        #[cfg(target_arch = "wasm32")]
        {
            let _ = remove_from_storage(STORAGE_KEY_USER);
            let _ = remove_from_storage(STORAGE_KEY_TOKEN);
        }
        *self.user.borrow_mut() = None;
        *self.token.borrow_mut() = None;
    }

    /// Rehidratar la sesión persistida al arrancar. Una sesión ausente o
    /// corrupta se trata como "no hay sesión" (logged-out), nunca crashea.
    /// Devuelve `true` si había usuario Y token válidos.
    pub fn restore(&self) -> bool {
        let user: Option<User> = load_from_storage(STORAGE_KEY_USER);
        let token = load_raw_from_storage(STORAGE_KEY_TOKEN);

        match (user, token) {
            (Some(user), Some(token)) => {
                log::info!("🔑 Sesión restaurada: {} ({:?})", user.name, user.role);
                *self.user.borrow_mut() = Some(user);
                *self.token.borrow_mut() = Some(token);
                true
            }
            _ => false,
        }
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use crate::models::{Role, User};

    // El round-trip por localStorage solo corre en navegador; aquí cubrimos
    // la forma serializada que se persiste y se rehidrata.
    #[test]
    fn persisted_user_round_trips() {
        let user = User {
            id: 3,
            name: "Priya".into(),
            email: "priya@stockmaster.in".into(),
            role: Role::Admin,
        };
        let json = serde_json::to_string(&user).unwrap();
        let back: User = serde_json::from_str(&json).unwrap();
        assert_eq!(back, user);
        assert!(back.role.is_admin());
    }

    #[test]
    fn corrupt_persisted_user_fails_open() {
        let back: Result<User, _> = serde_json::from_str("{not json");
        assert!(back.is_err());
    }

    // Un token rechazado en la restauración debe dejar la sesión en memoria
    // vacía, no solo el storage: si no, un re-render intermedio mostraría el
    // shell autenticado.
    #[test]
    fn rejected_token_leaves_no_in_memory_session() {
        let auth = super::AuthState::new();
        let user = User {
            id: 3,
            name: "Priya".into(),
            email: "priya@stockmaster.in".into(),
            role: Role::User,
        };
        auth.set_session(user, "stale-token".into());
        assert!(auth.is_logged_in());

        auth.clear_session();

        assert!(!auth.is_logged_in());
        assert_eq!(auth.user(), None);
        assert_eq!(auth.token(), None);
    }
}
