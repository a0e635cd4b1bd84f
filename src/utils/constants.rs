/// URL base de la API REST
/// Configurada en tiempo de compilación:
/// - Desarrollo: http://localhost:5001/api (por defecto)
/// - Producción: via API_BASE_URL env var (.env)
pub const API_BASE_URL: &str = match option_env!("API_BASE_URL") {
    Some(url) => url,
    None => "http://localhost:5001/api",
};

/// URL del canal en tiempo real (WebSocket)
pub const SOCKET_URL: &str = match option_env!("SOCKET_URL") {
    Some(url) => url,
    None => "ws://localhost:5001/ws",
};

/// Claves de localStorage para la sesión persistida.
/// Se limpian siempre juntas, nunca por separado.
pub const STORAGE_KEY_USER: &str = "stockmaster_user";
pub const STORAGE_KEY_TOKEN: &str = "stockmaster_token";

/// Duración de un toast antes de auto-destruirse (ms)
pub const TOAST_DURATION_MS: u32 = 3_000;
