pub const WELCOME_MESSAGE: &str = "Bienvenido a la API de recomendaciones de productos";

pub const NO_ANSWER_PLACEHOLDER: &str = "No tengo una respuesta en este momento.";
pub const FALLBACK_ERROR_PREFIX: &str = "Error al conectar con el modelo local";

pub const DEFAULT_SIMILARITY_CUTOFF: f64 = 0.6;

pub(crate) const DEFAULT_API_URL: &str = "http://127.0.0.1:1234/v1";
pub(crate) const DEFAULT_MODEL: &str = "llama-3.2-3b-instruct";
pub(crate) const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful assistant.";
pub(crate) const DEFAULT_TEMPERATURE: f64 = 0.7;
pub(crate) const DEFAULT_MAX_TOKENS: i32 = 50;

pub(crate) const CONNECT_TIMEOUT_SECS: u64 = 30;
pub(crate) const READ_TIMEOUT_SECS: u64 = 60;

pub(crate) const SERVER_HOST: &str = "127.0.0.1";
pub(crate) const SERVER_PORT: u16 = 8000;

pub(crate) const CONFIG_FILE_ENV: &str = "REC_CONFIG_FILE";
pub(crate) const DEFAULT_CONFIG_FILE: &str = "./config.json";
