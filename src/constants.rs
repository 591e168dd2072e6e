//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// Base URL used when neither the environment nor the config file provide one
pub const DEFAULT_API_BASE: &str = "http://localhost:3001/api";

/// Environment variable that overrides the API base URL
pub const API_URL_ENV: &str = "GASTOS_API_URL";

/// Directory under the user's home holding the config file
pub const CONFIG_DIR_NAME: &str = ".gastos";

/// Config file name inside [`CONFIG_DIR_NAME`]
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Log file written by the binary
pub const LOG_FILE_NAME: &str = "gastos.log";

/// Application name
pub const APP_NAME: &str = "Gestión de Gastos";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Page shown before the first list call
pub const DEFAULT_PAGE: u32 = 1;

/// Page size shown before the first list call
pub const DEFAULT_LIMIT: u32 = 10;

// Fallback messages, used when a failure carries no message of its own
pub const MSG_LIST_FAILED: &str = "Error al cargar gastos";
pub const MSG_GET_FAILED: &str = "Error al cargar el gasto";
pub const MSG_CREATE_FAILED: &str = "Error al crear el gasto";
pub const MSG_UPDATE_FAILED: &str = "Error al actualizar el gasto";
pub const MSG_DELETE_FAILED: &str = "Error al eliminar el gasto";
pub const MSG_SEARCH_FAILED: &str = "Error al buscar gastos";
