use log::Level;
use web_sys::window;

/// Global application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Backend serving stations, model metadata and predictions
    pub api_base_url: String,

    /// Backend serving drift and expectation reports
    pub reports_base_url: String,

    /// Experiment-tracking UI that model run ids link to
    pub tracking_base_url: String,

    /// Default log level for the application
    pub log_level: Level,

    /// Enable debug mode
    pub debug_mode: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_base_url: "https://smartcharge-backend.onrender.com".to_string(),
            reports_base_url: "https://smartcharge-backend-wg0m.onrender.com".to_string(),
            tracking_base_url: "https://dagshub.com/BlazheManev/smartcharge-ai.mlflow".to_string(),
            log_level: Level::Info,
            debug_mode: false,
        }
    }
}

impl AppSettings {
    /// Create settings from environment/window location
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        if let Some(window) = window() {
            if let Ok(hostname) = window.location().hostname() {
                settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";

                if settings.debug_mode {
                    settings.log_level = Level::Debug;
                }
            }

            // Operators can point the console at another backend without a rebuild
            if let Ok(Some(storage)) = window.local_storage() {
                if let Ok(Some(url)) = storage.get_item("smartcharge_api_base_url") {
                    settings.api_base_url = url;
                }

                if let Ok(Some(url)) = storage.get_item("smartcharge_reports_base_url") {
                    settings.reports_base_url = url;
                }

                if let Ok(Some(url)) = storage.get_item("smartcharge_tracking_base_url") {
                    settings.tracking_base_url = url;
                }

                if let Ok(Some(log_level)) = storage.get_item("smartcharge_log_level") {
                    settings.log_level = match log_level.to_lowercase().as_str() {
                        "error" => Level::Error,
                        "warn" => Level::Warn,
                        "info" => Level::Info,
                        "debug" => Level::Debug,
                        "trace" => Level::Trace,
                        _ => settings.log_level,
                    };
                }
            }
        }

        settings
    }

    /// Full URL of an endpoint on the main backend
    pub fn api_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.api_base_url.trim_end_matches('/'), endpoint)
    }

    /// Full URL of an endpoint on the reports backend
    pub fn reports_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.reports_base_url.trim_end_matches('/'), endpoint)
    }
}

// Global settings instance using thread_local
use std::cell::RefCell;

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::from_environment());
}

/// Get a copy of the current settings
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Initialize settings (call this at app startup)
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}
