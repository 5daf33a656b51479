use serde::Deserialize;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Screen presentation settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UiConfig {
    /// Title shown in the header (default: "Shopping List").
    #[serde(default = "default_title")]
    pub title: String,
    /// Width of the "Add Item" dialog in columns (default: 44).
    #[serde(default = "default_dialog_width")]
    pub dialog_width: u16,
    /// How long one event poll waits before redrawing, in milliseconds (default: 250).
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

/// File logging settings. The log file itself is chosen on the command line
/// or through `SHOPLIST_LOG`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_title() -> String {
    "Shopping List".to_string()
}

fn default_dialog_width() -> u16 {
    44
}

fn default_poll_interval_ms() -> u64 {
    250
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            dialog_width: default_dialog_width(),
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}
