// NetVision - platform/config.rs
//
// Platform-specific configuration directory resolution and config.toml
// loading with startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::util::constants;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for NetVision configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/netvision/ or %APPDATA%\NetVision\)
    pub config_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            tracing::debug!(config = %config_dir.display(), "Platform paths resolved");
            Self { config_dir }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            Self {
                config_dir: PathBuf::from("."),
            }
        }
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility -- a newer
/// config file can be used with an older binary without crashing.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[api]` section.
    pub api: ApiSection,
    /// `[ui]` section.
    pub ui: UiSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[api]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct ApiSection {
    /// Endpoint base URL.
    pub base_url: Option<String>,
    /// Model identifier.
    pub model: Option<String>,
    /// HTTP request timeout in seconds.
    pub timeout_secs: Option<u64>,
}

/// `[ui]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct UiSection {
    /// Terminal palette: "green" or "amber".
    pub palette: Option<String>,
    /// Body font size in points.
    pub font_size: Option<f32>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// Validated application configuration derived from `config.toml`.
///
/// All values are validated against named constants at load time.
/// Invalid values produce actionable warnings and fall back to defaults.
#[derive(Debug, Clone)]
pub struct AppConfig {
    // -- API --
    /// Endpoint base URL (no trailing slash).
    pub api_base_url: String,
    /// Model identifier.
    pub model: String,
    /// HTTP request timeout in seconds.
    pub request_timeout_secs: u64,

    // -- UI --
    /// Amber phosphor palette (false = classic green).
    pub amber_palette: bool,
    /// Body font size in points.
    pub font_size: f32,

    // -- Logging --
    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: constants::DEFAULT_API_BASE_URL.to_string(),
            model: constants::DEFAULT_MODEL.to_string(),
            request_timeout_secs: constants::DEFAULT_REQUEST_TIMEOUT_SECS,
            amber_palette: false,
            font_size: constants::DEFAULT_FONT_SIZE,
            log_level: None,
        }
    }
}

/// Load and validate `config.toml` from the given config directory.
///
/// Returns `AppConfig` with validated values and a list of non-fatal warnings.
/// If the file does not exist, returns defaults with no warnings (first-run).
/// If the file is unparseable, returns defaults with an error warning --
/// the application still starts but the user is informed.
pub fn load_config(config_dir: &Path) -> (AppConfig, Vec<String>) {
    let config_path = config_dir.join(constants::CONFIG_FILE_NAME);

    let mut warnings: Vec<String> = Vec::new();

    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "No config.toml found; using defaults");
        return (AppConfig::default(), warnings);
    }

    let content = match std::fs::read_to_string(&config_path) {
        Ok(c) => c,
        Err(e) => {
            let msg = format!(
                "Could not read config file '{}': {e}. Using defaults.",
                config_path.display()
            );
            tracing::warn!("{}", msg);
            warnings.push(msg);
            return (AppConfig::default(), warnings);
        }
    };

    let raw: RawConfig = match toml::from_str(&content) {
        Ok(r) => r,
        Err(e) => {
            let msg = format!(
                "Failed to parse config file '{}': {e}. Using defaults.",
                config_path.display()
            );
            tracing::warn!("{}", msg);
            warnings.push(msg);
            return (AppConfig::default(), warnings);
        }
    };

    tracing::info!(path = %config_path.display(), "Loaded config.toml");

    // Validate each field against named constants, accumulating all warnings.
    let mut config = AppConfig::default();

    // -- API: base_url --
    if let Some(ref url) = raw.api.base_url {
        let trimmed = url.trim_end_matches('/');
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            config.api_base_url = trimmed.to_string();
        } else {
            warnings.push(format!(
                "[api] base_url = \"{url}\" is not an http(s) URL. Using default ({}).",
                constants::DEFAULT_API_BASE_URL,
            ));
        }
    }

    // -- API: model --
    if let Some(ref model) = raw.api.model {
        if model.is_empty() {
            warnings.push(format!(
                "[api] model is empty. Using default ({}).",
                constants::DEFAULT_MODEL,
            ));
        } else {
            config.model = model.clone();
        }
    }

    // -- API: timeout_secs --
    if let Some(secs) = raw.api.timeout_secs {
        if (constants::MIN_REQUEST_TIMEOUT_SECS..=constants::MAX_REQUEST_TIMEOUT_SECS)
            .contains(&secs)
        {
            config.request_timeout_secs = secs;
        } else {
            warnings.push(format!(
                "[api] timeout_secs = {secs} is out of range ({}-{}). Using default ({}).",
                constants::MIN_REQUEST_TIMEOUT_SECS,
                constants::MAX_REQUEST_TIMEOUT_SECS,
                constants::DEFAULT_REQUEST_TIMEOUT_SECS,
            ));
        }
    }

    // -- UI: palette --
    if let Some(ref palette) = raw.ui.palette {
        match palette.to_lowercase().as_str() {
            "green" => config.amber_palette = false,
            "amber" => config.amber_palette = true,
            other => {
                warnings.push(format!(
                    "[ui] palette = \"{other}\" is not recognised. Expected \"green\" or \"amber\". Using default (green).",
                ));
            }
        }
    }

    // -- UI: font_size --
    if let Some(size) = raw.ui.font_size {
        if (constants::MIN_FONT_SIZE..=constants::MAX_FONT_SIZE).contains(&size) {
            config.font_size = size;
        } else {
            warnings.push(format!(
                "[ui] font_size = {size} is out of range ({}-{}). Using default ({}).",
                constants::MIN_FONT_SIZE,
                constants::MAX_FONT_SIZE,
                constants::DEFAULT_FONT_SIZE,
            ));
        }
    }

    // -- Logging: level --
    if let Some(ref level) = raw.logging.level {
        let valid = ["error", "warn", "info", "debug", "trace"];
        if valid.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.clone());
        } else {
            warnings.push(format!(
                "[logging] level = \"{level}\" is not recognised. \
                 Valid values: error, warn, info, debug, trace. Using default (info).",
            ));
        }
    }

    if !warnings.is_empty() {
        tracing::warn!(count = warnings.len(), "Config validation produced warnings");
    }

    (config, warnings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join(constants::CONFIG_FILE_NAME);
        std::fs::write(&path, content).unwrap();
        dir.path().to_path_buf()
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let (config, warnings) = load_config(dir.path());
        assert!(warnings.is_empty());
        assert_eq!(config.model, constants::DEFAULT_MODEL);
        assert_eq!(config.api_base_url, constants::DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_valid_config_applied() {
        let dir = TempDir::new().unwrap();
        let root = write_config(
            &dir,
            r#"
            [api]
            base_url = "https://proxy.internal/gemini/"
            model = "gemini-2.5-flash"
            timeout_secs = 60

            [ui]
            palette = "amber"
            font_size = 16.0

            [logging]
            level = "debug"
            "#,
        );
        let (config, warnings) = load_config(&root);
        assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
        // Trailing slash is stripped so URL joining stays predictable.
        assert_eq!(config.api_base_url, "https://proxy.internal/gemini");
        assert_eq!(config.model, "gemini-2.5-flash");
        assert_eq!(config.request_timeout_secs, 60);
        assert!(config.amber_palette);
        assert_eq!(config.font_size, 16.0);
        assert_eq!(config.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_out_of_range_timeout_warns_and_falls_back() {
        let dir = TempDir::new().unwrap();
        let root = write_config(&dir, "[api]\ntimeout_secs = 1\n");
        let (config, warnings) = load_config(&root);
        assert_eq!(warnings.len(), 1);
        assert_eq!(
            config.request_timeout_secs,
            constants::DEFAULT_REQUEST_TIMEOUT_SECS
        );
    }

    #[test]
    fn test_non_http_base_url_rejected() {
        let dir = TempDir::new().unwrap();
        let root = write_config(&dir, "[api]\nbase_url = \"ftp://nope\"\n");
        let (config, warnings) = load_config(&root);
        assert_eq!(warnings.len(), 1);
        assert_eq!(config.api_base_url, constants::DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_unknown_palette_warns() {
        let dir = TempDir::new().unwrap();
        let root = write_config(&dir, "[ui]\npalette = \"plasma\"\n");
        let (config, warnings) = load_config(&root);
        assert_eq!(warnings.len(), 1);
        assert!(!config.amber_palette);
    }

    #[test]
    fn test_malformed_toml_warns_and_falls_back() {
        let dir = TempDir::new().unwrap();
        let root = write_config(&dir, "this is {{ not toml");
        let (config, warnings) = load_config(&root);
        assert_eq!(warnings.len(), 1);
        assert_eq!(config.model, constants::DEFAULT_MODEL);
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let dir = TempDir::new().unwrap();
        let root = write_config(&dir, "[future_section]\nkey = 1\n");
        let (_, warnings) = load_config(&root);
        assert!(warnings.is_empty());
    }
}
