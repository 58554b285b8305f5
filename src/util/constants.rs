// NetVision - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "NetVision";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "NetVision";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// API limits
// =============================================================================

/// Default base URL for the generative-AI content endpoint.
pub const DEFAULT_API_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Default model identifier sent with every request.
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Default HTTP request timeout in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Minimum user-configurable request timeout (seconds).
pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 5;

/// Maximum user-configurable request timeout (seconds).
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;

/// Environment variables checked (in order) for the API key.
pub const API_KEY_ENV_VARS: &[&str] = &["GEMINI_API_KEY", "API_KEY"];

/// Maximum characters of pasted log text included in an analysis prompt.
/// Input beyond this bound is truncated before the prompt is built.
pub const LOG_INPUT_MAX_CHARS: usize = 10_000;

/// Maximum length of a target string accepted by the profiler input.
/// Longer strings are rejected before any request is made.
pub const MAX_TARGET_LENGTH: usize = 256;

// =============================================================================
// Session / history limits
// =============================================================================

/// Maximum number of distinct recent targets retained in the history list.
pub const HISTORY_CAP: usize = 5;

// =============================================================================
// Console feed
// =============================================================================

/// Cadence of simulated console lines while a profiling request is in flight (ms).
pub const CONSOLE_TICK_MS: u64 = 800;

/// Maximum number of console lines retained; older lines are dropped.
pub const MAX_CONSOLE_LINES: usize = 200;

// =============================================================================
// Per-frame UI message budgets
// =============================================================================

/// Maximum number of worker progress messages processed by the UI update loop
/// per frame. Remaining messages are left in the channel for the next frame.
pub const MAX_PROGRESS_MESSAGES_PER_FRAME: usize = 50;

// =============================================================================
// Filter limits
// =============================================================================

/// Maximum regex pattern length accepted from the filter input.
pub const MAX_REGEX_PATTERN_LENGTH: usize = 1_024;

// =============================================================================
// UI defaults
// =============================================================================

/// Default UI body font size in points.
pub const DEFAULT_FONT_SIZE: f32 = 14.0;

/// Minimum user-configurable UI font size (points).
pub const MIN_FONT_SIZE: f32 = 10.0;

/// Maximum user-configurable UI font size (points).
pub const MAX_FONT_SIZE: f32 = 24.0;

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";
