pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(not(windows))]
pub const EXEC_NAME: &str = "flare";
#[cfg(windows)]
pub const EXEC_NAME: &str = "flare.exe";

pub const API_BASE_URL: &str = "https://api.cloudflare.com/client/v4";
pub const AUTH_STORE_PATH: &str = ".flare/auth.json";

/// Seconds a single API request may take before it is abandoned.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const TOKEN_ENV: &str = "CLOUDFLARE_API_TOKEN";
pub const EMAIL_ENV: &str = "CLOUDFLARE_EMAIL";
pub const KEY_ENV: &str = "CLOUDFLARE_API_KEY";
