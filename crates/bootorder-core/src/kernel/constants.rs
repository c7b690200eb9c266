/// Application name
pub const APP_NAME: &str = "bootorder";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Manifest file looked up in the working directory when none is given
pub const DEFAULT_MANIFEST_FILE: &str = "startup.toml";
