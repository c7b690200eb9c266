//! # Bootorder Startup Manifests
//!
//! Declarative component lists: each entry names a component, the
//! components it must start after, and whether it is activated at startup.
//! JSON is always available; YAML and TOML sit behind the `yaml-config` and
//! `toml-config` features.
pub mod error;
pub mod format;
pub mod loader;

pub use error::ManifestError;
pub use format::ManifestFormat;
pub use loader::StartupManifest;
