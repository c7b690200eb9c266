use std::fmt;
use std::path::Path;

/// Encoding of a startup manifest, picked from the file extension.
///
/// YAML and TOML manifests are only understood when the crate is built with
/// the `yaml-config` / `toml-config` features.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestFormat {
    Json,
    #[cfg(feature = "yaml-config")]
    Yaml,
    #[cfg(feature = "toml-config")]
    Toml,
}

impl ManifestFormat {
    /// Canonical extension, also used as the format's name in errors.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            #[cfg(feature = "yaml-config")]
            Self::Yaml => "yaml",
            #[cfg(feature = "toml-config")]
            Self::Toml => "toml",
        }
    }

    /// `None` for a missing extension or one this build cannot read.
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "json" => Some(Self::Json),
            #[cfg(feature = "yaml-config")]
            "yaml" | "yml" => Some(Self::Yaml),
            #[cfg(feature = "toml-config")]
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }
}

impl fmt::Display for ManifestFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}
