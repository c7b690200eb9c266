use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::manifest::error::ManifestError;
use crate::manifest::format::ManifestFormat;
use crate::registry::ComponentDescriptor;

/// A declarative list of components and their `after` relations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartupManifest {
    #[serde(default)]
    pub components: Vec<ComponentDescriptor>,
}

impl StartupManifest {
    pub fn new(components: Vec<ComponentDescriptor>) -> Self {
        Self { components }
    }

    /// Parse manifest content in the given format. Does not validate.
    pub fn parse(content: &str, format: ManifestFormat) -> Result<Self, ManifestError> {
        match format {
            ManifestFormat::Json => serde_json::from_str(content).map_err(|e| ManifestError::Deserialization {
                format: format.to_string(),
                source: Box::new(e),
            }),
            #[cfg(feature = "yaml-config")]
            ManifestFormat::Yaml => serde_yaml::from_str(content).map_err(|e| ManifestError::Deserialization {
                format: format.to_string(),
                source: Box::new(e),
            }),
            #[cfg(feature = "toml-config")]
            ManifestFormat::Toml => toml::from_str(content).map_err(|e| ManifestError::Deserialization {
                format: format.to_string(),
                source: Box::new(e),
            }),
        }
    }

    /// Read, parse and validate a manifest file. The format follows the extension.
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let format = ManifestFormat::from_path(path)
            .ok_or_else(|| ManifestError::UnsupportedFormat(path.to_path_buf()))?;
        let content = std::fs::read_to_string(path).map_err(|source| ManifestError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let manifest = Self::parse(&content, format)?;
        manifest.validate()?;
        log::debug!(
            "Loaded {} components from manifest {}",
            manifest.components.len(),
            path.display()
        );
        Ok(manifest)
    }

    /// Reject blank component or dependency identities.
    pub fn validate(&self) -> Result<(), ManifestError> {
        for (position, component) in self.components.iter().enumerate() {
            if component.id.as_str().trim().is_empty() {
                return Err(ManifestError::InvalidEntry {
                    position,
                    reason: "component id must not be empty".to_string(),
                });
            }
            if component.depends_on.iter().any(|dep| dep.as_str().trim().is_empty()) {
                return Err(ManifestError::InvalidEntry {
                    position,
                    reason: format!("component '{}' lists an empty 'after' entry", component.id),
                });
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}
