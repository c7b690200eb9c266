use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identity of a component, used as the graph's node key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentId(String);

impl ComponentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ComponentId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ComponentId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for ComponentId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Describes one discovered component.
///
/// In a manifest the fields appear as `id`, `after` and `startup`:
///
/// ```toml
/// [[components]]
/// id = "app.Cache"
/// after = ["app.Database"]
/// startup = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentDescriptor {
    /// Unique identity of the component
    pub id: ComponentId,
    /// Components that must be initialized before this one, in declaration order
    #[serde(default, rename = "after", skip_serializing_if = "Vec::is_empty")]
    pub depends_on: Vec<ComponentId>,
    /// Whether this component takes part in startup ordering at all
    #[serde(default, rename = "startup")]
    pub eligible: bool,
}

impl ComponentDescriptor {
    /// A component marked for activation at startup.
    pub fn startup(id: impl Into<ComponentId>) -> Self {
        Self {
            id: id.into(),
            depends_on: Vec::new(),
            eligible: true,
        }
    }

    /// A known component that is not activated at startup itself but may be
    /// named as an `after` dependency by other components.
    pub fn passive(id: impl Into<ComponentId>) -> Self {
        Self {
            id: id.into(),
            depends_on: Vec::new(),
            eligible: false,
        }
    }

    /// Declare the components this one must start after.
    pub fn after<I, T>(mut self, dependencies: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<ComponentId>,
    {
        self.depends_on.extend(dependencies.into_iter().map(Into::into));
        self
    }

    pub fn id(&self) -> &ComponentId {
        &self.id
    }

    pub fn is_eligible(&self) -> bool {
        self.eligible
    }
}

impl fmt::Display for ComponentDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.depends_on.is_empty() {
            return write!(f, "{}", self.id);
        }
        let after: Vec<&str> = self.depends_on.iter().map(ComponentId::as_str).collect();
        write!(f, "{} (after: {})", self.id, after.join(", "))
    }
}
