use std::fs;
use std::sync::Arc;

use async_trait::async_trait;
use tempfile::tempdir;
use tokio::sync::Mutex;

use crate::activation::Activator;
use crate::graph::OrderingError;
use crate::kernel::{Bootstrap, Error};
use crate::manifest::StartupManifest;
use crate::registry::ComponentDescriptor;

/// Simulates a host that materializes components and remembers what it started.
#[derive(Default)]
struct ServiceHost {
    started: Arc<Mutex<Vec<String>>>,
}

#[async_trait]
impl Activator for ServiceHost {
    type Error = std::io::Error;

    async fn activate(&mut self, component: &ComponentDescriptor) -> Result<(), std::io::Error> {
        let mut started = self.started.lock().await;
        // Every declared predecessor that is itself started must already be running
        for dep in &component.depends_on {
            if dep.as_str().starts_with("svc.") && !started.iter().any(|s| s == dep.as_str()) {
                return Err(std::io::Error::other(format!("{} started before {}", component.id, dep)));
            }
        }
        started.push(component.id.to_string());
        Ok(())
    }
}

#[cfg(feature = "toml-config")]
const SERVICES_TOML: &str = r#"
[[components]]
id = "lib.ConnectionPool"

[[components]]
id = "svc.Web"
after = ["svc.Cache", "svc.Auth"]
startup = true

[[components]]
id = "svc.Cache"
after = ["lib.ConnectionPool"]
startup = true

[[components]]
id = "svc.Auth"
after = ["svc.Cache"]
startup = true

[[components]]
id = "svc.Metrics"
startup = true

[[components]]
id = "lib.Unused"
after = ["lib.DoesNotExist"]
"#;

#[cfg(feature = "toml-config")]
#[tokio::test]
async fn test_toml_manifest_end_to_end() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("startup.toml");
    fs::write(&path, SERVICES_TOML).unwrap();

    let manifest = StartupManifest::load(&path).unwrap();
    let mut bootstrap = Bootstrap::new();
    assert_eq!(bootstrap.discover_manifest(&manifest).await.unwrap(), 6);

    let mut host = ServiceHost::default();
    let started = Arc::clone(&host.started);
    let report = bootstrap.run(&mut host).await.unwrap();

    let started = started.lock().await.clone();
    assert_eq!(started.len(), 4);
    let pos = |id: &str| started.iter().position(|s| s == id).unwrap();
    assert!(pos("svc.Cache") < pos("svc.Auth"));
    assert!(pos("svc.Auth") < pos("svc.Web"));
    assert!(!started.iter().any(|s| s.starts_with("lib.")));

    let order = bootstrap.order().unwrap();
    assert!(order.position("lib.ConnectionPool").unwrap() < order.position("svc.Cache").unwrap());
    assert!(order.position("lib.Unused").is_none());
    assert_eq!(report.skipped.len(), 1);
}

#[tokio::test]
async fn test_json_manifest_with_cycle_fails() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("startup.json");
    fs::write(
        &path,
        r#"{ "components": [
            { "id": "a", "after": ["c"], "startup": true },
            { "id": "b", "after": ["a"], "startup": true },
            { "id": "c", "after": ["b"], "startup": true }
        ] }"#,
    )
    .unwrap();

    let manifest = StartupManifest::load(&path).unwrap();
    let mut bootstrap = Bootstrap::new();
    bootstrap.discover_manifest(&manifest).await.unwrap();

    let mut host = ServiceHost::default();
    let started = Arc::clone(&host.started);
    match bootstrap.run(&mut host).await {
        Err(Error::Ordering(OrderingError::CircularDependency { cycle, .. })) => {
            let cycle: Vec<&str> = cycle.iter().map(|id| id.as_str()).collect();
            assert_eq!(cycle, vec!["a", "c", "b"]);
        }
        other => panic!("Expected CircularDependency, got {:?}", other),
    }
    assert!(started.lock().await.is_empty());
}
