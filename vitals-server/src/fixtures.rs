use crate::error::*;
use log::debug;
use serde_json::Value;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Read-only store of the canned JSON documents behind the REST surface
///
/// Every request loads its document from disk on demand, the way the site
/// originally served its mock data. A real data source later only has to
/// replace [`FixtureStore::load`], the handlers stay untouched
#[derive(Clone, Debug)]
pub struct FixtureStore {
    dir: PathBuf,
}

impl FixtureStore {
    /// Store rooted at `dir`, which holds one `<name>.json` per fixture
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store rooted at the `data/` directory shipped with this crate
    pub fn bundled() -> Self {
        Self::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("data"))
    }

    /// Load the fixture called `name`
    ///
    /// A missing or malformed document fails the request that asked
    /// for it and nothing else
    pub fn load(&self, name: &str) -> ServerResult<Value> {
        let path = self.dir.join(format!("{name}.json"));

        debug!("loading fixture from {}", path.display());

        let raw = fs::read_to_string(&path).map_err(|source| ServerError::FixtureRead {
            name: name.to_string(),
            source,
        })?;

        Ok(serde_json::from_str(&raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_store_holds_every_rest_document() {
        let store = FixtureStore::bundled();

        for name in [
            "vitals",
            "alerts",
            "architecture",
            "tech-stack",
            "timeline",
            "team",
        ] {
            let document = store.load(name);
            assert!(document.is_ok(), "fixture `{name}` should load");
        }
    }

    #[test]
    fn vitals_fixture_keeps_its_snapshot_under_current() {
        let document = FixtureStore::bundled().load("vitals").unwrap();
        let current = document.get("current").expect("snapshot object");

        assert!(current.get("heartRate").is_some());
        assert!(current.get("spO2").is_some());
        assert!(current.get("temperature").is_some());
    }

    #[test]
    fn unknown_fixture_reports_a_read_error() {
        let err = FixtureStore::bundled().load("no-such-document").unwrap_err();

        assert!(matches!(err, ServerError::FixtureRead { .. }));
    }
}
