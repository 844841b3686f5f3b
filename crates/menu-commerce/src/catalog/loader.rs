//! Catalog sources and loading.
//!
//! The storefront has no backend. A [`SimulatedLoader`] stands in for the
//! network call: it waits a fixed delay and fails at a configured rate, so
//! front ends exercise their loading and error states.

use crate::catalog::{menu::sample_items, Catalog, MenuItem};
use crate::error::CommerceError;
use async_trait::async_trait;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Message surfaced when the simulated loader injects a failure.
pub const LOAD_FAILURE_MESSAGE: &str = "Failed to load menu data. Please try again.";

/// Something that can produce the raw catalog items.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch every catalog item. Items are validated by the caller.
    async fn fetch(&self) -> Result<Vec<MenuItem>, CommerceError>;
}

/// Items held in memory.
#[derive(Debug, Clone)]
pub struct StaticSource {
    items: Vec<MenuItem>,
}

impl StaticSource {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self { items }
    }

    /// The built-in house menu.
    pub fn sample() -> Self {
        Self::new(sample_items())
    }
}

#[async_trait]
impl CatalogSource for StaticSource {
    async fn fetch(&self) -> Result<Vec<MenuItem>, CommerceError> {
        Ok(self.items.clone())
    }
}

/// Items read from a JSON or TOML file.
///
/// JSON files may hold either a bare array or an object with an `items`
/// array. TOML files use `[[items]]` tables.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

#[derive(Deserialize)]
struct CatalogFile {
    items: Vec<MenuItem>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonCatalog {
    Bare(Vec<MenuItem>),
    Wrapped(CatalogFile),
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parse(&self, content: &str) -> Result<Vec<MenuItem>, CommerceError> {
        let is_toml = self
            .path
            .extension()
            .map_or(false, |ext| ext.eq_ignore_ascii_case("toml"));

        if is_toml {
            let file: CatalogFile = toml::from_str(content)?;
            return Ok(file.items);
        }

        match serde_json::from_str::<JsonCatalog>(content)? {
            JsonCatalog::Bare(items) => Ok(items),
            JsonCatalog::Wrapped(file) => Ok(file.items),
        }
    }
}

#[async_trait]
impl CatalogSource for FileSource {
    async fn fetch(&self) -> Result<Vec<MenuItem>, CommerceError> {
        debug!(path = %self.path.display(), "reading catalog file");
        let content = tokio::fs::read_to_string(&self.path).await?;
        self.parse(&content)
    }
}

/// Wraps a source with a fixed delay and random failure injection.
#[derive(Debug, Clone)]
pub struct SimulatedLoader<S> {
    inner: S,
    delay: Duration,
    failure_rate: f64,
}

impl<S: CatalogSource> SimulatedLoader<S> {
    /// Defaults: 1.5 s delay, 10% failure rate.
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            delay: Duration::from_millis(1500),
            failure_rate: 0.1,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Probability of failure per fetch, clamped to `[0, 1]`.
    pub fn with_failure_rate(mut self, rate: f64) -> Self {
        self.failure_rate = if rate.is_nan() { 0.0 } else { rate.clamp(0.0, 1.0) };
        self
    }

    pub fn failure_rate(&self) -> f64 {
        self.failure_rate
    }
}

#[async_trait]
impl<S: CatalogSource> CatalogSource for SimulatedLoader<S> {
    async fn fetch(&self) -> Result<Vec<MenuItem>, CommerceError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        if self.failure_rate > 0.0 && rand::random::<f64>() < self.failure_rate {
            warn!(failure_rate = self.failure_rate, "injected catalog load failure");
            return Err(CommerceError::CatalogLoad(LOAD_FAILURE_MESSAGE.to_string()));
        }

        self.inner.fetch().await
    }
}

/// Fetch from a source and validate the result into a [`Catalog`].
///
/// Load failures are retried up to `max_attempts` times in total. Malformed
/// items are never retried: they are a defect of the source.
pub async fn load_catalog<S>(source: &S, max_attempts: u32) -> Result<Catalog, CommerceError>
where
    S: CatalogSource + ?Sized,
{
    let max_attempts = max_attempts.max(1);
    let mut attempt = 1;

    loop {
        match source.fetch().await {
            Ok(items) => {
                let catalog = Catalog::new(items)?;
                info!(items = catalog.len(), attempt, "catalog loaded");
                return Ok(catalog);
            }
            Err(err @ CommerceError::CatalogLoad(_)) if attempt < max_attempts => {
                warn!(attempt, max_attempts, error = %err, "catalog load failed, retrying");
                attempt += 1;
            }
            Err(err) => return Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;
    use std::sync::atomic::{AtomicU32, Ordering};

    struct FlakySource {
        failures_left: AtomicU32,
    }

    #[async_trait]
    impl CatalogSource for FlakySource {
        async fn fetch(&self) -> Result<Vec<MenuItem>, CommerceError> {
            let left = self.failures_left.load(Ordering::SeqCst);
            if left > 0 {
                self.failures_left.store(left - 1, Ordering::SeqCst);
                return Err(CommerceError::CatalogLoad(LOAD_FAILURE_MESSAGE.into()));
            }
            Ok(sample_items())
        }
    }

    #[tokio::test]
    async fn test_static_source_loads_sample() {
        let catalog = load_catalog(&StaticSource::sample(), 1).await.unwrap();
        assert_eq!(catalog.len(), 5);
    }

    #[tokio::test]
    async fn test_simulated_loader_never_fails_at_zero_rate() {
        let loader = SimulatedLoader::new(StaticSource::sample())
            .with_delay(Duration::ZERO)
            .with_failure_rate(0.0);
        for _ in 0..20 {
            assert!(loader.fetch().await.is_ok());
        }
    }

    #[tokio::test]
    async fn test_simulated_loader_always_fails_at_full_rate() {
        let loader = SimulatedLoader::new(StaticSource::sample())
            .with_delay(Duration::ZERO)
            .with_failure_rate(1.0);
        match load_catalog(&loader, 3).await {
            Err(CommerceError::CatalogLoad(msg)) => assert_eq!(msg, LOAD_FAILURE_MESSAGE),
            other => panic!("expected load failure, got {:?}", other),
        }
    }

    #[test]
    fn test_failure_rate_is_clamped() {
        let loader = SimulatedLoader::new(StaticSource::sample()).with_failure_rate(4.0);
        assert_eq!(loader.failure_rate(), 1.0);
        let loader = SimulatedLoader::new(StaticSource::sample()).with_failure_rate(f64::NAN);
        assert_eq!(loader.failure_rate(), 0.0);
    }

    #[tokio::test]
    async fn test_retries_until_success() {
        let source = FlakySource {
            failures_left: AtomicU32::new(2),
        };
        let catalog = load_catalog(&source, 3).await.unwrap();
        assert_eq!(catalog.len(), 5);
    }

    #[tokio::test]
    async fn test_gives_up_after_max_attempts() {
        let source = FlakySource {
            failures_left: AtomicU32::new(2),
        };
        assert!(load_catalog(&source, 2).await.is_err());
    }

    #[tokio::test]
    async fn test_malformed_items_fail_fast() {
        let source = StaticSource::new(vec![
            MenuItem::new("i-1", "Beef Bulgogi Rice", Category::Main, 85_000),
            MenuItem::new("i-1", "Duplicate", Category::Main, 1_000),
        ]);
        assert!(matches!(
            load_catalog(&source, 5).await,
            Err(CommerceError::DuplicateItemId(_))
        ));
    }

    #[test]
    fn test_parse_json_bare_and_wrapped() {
        let source = FileSource::new("menu.json");
        let bare = r#"[{"id":"i-1","name":"Nasi Goreng","category":"Main","price":30000,"isAvailable":true}]"#;
        let wrapped = format!(r#"{{"items": {}}}"#, bare);
        assert_eq!(source.parse(bare).unwrap().len(), 1);
        assert_eq!(source.parse(&wrapped).unwrap().len(), 1);
    }

    #[test]
    fn test_parse_toml() {
        let source = FileSource::new("menu.toml");
        let content = r#"
[[items]]
id = "i-1"
name = "Es Teh"
category = "Beverage"
price = 5000
isAvailable = true
"#;
        let items = source.parse(content).unwrap();
        assert_eq!(items[0].category, Category::Beverage);
        assert_eq!(items[0].price.amount(), 5_000);
    }

    #[tokio::test]
    async fn test_file_source_reads_from_disk() {
        let path = std::env::temp_dir().join(format!("menu-catalog-{}.json", std::process::id()));
        std::fs::write(
            &path,
            r#"[{"id":"i-7","name":"Sate Ayam","category":"Main","price":35000,"isAvailable":true}]"#,
        )
        .unwrap();
        let catalog = load_catalog(&FileSource::new(&path), 1).await.unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(catalog.items()[0].name, "Sate Ayam");
    }
}
