//! CLI execution context.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context as _, Result};
use menu_commerce::catalog::{load_catalog, FileSource, SimulatedLoader, StaticSource};
use menu_commerce::checkout::OrderProcessor;
use menu_commerce::{CommerceError, Session};

use crate::config::CliConfig;
use crate::output::Output;

/// Config file names searched for, in priority order.
pub const CONFIG_NAMES: [&str; 3] = ["menu.toml", ".menu.toml", "menu.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Where the configuration came from, if a file was found.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = match config_path {
            Some(path) => {
                let path = resolve(&cwd, path);
                (CliConfig::load(&path)?, Some(path))
            }
            None => match find_config(&cwd) {
                Some(path) => (CliConfig::load(&path)?, Some(path)),
                None => (CliConfig::default(), None),
            },
        };

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        resolve(&self.cwd, path)
    }

    /// Load the catalog through the simulated loader and start a session.
    ///
    /// Shows a spinner while the simulated request is in flight.
    pub async fn open_session(&self) -> Result<Session> {
        let loader_config = &self.config.loader;
        let spinner = self.output.spinner("Loading Menu...");

        let result = match &loader_config.catalog_path {
            Some(path) => {
                let source = SimulatedLoader::new(FileSource::new(self.resolve_path(path)))
                    .with_delay(loader_config.delay())
                    .with_failure_rate(loader_config.failure_rate);
                load_catalog(&source, loader_config.max_attempts).await
            }
            None => {
                let source = SimulatedLoader::new(StaticSource::sample())
                    .with_delay(loader_config.delay())
                    .with_failure_rate(loader_config.failure_rate);
                load_catalog(&source, loader_config.max_attempts).await
            }
        };
        spinner.finish_and_clear();

        let catalog = match result {
            Ok(catalog) => catalog,
            Err(err @ CommerceError::CatalogLoad(_)) => {
                self.output.info("Run the command again to retry.");
                return Err(err.into());
            }
            Err(err) => {
                let context = load_error_context(&err, loader_config.catalog_path.as_deref());
                return Err(err).context(context);
            }
        };

        self.output
            .debug(&format!("Loaded {} menu items", catalog.len()));

        Ok(Session::new(catalog).with_processor(OrderProcessor::new(self.processing_delay())))
    }

    fn processing_delay(&self) -> Duration {
        self.config.checkout.processing_delay()
    }
}

fn load_error_context(err: &CommerceError, catalog_path: Option<&str>) -> String {
    match (err, catalog_path) {
        (CommerceError::Io(_), Some(path)) => format!("Failed to read catalog file {}", path),
        (CommerceError::Io(_), None) => "Failed to read catalog file".to_string(),
        _ => "Menu data is malformed".to_string(),
    }
}

fn resolve(cwd: &Path, path: &str) -> PathBuf {
    let path = PathBuf::from(path);
    if path.is_absolute() {
        path
    } else {
        cwd.join(path)
    }
}

/// Find config file in directory tree.
fn find_config(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        for name in &CONFIG_NAMES {
            let candidate = current.join(name);
            if candidate.exists() {
                return Some(candidate);
            }
        }

        if !current.pop() {
            return None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context_with_catalog(path: PathBuf) -> Context {
        let mut config = CliConfig::default();
        config.loader.delay_ms = 0;
        config.loader.failure_rate = 0.0;
        config.loader.catalog_path = Some(path.display().to_string());
        Context {
            config,
            config_path: None,
            output: Output::new(false, true),
            cwd: std::env::temp_dir(),
        }
    }

    #[test]
    fn test_io_errors_are_not_reported_as_malformed() {
        let missing = CommerceError::Io(std::io::Error::from(std::io::ErrorKind::NotFound));
        assert_eq!(
            load_error_context(&missing, Some("catalog.json")),
            "Failed to read catalog file catalog.json"
        );
        let duplicate = CommerceError::DuplicateItemId("i-1".into());
        assert_eq!(
            load_error_context(&duplicate, Some("catalog.json")),
            "Menu data is malformed"
        );
    }

    #[tokio::test]
    async fn test_missing_catalog_file_reports_read_failure() {
        let path = std::env::temp_dir().join(format!("menu-cli-missing-{}.json", std::process::id()));
        let err = context_with_catalog(path).open_session().await.unwrap_err();
        assert!(format!("{:#}", err).starts_with("Failed to read catalog file"));
    }

    #[tokio::test]
    async fn test_duplicate_ids_report_malformed_menu() {
        let path = std::env::temp_dir().join(format!("menu-cli-dup-{}.json", std::process::id()));
        let item = r#"{"id":"i-1","name":"Sate Ayam","category":"Main","price":35000,"isAvailable":true}"#;
        std::fs::write(&path, format!("[{},{}]", item, item)).unwrap();
        let result = context_with_catalog(path.clone()).open_session().await;
        std::fs::remove_file(&path).ok();
        let err = result.unwrap_err();
        assert!(format!("{:#}", err).starts_with("Menu data is malformed"));
    }
}
