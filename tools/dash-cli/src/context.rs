//! CLI execution context.

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use dash_analytics::{compute_report, Report};
use dash_catalog::{BuiltinSource, Catalog, CatalogSource, JsonFileSource};
use dash_observability::{ComputeMetrics, LogLevel, RunId, StructuredLogger};

use crate::config::{DashConfig, CONFIG_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: DashConfig,
    /// File the configuration was read from, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    /// Structured logger for this run.
    pub logger: StructuredLogger,
    catalog_path: Option<PathBuf>,
    metrics: RefCell<ComputeMetrics>,
}

impl Context {
    /// Load context from the config file and command line overrides.
    pub fn load(config_path: Option<&str>, catalog: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = match config_path {
            Some(path) => {
                let path = resolve(&cwd, path);
                (DashConfig::load(&path)?, Some(path))
            }
            None => match Self::find_config(&cwd)? {
                Some((path, config)) => (config, Some(path)),
                None => (DashConfig::default(), None),
            },
        };

        // --catalog is relative to the working directory, catalog.path to the
        // config file.
        let catalog_path = match catalog {
            Some(path) => Some(resolve(&cwd, path)),
            None => config.catalog.path.as_deref().map(|path| {
                let base = config_path
                    .as_deref()
                    .and_then(Path::parent)
                    .unwrap_or(&cwd);
                resolve(base, path)
            }),
        };

        let catalog_description = match &catalog_path {
            Some(path) => JsonFileSource::new(path.clone()).describe(),
            None => BuiltinSource.describe(),
        };

        let run_id = RunId::generate();
        let min_level = if output.is_verbose() {
            LogLevel::Debug
        } else {
            config.logging.level
        };
        let logger = StructuredLogger::new(run_id.clone())
            .with_min_level(min_level)
            .with_format(config.logging.format)
            .with_catalog(catalog_description);

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
            logger,
            catalog_path,
            metrics: RefCell::new(ComputeMetrics::new(run_id)),
        })
    }

    /// Tag log entries with the command being run.
    pub fn with_command(mut self, command: &str) -> Self {
        self.logger = self.logger.with_command(command);
        self
    }

    /// Find config file in directory tree.
    ///
    /// The first candidate that exists wins. A candidate that fails to load is
    /// an error, not a reason to keep searching.
    fn find_config(start: &Path) -> Result<Option<(PathBuf, DashConfig)>> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    let config = DashConfig::load(&config_path)?;
                    return Ok(Some((config_path, config)));
                }
            }

            if !current.pop() {
                break;
            }
        }

        Ok(None)
    }

    /// The configured catalog source.
    pub fn catalog_source(&self) -> Box<dyn CatalogSource> {
        match &self.catalog_path {
            Some(path) => Box::new(JsonFileSource::new(path.clone())),
            None => Box::new(BuiltinSource),
        }
    }

    /// Load the configured catalog.
    pub fn load_catalog(&self) -> Result<(Catalog, String)> {
        let source = self.catalog_source();
        let description = source.describe();
        let catalog = source
            .load()
            .with_context(|| format!("Failed to load catalog from {}", description))?;

        self.logger
            .debug_builder("catalog loaded")
            .field_u64("products", catalog.len() as u64)
            .emit();

        Ok((catalog, description))
    }

    /// Compute a report, recording how long it took.
    pub fn compute(&self, catalog: &Catalog, filter: Option<&str>) -> Report {
        self.timed(filter, || compute_report(catalog, filter))
    }

    /// Run `f`, recording its duration as one recompute for `filter`.
    pub fn timed<T>(&self, filter: Option<&str>, f: impl FnOnce() -> T) -> T {
        self.metrics.borrow_mut().time(filter, f)
    }

    /// Print recompute timings in verbose mode.
    pub fn report_metrics(&self) {
        let metrics = self.metrics.borrow();
        if metrics.count() == 0 {
            return;
        }

        let summary = metrics.summary();
        self.logger
            .debug_builder("compute metrics")
            .field_u64("recomputes", summary.count)
            .field_u64("total_us", summary.total_us)
            .field_u64("max_us", summary.max_us)
            .emit();

        for line in summary.to_summary().lines() {
            self.output.debug(line);
        }
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        resolve(&self.cwd, path)
    }
}

fn resolve(base: &Path, path: &str) -> PathBuf {
    let path = PathBuf::from(path);
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve() {
        let base = Path::new("/work/project");
        assert_eq!(
            resolve(base, "catalog.json"),
            PathBuf::from("/work/project/catalog.json")
        );
        assert_eq!(
            resolve(base, "/data/catalog.json"),
            PathBuf::from("/data/catalog.json")
        );
    }

    #[test]
    fn test_find_config_walks_up() {
        let root = std::env::temp_dir().join(format!("dash-cli-ctx-{}", std::process::id()));
        let nested = root.join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(root.join("dash.toml"), "[render]\ntitle = \"Found\"\n").unwrap();

        let (path, config) = Context::find_config(&nested).unwrap().unwrap();
        assert_eq!(path, root.join("dash.toml"));
        assert_eq!(config.render.title, "Found");

        std::fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn test_find_config_rejects_malformed_file() {
        let root = std::env::temp_dir().join(format!("dash-cli-bad-{}", std::process::id()));
        let nested = root.join("a");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(root.join("dash.toml"), "[render\ntitle = broken\n").unwrap();

        let err = Context::find_config(&nested).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse config file"));

        std::fs::remove_dir_all(&root).unwrap();
    }
}
