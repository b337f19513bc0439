//! [`Config`]-related definitions.

use common::Money;
use config::{builder::DefaultState, ConfigBuilder, ConfigError};
use serde::Deserialize;
use service::domain::PriceRange;
use smart_default::SmartDefault;

/// Application configuration.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    /// Catalog configuration.
    #[serde(default)]
    pub catalog: Catalog,

    /// Filter configuration.
    #[serde(default)]
    pub filter: Filter,

    /// Log configuration.
    #[serde(default)]
    pub log: Log,
}

impl Config {
    /// Creates a new [`Config`] by:
    /// - loading it from the provided `path` (if any);
    /// - merging it with the environment variables (if any);
    /// - using default values for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(path: impl AsRef<str>) -> Result<Self, ConfigError> {
        ConfigBuilder::<DefaultState>::default()
            .add_source(config::File::with_name(path.as_ref()).required(false))
            .add_source(config::Environment::with_prefix("CONF").separator("."))
            .build()?
            .try_deserialize()
    }
}

/// Catalog configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Catalog {
    /// Path to the JSON file containing catalog products.
    #[default("catalog.json".to_owned())]
    pub path: String,
}

/// Filter configuration.
#[derive(Clone, Copy, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Filter {
    /// Lowest price of the default price range, in minor units.
    #[default(Money::ZERO)]
    pub min_price: Money,

    /// Highest price of the default price range, in minor units.
    #[default(Money::from_minor(500_000))]
    pub max_price: Money,
}

impl From<Filter> for service::Config {
    fn from(value: Filter) -> Self {
        let Filter {
            min_price,
            max_price,
        } = value;
        Self {
            default_price_range: PriceRange::new(min_price, max_price),
        }
    }
}

/// Log configuration.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Log {
    /// Log level.
    pub level: LogLevel,
}

/// Log level.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogLevel {
    /// Designates very low priority, often extremely verbose, information.
    Trace,

    /// Designates lower priority information.
    Debug,

    /// Designates useful information.
    #[default]
    Info,

    /// Designates hazardous situations.
    Warn,

    /// Designates very serious errors.
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => Self::TRACE,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}

#[cfg(test)]
mod spec {
    use std::io::Write as _;

    use common::Money;

    use super::{Config, LogLevel};

    #[test]
    fn defaults_without_file() {
        let Config {
            catalog,
            filter,
            log,
        } = Config::new("/nonexistent/storefront").unwrap();

        assert_eq!(catalog.path, "catalog.json");
        assert_eq!(filter.min_price, Money::ZERO);
        assert_eq!(filter.max_price, Money::from_minor(500_000));
        assert!(matches!(log.level, LogLevel::Info));
    }

    #[test]
    fn loads_from_file() {
        let mut file =
            tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[catalog]\npath = \"products.json\"\n\n\
             [filter]\nmax_price = 250000\n\n\
             [log]\nlevel = \"DEBUG\"",
        )
        .unwrap();

        let conf = Config::new(file.path().to_str().unwrap()).unwrap();

        assert_eq!(conf.catalog.path, "products.json");
        assert_eq!(conf.filter.min_price, Money::ZERO);
        assert_eq!(conf.filter.max_price, Money::from_minor(250_000));
        assert!(matches!(conf.log.level, LogLevel::Debug));

        let service = service::Config::from(conf.filter);
        assert_eq!(
            service.default_price_range.max(),
            Money::from_minor(250_000),
        );
    }
}
