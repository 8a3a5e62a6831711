//! Layered server configuration.
//!
//! Order, later wins: built-in defaults, YAML file, `CALC__*` environment
//! variables, CLI flags.

use std::net::SocketAddr;
use std::path::Path;

use anyhow::{Context, Result};
use calc::config::CalcConfig;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::secret::SecretString;

pub const ENV_PREFIX: &str = "CALC__";
pub const MOCK_DSN: &str = "sqlite::memory:";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub calc: CalcConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub bind_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8087".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DatabaseConfig {
    /// Full DSN. Wins over the individual connection fields when set.
    pub dsn: Option<String>,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: SecretString,
    pub dbname: String,
    pub max_conns: u32,
    pub acquire_timeout_ms: u64,
    pub run_migrations: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            dsn: None,
            host: "localhost".to_owned(),
            port: 3306,
            user: "calc".to_owned(),
            password: SecretString::default(),
            dbname: "calc".to_owned(),
            max_conns: 10,
            acquire_timeout_ms: 5000,
            run_migrations: true,
        }
    }
}

impl DatabaseConfig {
    /// Connection string for the store.
    ///
    /// # Errors
    /// Returns an error if the MySQL DSN cannot be assembled from the parts.
    pub fn connection_url(&self) -> Result<String> {
        if let Some(dsn) = &self.dsn {
            return Ok(dsn.clone());
        }

        let mut url = Url::parse("mysql://localhost").context("invalid DSN template")?;
        url.set_host(Some(&self.host))
            .with_context(|| format!("invalid database host '{}'", self.host))?;
        url.set_port(Some(self.port))
            .map_err(|()| anyhow::anyhow!("cannot set database port"))?;
        url.set_username(&self.user)
            .map_err(|()| anyhow::anyhow!("cannot set database user"))?;
        if !self.password.is_empty() {
            url.set_password(Some(self.password.expose()))
                .map_err(|()| anyhow::anyhow!("cannot set database password"))?;
        }
        url.set_path(&self.dbname);
        Ok(url.to_string())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    pub console_level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            console_level: "info".to_owned(),
            format: LogFormat::Text,
        }
    }
}

/// CLI values that override the layered configuration.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub port: Option<u16>,
    pub mock: bool,
}

impl AppConfig {
    /// Loads defaults, then the YAML file (if any), then the environment.
    ///
    /// # Errors
    /// Returns an error if a layer cannot be read or the result fails validation.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::figment(path)
            .extract::<Self>()
            .context("failed to load configuration")
            .and_then(|config| {
                config.validate()?;
                Ok(config)
            })
    }

    fn figment(path: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    pub fn apply_cli_overrides(&mut self, cli: &CliOverrides) {
        if let Some(port) = cli.port {
            self.server.bind_addr = match self.server.bind_addr.parse::<SocketAddr>() {
                Ok(mut addr) => {
                    addr.set_port(port);
                    addr.to_string()
                }
                Err(_) => format!("127.0.0.1:{port}"),
            };
        }
        if cli.mock {
            self.database.dsn = Some(MOCK_DSN.to_owned());
            self.database.max_conns = 1;
        }
    }

    /// # Errors
    /// Returns an error describing the first invalid setting.
    pub fn validate(&self) -> Result<()> {
        self.bind_addr()?;
        if self.database.max_conns == 0 {
            anyhow::bail!("database.max_conns must be at least 1");
        }
        if self.calc.max_name_length == 0 {
            anyhow::bail!("calc.max_name_length must be at least 1");
        }
        Ok(())
    }

    /// # Errors
    /// Returns an error if `server.bind_addr` is not a socket address.
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        self.server
            .bind_addr
            .parse()
            .with_context(|| format!("invalid server.bind_addr '{}'", self.server.bind_addr))
    }

    /// Effective configuration as YAML with credentials redacted.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> Result<String> {
        let mut printable = self.clone();
        if let Some(dsn) = &printable.database.dsn {
            printable.database.dsn = Some(redact_dsn_password(dsn)?);
        }
        serde_saphyr::to_string(&printable).context("failed to serialize configuration to YAML")
    }
}

/// Replaces the password portion of a DSN.
///
/// # Errors
/// Returns an error if a DSN carrying credentials cannot be parsed.
pub fn redact_dsn_password(dsn: &str) -> Result<String> {
    if !dsn.contains('@') {
        return Ok(dsn.to_owned());
    }
    let mut parsed = Url::parse(dsn).context("invalid database DSN")?;
    if parsed.password().is_some() {
        parsed
            .set_password(Some("***REDACTED***"))
            .map_err(|()| anyhow::anyhow!("cannot redact DSN password"))?;
    }
    Ok(parsed.to_string())
}
